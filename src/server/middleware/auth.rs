use sea_orm::DatabaseConnection;
use tower_sessions::Session;
use uuid::Uuid;

use crate::server::{
    data::{apartment::ApartmentRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

pub enum Permission {
    /// User owns the apartment with this ID.
    ApartmentOwner(Uuid),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged in user and checks every permission.
    ///
    /// # Returns
    /// - `Ok(User)` - User is logged in and holds all permissions
    /// - `Err(AuthError::UserNotInSession)` - No user ID in the session
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists
    /// - `Err(AppError::NotFound)` - A referenced apartment does not exist
    /// - `Err(AuthError::AccessDenied)` - User does not own a referenced apartment
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::ApartmentOwner(apartment_id) => {
                    let apartment = ApartmentRepository::new(self.db)
                        .find_by_id(*apartment_id)
                        .await?
                        .ok_or_else(|| AppError::NotFound("Apartment not found".to_string()))?;

                    if apartment.owner_id != user.id {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!(
                                "User attempted to access apartment {} they do not own",
                                apartment_id
                            ),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
