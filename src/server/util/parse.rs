use uuid::Uuid;

use crate::server::error::AppError;

/// Parses a UUID from a String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `Uuid`
///
/// # Returns
/// - `Ok(Uuid)` - Successfully parsed String to `Uuid`
/// - `Err(AppError::InternalError)` - Failed to parse the string as a UUID
pub fn parse_uuid_from_string(value: String) -> Result<Uuid, AppError> {
    Uuid::parse_str(&value).map_err(|e| {
        AppError::InternalError(format!("Failed to parse ID from String '{}': {}", value, e))
    })
}
