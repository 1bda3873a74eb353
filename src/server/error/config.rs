use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// `REFERENCE_TIMEZONE` does not name an IANA timezone.
    ///
    /// Expects names such as `Europe/Berlin` or `UTC`.
    #[error("Invalid reference timezone '{0}'")]
    InvalidTimezone(String),
}
