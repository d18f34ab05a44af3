use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] postbox_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] postbox_db::DbError),

    #[error("Identity error: {0}")]
    Auth(#[from] postbox_auth::AuthError),

    #[error("Session error: {0}")]
    Session(#[from] postbox_session::SessionError),

    #[error("Failed to read public key file {path}: {source}")]
    PublicKeyFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
