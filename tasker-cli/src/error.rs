use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Logging error: {message}")]
    Logging { message: String },
}

pub type Result<T> = std::result::Result<T, CliError>;
