use thiserror::Error;

pub type IconResult<T> = Result<T, IconError>;

#[derive(Error, Debug, Clone)]
pub enum IconError {
    #[error("Attribute error: {0}")]
    Attributes(String),

    #[error("Invalid fixture: {0}")]
    Fixture(String),
}

impl From<serde_json::Error> for IconError {
    fn from(err: serde_json::Error) -> Self {
        IconError::Attributes(err.to_string())
    }
}
