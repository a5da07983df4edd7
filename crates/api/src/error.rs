#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Status code: {0}")]
    StatusCode(u16),

    #[error("Invalid response")]
    InvalidResponse,
}

impl Error {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Reqwest(e) if e.is_timeout())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::StatusCode(404))
    }
}
