use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in the {0} field")]
    MissingField(&'static str),

    #[error("Mail relay rejected the message (HTTP {0})")]
    Rejected(u16),

    #[error("Could not reach the mail relay: {0}")]
    Transport(String),
}
