use crate::domain::model::Package;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CargoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Logging error: {message}")]
    LoggingError { message: String },
}

pub type Result<T> = std::result::Result<T, CargoError>;

/// Why a package was refused for transport.
///
/// Exactly one variant applies per attempt. Origin/destination equality is only
/// reported once both the ship date and the client are valid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Invalid Shipping date and client: {client} is not a Client")]
    InvalidShipDateAndClient { client: String },

    #[error("Invalid Shipping Date")]
    InvalidShipDate,

    #[error("Client: {client} is not a Client")]
    InvalidClient { client: String },

    #[error("Origin and destination are the same.")]
    SameOriginDestination,
}

impl TransportError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TransportError::InvalidShipDateAndClient { .. } => {
                "Register the client with the company and use a YYYY-MM-DD ship date"
            }
            TransportError::InvalidShipDate => "Use a real calendar date formatted as YYYY-MM-DD",
            TransportError::InvalidClient { .. } => {
                "Register the client with the company before shipping"
            }
            TransportError::SameOriginDestination => {
                "Pick a destination different from the origin"
            }
        }
    }
}

/// A refused transport request. The package is handed back untouched.
#[derive(Error, Debug)]
#[error("{reason}")]
pub struct TransportRejection {
    pub reason: TransportError,
    pub package: Package,
}

impl TransportRejection {
    pub fn into_package(self) -> Package {
        self.package
    }
}
