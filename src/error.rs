//! Standard errors used by all functions in the crate.

use std::fmt;

/// Error collecting all possible failures of the Paysafe client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request was rejected locally because some required fields were missing or empty.
    ///
    /// No HTTP request is sent when this error is returned.
    #[error("{0}")]
    Validation(#[from] ValidationError),
    /// The operation needs the account number context, but the client was built without one.
    ///
    /// Configure it with [`with_account_number`](crate::client::PaysafeClientBuilder::with_account_number).
    #[error("No account number configured on the Paysafe client")]
    MissingAccountNumber,
    /// Reqwest error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// Error returned by a Paysafe API endpoint.
    #[error("{0}")]
    ApiError(#[from] ApiError),
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::HttpError(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Other(e.into())
    }
}

/// Local validation failure of an entity about to be submitted.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub struct ValidationError {
    /// Name of the entity that failed validation (e.g. `MerchantAccount`).
    pub entity: &'static str,
    /// Wire names of all the required fields that were absent or empty.
    pub missing: Vec<&'static str>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Missing required fields on {}: {}",
            self.entity,
            self.missing.join(", ")
        )
    }
}

/// Broad classification of a Paysafe API error, derived from the HTTP status code.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ApiErrorKind {
    /// `400`, `406` or `415`.
    InvalidRequest,
    /// `401`.
    InvalidCredentials,
    /// `402`.
    RequestDeclined,
    /// `403`.
    Permission,
    /// `404`.
    EntityNotFound,
    /// `409`.
    RequestConflict,
    /// Any `5xx`.
    ServerError,
    /// Any other non-success status.
    Other,
}

impl ApiErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 | 406 | 415 => ApiErrorKind::InvalidRequest,
            401 => ApiErrorKind::InvalidCredentials,
            402 => ApiErrorKind::RequestDeclined,
            403 => ApiErrorKind::Permission,
            404 => ApiErrorKind::EntityNotFound,
            409 => ApiErrorKind::RequestConflict,
            500..=599 => ApiErrorKind::ServerError,
            _ => ApiErrorKind::Other,
        }
    }
}

/// Paysafe HTTP APIs error.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub struct ApiError {
    /// HTTP status returned by the server.
    pub status: u16,
    /// Paysafe error code (e.g. `5068`), if the server returned one.
    pub code: Option<String>,
    /// Concise description of the error.
    pub message: String,
    /// Additional human readable details.
    pub details: Vec<String>,
    /// Per-field validation errors reported by the server.
    pub field_errors: Vec<FieldError>,
}

/// A single field rejected by the server.
#[derive(serde::Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub error: String,
}

impl ApiError {
    pub fn kind(&self) -> ApiErrorKind {
        ApiErrorKind::from_status(self.status)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Paysafe HTTP error {}: {}", self.status, self.message)?;

        if let Some(ref code) = self.code {
            write!(f, " (code {})", code)?;
        }

        if !self.details.is_empty() {
            write!(f, "\nAdditional details: {}", self.details.join("; "))?;
        }

        if !self.field_errors.is_empty() {
            write!(f, "\nField errors:")?;
            for e in &self.field_errors {
                write!(f, "\n- {}: {}", e.field, e.error)?;
            }
        }

        Ok(())
    }
}
