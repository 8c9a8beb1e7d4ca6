use crate::error::{ApiError, Error, FieldError};
use async_trait::async_trait;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware which translates JSON error responses returned from Paysafe APIs
/// into [`Error::ApiError`](crate::error::Error)s.
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let response = next.run(req, extensions).await?;

        // Try parsing the error as a Paysafe error envelope,
        // falling back to the raw contents of the response as the error message.
        if !response.status().is_success() {
            let status = response.status();
            let bytes = response.bytes().await?;

            tracing::debug!("Failed HTTP request. Status code: {}", status);

            let api_error = match serde_json::from_slice::<ErrorEnvelope>(&bytes) {
                Ok(envelope) => envelope.error.into_api_error(status.as_u16()),
                Err(_) => ApiError {
                    status: status.as_u16(),
                    code: None,
                    message: if bytes.is_empty() {
                        status
                            .canonical_reason()
                            .unwrap_or("Unknown Error")
                            .to_string()
                    } else {
                        String::from_utf8_lossy(&bytes).into_owned()
                    },
                    details: Vec::new(),
                    field_errors: Vec::new(),
                },
            };

            return Err(Error::ApiError(api_error).into());
        }

        Ok(response)
    }
}

#[derive(serde::Deserialize, Debug)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    code: Option<serde_json::Value>,
    message: String,
    #[serde(default)]
    details: Vec<String>,
    #[serde(default)]
    field_errors: Vec<FieldError>,
}

impl ErrorBody {
    fn into_api_error(self, http_status: u16) -> ApiError {
        ApiError {
            status: http_status,
            // Codes come back both as strings and as bare numbers
            code: self.code.map(|c| match c {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            }),
            message: self.message,
            details: self.details,
            field_errors: self.field_errors,
        }
    }
}
