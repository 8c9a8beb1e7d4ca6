use crate::auth::Credentials;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{
    header::{HeaderValue, AUTHORIZATION},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware to inject HTTP Basic credentials into outgoing HTTP requests.
pub struct AuthenticationMiddleware {
    header_value: HeaderValue,
}

impl AuthenticationMiddleware {
    pub fn new(credentials: &Credentials) -> Self {
        let encoded = STANDARD.encode(format!(
            "{}:{}",
            credentials.key_id,
            credentials.key_password.expose_secret()
        ));

        // Base64 output only contains visible ASCII characters
        let mut header_value = HeaderValue::from_str(&format!("Basic {}", encoded))
            .expect("Invalid basic authentication header");
        header_value.set_sensitive(true);

        Self { header_value }
    }
}

#[async_trait]
impl Middleware for AuthenticationMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        req.headers_mut()
            .insert(AUTHORIZATION, self.header_value.clone());

        next.run(req, extensions).await
    }
}
