use crate::common::basic_authorization;
use paysafe_rust::{auth::Credentials, client::Environment, PaysafeClient};
use reqwest::Url;
use uuid::Uuid;
use wiremock::{
    matchers::{header, method, path},
    MockBuilder, MockServer,
};

pub struct TestContext {
    pub client: PaysafeClient,
    pub account_number: String,
    mock_server: MockServer,
    authorization: String,
}

impl TestContext {
    pub async fn start() -> Self {
        Self::start_with(true).await
    }

    /// Starts a context whose client is not bound to any account number.
    pub async fn start_without_account_number() -> Self {
        Self::start_with(false).await
    }

    async fn start_with(with_account_number: bool) -> Self {
        // Generate a new set of random credentials for this specific test
        let key_id = Uuid::new_v4().to_string();
        let key_password = Uuid::new_v4().to_string();
        let account_number = "1001234567".to_string();

        let mock_server = MockServer::start().await;

        // Configure a new PaysafeClient to point to the mock server
        let mut builder = PaysafeClient::builder(Credentials::new(&key_id, key_password.as_str()))
            .with_retry_policy(None) // Disable retries against the mock server
            .with_environment(Environment::from_single_url(
                &Url::parse(&mock_server.uri()).unwrap(),
            ));
        if with_account_number {
            builder = builder.with_account_number(&account_number);
        }

        Self {
            client: builder.build(),
            account_number,
            authorization: basic_authorization(&key_id, &key_password),
            mock_server,
        }
    }

    pub fn environment(&self) -> Environment {
        Environment::from_single_url(&Url::parse(&self.mock_server.uri()).unwrap())
    }

    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// Starts a mock matching only properly authenticated requests with the given method and path.
    pub fn authenticated(&self, http_method: &str, request_path: &str) -> MockBuilder {
        wiremock::Mock::given(method(http_method))
            .and(path(request_path))
            .and(header("Authorization", self.authorization.as_str()))
    }

    /// Path of an account-scoped endpoint for the account under test.
    pub fn account_path(&self, suffix: &str) -> String {
        format!(
            "/accountmanagement/v1/accounts/{}/{}",
            self.account_number, suffix
        )
    }
}
