//! Module containing the main Paysafe API client.

use crate::{
    apis::{merchant_accounts::MerchantAccountsApi, PaysafeClientInner},
    auth::Credentials,
    common::{DEFAULT_LIVE_URL, DEFAULT_TEST_URL},
    middlewares::{
        authentication::AuthenticationMiddleware,
        error_handling::ErrorHandlingMiddleware,
        inject_user_agent::InjectUserAgentMiddleware,
        retry_idempotent::{DynRetryPolicy, RetryIdempotentMiddleware},
    },
};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_retry::{policies::ExponentialBackoff, RetryPolicy};
use reqwest_tracing::{DefaultSpanBackend, TracingMiddleware};
use std::sync::Arc;

/// Client for Paysafe public APIs.
///
/// Cloning a `PaysafeClient` is cheap: all clones share the same underlying HTTP client.
#[derive(Debug, Clone)]
pub struct PaysafeClient {
    /// Account Management APIs client.
    pub merchant_accounts: MerchantAccountsApi,
}

impl PaysafeClient {
    /// Builds a new [`PaysafeClient`](crate::client::PaysafeClient) with the default configuration.
    pub fn new(credentials: Credentials) -> PaysafeClient {
        PaysafeClientBuilder::new(credentials).build()
    }

    /// Returns a new builder to configure a new [`PaysafeClient`](crate::client::PaysafeClient).
    pub fn builder(credentials: Credentials) -> PaysafeClientBuilder {
        PaysafeClientBuilder::new(credentials)
    }
}

/// Paysafe environment a client connects to.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Environment {
    /// Production environment: `https://api.paysafe.com`.
    Live,
    /// Test environment: `https://api.test.paysafe.com`.
    Test,
    /// Any other base URL, e.g. a local mock server.
    ///
    /// Relative API paths are joined onto this URL, so any path component must end with `/`.
    Custom(Url),
}

impl Environment {
    /// Builds a custom environment where all the requests are sent to the same base URL.
    pub fn from_single_url(url: &Url) -> Self {
        Environment::Custom(url.clone())
    }

    /// Base URL all the API paths are resolved against.
    pub fn base_url(&self) -> Url {
        match self {
            Environment::Live => Url::parse(DEFAULT_LIVE_URL).unwrap(),
            Environment::Test => Url::parse(DEFAULT_TEST_URL).unwrap(),
            Environment::Custom(url) => url.clone(),
        }
    }
}

/// Builder for a [`PaysafeClient`](crate::client::PaysafeClient).
#[derive(Debug)]
pub struct PaysafeClientBuilder {
    client: reqwest::Client,
    retry_policy: Option<DynRetryPolicy>,
    environment: Environment,
    credentials: Credentials,
    account_number: Option<String>,
}

impl PaysafeClientBuilder {
    /// Creates a new builder to configure a [`PaysafeClient`](crate::client::PaysafeClient).
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            retry_policy: Some(DynRetryPolicy(Arc::new(
                ExponentialBackoff::builder().build_with_max_retries(3),
            ))),
            environment: Environment::Live,
            credentials,
            account_number: None,
        }
    }

    /// Consumes the builder and builds a new [`PaysafeClient`](crate::client::PaysafeClient).
    pub fn build(self) -> PaysafeClient {
        let auth_middleware = AuthenticationMiddleware::new(&self.credentials);

        let inner = Arc::new(PaysafeClientInner {
            client: build_client_with_middleware(self.client, self.retry_policy, auth_middleware),
            environment: self.environment,
            account_number: self.account_number,
        });

        PaysafeClient {
            merchant_accounts: MerchantAccountsApi::new(inner),
        }
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Sets a specific [`RetryPolicy`](retry_policies::RetryPolicy) to use when retrying transient failures.
    ///
    /// To disable automatic retrying of failed requests, use `None`.
    pub fn with_retry_policy(
        mut self,
        retry_policy: impl Into<Option<Arc<dyn RetryPolicy + Send + Sync + 'static>>>,
    ) -> Self {
        self.retry_policy = retry_policy.into().map(DynRetryPolicy);
        self
    }

    /// Sets the environment to which this client should connect.
    ///
    /// Defaults to: [`Environment::Live`](crate::client::Environment::Live)
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Sets the account number used as context by account-scoped operations
    /// (addresses, business owners, users, terms and conditions, activation...).
    pub fn with_account_number(mut self, account_number: impl Into<String>) -> Self {
        self.account_number = Some(account_number.into());
        self
    }
}

fn build_client_with_middleware(
    client: reqwest::Client,
    retry_policy: Option<DynRetryPolicy>,
    auth_middleware: AuthenticationMiddleware,
) -> ClientWithMiddleware {
    let mut builder = reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware::<DefaultSpanBackend>::new())
        .with(InjectUserAgentMiddleware::new())
        .with(ErrorHandlingMiddleware);

    if let Some(retry_policy) = retry_policy {
        builder = builder.with(RetryIdempotentMiddleware::new(retry_policy));
    }

    builder.with(auth_middleware).build()
}
