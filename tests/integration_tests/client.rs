use crate::common::test_context::TestContext;
use futures::future::join_all;
use paysafe_rust::{apis::merchant_accounts::Merchant, auth::Credentials, PaysafeClient};
use reqwest_retry::{policies::ExponentialBackoff, RetryPolicy};
use serde_json::json;
use std::{sync::Arc, time::Duration};
use wiremock::{
    matchers::{header, method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn user_agent_is_sent() {
    let ctx = TestContext::start().await;

    Mock::given(method("GET"))
        .and(path("/accountmanagement/monitor"))
        .and(header(
            "User-Agent",
            concat!("paysafe-rust/", env!("CARGO_PKG_VERSION")),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "READY" })))
        .expect(1)
        .mount(ctx.mock_server())
        .await;

    assert!(ctx.client.merchant_accounts.monitor().await.unwrap());
}

#[tokio::test]
async fn clones_share_the_client_across_tasks() {
    let ctx = TestContext::start().await;

    ctx.authenticated("GET", "/accountmanagement/monitor")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "READY" })))
        .expect(10)
        .mount(ctx.mock_server())
        .await;

    let handles = (0..10).map(|_| {
        let client = ctx.client.clone();
        tokio::spawn(async move { client.merchant_accounts.monitor().await })
    });

    for res in join_all(handles).await {
        assert!(res.unwrap().unwrap());
    }
}

#[tokio::test]
async fn transient_failures_are_retried_on_reads_only() {
    let ctx = TestContext::start().await;
    let retry_policy: Arc<dyn RetryPolicy + Send + Sync> = Arc::new(
        ExponentialBackoff::builder()
            .retry_bounds(Duration::from_millis(1), Duration::from_millis(10))
            .build_with_max_retries(3),
    );
    let client = PaysafeClient::builder(Credentials::new("key-id", "key-password"))
        .with_retry_policy(retry_policy)
        .with_environment(ctx.environment())
        .with_account_number(&ctx.account_number)
        .build();

    // 503 Service Unavailable on the first GET, 200 on the second one
    Mock::given(method("GET"))
        .and(path("/accountmanagement/monitor"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(ctx.mock_server())
        .await;
    Mock::given(method("GET"))
        .and(path("/accountmanagement/monitor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "READY" })))
        .expect(1)
        .mount(ctx.mock_server())
        .await;

    // POST requests fail straight away
    Mock::given(method("POST"))
        .and(path("/accountmanagement/v1/merchants"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(ctx.mock_server())
        .await;

    assert!(client.merchant_accounts.monitor().await.unwrap());
    assert!(client
        .merchant_accounts
        .create_merchant(&Merchant::new("ACME"))
        .await
        .is_err());
}
