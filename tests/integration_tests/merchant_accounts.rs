use crate::common::test_context::TestContext;
use chrono::NaiveDate;
use paysafe_rust::apis::merchant_accounts::{
    Merchant, MerchantAccountAddressBuilder, MerchantAccountBuilder,
    MerchantAccountBusinessOwnerAddressBuilder, MerchantAccountBusinessOwnerBuilder,
    MerchantAccountBusinessOwnerIdentityDocumentBuilder, MerchantDescriptor,
    MerchantEftBankAccountBuilder, MerchantSubAccount, RecoveryQuestion, Region,
    TermsAndConditions, UserBuilder, YearlyVolumeRange,
};
use serde_json::json;
use wiremock::{matchers::body_partial_json, ResponseTemplate};

#[tokio::test]
async fn monitor_reports_ready() {
    let ctx = TestContext::start().await;

    ctx.authenticated("GET", "/accountmanagement/monitor")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "READY" })))
        .expect(1)
        .mount(ctx.mock_server())
        .await;

    assert!(ctx.client.merchant_accounts.monitor().await.unwrap());
}

#[tokio::test]
async fn canadian_merchant_onboarding() {
    let ctx = TestContext::start().await;
    let api = &ctx.client.merchant_accounts;

    // Merchant and merchant account
    ctx.authenticated("POST", "/accountmanagement/v1/merchants")
        .and(body_partial_json(json!({ "name": "Maple Goods" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "merchant-id",
            "name": "Maple Goods"
        })))
        .expect(1)
        .mount(ctx.mock_server())
        .await;
    ctx.authenticated("POST", "/accountmanagement/v1/merchants/merchant-id/accounts")
        .and(body_partial_json(json!({ "region": "CA", "currency": "CAD" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": ctx.account_number,
            "name": "Maple Goods Online",
            "currency": "CAD",
            "region": "CA",
            "status": "DEFERRED"
        })))
        .expect(1)
        .mount(ctx.mock_server())
        .await;

    let merchant = api
        .create_merchant(&Merchant::new("Maple Goods"))
        .await
        .unwrap();

    let merchant_account = api
        .create_merchant_account(
            &MerchantAccountBuilder::default()
                .merchant_id(merchant.id.clone().unwrap())
                .name("Maple Goods Online")
                .currency("CAD")
                .region(Region::Ca)
                .legal_entity("Maple Goods Inc.")
                .product_code("SMB-ONLINE")
                .category("ONLINE_RETAIL")
                .phone("416-555-0100")
                .yearly_volume_range(YearlyVolumeRange::Medium)
                .average_transaction_amount(2500u64)
                .merchant_descriptor(MerchantDescriptor {
                    dynamic_descriptor: Some("MAPLE".to_string()),
                    phone: Some("4165550100".to_string()),
                })
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(merchant_account.id.as_deref(), Some(ctx.account_number.as_str()));

    // Back office user
    ctx.authenticated("GET", "/accountmanagement/v1/recoveryquestions")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "questions": [{ "questionId": 7, "question": "What was the name of your first school?" }]
        })))
        .expect(1)
        .mount(ctx.mock_server())
        .await;
    ctx.authenticated("POST", &ctx.account_path("users"))
        .and(body_partial_json(json!({
            "userName": "maple-admin",
            "recoveryQuestion": { "questionId": 7, "answer": "Riverdale" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "userName": "maple-admin",
            "email": "admin@maple.example"
        })))
        .expect(1)
        .mount(ctx.mock_server())
        .await;

    let questions = api.get_recovery_questions().await.unwrap();
    let question_id = questions.questions[0].question_id.unwrap();

    api.create_new_user(
        &UserBuilder::default()
            .user_name("maple-admin")
            .password("M4ple-Passw0rd!")
            .email("admin@maple.example")
            .recovery_question(RecoveryQuestion::answer(question_id, "Riverdale"))
            .build()
            .unwrap(),
    )
    .await
    .unwrap();

    // Business address
    ctx.authenticated("POST", &ctx.account_path("addresses"))
        .and(body_partial_json(json!({ "state": "ON", "country": "CA" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "address-id" })))
        .expect(1)
        .mount(ctx.mock_server())
        .await;

    api.create_merchant_account_address(
        &MerchantAccountAddressBuilder::default()
            .street("100 Queen Street West")
            .city("Toronto")
            .state("ON")
            .country("CA")
            .zip("M5H 2N2")
            .build()
            .unwrap(),
    )
    .await
    .unwrap();

    // Business owner with home address and identity document
    ctx.authenticated("POST", &ctx.account_path("businessowners"))
        .and(body_partial_json(json!({
            "firstName": "Jane",
            "dateOfBirth": { "day": 23, "month": 4, "year": 1980 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "owner-id" })))
        .expect(1)
        .mount(ctx.mock_server())
        .await;
    ctx.authenticated(
        "POST",
        "/accountmanagement/v1/businessowners/owner-id/currentaddresses",
    )
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "owner-address-id" })))
    .expect(1)
    .mount(ctx.mock_server())
    .await;
    ctx.authenticated(
        "POST",
        "/accountmanagement/v1/businessowners/owner-id/canadiandrivinglicenses",
    )
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "licence-id" })))
    .expect(1)
    .mount(ctx.mock_server())
    .await;

    let owner = api
        .create_merchant_account_business_owner(
            &MerchantAccountBusinessOwnerBuilder::default()
                .first_name("Jane")
                .last_name("Doe")
                .job_title("CEO")
                .phone("416-555-0101")
                .date_of_birth(NaiveDate::from_ymd_opt(1980, 4, 23).unwrap())
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    let owner_id = owner.id.unwrap();

    api.create_merchant_account_business_owner_address(
        &MerchantAccountBusinessOwnerAddressBuilder::default()
            .business_owner_id(&owner_id)
            .street("1 Yonge Street")
            .city("Toronto")
            .state("ON")
            .country("CA")
            .zip("M5E 1E6")
            .years_at_address(6u32)
            .build()
            .unwrap(),
    )
    .await
    .unwrap();

    api.add_business_owner_identity_document(
        &MerchantAccountBusinessOwnerIdentityDocumentBuilder::default()
            .business_owner_id(&owner_id)
            .number("D1234-56789-01234")
            .province("ON")
            .expiry_date(NaiveDate::from_ymd_opt(2030, 12, 1).unwrap())
            .build()
            .unwrap(),
    )
    .await
    .unwrap();

    // Payout bank account
    ctx.authenticated("POST", &ctx.account_path("eftbankaccounts"))
        .and(body_partial_json(json!({ "transitNumber": "11000" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "eft-id" })))
        .expect(1)
        .mount(ctx.mock_server())
        .await;

    api.add_merchant_eft_bank_account(
        &MerchantEftBankAccountBuilder::default()
            .account_number("511201")
            .transit_number("11000")
            .institution_id("001")
            .build()
            .unwrap(),
    )
    .await
    .unwrap();

    // Terms and conditions
    ctx.authenticated("GET", &ctx.account_path("termsandconditions"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Terms-Version", "1.4")
                .set_body_string("<html>Merchant agreement</html>"),
        )
        .expect(1)
        .mount(ctx.mock_server())
        .await;
    ctx.authenticated("POST", &ctx.account_path("termsandconditions"))
        .and(body_partial_json(json!({ "version": "1.4" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "version": "1.4" })))
        .expect(1)
        .mount(ctx.mock_server())
        .await;

    let terms = api.get_terms_and_conditions().await.unwrap();
    assert_eq!(terms.content.as_deref(), Some("<html>Merchant agreement</html>"));

    api.accept_terms_and_conditions(&TermsAndConditions::accept(terms.version.unwrap()))
        .await
        .unwrap();

    // Activation
    ctx.authenticated("POST", &ctx.account_path("activation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": ctx.account_number,
            "status": "PENDING"
        })))
        .expect(1)
        .mount(ctx.mock_server())
        .await;

    let activated = api
        .activate_merchant_account(&Default::default())
        .await
        .unwrap();
    assert_eq!(activated.status.as_deref(), Some("PENDING"));
}

#[tokio::test]
async fn sub_merchant_with_bank_accounts() {
    let ctx = TestContext::start().await;
    let api = &ctx.client.merchant_accounts;

    ctx.authenticated(
        "POST",
        "/accountmanagement/v1/merchants/sub-merchant-id/eftbankaccounts",
    )
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "eft-id" })))
    .expect(1)
    .mount(ctx.mock_server())
    .await;
    ctx.authenticated("PUT", "/accountmanagement/v1/eftbankaccounts/eft-id")
        .and(body_partial_json(json!({ "accountNumber": "511299" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "eft-id",
            "accountNumber": "511299"
        })))
        .expect(1)
        .mount(ctx.mock_server())
        .await;
    ctx.authenticated("POST", &ctx.account_path("subaccounts"))
        .and(body_partial_json(json!({ "name": "Maple Outlet", "eftId": "eft-id" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "sub-account-id",
            "name": "Maple Outlet",
            "eftId": "eft-id"
        })))
        .expect(1)
        .mount(ctx.mock_server())
        .await;

    let mut bank_account = MerchantEftBankAccountBuilder::default()
        .merchant_id("sub-merchant-id")
        .account_number("511201")
        .transit_number("11000")
        .institution_id("001")
        .build()
        .unwrap();
    let created = api
        .add_sub_merchant_eft_bank_account(&bank_account)
        .await
        .unwrap();

    bank_account.id = created.id.clone();
    bank_account.account_number = Some("511299".to_string());
    let updated = api
        .update_merchant_eft_bank_account(&bank_account)
        .await
        .unwrap();
    assert_eq!(updated.account_number.as_deref(), Some("511299"));

    let sub_account = api
        .create_merchant_sub_account(&MerchantSubAccount {
            eft_id: created.id,
            ..MerchantSubAccount::new("Maple Outlet")
        })
        .await
        .unwrap();
    assert_eq!(sub_account.id.as_deref(), Some("sub-account-id"));
}
