//! Walks a new US merchant through the whole onboarding flow on the Paysafe test environment.
//!
//! Expects a `config.toml` (or `config.json`, ...) in the working directory, see `config.example.toml`.

use anyhow::Context;
use paysafe_rust::{
    apis::merchant_accounts::{
        Merchant, MerchantAccountAddressBuilder, MerchantAccountBuilder,
        MerchantAccountBusinessOwnerAddressBuilder, MerchantAccountBusinessOwnerBuilder,
        MerchantAchBankAccountBuilder, MerchantDescriptor, RecoveryQuestion, Region,
        TermsAndConditions, UserBuilder, YearlyVolumeRange,
    },
    auth::Credentials,
    client::Environment,
    PaysafeClient,
};

#[derive(serde::Deserialize, Debug)]
struct Config {
    key_id: String,
    key_password: String,
    merchant_name: String,
    user_name: String,
    user_password: String,
    user_email: String,
}

impl Config {
    fn read() -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name("config"))
            .build()?
            .try_deserialize()
            .context("Failed to assemble the required configuration")
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::read()?;
    let credentials = Credentials::new(config.key_id, config.key_password);

    // Partner level client, not bound to any account yet
    let paysafe = PaysafeClient::builder(credentials.clone())
        .with_environment(Environment::Test)
        .build();

    anyhow::ensure!(
        paysafe.merchant_accounts.monitor().await?,
        "Account Management API is not ready"
    );

    let merchant = paysafe
        .merchant_accounts
        .create_merchant(&Merchant::new(&config.merchant_name))
        .await?;
    let merchant_id = merchant.id.context("Merchant created without id")?;
    tracing::info!("Created new merchant: {}", merchant_id);

    let merchant_account = paysafe
        .merchant_accounts
        .create_merchant_account(
            &MerchantAccountBuilder::default()
                .merchant_id(&merchant_id)
                .name(format!("{} Online", config.merchant_name))
                .currency("USD")
                .region(Region::Us)
                .legal_entity(&config.merchant_name)
                .product_code("SMB-ONLINE")
                .category("ONLINE_RETAIL")
                .phone("503-555-0100")
                .yearly_volume_range(YearlyVolumeRange::Low)
                .average_transaction_amount(2500u64)
                .merchant_descriptor(MerchantDescriptor {
                    dynamic_descriptor: Some("DEMO".to_string()),
                    phone: Some("5035550100".to_string()),
                })
                .build()?,
        )
        .await?;
    let account_number = merchant_account
        .id
        .context("Merchant account created without id")?;
    tracing::info!("Created new merchant account: {}", account_number);

    // Account level client for everything else
    let paysafe = PaysafeClient::builder(credentials)
        .with_environment(Environment::Test)
        .with_account_number(&account_number)
        .build();
    let api = &paysafe.merchant_accounts;

    let questions = api.get_recovery_questions().await?;
    let question = questions
        .questions
        .first()
        .and_then(|q| q.question_id)
        .context("No recovery question available")?;

    api.create_new_user(
        &UserBuilder::default()
            .user_name(config.user_name)
            .password(config.user_password)
            .email(config.user_email)
            .recovery_question(RecoveryQuestion::answer(question, "Portland"))
            .build()?,
    )
    .await?;

    api.create_merchant_account_address(
        &MerchantAccountAddressBuilder::default()
            .street("100 Main Street")
            .city("Portland")
            .state("OR")
            .country("US")
            .zip("97201")
            .build()?,
    )
    .await?;

    let owner = api
        .create_merchant_account_business_owner(
            &MerchantAccountBusinessOwnerBuilder::default()
                .first_name("Jane")
                .last_name("Doe")
                .job_title("CEO")
                .phone("503-555-0101")
                .ssn("123456789")
                .date_of_birth(chrono::NaiveDate::from_ymd_opt(1980, 4, 23).context("Invalid date")?)
                .build()?,
        )
        .await?;
    let owner_id = owner.id.context("Business owner created without id")?;

    api.create_merchant_account_business_owner_address(
        &MerchantAccountBusinessOwnerAddressBuilder::default()
            .business_owner_id(&owner_id)
            .street("1 Oak Avenue")
            .city("Portland")
            .state("OR")
            .country("US")
            .zip("97205")
            .years_at_address(6u32)
            .build()?,
    )
    .await?;

    api.add_sub_merchant_ach_bank_account(
        &MerchantAchBankAccountBuilder::default()
            .merchant_id(&merchant_id)
            .account_number("988948193")
            .routing_number("211589828")
            .build()?,
    )
    .await?;

    let terms = api.get_terms_and_conditions().await?;
    let version = terms.version.unwrap_or_default();
    tracing::info!("Accepting terms and conditions version {}", version);
    api.accept_terms_and_conditions(&TermsAndConditions::accept(version))
        .await?;

    let activated = api.activate_merchant_account(&Default::default()).await?;
    tracing::info!("{:#?}", activated);

    Ok(())
}

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}
