//! Rust client for the [Paysafe](https://www.paysafe.com) Account Management API,
//! used by partners to provision and onboard new merchant accounts.
//!
//! Check out also the official Paysafe [API documentation](https://developer.paysafe.com).
//!
//! # Usage
//!
//! ## Prerequisites
//!
//! Obtain an API key (key id and key password) from the Paysafe Business Portal.
//! Account-scoped operations (users, addresses, business owners, terms and conditions, activation...)
//! also need the number of the account being onboarded.
//!
//! ## Initialize a new `PaysafeClient`
//!
//! Create a new [`PaysafeClient`](crate::client::PaysafeClient) and provide your API key.
//!
//! ```rust,no_run
//! # use paysafe_rust::{PaysafeClient, auth::Credentials, client::Environment};
//! let paysafe = PaysafeClient::builder(Credentials::new("my-key-id", "my-key-password"))
//!     .with_environment(Environment::Test)
//!     .with_account_number("1001234567")
//!     .build();
//! ```
//!
//! By default, a `PaysafeClient` connects to the Live environment.
//! To connect to the Paysafe test environment, use [`with_environment(Environment::Test)`](crate::client::PaysafeClientBuilder::with_environment).
//!
//! ## Create a merchant account
//!
//! ```rust,no_run
//! # use paysafe_rust::{PaysafeClient, Error, apis::merchant_accounts::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let paysafe: PaysafeClient = unreachable!();
//! #
//! let merchant = paysafe
//!     .merchant_accounts
//!     .create_merchant(&Merchant::new("ACME Ltd"))
//!     .await?;
//!
//! let merchant_account = MerchantAccountBuilder::default()
//!     .merchant_id(merchant.id.unwrap_or_default())
//!     .name("ACME Online")
//!     .currency("USD")
//!     .region(Region::Us)
//!     .legal_entity("ACME Ltd")
//!     .product_code("SMB-ONLINE")
//!     .category("ONLINE_RETAIL")
//!     .phone("111-222-3333")
//!     .yearly_volume_range(YearlyVolumeRange::Medium)
//!     .average_transaction_amount(1500u64)
//!     .merchant_descriptor(MerchantDescriptor {
//!         dynamic_descriptor: Some("ACME".to_string()),
//!         phone: Some("1112223333".to_string()),
//!     })
//!     .build()
//!     .unwrap();
//!
//! let res = paysafe
//!     .merchant_accounts
//!     .create_merchant_account(&merchant_account)
//!     .await?;
//!
//! println!("Created new merchant account: {:?}", res.id);
//! # Ok(())
//! # }
//! ```
//!
//! Required fields are checked locally before anything is sent:
//! a missing or empty one results in an [`Error::Validation`](crate::Error::Validation).
//!
//! ## Accept the terms and conditions
//!
//! ```rust,no_run
//! # use paysafe_rust::{PaysafeClient, Error, apis::merchant_accounts::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let paysafe: PaysafeClient = unreachable!();
//! #
//! let terms = paysafe.merchant_accounts.get_terms_and_conditions().await?;
//!
//! paysafe
//!     .merchant_accounts
//!     .accept_terms_and_conditions(&TermsAndConditions::accept(terms.version.unwrap_or_default()))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## More examples
//!
//! Look into the [`demos`](../demos) for a complete onboarding flow.
//!
//! To run it, use `cargo run` like this:
//!
//! ```shell
//! cargo run --example onboard_merchant
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub mod auth;
pub mod client;
mod common;
pub mod error;
mod middlewares;

pub use client::PaysafeClient;
pub use error::Error;
