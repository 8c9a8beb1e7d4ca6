use crate::auth::Token;
use chrono::{Datelike, NaiveDate};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Related resources returned by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

impl Merchant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// A merchant account able to process payments under a merchant.
#[derive(Serialize, Deserialize, Builder, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into, strip_option), default, derive(Debug))]
pub struct MerchantAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Merchant under which the account is created. Only used to build the request path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_entity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yearly_volume_range: Option<YearlyVolumeRange>,
    /// Average transaction amount, in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_transaction_amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_descriptor: Option<MerchantDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_account_details: Option<AccountDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub us_account_details: Option<AccountDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Region {
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "CA")]
    Ca,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum YearlyVolumeRange {
    Low,
    Medium,
    High,
    VeryHigh,
}

/// How the merchant appears on card holder statements.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MerchantDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_descriptor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Region-specific details of a merchant account (`caAccountDetails` / `usAccountDetails`).
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub federal_tax_number: Option<String>,
}

/// A user able to log in to the merchant back office.
#[derive(Serialize, Deserialize, Builder, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into, strip_option), default, derive(Debug))]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_question: Option<RecoveryQuestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryQuestion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl RecoveryQuestion {
    /// Answer to one of the questions returned by
    /// [`get_recovery_questions`](crate::apis::merchant_accounts::MerchantAccountsApi::get_recovery_questions).
    pub fn answer(question_id: u32, answer: impl Into<String>) -> Self {
        Self {
            question_id: Some(question_id),
            question: None,
            answer: Some(answer.into()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct RecoveryQuestionsList {
    #[serde(default)]
    pub questions: Vec<RecoveryQuestion>,
}

#[derive(Serialize, Deserialize, Builder, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into, strip_option), default, derive(Debug))]
pub struct MerchantAccountAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

/// An individual associated with a merchant account for KYC purposes.
#[derive(Serialize, Deserialize, Builder, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into, strip_option), default, derive(Debug))]
pub struct MerchantAccountBusinessOwner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

#[derive(Serialize, Deserialize, Builder, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into, strip_option), default, derive(Debug))]
pub struct MerchantAccountBusinessOwnerAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owner of the address. Also used to build the request path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_at_address: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

/// Canadian driving licence of a business owner.
#[derive(Serialize, Deserialize, Builder, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into, strip_option), default, derive(Debug))]
pub struct MerchantAccountBusinessOwnerIdentityDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

/// US bank account used for automated clearing house payouts.
#[derive(Serialize, Deserialize, Builder, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into, strip_option), default, derive(Debug))]
pub struct MerchantAchBankAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

/// Canadian bank account used for electronic funds transfer payouts.
#[derive(Serialize, Deserialize, Builder, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into, strip_option), default, derive(Debug))]
pub struct MerchantEftBankAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MerchantSubAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Id of the EFT bank account the sub-account pays out to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eft_id: Option<String>,
    /// Id of the ACH bank account the sub-account pays out to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ach_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

impl MerchantSubAccount {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct TermsAndConditions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Full text of the agreement, only returned when fetching it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl TermsAndConditions {
    /// Acceptance of the given version of the agreement.
    pub fn accept(version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
            content: None,
        }
    }
}

/// Hypermedia link attached to API responses.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct Link {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Calendar date in the `{ "day", "month", "year" }` shape used by Paysafe.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Date {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl Date {
    /// Converts into a [`NaiveDate`](chrono::NaiveDate), or `None` if the date does not exist.
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Self {
            day: d.day(),
            month: d.month(),
            year: d.year(),
        }
    }
}

/// Entities carrying a state/province that must be normalised before submission.
pub trait HasState {
    fn state_mut(&mut self) -> Option<&mut String>;
}

impl HasState for MerchantAccountAddress {
    fn state_mut(&mut self) -> Option<&mut String> {
        self.state.as_mut()
    }
}

impl HasState for MerchantAccountBusinessOwnerAddress {
    fn state_mut(&mut self) -> Option<&mut String> {
        self.state.as_mut()
    }
}
