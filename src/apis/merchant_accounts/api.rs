use crate::{
    apis::{
        merchant_accounts::{
            schema::{self, ensure_required_fields},
            HasState, Merchant, MerchantAccount, MerchantAccountAddress,
            MerchantAccountBusinessOwner, MerchantAccountBusinessOwnerAddress,
            MerchantAccountBusinessOwnerIdentityDocument, MerchantAchBankAccount,
            MerchantEftBankAccount, MerchantSubAccount, RecoveryQuestionsList,
            TermsAndConditions, User,
        },
        ApiRequest, PaysafeClientInner,
    },
    common::{LEGACY_TERMS_VERSION_HEADER, TERMS_VERSION_HEADER},
    Error,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

static BASE_PATH: &str = "accountmanagement/v1";
static MONITOR_PATH: &str = "accountmanagement/monitor";
static DEFAULT_TERMS_VERSION: &str = "1.0";

/// Paysafe Account Management APIs client.
///
/// Every operation validates its input locally first: if a required field is missing or empty,
/// [`Error::Validation`](crate::Error::Validation) is returned and no HTTP request is sent.
#[derive(Clone, Debug)]
pub struct MerchantAccountsApi {
    inner: Arc<PaysafeClientInner>,
}

impl MerchantAccountsApi {
    pub(crate) fn new(inner: Arc<PaysafeClientInner>) -> Self {
        Self { inner }
    }

    /// Checks whether the Account Management API is up.
    ///
    /// Returns `true` only if the API reports a `READY` status.
    #[tracing::instrument(name = "Monitor Account Management", skip(self))]
    pub async fn monitor(&self) -> Result<bool, Error> {
        let res: MonitorResponse = self
            .inner
            .process_request(&ApiRequest::get(MONITOR_PATH))
            .await?;

        Ok(res.status.as_ref().and_then(Value::as_str) == Some("READY"))
    }

    /// Creates a new merchant account under the merchant identified by `merchant_id`.
    #[tracing::instrument(
        name = "Create Merchant Account",
        skip(self, merchant_account),
        fields(merchant_id = ?merchant_account.merchant_id)
    )]
    pub async fn create_merchant_account(
        &self,
        merchant_account: &MerchantAccount,
    ) -> Result<MerchantAccount, Error> {
        let body = ensure_required_fields(merchant_account, &schema::CREATE_MERCHANT_ACCOUNT)?;

        let uri = prepare_uri(&format!(
            "/merchants/{}/accounts",
            encode(path_id(&merchant_account.merchant_id))
        ));

        self.inner
            .process_request(&ApiRequest::post(uri, body))
            .await
    }

    /// Creates a back office user for the configured account.
    #[tracing::instrument(name = "Create New User", skip(self, user))]
    pub async fn create_new_user(&self, user: &User) -> Result<User, Error> {
        let body = ensure_required_fields(user, &schema::CREATE_NEW_USER)?;
        let account = self.inner.account_number()?;

        let uri = prepare_uri(&format!("/accounts/{}/users", encode(account)));

        self.inner
            .process_request(&ApiRequest::post(uri, body))
            .await
    }

    /// Lists the recovery questions a new user can pick from.
    #[tracing::instrument(name = "Get Recovery Questions", skip(self))]
    pub async fn get_recovery_questions(&self) -> Result<RecoveryQuestionsList, Error> {
        self.inner
            .process_request(&ApiRequest::get(prepare_uri("/recoveryquestions")))
            .await
    }

    /// Adds the business address of the configured account.
    ///
    /// The state is normalised with [`fix_state`] before submission.
    #[tracing::instrument(name = "Create Merchant Account Address", skip(self, address))]
    pub async fn create_merchant_account_address(
        &self,
        address: &MerchantAccountAddress,
    ) -> Result<MerchantAccountAddress, Error> {
        let mut address = address.clone();
        fix_state(&mut address);

        let body = ensure_required_fields(&address, &schema::CREATE_MERCHANT_ACCOUNT_ADDRESS)?;
        let account = self.inner.account_number()?;

        let uri = prepare_uri(&format!("/accounts/{}/addresses", encode(account)));

        self.inner
            .process_request(&ApiRequest::post(uri, body))
            .await
    }

    /// Adds a business owner to the configured account.
    #[tracing::instrument(
        name = "Create Merchant Account Business Owner",
        skip(self, business_owner)
    )]
    pub async fn create_merchant_account_business_owner(
        &self,
        business_owner: &MerchantAccountBusinessOwner,
    ) -> Result<MerchantAccountBusinessOwner, Error> {
        let body = ensure_required_fields(business_owner, &schema::CREATE_BUSINESS_OWNER)?;
        let account = self.inner.account_number()?;

        let uri = prepare_uri(&format!("/accounts/{}/businessowners", encode(account)));

        self.inner
            .process_request(&ApiRequest::post(uri, body))
            .await
    }

    /// Adds the current home address of a business owner.
    #[tracing::instrument(
        name = "Create Merchant Account Business Owner Address",
        skip(self, address),
        fields(business_owner_id = ?address.business_owner_id)
    )]
    pub async fn create_merchant_account_business_owner_address(
        &self,
        address: &MerchantAccountBusinessOwnerAddress,
    ) -> Result<MerchantAccountBusinessOwnerAddress, Error> {
        self.submit_business_owner_address(address, "currentaddresses").await
    }

    /// Adds a previous home address of a business owner.
    #[tracing::instrument(
        name = "Create Merchant Account Business Owner Previous Address",
        skip(self, address),
        fields(business_owner_id = ?address.business_owner_id)
    )]
    pub async fn create_merchant_account_business_owner_address_previous(
        &self,
        address: &MerchantAccountBusinessOwnerAddress,
    ) -> Result<MerchantAccountBusinessOwnerAddress, Error> {
        self.submit_business_owner_address(address, "previousaddresses").await
    }

    async fn submit_business_owner_address(
        &self,
        address: &MerchantAccountBusinessOwnerAddress,
        collection: &str,
    ) -> Result<MerchantAccountBusinessOwnerAddress, Error> {
        let mut address = address.clone();
        fix_state(&mut address);

        let body = ensure_required_fields(&address, &schema::CREATE_BUSINESS_OWNER_ADDRESS)?;

        let uri = prepare_uri(&format!(
            "/businessowners/{}/{}",
            encode(path_id(&address.business_owner_id)),
            collection
        ));

        self.inner
            .process_request(&ApiRequest::post(uri, body))
            .await
    }

    /// Adds a Canadian driving licence as identity document of a business owner.
    #[tracing::instrument(
        name = "Add Business Owner Identity Document",
        skip(self, document),
        fields(business_owner_id = ?document.business_owner_id)
    )]
    pub async fn add_business_owner_identity_document(
        &self,
        document: &MerchantAccountBusinessOwnerIdentityDocument,
    ) -> Result<MerchantAccountBusinessOwnerIdentityDocument, Error> {
        let body = ensure_required_fields(document, &schema::ADD_BUSINESS_OWNER_IDENTITY_DOCUMENT)?;

        let uri = prepare_uri(&format!(
            "/businessowners/{}/canadiandrivinglicenses",
            encode(path_id(&document.business_owner_id))
        ));

        self.inner
            .process_request(&ApiRequest::post(uri, body))
            .await
    }

    /// Adds an EFT bank account to the sub-merchant identified by `merchant_id`.
    #[tracing::instrument(
        name = "Add Sub Merchant EFT Bank Account",
        skip(self, bank_account),
        fields(merchant_id = ?bank_account.merchant_id)
    )]
    pub async fn add_sub_merchant_eft_bank_account(
        &self,
        bank_account: &MerchantEftBankAccount,
    ) -> Result<MerchantEftBankAccount, Error> {
        let body =
            ensure_required_fields(bank_account, &schema::ADD_SUB_MERCHANT_EFT_BANK_ACCOUNT)?;

        let uri = prepare_uri(&format!(
            "/merchants/{}/eftbankaccounts",
            encode(path_id(&bank_account.merchant_id))
        ));

        self.inner
            .process_request(&ApiRequest::post(uri, body))
            .await
    }

    /// Adds an ACH bank account to the sub-merchant identified by `merchant_id`.
    #[tracing::instrument(
        name = "Add Sub Merchant ACH Bank Account",
        skip(self, bank_account),
        fields(merchant_id = ?bank_account.merchant_id)
    )]
    pub async fn add_sub_merchant_ach_bank_account(
        &self,
        bank_account: &MerchantAchBankAccount,
    ) -> Result<MerchantAchBankAccount, Error> {
        let body =
            ensure_required_fields(bank_account, &schema::ADD_SUB_MERCHANT_ACH_BANK_ACCOUNT)?;

        let uri = prepare_uri(&format!(
            "/merchants/{}/achbankaccounts",
            encode(path_id(&bank_account.merchant_id))
        ));

        self.inner
            .process_request(&ApiRequest::post(uri, body))
            .await
    }

    /// Replaces the details of the ACH bank account identified by `id`.
    #[tracing::instrument(
        name = "Update Merchant ACH Bank Account",
        skip(self, bank_account),
        fields(bank_account_id = ?bank_account.id)
    )]
    pub async fn update_merchant_ach_bank_account(
        &self,
        bank_account: &MerchantAchBankAccount,
    ) -> Result<MerchantAchBankAccount, Error> {
        let body = ensure_required_fields(bank_account, &schema::UPDATE_MERCHANT_ACH_BANK_ACCOUNT)?;

        let uri = prepare_uri(&format!(
            "/achbankaccounts/{}",
            encode(path_id(&bank_account.id))
        ));

        self.inner
            .process_request(&ApiRequest::put(uri, body))
            .await
    }

    /// Adds an EFT bank account to the configured account.
    #[tracing::instrument(name = "Add Merchant EFT Bank Account", skip(self, bank_account))]
    pub async fn add_merchant_eft_bank_account(
        &self,
        bank_account: &MerchantEftBankAccount,
    ) -> Result<MerchantEftBankAccount, Error> {
        let body = ensure_required_fields(bank_account, &schema::ADD_MERCHANT_EFT_BANK_ACCOUNT)?;
        let account = self.inner.account_number()?;

        let uri = prepare_uri(&format!("/accounts/{}/eftbankaccounts", encode(account)));

        self.inner
            .process_request(&ApiRequest::post(uri, body))
            .await
    }

    /// Replaces the details of the EFT bank account identified by `id`.
    #[tracing::instrument(
        name = "Update Merchant EFT Bank Account",
        skip(self, bank_account),
        fields(bank_account_id = ?bank_account.id)
    )]
    pub async fn update_merchant_eft_bank_account(
        &self,
        bank_account: &MerchantEftBankAccount,
    ) -> Result<MerchantEftBankAccount, Error> {
        let body = ensure_required_fields(bank_account, &schema::UPDATE_MERCHANT_EFT_BANK_ACCOUNT)?;

        let uri = prepare_uri(&format!(
            "/eftbankaccounts/{}",
            encode(path_id(&bank_account.id))
        ));

        self.inner
            .process_request(&ApiRequest::put(uri, body))
            .await
    }

    /// Fetches the terms and conditions the configured account must accept.
    ///
    /// The version is read from the `X-Terms-Version` response header and defaults to `1.0`.
    /// The body of the response is returned as the content.
    #[tracing::instrument(name = "Get Terms and Conditions", skip(self))]
    pub async fn get_terms_and_conditions(&self) -> Result<TermsAndConditions, Error> {
        let account = self.inner.account_number()?;

        let uri = prepare_uri(&format!("/accounts/{}/termsandconditions", encode(account)));

        let res = self
            .inner
            .process_raw_request(&ApiRequest::get(uri))
            .await?;

        let version = [TERMS_VERSION_HEADER, LEGACY_TERMS_VERSION_HEADER]
            .iter()
            .find_map(|name| res.headers.get(*name))
            .and_then(|value| value.to_str().ok())
            .unwrap_or(DEFAULT_TERMS_VERSION);

        Ok(TermsAndConditions {
            version: Some(version.to_string()),
            content: Some(res.content),
        })
    }

    /// Accepts the given version of the terms and conditions on behalf of the configured account.
    #[tracing::instrument(
        name = "Accept Terms and Conditions",
        skip(self, terms_and_conditions),
        fields(version = ?terms_and_conditions.version)
    )]
    pub async fn accept_terms_and_conditions(
        &self,
        terms_and_conditions: &TermsAndConditions,
    ) -> Result<TermsAndConditions, Error> {
        let body =
            ensure_required_fields(terms_and_conditions, &schema::ACCEPT_TERMS_AND_CONDITIONS)?;
        let account = self.inner.account_number()?;

        let uri = prepare_uri(&format!("/accounts/{}/termsandconditions", encode(account)));

        self.inner
            .process_request(&ApiRequest::post(uri, body))
            .await
    }

    /// Activates the configured account once all its details have been submitted.
    #[tracing::instrument(name = "Activate Merchant Account", skip(self, merchant_account))]
    pub async fn activate_merchant_account(
        &self,
        merchant_account: &MerchantAccount,
    ) -> Result<MerchantAccount, Error> {
        let body = ensure_required_fields(merchant_account, &schema::ACTIVATE_MERCHANT_ACCOUNT)?;
        let account = self.inner.account_number()?;

        let uri = prepare_uri(&format!("/accounts/{}/activation", encode(account)));

        self.inner
            .process_request(&ApiRequest::post(uri, body))
            .await
    }

    /// Creates a sub-account of the configured account.
    #[tracing::instrument(name = "Create Merchant Sub Account", skip(self, sub_account))]
    pub async fn create_merchant_sub_account(
        &self,
        sub_account: &MerchantSubAccount,
    ) -> Result<MerchantSubAccount, Error> {
        let body = ensure_required_fields(sub_account, &schema::CREATE_MERCHANT_SUB_ACCOUNT)?;
        let account = self.inner.account_number()?;

        let uri = prepare_uri(&format!("/accounts/{}/subaccounts", encode(account)));

        self.inner
            .process_request(&ApiRequest::post(uri, body))
            .await
    }

    /// Creates a new merchant.
    #[tracing::instrument(name = "Create Merchant", skip(self, merchant))]
    pub async fn create_merchant(&self, merchant: &Merchant) -> Result<Merchant, Error> {
        let body = ensure_required_fields(merchant, &schema::CREATE_MERCHANT)?;

        self.inner
            .process_request(&ApiRequest::post(prepare_uri("/merchants"), body))
            .await
    }
}

/// Normalises the state of an address before submission:
/// any `OR_` (case-insensitive) is replaced by `OR`.
pub fn fix_state<A: HasState>(address: &mut A) {
    if let Some(state) = address.state_mut() {
        *state = replace_ignore_ascii_case(state, "OR_", "OR");
    }
}

fn replace_ignore_ascii_case(haystack: &str, needle: &str, replacement: &str) -> String {
    // ASCII lowercasing keeps byte offsets unchanged
    let lower_haystack = haystack.to_ascii_lowercase();
    let lower_needle = needle.to_ascii_lowercase();

    let mut out = String::with_capacity(haystack.len());
    let mut last = 0;
    for (start, _) in lower_haystack.match_indices(lower_needle.as_str()) {
        out.push_str(&haystack[last..start]);
        out.push_str(replacement);
        last = start + needle.len();
    }
    out.push_str(&haystack[last..]);

    out
}

fn prepare_uri(path: &str) -> String {
    format!("{}{}", BASE_PATH, path)
}

/// Path ids have already been checked by the operation schema.
fn path_id(id: &Option<String>) -> &str {
    id.as_deref().unwrap_or_default()
}

#[derive(Deserialize)]
struct MonitorResponse {
    // Anything but the "READY" string means not ready, whatever its type
    status: Option<Value>,
}
