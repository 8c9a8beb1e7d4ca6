//! Required and optional fields of every merchant account operation.

use crate::error::ValidationError;
use serde::Serialize;
use serde_json::Value;

/// Field requirements of a single operation, expressed with wire (camelCase) names.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FieldSchema {
    /// Entity name reported in validation errors.
    pub entity: &'static str,
    /// Fields that must be present and non-empty.
    pub required: &'static [&'static str],
    /// Ids interpolated into the request path. They must be present and non-empty too.
    pub path_params: &'static [&'static str],
    /// Fields the API accepts in addition to the required ones.
    ///
    /// Not enforced: anything else is still sent, and only logged.
    pub optional: &'static [&'static str],
}

const ADDRESS_FIELDS: &[&str] = &["street", "city", "state", "country", "zip"];
const BUSINESS_OWNER_ADDRESS_FIELDS: &[&str] = &[
    "businessOwnerId",
    "street",
    "city",
    "state",
    "country",
    "zip",
    "yearsAtAddress",
];
const ACH_FIELDS: &[&str] = &["accountNumber", "routingNumber"];
const EFT_FIELDS: &[&str] = &["accountNumber", "transitNumber", "institutionId"];

pub const CREATE_MERCHANT_ACCOUNT: FieldSchema = FieldSchema {
    entity: "MerchantAccount",
    required: &[
        "name",
        "currency",
        "region",
        "legalEntity",
        "productCode",
        "category",
        "phone",
        "yearlyVolumeRange",
        "averageTransactionAmount",
        "merchantDescriptor",
    ],
    path_params: &["merchantId"],
    optional: &["caAccountDetails", "usAccountDetails"],
};

pub const CREATE_NEW_USER: FieldSchema = FieldSchema {
    entity: "User",
    required: &["userName", "password", "email", "recoveryQuestion"],
    path_params: &[],
    optional: &[],
};

pub const CREATE_MERCHANT_ACCOUNT_ADDRESS: FieldSchema = FieldSchema {
    entity: "MerchantAccountAddress",
    required: ADDRESS_FIELDS,
    path_params: &[],
    optional: &["street2"],
};

pub const CREATE_BUSINESS_OWNER: FieldSchema = FieldSchema {
    entity: "MerchantAccountBusinessOwner",
    required: &["firstName", "lastName", "jobTitle", "phone", "dateOfBirth"],
    path_params: &[],
    optional: &["middleName", "email", "ssn"],
};

pub const CREATE_BUSINESS_OWNER_ADDRESS: FieldSchema = FieldSchema {
    entity: "MerchantAccountBusinessOwnerAddress",
    required: BUSINESS_OWNER_ADDRESS_FIELDS,
    path_params: &[],
    optional: &["street2"],
};

pub const ADD_BUSINESS_OWNER_IDENTITY_DOCUMENT: FieldSchema = FieldSchema {
    entity: "MerchantAccountBusinessOwnerIdentityDocument",
    required: &["businessOwnerId", "number", "province"],
    path_params: &[],
    optional: &["issueDate", "expiryDate"],
};

pub const ADD_SUB_MERCHANT_EFT_BANK_ACCOUNT: FieldSchema = FieldSchema {
    entity: "MerchantEftBankAccount",
    required: EFT_FIELDS,
    path_params: &["merchantId"],
    optional: &[],
};

pub const ADD_SUB_MERCHANT_ACH_BANK_ACCOUNT: FieldSchema = FieldSchema {
    entity: "MerchantAchBankAccount",
    required: ACH_FIELDS,
    path_params: &["merchantId"],
    optional: &[],
};

pub const UPDATE_MERCHANT_ACH_BANK_ACCOUNT: FieldSchema = FieldSchema {
    entity: "MerchantAchBankAccount",
    required: ACH_FIELDS,
    path_params: &["id"],
    optional: &["merchantId"],
};

pub const ADD_MERCHANT_EFT_BANK_ACCOUNT: FieldSchema = FieldSchema {
    entity: "MerchantEftBankAccount",
    required: EFT_FIELDS,
    path_params: &[],
    optional: &[],
};

pub const UPDATE_MERCHANT_EFT_BANK_ACCOUNT: FieldSchema = FieldSchema {
    entity: "MerchantEftBankAccount",
    required: EFT_FIELDS,
    path_params: &["id"],
    optional: &["merchantId"],
};

pub const ACCEPT_TERMS_AND_CONDITIONS: FieldSchema = FieldSchema {
    entity: "TermsAndConditions",
    required: &["version"],
    path_params: &[],
    optional: &[],
};

pub const ACTIVATE_MERCHANT_ACCOUNT: FieldSchema = FieldSchema {
    entity: "MerchantAccount",
    required: &[],
    path_params: &[],
    optional: &[
        "id",
        "merchantId",
        "name",
        "currency",
        "region",
        "legalEntity",
        "productCode",
        "category",
        "phone",
        "yearlyVolumeRange",
        "averageTransactionAmount",
        "merchantDescriptor",
        "caAccountDetails",
        "usAccountDetails",
        "status",
    ],
};

pub const CREATE_MERCHANT_SUB_ACCOUNT: FieldSchema = FieldSchema {
    entity: "MerchantSubAccount",
    required: &["name"],
    path_params: &[],
    optional: &["eftId", "achId"],
};

pub const CREATE_MERCHANT: FieldSchema = FieldSchema {
    entity: "Merchant",
    required: &["name"],
    path_params: &[],
    optional: &[],
};

impl FieldSchema {
    fn is_known(&self, field: &str) -> bool {
        self.required.contains(&field)
            || self.path_params.contains(&field)
            || self.optional.contains(&field)
    }
}

/// Serializes `entity` and checks it against `schema`.
///
/// On success, returns the serialized entity, ready to be used as request body.
pub fn ensure_required_fields<T: Serialize>(
    entity: &T,
    schema: &FieldSchema,
) -> Result<Value, crate::Error> {
    let body = serde_json::to_value(entity)?;

    let missing: Vec<&'static str> = schema
        .required
        .iter()
        .chain(schema.path_params)
        .copied()
        .filter(|field| is_blank(body.get(*field)))
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError {
            entity: schema.entity,
            missing,
        }
        .into());
    }

    if let Some(object) = body.as_object() {
        for field in object.keys().filter(|f| !schema.is_known(f)) {
            tracing::debug!(
                entity = schema.entity,
                field = %field,
                "Sending field not listed for this operation"
            );
        }
    }

    Ok(body)
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(a)) => a.is_empty(),
        Some(Value::Object(o)) => o.is_empty(),
        Some(Value::Bool(_)) | Some(Value::Number(_)) => false,
    }
}
