//! APIs and models related to merchant account provisioning.

mod api;
mod model;
pub mod schema;

pub use api::{fix_state, MerchantAccountsApi};
pub use model::*;
