mod client;
mod merchant_accounts;
