// Default URLs
pub static DEFAULT_LIVE_URL: &str = "https://api.paysafe.com";
pub static DEFAULT_TEST_URL: &str = "https://api.test.paysafe.com";

// Header names
pub static TERMS_VERSION_HEADER: &str = "X-Terms-Version";
pub static LEGACY_TERMS_VERSION_HEADER: &str = "X_TERMS_VERSION";
