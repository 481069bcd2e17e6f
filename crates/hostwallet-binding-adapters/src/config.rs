use std::env;

const ENV_SERVICE_URL: &str = "HOSTWALLET_SERVICE_URL";
const ENV_TIMEOUT_MS: &str = "HOSTWALLET_TIMEOUT_MS";

#[derive(Debug, Clone)]
pub struct BindingAdapterConfig {
    pub service_base_url: String,
    pub request_timeout_ms: u64,
}

impl Default for BindingAdapterConfig {
    fn default() -> Self {
        Self {
            service_base_url: "https://api.hostwallet.dev".to_owned(),
            request_timeout_ms: 15_000,
        }
    }
}

impl BindingAdapterConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var(ENV_SERVICE_URL) {
            if !url.is_empty() {
                config.service_base_url = url;
            }
        }
        if let Ok(timeout) = env::var(ENV_TIMEOUT_MS) {
            if let Ok(parsed) = timeout.parse() {
                config.request_timeout_ms = parsed;
            }
        }
        config
    }
}
