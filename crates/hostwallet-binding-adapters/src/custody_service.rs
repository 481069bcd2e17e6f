use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::Address;
use serde_json::{json, Value};

use hostwallet_binding_core::{
    BalanceEntry, ClientOptions, CustodyClient, CustodyClientFactory, NativeProvider, SdkError,
};

use crate::config::BindingAdapterConfig;

// Local codes for failures that never came from the service itself. They must
// stay distinct from -32603, which the service reserves for refused logins.
pub const SDK_TRANSPORT_ERROR: i64 = -32000;
pub const SDK_DECODE_ERROR: i64 = -32700;

#[derive(Debug, Clone)]
pub struct HostedCustodyFactory {
    config: BindingAdapterConfig,
}

impl HostedCustodyFactory {
    pub fn new(config: BindingAdapterConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(BindingAdapterConfig::from_env())
    }
}

impl CustodyClientFactory for HostedCustodyFactory {
    fn construct(
        &self,
        api_key: &str,
        options: &ClientOptions,
    ) -> Result<Arc<dyn CustodyClient>, SdkError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(self.config.request_timeout_ms))
            .build()
            .map_err(|e| {
                SdkError::new(
                    SDK_TRANSPORT_ERROR,
                    format!("failed to initialize custody http client: {e}"),
                )
            })?;
        Ok(Arc::new(HostedCustodyClient {
            http,
            base_url: self.config.service_base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
            options: options.clone(),
        }))
    }
}

#[derive(Debug, Clone)]
pub struct HostedCustodyClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    options: ClientOptions,
}

impl HostedCustodyClient {
    fn call(&self, request: reqwest::blocking::RequestBuilder) -> Result<Value, SdkError> {
        let response = request
            .header("x-api-key", &self.api_key)
            .send()
            .map_err(|e| {
                SdkError::new(
                    SDK_TRANSPORT_ERROR,
                    format!("custody service request failed: {e}"),
                )
            })?;
        let status = response.status();
        let body: Value = response.json().map_err(|e| {
            SdkError::new(
                SDK_DECODE_ERROR,
                format!("custody service json decode failed: {e}"),
            )
        })?;
        // The error body is authoritative even on non-2xx statuses; a refused
        // login arrives as 401 with code -32603 and must survive as-is.
        if let Some(error) = body.get("error") {
            return Err(service_error(error));
        }
        if !status.is_success() {
            return Err(SdkError::new(
                SDK_TRANSPORT_ERROR,
                format!("custody service status {status}: {body}"),
            ));
        }
        body.get("result").cloned().ok_or_else(|| {
            SdkError::new(SDK_DECODE_ERROR, "custody service response missing result")
        })
    }

    fn user_url(&self, path: &str) -> String {
        format!("{}/v1/user/{path}", self.base_url)
    }

    fn rpc_url(&self) -> String {
        if self.options.rpc_url.is_empty() {
            // No caller-supplied endpoint: fall back to the hosted relay.
            format!("{}/v1/rpc/{}", self.base_url, self.options.chain_id)
        } else {
            self.options.rpc_url.clone()
        }
    }
}

impl CustodyClient for HostedCustodyClient {
    fn native_provider(&self) -> Arc<dyn NativeProvider> {
        Arc::new(HostedRpcProvider {
            http: self.http.clone(),
            url: self.rpc_url(),
            api_key: self.api_key.clone(),
        })
    }

    fn login(&self) -> Result<Vec<Address>, SdkError> {
        tracing::debug!(chain_id = self.options.chain_id, "interactive login");
        let result = self.call(
            self.http
                .post(self.user_url("login"))
                .json(&json!({ "chain_id": self.options.chain_id })),
        )?;
        let raw = result.as_array().ok_or_else(|| {
            SdkError::new(SDK_DECODE_ERROR, "login result must be an account array")
        })?;
        let mut accounts = Vec::with_capacity(raw.len());
        for entry in raw {
            let account = entry.as_str().ok_or_else(|| {
                SdkError::new(SDK_DECODE_ERROR, "login account must be a string")
            })?;
            let parsed: Address = account.parse().map_err(|e| {
                SdkError::new(
                    SDK_DECODE_ERROR,
                    format!("invalid account address {account}: {e}"),
                )
            })?;
            accounts.push(parsed);
        }
        Ok(accounts)
    }

    fn balances(&self) -> Result<Vec<BalanceEntry>, SdkError> {
        let result = self.call(
            self.http
                .get(self.user_url("balances"))
                .query(&[("chain_id", self.options.chain_id.to_string())]),
        )?;
        serde_json::from_value(result).map_err(|e| {
            SdkError::new(SDK_DECODE_ERROR, format!("balance list decode failed: {e}"))
        })
    }

    fn logout(&self) -> Result<(), SdkError> {
        tracing::debug!(chain_id = self.options.chain_id, "logging out");
        self.call(self.http.post(self.user_url("logout")).json(&json!({})))?;
        Ok(())
    }

    fn options(&self) -> ClientOptions {
        self.options.clone()
    }
}

/// JSON-RPC 2.0 over HTTP against the chain endpoint the client was built
/// with.
#[derive(Debug, Clone)]
pub struct HostedRpcProvider {
    http: reqwest::blocking::Client,
    url: String,
    api_key: String,
}

impl NativeProvider for HostedRpcProvider {
    fn request(&self, method: &str, params: Value) -> Result<Value, SdkError> {
        tracing::debug!(method, url = %self.url, "dispatching rpc request");
        let payload = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        let response = self
            .http
            .post(&self.url)
            .header("x-api-key", &self.api_key)
            .json(&payload)
            .send()
            .map_err(|e| SdkError::new(SDK_TRANSPORT_ERROR, format!("rpc request failed: {e}")))?;
        let status = response.status();
        let body: Value = response.json().map_err(|e| {
            SdkError::new(SDK_DECODE_ERROR, format!("rpc json decode failed: {e}"))
        })?;
        if let Some(error) = body.get("error") {
            return Err(service_error(error));
        }
        if !status.is_success() {
            return Err(SdkError::new(
                SDK_TRANSPORT_ERROR,
                format!("rpc status {status}: {body}"),
            ));
        }
        body.get("result")
            .cloned()
            .ok_or_else(|| SdkError::new(SDK_DECODE_ERROR, "rpc response missing result"))
    }
}

fn service_error(error: &Value) -> SdkError {
    let code = error
        .get("code")
        .and_then(Value::as_i64)
        .unwrap_or(SDK_DECODE_ERROR);
    let message = error
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("custody service error")
        .to_owned();
    SdkError::new(code, message)
}
