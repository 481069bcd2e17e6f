use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ProviderRpcError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainDescriptor {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,
}

impl ChainDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rpc_url: None,
        }
    }

    pub fn with_rpc_url(id: impl Into<String>, rpc_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rpc_url: Some(rpc_url.into()),
        }
    }

    pub fn client_options(&self) -> Result<ClientOptions, ProviderRpcError> {
        Ok(ClientOptions {
            chain_id: parse_chain_id(&self.id)?,
            rpc_url: self.rpc_url.clone().unwrap_or_default(),
        })
    }
}

/// Construction parameters for one wallet-service client instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    pub chain_id: u64,
    pub rpc_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceEntry {
    pub crypto_amount: String,
}

pub fn parse_chain_id(raw: &str) -> Result<u64, ProviderRpcError> {
    if raw.starts_with("0x") || raw.starts_with("0X") {
        u64::from_str_radix(raw.trim_start_matches("0x").trim_start_matches("0X"), 16).map_err(
            |e| ProviderRpcError::invalid_params(format!("invalid hex chain id {raw}: {e}")),
        )
    } else {
        raw.parse()
            .map_err(|e| ProviderRpcError::invalid_params(format!("invalid chain id {raw}: {e}")))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Value,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

impl JsonRpcRequest {
    pub fn new(id: u64, method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_owned(),
            id: Value::from(id),
            method: method.into(),
            params,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ProviderRpcError>,
}
