use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error code the wallet service uses when an interactive login is refused.
pub const SDK_INTERNAL_ERROR: i64 = -32603;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderRpcErrorCode {
    AccountAccessRejected,
    Unauthorized,
    UnsupportedMethod,
    Disconnected,
    ChainDisconnected,
    UnrecognizedChainId,
    InvalidParams,
    InternalError,
}

impl ProviderRpcErrorCode {
    pub fn code(self) -> i64 {
        match self {
            Self::AccountAccessRejected => 4001,
            Self::Unauthorized => 4100,
            Self::UnsupportedMethod => 4200,
            Self::Disconnected => 4900,
            Self::ChainDisconnected => 4901,
            Self::UnrecognizedChainId => 4902,
            Self::InvalidParams => -32602,
            Self::InternalError => -32603,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("provider rpc error {code}: {message}")]
pub struct ProviderRpcError {
    pub code: i64,
    pub message: String,
}

impl ProviderRpcError {
    pub fn new(code: ProviderRpcErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            message: message.into(),
        }
    }

    pub fn from_parts(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn account_access_rejected() -> Self {
        Self::new(
            ProviderRpcErrorCode::AccountAccessRejected,
            "account access rejected",
        )
    }

    pub fn unsupported_method(method: &str) -> Self {
        Self::new(
            ProviderRpcErrorCode::UnsupportedMethod,
            format!("method {method} is not supported by this wallet"),
        )
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(ProviderRpcErrorCode::InvalidParams, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ProviderRpcErrorCode::InternalError, message)
    }
}

/// Failure shape reported by the hosted wallet service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("wallet service error {code}: {message}")]
pub struct SdkError {
    pub code: i64,
    pub message: String,
}

impl SdkError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<SdkError> for ProviderRpcError {
    // Passthrough policy: service failures surface with code and message intact.
    fn from(error: SdkError) -> Self {
        Self {
            code: error.code,
            message: error.message,
        }
    }
}
