use std::sync::Arc;

use alloy::primitives::Address;
use serde_json::Value;

use crate::domain::{BalanceEntry, ClientOptions};
use crate::errors::SdkError;

/// Request surface of the wallet service's own provider, pre-adaptation.
pub trait NativeProvider: Send + Sync {
    fn request(&self, method: &str, params: Value) -> Result<Value, SdkError>;
}

/// One live client handle into the hosted wallet service.
pub trait CustodyClient: Send + Sync {
    fn native_provider(&self) -> Arc<dyn NativeProvider>;
    fn login(&self) -> Result<Vec<Address>, SdkError>;
    fn balances(&self) -> Result<Vec<BalanceEntry>, SdkError>;
    fn logout(&self) -> Result<(), SdkError>;
    fn options(&self) -> ClientOptions;
}

pub trait CustodyClientFactory: Send + Sync {
    fn construct(
        &self,
        api_key: &str,
        options: &ClientOptions,
    ) -> Result<Arc<dyn CustodyClient>, SdkError>;
}
