use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::errors::ProviderRpcError;
use crate::ports::NativeProvider;

pub const ETH_REQUEST_ACCOUNTS: &str = "eth_requestAccounts";
pub const ETH_SELECT_ACCOUNTS: &str = "eth_selectAccounts";
pub const ETH_GET_BALANCE: &str = "eth_getBalance";
pub const WALLET_SWITCH_ETHEREUM_CHAIN: &str = "wallet_switchEthereumChain";

pub type MethodHandler = Arc<dyn Fn(Value) -> Result<Value, ProviderRpcError> + Send + Sync>;

#[derive(Clone)]
pub enum MethodBinding {
    Unsupported,
    Handler(MethodHandler),
}

/// Method table over one native-provider snapshot. Overridden methods run
/// their handler, `Unsupported` entries fail, everything else falls through
/// to the native provider.
#[derive(Clone)]
pub struct DispatchTable {
    native: Arc<dyn NativeProvider>,
    overrides: HashMap<&'static str, MethodBinding>,
}

impl DispatchTable {
    pub fn new(native: Arc<dyn NativeProvider>) -> Self {
        Self {
            native,
            overrides: HashMap::new(),
        }
    }

    pub fn with_handler(
        mut self,
        method: &'static str,
        handler: impl Fn(Value) -> Result<Value, ProviderRpcError> + Send + Sync + 'static,
    ) -> Self {
        self.overrides
            .insert(method, MethodBinding::Handler(Arc::new(handler)));
        self
    }

    pub fn without_method(mut self, method: &'static str) -> Self {
        self.overrides.insert(method, MethodBinding::Unsupported);
        self
    }

    pub fn dispatch(&self, method: &str, params: Value) -> Result<Value, ProviderRpcError> {
        match self.overrides.get(method) {
            Some(MethodBinding::Unsupported) => Err(ProviderRpcError::unsupported_method(method)),
            Some(MethodBinding::Handler(handler)) => handler(params),
            None => self.native.request(method, params).map_err(Into::into),
        }
    }
}
