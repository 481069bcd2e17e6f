use std::sync::Arc;

use hostwallet_binding_core::{
    BindingSession, ChainDescriptor, CustodyClientFactory, ProviderBinding, ProviderRpcError,
};

use crate::config::BindingAdapterConfig;
use crate::custody_service::HostedCustodyFactory;
use crate::icon::ICON_SVG;

pub const WALLET_LABEL: &str = "HostWallet";

/// Registration entry the aggregation framework consumes: a display label,
/// an inline icon, and an interface factory that opens a binding session.
#[derive(Clone)]
pub struct WalletModule {
    api_key: String,
    factory: Arc<dyn CustodyClientFactory>,
}

impl WalletModule {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(api_key, BindingAdapterConfig::default())
    }

    pub fn with_config(api_key: impl Into<String>, config: BindingAdapterConfig) -> Self {
        Self::with_factory(api_key, Arc::new(HostedCustodyFactory::new(config)))
    }

    pub fn with_factory(
        api_key: impl Into<String>,
        factory: Arc<dyn CustodyClientFactory>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            factory,
        }
    }

    pub fn label(&self) -> &'static str {
        WALLET_LABEL
    }

    pub fn icon(&self) -> &'static str {
        ICON_SVG
    }

    pub fn interface(
        &self,
        chains: Vec<ChainDescriptor>,
    ) -> Result<BindingSession, ProviderRpcError> {
        ProviderBinding::initialize(&self.api_key, chains, Arc::clone(&self.factory))
    }
}
