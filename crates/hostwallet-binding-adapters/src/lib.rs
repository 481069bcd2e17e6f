pub mod config;
pub mod custody_service;
pub mod icon;
pub mod module;

pub use config::BindingAdapterConfig;
pub use custody_service::{
    HostedCustodyClient, HostedCustodyFactory, HostedRpcProvider, SDK_DECODE_ERROR,
    SDK_TRANSPORT_ERROR,
};
pub use module::{WalletModule, WALLET_LABEL};
