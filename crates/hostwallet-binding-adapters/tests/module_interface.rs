use std::sync::Arc;

use serde_json::{json, Value};

use hostwallet_binding_adapters::WalletModule;
use hostwallet_binding_core::{
    BalanceEntry, ChainDescriptor, ClientOptions, CustodyClient, CustodyClientFactory,
    NativeProvider, SdkError,
};

struct StubFactory;

struct StubClient {
    options: ClientOptions,
}

struct StubNative;

impl NativeProvider for StubNative {
    fn request(&self, _method: &str, _params: Value) -> Result<Value, SdkError> {
        Ok(json!("stub"))
    }
}

impl CustodyClient for StubClient {
    fn native_provider(&self) -> Arc<dyn NativeProvider> {
        Arc::new(StubNative)
    }

    fn login(&self) -> Result<Vec<alloy::primitives::Address>, SdkError> {
        Ok(Vec::new())
    }

    fn balances(&self) -> Result<Vec<BalanceEntry>, SdkError> {
        Ok(Vec::new())
    }

    fn logout(&self) -> Result<(), SdkError> {
        Ok(())
    }

    fn options(&self) -> ClientOptions {
        self.options.clone()
    }
}

impl CustodyClientFactory for StubFactory {
    fn construct(
        &self,
        _api_key: &str,
        options: &ClientOptions,
    ) -> Result<Arc<dyn CustodyClient>, SdkError> {
        Ok(Arc::new(StubClient {
            options: options.clone(),
        }))
    }
}

#[test]
fn module_exposes_label_and_icon() {
    let module = WalletModule::new("api-key-fixture");
    assert_eq!(module.label(), "HostWallet");
    assert!(module.icon().starts_with("<svg"));
}

#[test]
fn interface_opens_a_session_on_the_default_chain() {
    let module = WalletModule::with_factory("api-key-fixture", Arc::new(StubFactory));
    let session = module
        .interface(vec![
            ChainDescriptor::with_rpc_url("137", "https://b"),
            ChainDescriptor::new("1"),
        ])
        .expect("interface");

    assert_eq!(session.client.options().chain_id, 137);
    assert_eq!(session.client.options().rpc_url, "https://b");

    let balance = session
        .provider
        .request("eth_getBalance", json!([]))
        .expect("balance");
    assert_eq!(balance, json!("0"));

    let passthrough = session
        .provider
        .request("eth_chainId", json!([]))
        .expect("passthrough");
    assert_eq!(passthrough, json!("stub"));
}

#[test]
fn interface_requires_at_least_one_chain() {
    let module = WalletModule::with_factory("api-key-fixture", Arc::new(StubFactory));
    let err = module.interface(Vec::new()).expect_err("no chains");
    assert_eq!(err.code, -32602);
}
