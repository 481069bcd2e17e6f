#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use alloy::primitives::Address;
use serde_json::{json, Value};

use hostwallet_binding_core::{
    BalanceEntry, ChainDescriptor, ClientOptions, CustodyClient, CustodyClientFactory,
    NativeProvider, SdkError,
};

#[derive(Default)]
pub struct ServiceBehavior {
    pub construct_error: Option<SdkError>,
    pub login_error: Option<SdkError>,
    pub balance_error: Option<SdkError>,
    pub accounts: Vec<Address>,
    pub balances: Vec<BalanceEntry>,
}

#[derive(Default)]
pub struct ServiceLog {
    pub constructed: Vec<ClientOptions>,
    pub logins: Vec<u64>,
    pub logouts: Vec<u64>,
    pub rpc_calls: Vec<(u64, String)>,
}

/// Recording in-memory stand-in for the hosted wallet service. Every client
/// it constructs reports back into the shared log, keyed by the chain it was
/// built for.
#[derive(Clone, Default)]
pub struct MockCustodyService {
    pub behavior: Arc<Mutex<ServiceBehavior>>,
    pub log: Arc<Mutex<ServiceLog>>,
}

impl MockCustodyService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(accounts: Vec<Address>) -> Self {
        let service = Self::default();
        service.behavior.lock().expect("behavior lock").accounts = accounts;
        service
    }

    pub fn set_login_error(&self, error: Option<SdkError>) {
        self.behavior.lock().expect("behavior lock").login_error = error;
    }

    pub fn set_balances(&self, balances: Vec<BalanceEntry>) {
        self.behavior.lock().expect("behavior lock").balances = balances;
    }

    pub fn constructed_chains(&self) -> Vec<u64> {
        self.log
            .lock()
            .expect("log lock")
            .constructed
            .iter()
            .map(|options| options.chain_id)
            .collect()
    }

    pub fn logins(&self) -> Vec<u64> {
        self.log.lock().expect("log lock").logins.clone()
    }

    pub fn logouts(&self) -> Vec<u64> {
        self.log.lock().expect("log lock").logouts.clone()
    }
}

impl CustodyClientFactory for MockCustodyService {
    fn construct(
        &self,
        _api_key: &str,
        options: &ClientOptions,
    ) -> Result<Arc<dyn CustodyClient>, SdkError> {
        if let Some(error) = self
            .behavior
            .lock()
            .expect("behavior lock")
            .construct_error
            .clone()
        {
            return Err(error);
        }
        self.log
            .lock()
            .expect("log lock")
            .constructed
            .push(options.clone());
        Ok(Arc::new(MockClient {
            service: self.clone(),
            options: options.clone(),
        }))
    }
}

pub struct MockClient {
    service: MockCustodyService,
    options: ClientOptions,
}

impl CustodyClient for MockClient {
    fn native_provider(&self) -> Arc<dyn NativeProvider> {
        Arc::new(MockNative {
            service: self.service.clone(),
            chain_id: self.options.chain_id,
        })
    }

    fn login(&self) -> Result<Vec<Address>, SdkError> {
        self.service
            .log
            .lock()
            .expect("log lock")
            .logins
            .push(self.options.chain_id);
        let behavior = self.service.behavior.lock().expect("behavior lock");
        if let Some(error) = behavior.login_error.clone() {
            return Err(error);
        }
        Ok(behavior.accounts.clone())
    }

    fn balances(&self) -> Result<Vec<BalanceEntry>, SdkError> {
        let behavior = self.service.behavior.lock().expect("behavior lock");
        if let Some(error) = behavior.balance_error.clone() {
            return Err(error);
        }
        Ok(behavior.balances.clone())
    }

    fn logout(&self) -> Result<(), SdkError> {
        self.service
            .log
            .lock()
            .expect("log lock")
            .logouts
            .push(self.options.chain_id);
        Ok(())
    }

    fn options(&self) -> ClientOptions {
        self.options.clone()
    }
}

pub struct MockNative {
    service: MockCustodyService,
    chain_id: u64,
}

impl NativeProvider for MockNative {
    fn request(&self, method: &str, _params: Value) -> Result<Value, SdkError> {
        self.service
            .log
            .lock()
            .expect("log lock")
            .rpc_calls
            .push((self.chain_id, method.to_owned()));
        if method == "native_fail" {
            return Err(SdkError::new(-32015, "native failure"));
        }
        Ok(json!({ "method": method, "chainId": self.chain_id }))
    }
}

pub fn two_chains() -> Vec<ChainDescriptor> {
    vec![
        ChainDescriptor::with_rpc_url("1", "https://a"),
        ChainDescriptor::with_rpc_url("137", "https://b"),
    ]
}

pub fn owner_address() -> Address {
    "0x1000000000000000000000000000000000000001"
        .parse()
        .expect("valid owner address")
}
