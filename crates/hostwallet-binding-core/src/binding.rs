use std::sync::{Arc, RwLock, Weak};

use serde_json::Value;

use crate::domain::ChainDescriptor;
use crate::eip1193::{
    DispatchTable, ETH_GET_BALANCE, ETH_REQUEST_ACCOUNTS, ETH_SELECT_ACCOUNTS,
    WALLET_SWITCH_ETHEREUM_CHAIN,
};
use crate::errors::{ProviderRpcError, SDK_INTERNAL_ERROR};
use crate::events::{EventChannel, ProviderEventKind};
use crate::ports::{CustodyClient, CustodyClientFactory, NativeProvider};
use crate::provider::{ProviderShared, PublicProvider};
use crate::state_machine::switch_transition;
use crate::units::wei_to_eth;

/// Result of one `initialize` call: the session-stable provider plus the
/// initial client instance, mirroring what the aggregation framework expects
/// back from a wallet interface.
pub struct BindingSession {
    pub provider: PublicProvider,
    pub client: Arc<dyn CustodyClient>,
}

impl std::fmt::Debug for BindingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingSession")
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}

pub struct ProviderBinding;

impl ProviderBinding {
    pub fn initialize(
        api_key: &str,
        chains: Vec<ChainDescriptor>,
        factory: Arc<dyn CustodyClientFactory>,
    ) -> Result<BindingSession, ProviderRpcError> {
        let default_chain = chains
            .first()
            .ok_or_else(|| {
                ProviderRpcError::invalid_params("at least one chain must be configured")
            })?
            .clone();
        let options = default_chain.client_options()?;
        let client = factory.construct(api_key, &options)?;
        let client_cell = Arc::new(RwLock::new(Arc::clone(&client)));
        let events = EventChannel::new();

        let shared = Arc::new(ProviderShared {
            dispatch: RwLock::new(Arc::new(DispatchTable::new(client.native_provider()))),
            events: events.clone(),
            client: Arc::clone(&client_cell),
        });

        let ctx = Arc::new(RebindContext {
            api_key: api_key.to_owned(),
            chains,
            factory,
            client: client_cell,
            active_chain: RwLock::new(default_chain.id),
            events,
            provider: Arc::downgrade(&shared),
        });

        let table = build_dispatch_table(&ctx, client.native_provider());
        *shared
            .dispatch
            .write()
            .map_err(|e| ProviderRpcError::internal(format!("dispatch lock poisoned: {e}")))? =
            Arc::new(table);

        Ok(BindingSession {
            provider: PublicProvider { shared },
            client,
        })
    }
}

/// Everything a rebuilt dispatch table needs to capture. Holds only a weak
/// reference back to the provider interior, keeping the closure graph
/// cycle-free.
struct RebindContext {
    api_key: String,
    chains: Vec<ChainDescriptor>,
    factory: Arc<dyn CustodyClientFactory>,
    client: Arc<RwLock<Arc<dyn CustodyClient>>>,
    active_chain: RwLock<String>,
    events: EventChannel,
    provider: Weak<ProviderShared>,
}

impl RebindContext {
    fn current_client(&self) -> Result<Arc<dyn CustodyClient>, ProviderRpcError> {
        Ok(self
            .client
            .read()
            .map_err(|e| ProviderRpcError::internal(format!("client lock poisoned: {e}")))?
            .clone())
    }
}

fn build_dispatch_table(
    ctx: &Arc<RebindContext>,
    native: Arc<dyn NativeProvider>,
) -> DispatchTable {
    let login = Arc::clone(ctx);
    let balance = Arc::clone(ctx);
    let switcher = Arc::clone(ctx);
    DispatchTable::new(native)
        .with_handler(ETH_REQUEST_ACCOUNTS, move |_params| {
            request_accounts(&login)
        })
        .without_method(ETH_SELECT_ACCOUNTS)
        .with_handler(ETH_GET_BALANCE, move |_params| get_balance(&balance))
        .with_handler(WALLET_SWITCH_ETHEREUM_CHAIN, move |params| {
            switch_chain(&switcher, &params)
        })
}

fn request_accounts(ctx: &RebindContext) -> Result<Value, ProviderRpcError> {
    let client = ctx.current_client()?;
    match client.login() {
        Ok(accounts) => Ok(Value::Array(
            accounts
                .iter()
                .map(|account| Value::String(account.to_string()))
                .collect(),
        )),
        Err(error) if error.code == SDK_INTERNAL_ERROR => {
            Err(ProviderRpcError::account_access_rejected())
        }
        Err(error) => {
            // Compatibility: every other login failure resolves to an empty
            // account list.
            tracing::warn!(
                code = error.code,
                message = %error.message,
                "login failed, resolving with no accounts"
            );
            Ok(Value::Array(Vec::new()))
        }
    }
}

fn get_balance(ctx: &RebindContext) -> Result<Value, ProviderRpcError> {
    let client = ctx.current_client()?;
    let balances = client.balances()?;
    let display = match balances.first() {
        Some(entry) => {
            wei_to_eth(&entry.crypto_amount).map_err(|e| ProviderRpcError::internal(e.to_string()))?
        }
        None => "0".to_owned(),
    };
    Ok(Value::String(display))
}

fn switch_chain(ctx: &Arc<RebindContext>, params: &Value) -> Result<Value, ProviderRpcError> {
    let target = switch_target(params)?;
    let (descriptor, transition) = {
        let active = ctx
            .active_chain
            .read()
            .map_err(|e| ProviderRpcError::internal(format!("chain lock poisoned: {e}")))?
            .clone();
        let (descriptor, transition) = switch_transition(&active, &target, &ctx.chains)?;
        (descriptor.clone(), transition)
    };

    // The replacement client takes over by overwriting the cell; the old
    // instance drops with its last in-flight dispatch, no explicit teardown.
    let client = ctx.factory.construct(&ctx.api_key, &descriptor.client_options()?)?;
    let native = client.native_provider();
    {
        let mut current = ctx
            .client
            .write()
            .map_err(|e| ProviderRpcError::internal(format!("client lock poisoned: {e}")))?;
        *current = Arc::clone(&client);
    }
    {
        let mut active = ctx
            .active_chain
            .write()
            .map_err(|e| ProviderRpcError::internal(format!("chain lock poisoned: {e}")))?;
        *active = descriptor.id.clone();
    }
    tracing::info!(from = %transition.from, to = %transition.to, "switched active chain");

    // The event goes out before the table is repointed. Handlers read the
    // client cell at call time, so a listener that immediately issues a
    // request already reaches the replacement instance.
    ctx.events
        .emit(ProviderEventKind::ChainChanged, descriptor.id.clone())?;

    if let Some(shared) = ctx.provider.upgrade() {
        let table = build_dispatch_table(ctx, native);
        *shared
            .dispatch
            .write()
            .map_err(|e| ProviderRpcError::internal(format!("dispatch lock poisoned: {e}")))? =
            Arc::new(table);
    }

    Ok(Value::Null)
}

fn switch_target(params: &Value) -> Result<String, ProviderRpcError> {
    params
        .get(0)
        .and_then(|entry| entry.get("chainId"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| {
            ProviderRpcError::invalid_params(
                "wallet_switchEthereumChain expects params [{ \"chainId\": \"...\" }]",
            )
        })
}
