pub mod binding;
pub mod domain;
pub mod eip1193;
pub mod errors;
pub mod events;
pub mod ports;
pub mod provider;
pub mod state_machine;
pub mod units;

pub use binding::{BindingSession, ProviderBinding};
pub use domain::{
    parse_chain_id, BalanceEntry, ChainDescriptor, ClientOptions, JsonRpcRequest, JsonRpcResponse,
};
pub use eip1193::{DispatchTable, MethodBinding, MethodHandler};
pub use errors::{ProviderRpcError, ProviderRpcErrorCode, SdkError, SDK_INTERNAL_ERROR};
pub use events::{EventChannel, ProviderEvent, ProviderEventKind};
pub use ports::{CustodyClient, CustodyClientFactory, NativeProvider};
pub use provider::PublicProvider;
pub use state_machine::{switch_transition, ChainTransition};
pub use units::{wei_to_eth, UnitConversionError};
