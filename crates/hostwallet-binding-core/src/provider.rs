use std::fmt;
use std::sync::{Arc, RwLock};

use serde_json::Value;

use crate::domain::{JsonRpcRequest, JsonRpcResponse};
use crate::eip1193::DispatchTable;
use crate::errors::ProviderRpcError;
use crate::events::{EventChannel, ProviderEvent, ProviderEventKind};
use crate::ports::CustodyClient;

/// The provider handed to the aggregation framework. Clones share one
/// interior: repointing the dispatch table is observed by every holder,
/// while the handle identity never changes for the session.
#[derive(Clone)]
pub struct PublicProvider {
    pub(crate) shared: Arc<ProviderShared>,
}

pub(crate) struct ProviderShared {
    pub(crate) dispatch: RwLock<Arc<DispatchTable>>,
    pub(crate) events: EventChannel,
    pub(crate) client: Arc<RwLock<Arc<dyn CustodyClient>>>,
}

impl fmt::Debug for PublicProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicProvider").finish_non_exhaustive()
    }
}

impl PublicProvider {
    pub fn request(&self, method: &str, params: Value) -> Result<Value, ProviderRpcError> {
        let table = self
            .shared
            .dispatch
            .read()
            .map_err(|e| ProviderRpcError::internal(format!("dispatch lock poisoned: {e}")))?
            .clone();
        table.dispatch(method, params)
    }

    /// Legacy alias kept for callers still on the pre-standard surface.
    pub fn send(&self, method: &str, params: Value) -> Result<Value, ProviderRpcError> {
        self.request(method, params)
    }

    /// Legacy envelope dispatch: echoes the request id and carries failures
    /// in the JSON-RPC error object instead of an Err.
    pub fn send_async(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let JsonRpcRequest {
            id, method, params, ..
        } = request;
        match self.request(&method, params) {
            Ok(result) => JsonRpcResponse {
                jsonrpc: "2.0".to_owned(),
                id,
                result: Some(result),
                error: None,
            },
            Err(error) => JsonRpcResponse {
                jsonrpc: "2.0".to_owned(),
                id,
                result: None,
                error: Some(error),
            },
        }
    }

    pub fn on(
        &self,
        kind: ProviderEventKind,
        callback: impl Fn(&ProviderEvent) + Send + Sync + 'static,
    ) -> Result<(), ProviderRpcError> {
        self.shared.events.subscribe(kind, callback)
    }

    /// Logs out of the client that is current at the time of invocation.
    pub fn disconnect(&self) -> Result<(), ProviderRpcError> {
        let client = self
            .shared
            .client
            .read()
            .map_err(|e| ProviderRpcError::internal(format!("client lock poisoned: {e}")))?
            .clone();
        client.logout().map_err(Into::into)
    }
}
