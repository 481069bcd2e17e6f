use std::fmt;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::errors::ProviderRpcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderEventKind {
    AccountsChanged,
    ChainChanged,
    Disconnect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEvent {
    pub sequence: u64,
    pub kind: ProviderEventKind,
    pub value: String,
}

type EventCallback = Arc<dyn Fn(&ProviderEvent) + Send + Sync>;

/// Shared emitter for one binding session. Created once, never replaced.
#[derive(Clone, Default)]
pub struct EventChannel {
    inner: Arc<Mutex<ChannelState>>,
}

#[derive(Default)]
struct ChannelState {
    event_seq: u64,
    listeners: Vec<(ProviderEventKind, EventCallback)>,
}

impl fmt::Debug for EventChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventChannel").finish_non_exhaustive()
    }
}

impl EventChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &self,
        kind: ProviderEventKind,
        callback: impl Fn(&ProviderEvent) + Send + Sync + 'static,
    ) -> Result<(), ProviderRpcError> {
        let mut g = self
            .inner
            .lock()
            .map_err(|e| ProviderRpcError::internal(format!("event channel lock poisoned: {e}")))?;
        g.listeners.push((kind, Arc::new(callback)));
        Ok(())
    }

    pub fn emit(
        &self,
        kind: ProviderEventKind,
        value: impl Into<String>,
    ) -> Result<ProviderEvent, ProviderRpcError> {
        let (event, targets) = {
            let mut g = self.inner.lock().map_err(|e| {
                ProviderRpcError::internal(format!("event channel lock poisoned: {e}"))
            })?;
            g.event_seq = g.event_seq.saturating_add(1);
            let event = ProviderEvent {
                sequence: g.event_seq,
                kind,
                value: value.into(),
            };
            let targets: Vec<EventCallback> = g
                .listeners
                .iter()
                .filter(|(listener_kind, _)| *listener_kind == kind)
                .map(|(_, callback)| Arc::clone(callback))
                .collect();
            (event, targets)
        };
        // Callbacks run outside the lock so a listener may re-enter the provider.
        for callback in targets {
            callback(&event);
        }
        Ok(event)
    }
}
