use crate::domain::ChainDescriptor;
use crate::errors::ProviderRpcError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainTransition {
    pub from: String,
    pub to: String,
}

/// Resolves a switch request against the configured chain list. A target
/// equal to the active chain is a legal transition and still reconstructs
/// the client.
pub fn switch_transition<'a>(
    active: &str,
    target: &str,
    configured: &'a [ChainDescriptor],
) -> Result<(&'a ChainDescriptor, ChainTransition), ProviderRpcError> {
    let descriptor = configured
        .iter()
        .find(|chain| chain.id == target)
        .ok_or_else(|| {
            ProviderRpcError::invalid_params(format!(
                "chain {target} is not configured for this session"
            ))
        })?;
    Ok((
        descriptor,
        ChainTransition {
            from: active.to_owned(),
            to: descriptor.id.clone(),
        },
    ))
}
