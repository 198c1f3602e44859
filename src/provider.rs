use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::rpc::RpcError;

/// Events an injected provider may deliver for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderEvent {
    AccountsChanged,
    ChainChanged,
    Disconnect,
}

impl ProviderEvent {
    /// Wire name passed to the provider's `on` registration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccountsChanged => "accountsChanged",
            Self::ChainChanged => "chainChanged",
            Self::Disconnect => "disconnect",
        }
    }
}

/// Listener for raw event payloads. Payload decoding is on the subscriber.
pub type EventListener = Arc<dyn Fn(Value)>;

/// Capability surface of a browser-injected EIP-1193 provider.
///
/// `?Send` throughout: injected providers live on the single-threaded page
/// context, and every `request` suspends until the wallet (usually the user)
/// answers.
#[async_trait(?Send)]
pub trait InjectedProvider {
    /// Submits a JSON-RPC style request and suspends until the wallet answers.
    async fn request(&self, method: &str, params: Option<Value>) -> Result<Value, RpcError>;

    /// Vendor flag distinguishing Gatewallet among injected providers.
    fn is_web3_wallet(&self) -> bool;

    /// Name the wallet advertises on its injected object, when it does.
    fn detected_name(&self) -> Option<String> {
        None
    }

    /// Whether the provider exposes `on` for event subscriptions.
    fn supports_subscriptions(&self) -> bool {
        false
    }

    /// Registers a listener. No-op when subscriptions are unsupported.
    fn on(&self, _event: ProviderEvent, _listener: EventListener) {}

    /// Aggregated sub-providers when the injected slot multiplexes several
    /// competing wallets.
    fn providers(&self) -> Option<Vec<Arc<dyn InjectedProvider>>> {
        None
    }
}

/// Picks the Gatewallet provider out of whatever occupies the injected slot.
///
/// A slot exposing `providers` is a multi-wallet aggregator; the first entry
/// flying the `isWeb3Wallet` flag wins and the slot object itself is ignored.
/// A bare provider qualifies only if it flies the flag itself.
pub fn discover(injected: Option<Arc<dyn InjectedProvider>>) -> Option<Arc<dyn InjectedProvider>> {
    let injected = injected?;
    match injected.providers() {
        Some(list) => list.into_iter().find(|candidate| candidate.is_web3_wallet()),
        None => injected.is_web3_wallet().then_some(injected),
    }
}
