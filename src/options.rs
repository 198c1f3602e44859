use std::sync::Arc;

use crate::provider::{discover, InjectedProvider};

/// Display name for the connector: a fixed string, or a function deriving one
/// from the name detected on the provider.
#[derive(Clone)]
pub enum ConnectorName {
    Literal(String),
    Detected(Arc<dyn Fn(&str) -> String>),
}

impl ConnectorName {
    pub fn resolve(&self, detected: &str) -> String {
        match self {
            Self::Literal(name) => name.clone(),
            Self::Detected(derive) => derive(detected),
        }
    }
}

impl From<&str> for ConnectorName {
    fn from(name: &str) -> Self {
        Self::Literal(name.to_string())
    }
}

/// Yields the EIP-1193 provider to target, fresh on every call.
pub type ProviderLookup = Arc<dyn Fn() -> Option<Arc<dyn InjectedProvider>>>;

/// Connector configuration. `Default` carries the stock Gatewallet setup;
/// callers override single fields with struct update syntax:
///
/// ```
/// use gatewallet_connector::options::Options;
///
/// let options = Options { shim_disconnect: false, ..Options::default() };
/// ```
#[derive(Clone)]
pub struct Options {
    pub name: ConnectorName,
    /// Provider lookup. The default probes the `window.gatewallet` slot,
    /// aggregator-aware.
    pub get_provider: ProviderLookup,
    /// Simulates disconnect support by tracking connection status in host
    /// storage. Injected wallets cannot revoke authorization
    /// programmatically, so a "disconnected" wallet gets re-prompted instead.
    pub shim_disconnect: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            name: ConnectorName::from("Gatewallet"),
            get_provider: Arc::new(default_provider),
            shim_disconnect: true,
        }
    }
}

fn default_provider() -> Option<Arc<dyn InjectedProvider>> {
    discover(injected_slot())
}

#[cfg(target_arch = "wasm32")]
fn injected_slot() -> Option<Arc<dyn InjectedProvider>> {
    crate::eip1193::window_gatewallet()
}

/// Without a browser global there is nothing to discover.
#[cfg(not(target_arch = "wasm32"))]
fn injected_slot() -> Option<Arc<dyn InjectedProvider>> {
    None
}
