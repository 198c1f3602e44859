pub mod chain;
pub mod event;
pub mod host;
pub mod options;
pub mod provider;
pub mod rpc;
pub mod serde_helpers;

#[cfg(target_arch = "wasm32")]
pub mod eip1193;

use std::sync::Arc;

use ethers::types::Address;
use log::debug;
use serde_json::Value;

pub use self::{
    chain::{Chain, ChainStatus},
    event::ConnectorEvent,
    host::{ConnectorHost, ConnectorStorage},
    options::{ConnectorName, Options},
    provider::{discover, EventListener, InjectedProvider, ProviderEvent},
    rpc::RpcError,
};

use self::{
    rpc::{PermissionRequest, ETH_REQUEST_ACCOUNTS, WALLET_REQUEST_PERMISSIONS},
    serde_helpers::chain_id_from_value,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No Gatewallet provider occupies the injected slot.
    #[error("Connector not found")]
    ConnectorNotFound,

    #[error("User rejected the request")]
    UserRejected,

    /// A request is already pending in the wallet, or the wallet lacks the
    /// requested resource.
    #[error("Resource unavailable or request already pending")]
    ResourceUnavailable,

    /// The provider answered with something outside the wire contract.
    #[error("Bad response")]
    BadResponse,

    #[error("Invalid account address: {0}")]
    InvalidAddress(String),

    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error(transparent)]
    CorruptedPayload(#[from] serde_json::Error),
}

/// Result of a successful connect. Built fresh on every call; any caching is
/// on the host.
#[derive(Clone)]
pub struct Connection {
    pub account: Address,
    pub chain: ChainStatus,
    pub provider: Arc<dyn InjectedProvider>,
}

impl Connection {
    /// Account rendered in EIP-55 checksummed form.
    pub fn account_checksummed(&self) -> String {
        ethers::utils::to_checksum(&self.account, None)
    }
}

// Manual impl: the provider handle is an opaque trait object.
impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("account", &self.account)
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}

/// Connector for the Gatewallet browser extension.
///
/// A thin specialization of the injected-provider connect flow: it locates
/// the wallet on the page, runs the authorization handshake and reports the
/// resulting account and chain. Chain switching, account and chain
/// resolution, storage and event fan-out come from the injected
/// [`ConnectorHost`].
pub struct GatewalletConnector {
    chains: Vec<Chain>,
    options: Options,
    shim_disconnect_key: String,
    host: Arc<dyn ConnectorHost>,
}

impl GatewalletConnector {
    /// Identifier registered with the connector framework.
    pub const ID: &'static str = "gatewallet";

    /// No I/O happens here; discovery runs lazily once a provider is needed.
    pub fn new(
        host: Arc<dyn ConnectorHost>,
        chains: Option<Vec<Chain>>,
        options: Option<Options>,
    ) -> Self {
        let chains = match chains {
            Some(chains) if !chains.is_empty() => chains,
            _ => vec![Chain::mainnet()],
        };
        Self {
            chains,
            options: options.unwrap_or_default(),
            shim_disconnect_key: format!("{}.shimDisconnect", Self::ID),
            host,
        }
    }

    pub fn id(&self) -> &'static str {
        Self::ID
    }

    /// Display name, resolved against whatever name the discovered provider
    /// advertises (falling back to the stock name when it advertises none).
    pub fn name(&self) -> String {
        let detected = self
            .get_provider()
            .and_then(|provider| provider.detected_name())
            .unwrap_or_else(|| "Gatewallet".to_string());
        self.options.name.resolve(&detected)
    }

    /// Whether discovery currently yields a provider.
    pub fn ready(&self) -> bool {
        self.get_provider().is_some()
    }

    pub fn get_provider(&self) -> Option<Arc<dyn InjectedProvider>> {
        (self.options.get_provider)()
    }

    /// True when `chain_id` falls outside the configured chain list.
    pub fn is_chain_unsupported(&self, chain_id: u64) -> bool {
        !self.chains.iter().any(|chain| chain.id == chain_id)
    }

    /// Runs the authorization handshake against the injected wallet.
    ///
    /// When `chain_id` is given and differs from the wallet's current chain,
    /// a switch is requested once the account is resolved. Errors escaping
    /// the handshake get one normalization pass: user rejections and
    /// already-pending requests surface as their uniform variants, everything
    /// else unchanged.
    pub async fn connect(&self, chain_id: Option<u64>) -> Result<Connection, Error> {
        self.try_connect(chain_id).await.map_err(|error| self.normalize(error))
    }

    async fn try_connect(&self, target_chain: Option<u64>) -> Result<Connection, Error> {
        let provider = self.get_provider().ok_or(Error::ConnectorNotFound)?;

        if provider.supports_subscriptions() {
            self.subscribe_session_events(&provider);
        }
        self.host.emit(ConnectorEvent::Connecting);

        // With the shim active and the flag still unset this looks like a
        // fresh or simulated-disconnected session. If the wallet silently
        // reports an account anyway, it still holds an authorization the app
        // treats as revoked; re-prompt so the user can pick an account.
        let mut account = None;
        if self.options.shim_disconnect && !self.shim_flag() {
            account = self.host.account(provider.clone()).await.ok();
            if account.is_some() {
                if let Some(chosen) = self.reauthorize(&provider).await? {
                    account = Some(chosen);
                }
            }
        }

        let account = match account {
            Some(account) => account,
            None => self.request_account(&provider).await?,
        };

        let mut id = self.host.chain_id(provider.clone()).await?;
        let mut unsupported = self.is_chain_unsupported(id);
        if let Some(target) = target_chain {
            if target != id {
                let chain = self.host.switch_chain(provider.clone(), target).await?;
                id = chain.id;
                unsupported = self.is_chain_unsupported(id);
            }
        }

        if self.options.shim_disconnect {
            self.host.storage().set_item(&self.shim_disconnect_key, Value::Bool(true));
        }

        Ok(Connection { account, chain: ChainStatus { id, unsupported }, provider })
    }

    /// Asks the wallet to rerun account selection even though it already
    /// holds an authorization, then re-reads the account (the user may have
    /// picked a different one). Returns `None` when the failure is one the
    /// flow recovers from by falling back to a plain account request.
    async fn reauthorize(
        &self,
        provider: &Arc<dyn InjectedProvider>,
    ) -> Result<Option<Address>, Error> {
        match self.request_permissions(provider).await {
            Ok(account) => Ok(Some(account)),
            Err(error) if self.host.is_user_rejection(&error) => Err(Error::UserRejected),
            Err(error) if error.is_resource_not_found() => Err(Error::Rpc(error)),
            Err(error) => {
                debug!("wallet_requestPermissions failed, falling back: {error}");
                Ok(None)
            }
        }
    }

    async fn request_permissions(
        &self,
        provider: &Arc<dyn InjectedProvider>,
    ) -> Result<Address, RpcError> {
        provider
            .request(WALLET_REQUEST_PERMISSIONS, Some(PermissionRequest::account_access()))
            .await?;
        self.host.account(provider.clone()).await
    }

    async fn request_account(
        &self,
        provider: &Arc<dyn InjectedProvider>,
    ) -> Result<Address, Error> {
        let accounts = provider.request(ETH_REQUEST_ACCOUNTS, None).await?;
        let accounts: Vec<String> = serde_json::from_value(accounts)?;
        let first = accounts.first().ok_or(Error::BadResponse)?;
        first.parse().map_err(|_| Error::InvalidAddress(first.clone()))
    }

    /// Wires the provider's live events into the host for the rest of the
    /// session. Malformed payloads are dropped.
    fn subscribe_session_events(&self, provider: &Arc<dyn InjectedProvider>) {
        let host = self.host.clone();
        provider.on(
            ProviderEvent::AccountsChanged,
            Arc::new(move |payload| match serde_json::from_value::<Vec<String>>(payload) {
                Ok(accounts) => {
                    let accounts = accounts.iter().filter_map(|raw| raw.parse().ok()).collect();
                    host.emit(ConnectorEvent::AccountsChanged(accounts));
                }
                Err(error) => debug!("dropping malformed accountsChanged payload: {error}"),
            }),
        );

        let host = self.host.clone();
        provider.on(
            ProviderEvent::ChainChanged,
            Arc::new(move |payload| match chain_id_from_value(&payload) {
                Some(id) => host.emit(ConnectorEvent::ChainChanged(id)),
                None => debug!("dropping malformed chainChanged payload: {payload}"),
            }),
        );

        let host = self.host.clone();
        provider
            .on(ProviderEvent::Disconnect, Arc::new(move |_| host.emit(ConnectorEvent::Disconnected)));
    }

    fn shim_flag(&self) -> bool {
        matches!(
            self.host.storage().get_item(&self.shim_disconnect_key),
            Some(Value::Bool(true))
        )
    }

    /// Final classification pass before an error reaches the caller.
    fn normalize(&self, error: Error) -> Error {
        match error {
            Error::Rpc(error) if self.host.is_user_rejection(&error) => Error::UserRejected,
            Error::Rpc(error) if error.is_pending() => Error::ResourceUnavailable,
            other => other,
        }
    }
}
