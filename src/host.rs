use std::sync::Arc;

use async_trait::async_trait;
use ethers::types::Address;
use serde_json::Value;

use crate::{chain::Chain, event::ConnectorEvent, provider::InjectedProvider, rpc::RpcError};

/// Key-value storage lent by the host framework. Values are JSON so hosts can
/// back this with web storage, a config file or anything in between.
pub trait ConnectorStorage {
    fn get_item(&self, key: &str) -> Option<Value>;
    fn set_item(&self, key: &str, value: Value);
}

/// Contract the surrounding connector framework fulfills.
///
/// The adapter stays free of account/chain RPC semantics and event plumbing;
/// it only drives the Gatewallet handshake on top of these capabilities. Every
/// method receives the provider resolved by discovery, so a host never has to
/// repeat the lookup.
#[async_trait(?Send)]
pub trait ConnectorHost {
    /// Currently authorized account, resolved without prompting.
    async fn account(&self, provider: Arc<dyn InjectedProvider>) -> Result<Address, RpcError>;

    /// Active chain id.
    async fn chain_id(&self, provider: Arc<dyn InjectedProvider>) -> Result<u64, RpcError>;

    /// Asks the wallet to switch (or add, then switch) to `chain_id`.
    async fn switch_chain(
        &self,
        provider: Arc<dyn InjectedProvider>,
        chain_id: u64,
    ) -> Result<Chain, RpcError>;

    /// Whether `error` means the user declined in the wallet UI. The default
    /// follows the EIP-1193 code; hosts override to match wallet quirks.
    fn is_user_rejection(&self, error: &RpcError) -> bool {
        error.is_user_rejection()
    }

    fn emit(&self, event: ConnectorEvent);

    fn storage(&self) -> Arc<dyn ConnectorStorage>;
}
