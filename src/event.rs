use ethers::types::Address;

/// Session events the connector hands to its host for fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectorEvent {
    Connecting,
    AccountsChanged(Vec<Address>),
    ChainChanged(u64),
    Disconnected,
}
