/// Methods this connector issues against the injected provider.
///
/// See <https://eips.ethereum.org/EIPS/eip-1102> and
/// <https://eips.ethereum.org/EIPS/eip-2255>
pub const ETH_REQUEST_ACCOUNTS: &str = "eth_requestAccounts";
pub const WALLET_REQUEST_PERMISSIONS: &str = "wallet_requestPermissions";

/// Methods a host framework typically issues when resolving connector state.
pub const ETH_ACCOUNTS: &str = "eth_accounts";
pub const ETH_CHAIN_ID: &str = "eth_chainId";
pub const WALLET_SWITCH_ETHEREUM_CHAIN: &str = "wallet_switchEthereumChain";

/// The user rejected the request in the wallet UI.
///
/// See <https://eips.ethereum.org/EIPS/eip-1193#provider-errors>
pub const CODE_USER_REJECTED_REQUEST: i64 = 4001;

/// Requested resource not found. Wallets without `wallet_requestPermissions`
/// answer permission requests with this.
pub const CODE_RESOURCE_NOT_FOUND: i64 = -32001;

/// Resource unavailable. Wallets reuse it for "a request is already pending".
///
/// See <https://eips.ethereum.org/EIPS/eip-1474#error-codes>
pub const CODE_RESOURCE_UNAVAILABLE: i64 = -32002;

pub const CODE_INVALID_PARAMS: i64 = -32602;
pub const CODE_METHOD_NOT_FOUND: i64 = -32601;
pub const CODE_INTERNAL_ERROR: i64 = -32603;
pub const CODE_PARSE_ERROR: i64 = -32700;
