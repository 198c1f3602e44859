use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of a `wallet_requestPermissions` parameter list, requesting the
/// `eth_accounts` capability.
///
/// See <https://eips.ethereum.org/EIPS/eip-2255>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRequest {
    pub eth_accounts: PermissionCaveats,
}

/// Caveats restricting a requested permission. The accounts permission is
/// requested unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionCaveats {}

impl PermissionRequest {
    /// The full parameter list for requesting account access.
    pub fn account_access() -> Value {
        serde_json::json!([Self::default()])
    }
}
