use serde_json::Value;

/// Decodes a chain id from a provider event payload. `chainChanged` delivers a
/// `"0x..."` hex quantity per EIP-1193, but wallets in the wild also send
/// decimal strings and bare numbers.
pub fn chain_id_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::String(raw) => match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
            Some(hex) => u64::from_str_radix(hex, 16).ok(),
            None => raw.parse().ok(),
        },
        Value::Number(number) => number.as_u64(),
        _ => None,
    }
}
