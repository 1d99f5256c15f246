use serde::{Deserialize, Serialize};

/// Supplier roster entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub name: String,
    /// Year the supplier relationship started.
    pub active_since: u16,
}

impl Supplier {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            active_since: 2024,
        }
    }

    /// Product count displayed next to the supplier name.
    pub fn product_count(&self) -> u32 {
        roster_product_count(&self.name)
    }
}

/// Deterministic product count for a roster entry, stable across renders.
///
/// FNV-1a over the supplier name folded into `10..=59`, the same range the
/// annotation has always shown.
pub fn roster_product_count(name: &str) -> u32 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = FNV_OFFSET;
    for byte in name.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    10 + (hash % 50) as u32
}
