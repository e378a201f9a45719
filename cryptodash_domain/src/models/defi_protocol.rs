use serde::{Deserialize, Serialize};

pub const MAX_DEFI_PROTOCOLS: usize = 10;

pub mod defaults {
    pub const CHAIN: &str = "Multi-Chain";
    pub const CATEGORY: &str = "DeFi";
    pub const CHANGE_1D: f64 = 0.0;
    pub const LOGO: &str = "";
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DefiProtocol {
    pub name: String,
    /// Total value locked, USD
    pub tvl: f64,
    pub chain: String,
    pub category: String,
    /// Percent change of TVL over one day
    pub change_1d: f64,
    pub logo: String,
}
