use serde::{Deserialize, Serialize};

pub const MAX_TRENDING_COINS: usize = 7;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrendingCoin {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    pub thumb: String,
}
