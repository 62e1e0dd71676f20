pub const OWNER_ADDR: &str = "owner";
pub const RAFFLE_NAME: &str = "raffle param name";
pub const KEEPER_ADDR: &str = "keeper";

pub const ENTRANCE_FEE: u128 = 1;
pub const RAFFLE_INTERVAL: u64 = 100;
pub const NOIS_AMOUNT: u128 = 50;
pub const DRAW_TIMEOUT: u64 = 3_600;

/// 2022-03-11T21:00:00Z
pub const GENESIS_TIME: u64 = 1_647_032_400_000_000_000;
