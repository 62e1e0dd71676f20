use anyhow::Error;
use cosmwasm_std::Timestamp;
use cw_multi_test::{App, AppResponse};

pub fn setup_block_time(router: &mut App, nanos: u64, height: Option<u64>) {
    let mut block = router.block_info();
    block.time = Timestamp::from_nanos(nanos);
    if let Some(h) = height {
        block.height = h;
    }
    router.set_block(block);
}

/// Moves the chain forward by `seconds`, one block every five seconds
pub fn advance_time(router: &mut App, seconds: u64) {
    let block = router.block_info();
    setup_block_time(
        router,
        block.time.plus_seconds(seconds).nanos(),
        Some(block.height + seconds / 5 + 1),
    );
}

pub fn assert_error(res: Result<AppResponse, Error>, expected: String) {
    assert_eq!(res.unwrap_err().root_cause().to_string(), expected);
}
