use cosmwasm_std::{coin, Addr};
use cw_multi_test::{App, Executor};
use raffle::msg::InstantiateMsg;
use utils::state::NATIVE_DENOM;

use super::{
    constants::{
        DRAW_TIMEOUT, ENTRANCE_FEE, NOIS_AMOUNT, OWNER_ADDR, RAFFLE_INTERVAL, RAFFLE_NAME,
    },
    contract_boxes::{contract_fake_nois, contract_raffle, custom_mock_app},
    msg::RaffleContracts,
    nois_proxy,
    setup_accounts_and_block::setup_block,
};

pub fn default_instantiate_msg(nois_proxy_addr: &Addr) -> InstantiateMsg {
    InstantiateMsg {
        name: RAFFLE_NAME.to_string(),
        owner: Some(OWNER_ADDR.to_string()),
        entrance_fee: coin(ENTRANCE_FEE, NATIVE_DENOM),
        interval: RAFFLE_INTERVAL,
        nois_proxy_addr: nois_proxy_addr.to_string(),
        nois_proxy_coin: coin(NOIS_AMOUNT, NATIVE_DENOM),
        randomness_delay: None,
        draw_timeout: Some(DRAW_TIMEOUT),
    }
}

pub fn instantiate_nois(app: &mut App) -> Addr {
    let nois_code_id = app.store_code(contract_fake_nois());
    app.instantiate_contract(
        nois_code_id,
        Addr::unchecked(OWNER_ADDR),
        &nois_proxy::InstantiateMsg {
            denom: NATIVE_DENOM.to_string(),
            amount: NOIS_AMOUNT,
        },
        &[],
        "nois",
        None,
    )
    .unwrap()
}

/// Builds an app with the nois mock and a raffle instantiated from `make_msg`
pub fn raffle_instantiate_with(
    make_msg: impl FnOnce(&Addr) -> InstantiateMsg,
) -> (App, RaffleContracts) {
    let mut app = custom_mock_app();
    setup_block(&mut app);

    let nois = instantiate_nois(&mut app);
    let raffle_code_id = app.store_code(contract_raffle());
    let raffle = app
        .instantiate_contract(
            raffle_code_id,
            Addr::unchecked(OWNER_ADDR),
            &make_msg(&nois),
            &[],
            "raffle",
            Some(OWNER_ADDR.to_string()),
        )
        .unwrap();

    (app, RaffleContracts { raffle, nois })
}

pub fn proper_raffle_instantiate() -> (App, RaffleContracts) {
    raffle_instantiate_with(default_instantiate_msg)
}
