#[cfg(test)]
mod tests {
    use cosmwasm_std::{coin, coins, Addr, Uint128};
    use cw_multi_test::Executor;
    use raffle::{
        error::ContractError,
        msg::{ExecuteMsg, QueryMsg},
        state::RaffleState,
    };
    use utils::{payment::PaymentError, state::NATIVE_DENOM};

    use crate::{
        common_setup::{
            constants::{ENTRANCE_FEE, NOIS_AMOUNT, RAFFLE_INTERVAL},
            helpers::{advance_time, assert_error},
            setup_accounts_and_block::{setup_accounts, setup_raffle_participants, INITIAL_BALANCE},
            setup_raffle::proper_raffle_instantiate,
        },
        raffle::setup::{
            execute_msg::{enter_players, enter_raffle, request_draw},
            helpers::{
                balance_of, event_attribute, fund_oracle_fee, number_of_players, players,
                raffle_state, round_info,
            },
        },
    };

    #[test]
    fn players_are_recorded_in_entry_order() {
        let (mut app, contracts) = proper_raffle_instantiate();
        setup_accounts(&mut app);
        let p = setup_raffle_participants(&mut app);

        let res = enter_raffle(&mut app, &contracts, &p.one, ENTRANCE_FEE).unwrap();
        assert_eq!(
            event_attribute(&res, "entered_raffle", "player"),
            Some(p.one.to_string())
        );
        enter_players(&mut app, &contracts, &[&p.two, &p.three]);
        // the same address can hold several tickets
        enter_players(&mut app, &contracts, &[&p.one]);

        assert_eq!(number_of_players(&app, &contracts), 4);
        assert_eq!(
            players(&app, &contracts),
            vec![
                p.one.to_string(),
                p.two.to_string(),
                p.three.to_string(),
                p.one.to_string()
            ]
        );
        let second: Addr = app
            .wrap()
            .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::Player { index: 1 })
            .unwrap();
        assert_eq!(second, p.two);

        // out of range
        let res: Result<Addr, _> = app
            .wrap()
            .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::Player { index: 4 });
        assert!(res.is_err());

        let round = round_info(&app, &contracts);
        assert_eq!(round.pool, Uint128::new(4 * ENTRANCE_FEE));
        assert_eq!(balance_of(&app, &contracts.raffle), 4 * ENTRANCE_FEE);
    }

    #[test]
    fn players_query_is_paginated() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let p = setup_raffle_participants(&mut app);
        enter_players(
            &mut app,
            &contracts,
            &[&p.one, &p.two, &p.three, &p.four, &p.five, &p.six],
        );

        let page: Vec<String> = app
            .wrap()
            .query_wasm_smart(
                contracts.raffle.clone(),
                &QueryMsg::Players {
                    start_after: Some(1),
                    limit: Some(3),
                },
            )
            .unwrap();
        assert_eq!(
            page,
            vec![p.three.to_string(), p.four.to_string(), p.five.to_string()]
        );
    }

    #[test]
    fn overpayment_goes_to_the_pool() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let p = setup_raffle_participants(&mut app);

        enter_raffle(&mut app, &contracts, &p.one, ENTRANCE_FEE + 9).unwrap();
        assert_eq!(
            round_info(&app, &contracts).pool,
            Uint128::new(ENTRANCE_FEE + 9)
        );
        assert_eq!(number_of_players(&app, &contracts), 1);
    }

    #[test]
    fn insufficient_fee_is_rejected() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let p = setup_raffle_participants(&mut app);

        let res = app.execute_contract(
            p.one.clone(),
            contracts.raffle.clone(),
            &ExecuteMsg::Enter {},
            &[],
        );
        assert_error(
            res,
            ContractError::InsufficientFee {
                required: coin(ENTRANCE_FEE, NATIVE_DENOM),
                sent: Uint128::zero(),
            }
            .to_string(),
        );
        assert_eq!(number_of_players(&app, &contracts), 0);
    }

    #[test]
    fn other_denoms_are_rejected() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let p = setup_raffle_participants(&mut app);
        app.sudo(cw_multi_test::SudoMsg::Bank(cw_multi_test::BankSudo::Mint {
            to_address: p.one.to_string(),
            amount: coins(100, "uatom"),
        }))
        .unwrap();

        let res = app.execute_contract(
            p.one.clone(),
            contracts.raffle.clone(),
            &ExecuteMsg::Enter {},
            &[coin(ENTRANCE_FEE, NATIVE_DENOM), coin(10, "uatom")],
        );
        assert_error(
            res,
            PaymentError::UnexpectedFunds {
                expected: NATIVE_DENOM.to_string(),
                received: "uatom".to_string(),
            }
            .to_string(),
        );
        assert_eq!(number_of_players(&app, &contracts), 0);
    }

    #[test]
    fn cannot_enter_while_calculating() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let p = setup_raffle_participants(&mut app);
        fund_oracle_fee(&mut app, &contracts, NOIS_AMOUNT);
        enter_players(&mut app, &contracts, &[&p.one, &p.two]);

        advance_time(&mut app, RAFFLE_INTERVAL);
        request_draw(&mut app, &contracts).unwrap();
        assert_eq!(raffle_state(&app, &contracts), RaffleState::Calculating);

        let res = enter_raffle(&mut app, &contracts, &p.three, ENTRANCE_FEE);
        assert_error(res, ContractError::RoundNotOpen {}.to_string());

        // the fee is checked before the state
        let res = app.execute_contract(
            p.three.clone(),
            contracts.raffle.clone(),
            &ExecuteMsg::Enter {},
            &[],
        );
        assert_error(
            res,
            ContractError::InsufficientFee {
                required: coin(ENTRANCE_FEE, NATIVE_DENOM),
                sent: Uint128::zero(),
            }
            .to_string(),
        );

        assert_eq!(number_of_players(&app, &contracts), 2);
        // rejected entries keep their funds
        assert_eq!(balance_of(&app, &p.three), INITIAL_BALANCE);
    }
}
