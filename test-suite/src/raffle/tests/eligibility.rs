#[cfg(test)]
mod tests {
    use cosmwasm_std::Uint128;

    use crate::{
        common_setup::{
            constants::{ENTRANCE_FEE, NOIS_AMOUNT, RAFFLE_INTERVAL},
            helpers::{advance_time, assert_error, setup_block_time},
            setup_accounts_and_block::setup_raffle_participants,
            setup_raffle::proper_raffle_instantiate,
        },
        raffle::setup::{
            execute_msg::{deliver_randomness, enter_players, request_draw},
            helpers::{
                check_upkeep, fund_oracle_fee, randomness_from, requested_job_id, round_info,
            },
        },
    };
    use raffle::{error::ContractError, state::RaffleState};

    #[test]
    fn not_needed_without_players() {
        let (mut app, contracts) = proper_raffle_instantiate();
        // funds sent outside of an entry don't make the round eligible
        fund_oracle_fee(&mut app, &contracts, NOIS_AMOUNT);
        advance_time(&mut app, RAFFLE_INTERVAL * 3);

        let upkeep = check_upkeep(&app, &contracts);
        assert!(!upkeep.upkeep_needed);
        assert!(upkeep.time_passed);
        assert!(upkeep.is_open);
        assert!(!upkeep.has_players);
        assert!(!upkeep.has_balance);
    }

    #[test]
    fn needed_exactly_when_the_interval_elapsed() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let p = setup_raffle_participants(&mut app);
        enter_players(&mut app, &contracts, &[&p.one, &p.two]);

        let upkeep = check_upkeep(&app, &contracts);
        assert!(!upkeep.upkeep_needed);
        assert!(upkeep.has_players);
        assert!(upkeep.has_balance);
        assert_eq!(upkeep.balance, Uint128::new(2 * ENTRANCE_FEE));
        assert_eq!(upkeep.number_of_players, 2);

        advance_time(&mut app, RAFFLE_INTERVAL - 1);
        let upkeep = check_upkeep(&app, &contracts);
        assert!(!upkeep.upkeep_needed);
        assert_eq!(upkeep.elapsed, RAFFLE_INTERVAL - 1);
        assert_eq!(upkeep.seconds_until_eligible, 1);

        advance_time(&mut app, 1);
        let upkeep = check_upkeep(&app, &contracts);
        assert!(upkeep.upkeep_needed);
        assert_eq!(upkeep.seconds_until_eligible, 0);
    }

    #[test]
    fn not_needed_while_calculating() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let p = setup_raffle_participants(&mut app);
        fund_oracle_fee(&mut app, &contracts, NOIS_AMOUNT);
        enter_players(&mut app, &contracts, &[&p.one]);
        advance_time(&mut app, RAFFLE_INTERVAL);
        request_draw(&mut app, &contracts).unwrap();

        let upkeep = check_upkeep(&app, &contracts);
        assert!(!upkeep.upkeep_needed);
        assert!(!upkeep.is_open);
        assert_eq!(upkeep.state, RaffleState::Calculating);
        // the predicate is a pure read
        assert_eq!(check_upkeep(&app, &contracts), upkeep);
    }

    #[test]
    fn sub_second_round_start_agrees_with_request_draw() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let p = setup_raffle_participants(&mut app);
        fund_oracle_fee(&mut app, &contracts, 2 * NOIS_AMOUNT);
        enter_players(&mut app, &contracts, &[&p.one]);
        advance_time(&mut app, RAFFLE_INTERVAL);
        let job_id = requested_job_id(&request_draw(&mut app, &contracts).unwrap());

        // the next round starts 0.9 seconds into a second
        let now = app.block_info().time;
        setup_block_time(&mut app, now.plus_nanos(900_000_000).nanos(), None);
        deliver_randomness(&mut app, &contracts, &job_id, randomness_from(0)).unwrap();
        let round_start = round_info(&app, &contracts).round_start;
        assert_eq!(round_start.subsec_nanos(), 900_000_000);
        enter_players(&mut app, &contracts, &[&p.two]);

        // 99.2 seconds into the round
        setup_block_time(
            &mut app,
            round_start
                .plus_seconds(RAFFLE_INTERVAL - 1)
                .plus_nanos(200_000_000)
                .nanos(),
            None,
        );
        let upkeep = check_upkeep(&app, &contracts);
        assert!(!upkeep.time_passed);
        assert!(!upkeep.upkeep_needed);
        assert_eq!(upkeep.elapsed, RAFFLE_INTERVAL - 1);
        assert_eq!(upkeep.seconds_until_eligible, 1);
        assert_error(
            request_draw(&mut app, &contracts),
            ContractError::UpkeepNotNeeded {
                balance: Uint128::new(ENTRANCE_FEE),
                players: 1,
                state: RaffleState::Open,
            }
            .to_string(),
        );

        setup_block_time(
            &mut app,
            round_start.plus_seconds(RAFFLE_INTERVAL).nanos(),
            None,
        );
        assert!(check_upkeep(&app, &contracts).upkeep_needed);
        request_draw(&mut app, &contracts).unwrap();
    }
}
