#[cfg(test)]
mod tests {
    use cosmwasm_std::{Addr, HexBinary, Uint128, Uint256};
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use raffle::state::RaffleState;

    use crate::{
        common_setup::{
            constants::{ENTRANCE_FEE, NOIS_AMOUNT, RAFFLE_INTERVAL},
            helpers::advance_time,
            setup_accounts_and_block::{setup_raffle_participants, INITIAL_BALANCE},
            setup_raffle::proper_raffle_instantiate,
        },
        raffle::setup::{
            execute_msg::{deliver_randomness, enter_raffle, request_draw},
            helpers::{
                balance_of, fund_oracle_fee, players, raffle_state, recent_winner, requested_job_id, round_info,
            },
        },
    };

    /// Random entries and randomness over several rounds.
    /// The winner is always the ticket at `randomness mod tickets`, it receives the whole pool
    /// and the raffle keeps no entry fees once the round is finalized.
    #[test]
    fn winner_and_payout_follow_the_randomness() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let (mut app, contracts) = proper_raffle_instantiate();
        let p = setup_raffle_participants(&mut app);
        let accounts = [&p.one, &p.two, &p.three, &p.four, &p.five, &p.six];

        for round_id in 0..8u64 {
            fund_oracle_fee(&mut app, &contracts, NOIS_AMOUNT);

            let tickets = rng.gen_range(1..=12usize);
            let mut expected_pool = 0u128;
            for _ in 0..tickets {
                let player = accounts[rng.gen_range(0..accounts.len())];
                let paid = ENTRANCE_FEE + rng.gen_range(0..3u128);
                enter_raffle(&mut app, &contracts, player, paid).unwrap();
                expected_pool += paid;
            }
            assert_eq!(round_info(&app, &contracts).pool, Uint128::new(expected_pool));
            let entered = players(&app, &contracts);
            assert_eq!(entered.len(), tickets);

            advance_time(&mut app, RAFFLE_INTERVAL + rng.gen_range(0..50));
            let job_id = requested_job_id(&request_draw(&mut app, &contracts).unwrap());
            assert_eq!(job_id, format!("raffle-{round_id}-0"));

            let randomness: [u8; 32] = rng.gen();
            let expected_index = Uint256::from_be_bytes(randomness) % Uint256::from(tickets as u64);
            let expected_winner = &entered[expected_index.to_string().parse::<usize>().unwrap()];
            let winner_before = balance_of(&app, &Addr::unchecked(expected_winner));

            deliver_randomness(
                &mut app,
                &contracts,
                &job_id,
                HexBinary::from(randomness.to_vec()),
            )
            .unwrap();

            let winner = recent_winner(&app, &contracts).unwrap();
            assert_eq!(winner.as_str(), expected_winner);
            assert_eq!(balance_of(&app, &winner), winner_before + expected_pool);
            assert_eq!(balance_of(&app, &contracts.raffle), 0);
            assert_eq!(raffle_state(&app, &contracts), RaffleState::Open);
            assert!(players(&app, &contracts).is_empty());
        }

        // every entry fee ended in some winner's balance
        let total: u128 = accounts.iter().map(|a| balance_of(&app, a)).sum();
        assert_eq!(total, INITIAL_BALANCE * accounts.len() as u128);
    }
}
