//! Property tests over random decks and seeds.

use proptest::prelude::*;

use war_engine::{GamePhase, PreserveOrder, Side, WarConfig, WarSnapshot, WarGame};

/// Generous cap; random-shuffle games over these deck sizes finish far sooner.
const ROUND_LIMIT: u64 = 1_000_000;

fn decks() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    (
        prop::collection::vec(1u8..=13, 0..12),
        prop::collection::vec(1u8..=13, 0..12),
    )
        .prop_filter("at least one card", |(a, b)| !a.is_empty() || !b.is_empty())
}

proptest! {
    #[test]
    fn prop_terminates_with_one_consistent_outcome((a, b) in decks(), seed in any::<u64>()) {
        let total = a.len() + b.len();
        let mut game = WarConfig::new(a, b)
            .with_seed(seed)
            .with_round_limit(ROUND_LIMIT)
            .build()
            .unwrap();

        let outcome = game.run().unwrap();

        prop_assert_eq!(game.phase(), GamePhase::Finished(outcome));
        prop_assert!(game.deck(outcome.loser()).is_empty());
        prop_assert_eq!(game.deck(outcome.winner).len(), total);
        prop_assert!(game.pot().is_empty());
    }

    #[test]
    fn prop_cards_are_conserved((a, b) in decks(), seed in any::<u64>()) {
        let mut expected: Vec<u8> = a.iter().chain(&b).copied().collect();
        expected.sort_unstable();

        let mut game = WarConfig::new(a, b).with_seed(seed).build().unwrap();
        while !game.is_finished() && game.round() < ROUND_LIMIT {
            game.play_round().unwrap();

            let mut held: Vec<u8> = Side::ALL
                .iter()
                .flat_map(|&side| game.deck(side).to_vec())
                .chain(game.pot().iter().copied())
                .collect();
            held.sort_unstable();
            prop_assert_eq!(&held, &expected);
        }
    }

    #[test]
    fn prop_same_seed_same_game((a, b) in decks(), seed in any::<u64>()) {
        let play = |a: Vec<u8>, b: Vec<u8>| {
            let mut game = WarConfig::new(a, b)
                .with_seed(seed)
                .with_round_limit(ROUND_LIMIT)
                .with_history()
                .build()
                .unwrap();
            let outcome = game.run().unwrap();
            (outcome, game.history().to_vec(), game.snapshot())
        };

        prop_assert_eq!(play(a.clone(), b.clone()), play(a, b));
    }

    #[test]
    fn prop_snapshot_bytes_restore(
        (a, b) in decks(),
        seed in any::<u64>(),
        rounds in 0u64..20,
    ) {
        let mut game = WarConfig::new(a, b).with_seed(seed).build().unwrap();
        while !game.is_finished() && game.round() < rounds {
            game.play_round().unwrap();
        }

        let bytes = game.snapshot().to_bytes().unwrap();
        let restored: WarGame<u8> = WarGame::restore(WarSnapshot::from_bytes(&bytes).unwrap(), false).unwrap();
        prop_assert_eq!(restored.snapshot(), game.snapshot());
    }

    #[test]
    fn prop_single_round_takes_higher_card(x in 0u8..=100, y in 0u8..=100) {
        prop_assume!(x != y);
        let mut game = WarConfig::new(vec![x, 1], vec![y, 1])
            .build_with(PreserveOrder)
            .unwrap();

        game.play_round().unwrap();

        let winner = if x > y { Side::A } else { Side::B };
        prop_assert_eq!(game.deck(winner).len(), 3);
        prop_assert_eq!(game.deck(winner.opponent()).len(), 1);
    }
}
