//! Property tests for target generation and the transition rules.

use proptest::prelude::*;
use star_match::{
    admissible_sums, is_achievable, pick_target, GameEngine, GameRng, GameState, GameStatus,
    PoolBounds,
};

/// Valid pool bounds, including signed and single-number pools.
fn bounds() -> impl Strategy<Value = (i64, i64)> {
    (-8i64..=8, 0i64..10).prop_map(|(min, span)| (min, min + span))
}

proptest! {
    #[test]
    fn proptest_new_game_target_is_achievable((min, max) in bounds(), seed in any::<u64>()) {
        let mut engine = GameEngine::new(GameRng::new(seed));
        let state = engine.new_game(min, max).unwrap();
        let pool: Vec<i64> = (min..=max).collect();

        let target = state.target().unwrap();
        prop_assert!(target <= max);
        prop_assert!(is_achievable(&pool, target));
        prop_assert_eq!(state.status(), GameStatus::Active);
    }

    #[test]
    fn proptest_pick_target_is_admissible(
        pool in prop::collection::btree_set(-6i64..=10, 1..8),
        seed in any::<u64>(),
    ) {
        let pool: Vec<i64> = pool.into_iter().collect();
        let bound = 10;
        let mut rng = GameRng::new(seed);

        let target = pick_target(&pool, bound, &mut rng).unwrap();
        prop_assert!(admissible_sums(&pool, bound).contains(&target));
        prop_assert!(is_achievable(&pool, target));
    }

    #[test]
    fn proptest_toggle_twice_is_identity(
        (min, max) in bounds(),
        seed in any::<u64>(),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut engine = GameEngine::new(GameRng::new(seed));
        let state = engine.new_game(min, max).unwrap();
        let numbers: Vec<i64> = (min..=max).collect();
        let number = numbers[pick.index(numbers.len())];

        let once = engine.toggle_number(&state, number);
        // Only meaningful when the single toggle did not commit
        prop_assume!(once.available() == state.available());

        let twice = engine.toggle_number(&once, number);
        prop_assert_eq!(twice.candidates(), state.candidates());
        prop_assert_eq!(twice, state);
    }

    #[test]
    fn proptest_commit_retires_exactly_the_selection(
        (min, max) in bounds(),
        seed in any::<u64>(),
    ) {
        let mut engine = GameEngine::new(GameRng::new(seed));
        let mut state = engine.new_game(min, max).unwrap();

        while let Some(hint) = state.hint() {
            let before: Vec<i64> = state.available().iter().copied().collect();
            let mut selected = Vec::new();
            for n in hint {
                state = engine.toggle_number(&state, n);
                selected.push(n);
                if state.available().len() < before.len() {
                    break;
                }
            }

            prop_assert!(state.candidates().is_empty());
            let expected: Vec<i64> = before
                .iter()
                .copied()
                .filter(|n| !selected.contains(n))
                .collect();
            let after: Vec<i64> = state.available().iter().copied().collect();
            prop_assert_eq!(&after, &expected);

            if let Some(target) = state.target() {
                prop_assert!(target <= max);
                prop_assert!(is_achievable(&expected, target));
            }
        }

        prop_assert_eq!(state.status(), GameStatus::Won);
    }

    #[test]
    fn proptest_status_exclusive(
        available in prop::collection::btree_set(1i64..=10, 0..10),
        seconds in prop::option::of(0u32..3),
    ) {
        // Any single available number is a reachable target
        let target = available.iter().next().copied().unwrap_or(1);
        let state = GameState::from_parts(
            PoolBounds::new(1, 10),
            available.iter().copied(),
            [0i64; 0],
            target,
            seconds,
        )
        .unwrap();

        let won = state.status() == GameStatus::Won;
        let lost = state.status() == GameStatus::Lost;
        prop_assert_eq!(won, available.is_empty());
        prop_assert_eq!(lost, seconds == Some(0) && !available.is_empty());
        prop_assert!(!(won && lost));
    }

    #[test]
    fn proptest_tick_idempotent_after_end(
        seed in any::<u64>(),
        seconds in 0u32..4,
        extra in 1usize..10,
    ) {
        let mut engine = GameEngine::new(GameRng::new(seed));
        let state = engine.new_game(1, 10).unwrap();
        let mut state = engine.start_timer(&state, Some(seconds));

        for _ in 0..seconds {
            state = engine.tick(&state);
        }
        prop_assert_eq!(state.status(), GameStatus::Lost);

        let ended = state.clone();
        for _ in 0..extra {
            state = engine.tick(&state);
        }
        prop_assert_eq!(state, ended);
    }
}
