//! Property tests for the decision rule.

use proptest::prelude::*;

use rps_engine::core::{Choice, Outcome, Round};
use rps_engine::rules::GameEngine;

/// Strategy: any of the three choices.
fn choice_strategy() -> impl Strategy<Value = Choice> {
    prop::sample::select(Choice::ALL.to_vec())
}

proptest! {
    // 1. A choice against itself is a draw
    #[test]
    fn same_choice_draws(a in choice_strategy()) {
        prop_assert_eq!(GameEngine::determine_outcome(a, a), Outcome::Draw);
    }

    // 2. Swapping the choices swaps Win and Lose
    #[test]
    fn outcome_is_antisymmetric(a in choice_strategy(), b in choice_strategy()) {
        let forward = GameEngine::determine_outcome(a, b);
        let backward = GameEngine::determine_outcome(b, a);
        prop_assert_eq!(forward, backward.reversed());
    }

    // 3. Different choices never draw
    #[test]
    fn distinct_choices_decide(a in choice_strategy(), b in choice_strategy()) {
        prop_assume!(a != b);
        prop_assert_ne!(GameEngine::determine_outcome(a, b), Outcome::Draw);
    }

    // 4. Outcome is deterministic
    #[test]
    fn outcome_deterministic(a in choice_strategy(), b in choice_strategy()) {
        prop_assert_eq!(
            GameEngine::determine_outcome(a, b),
            GameEngine::determine_outcome(a, b)
        );
    }

    // 5. Win exactly when the beats-relation says so
    #[test]
    fn win_iff_beats(a in choice_strategy(), b in choice_strategy()) {
        let won = GameEngine::determine_outcome(a, b) == Outcome::Win;
        prop_assert_eq!(won, a.beats(b));
    }

    // 6. A seeded round agrees with the pure rule
    #[test]
    fn play_round_agrees_with_rule(seed in any::<u64>(), a in choice_strategy()) {
        let mut engine = GameEngine::seeded(seed);
        let result = engine.play(a);
        prop_assert_eq!(result.player_choice(), a);
        prop_assert_eq!(
            result.outcome,
            GameEngine::determine_outcome(a, result.system_choice())
        );
        prop_assert_eq!(Round::new(a, result.system_choice()), result.round);
    }

    // 7. Arbitrary labels either parse to a choice or are rejected
    #[test]
    fn labels_parse_or_reject(label in "\\PC{0,12}") {
        match label.parse::<Choice>() {
            Ok(choice) => {
                let normalized = label.trim().to_ascii_lowercase();
                prop_assert!(
                    normalized == choice.label() || normalized == &choice.label()[..1]
                );
            }
            Err(e) => prop_assert!(e.to_string().starts_with("invalid choice")),
        }
    }
}
