//! Presentation layer tests: taps in, rendered views out.

use rps_engine::core::{Choice, EngineError, Outcome};
use rps_engine::presentation::{outcome_message, Control, GestureImage, Presenter};
use rps_engine::rules::{GameEngine, ScriptedChoices};

/// Test every control against every system gesture.
#[test]
fn test_all_taps_render() {
    for control in [Control::RockButton, Control::PaperButton, Control::ScissorsButton] {
        let engine = GameEngine::with_source(ScriptedChoices::new(Choice::ALL));
        let mut presenter = Presenter::new(engine);

        for system in Choice::ALL {
            let view = presenter.tap(control).unwrap();
            let expected = GameEngine::determine_outcome(control.choice(), system);

            assert_eq!(view.system_image, GestureImage::of(system));
            assert_eq!(view.outcome, expected);
            assert_eq!(view.message, outcome_message(expected));
        }
    }
}

/// Test that the scissors button losing to rock shows the rock image.
#[test]
fn test_losing_tap() {
    let engine = GameEngine::with_source(ScriptedChoices::new([Choice::Rock]));
    let mut presenter = Presenter::new(engine);

    let view = presenter.tap(Control::ScissorsButton).unwrap();
    assert_eq!(view.system_image.resource(), "rock");
    assert_eq!(view.message, "You lose!");
}

/// Test that typed labels are validated at the boundary.
#[test]
fn test_typed_labels() {
    let engine = GameEngine::with_source(ScriptedChoices::new([Choice::Paper, Choice::Paper]));
    let mut presenter = Presenter::new(engine);

    assert!(matches!(
        presenter.submit("rocks"),
        Err(EngineError::InvalidChoice(_))
    ));

    let view = presenter.submit("SCISSORS").unwrap();
    assert_eq!(view.outcome, Outcome::Win);
    assert_eq!(view.message, "You win!");

    let view = presenter.submit("p").unwrap();
    assert_eq!(view.message, "It's a draw!");
}

/// Test a seeded presenter is reproducible.
#[test]
fn test_seeded_presenter() {
    let mut a = Presenter::new(GameEngine::seeded(12));
    let mut b = Presenter::new(GameEngine::seeded(12));

    for _ in 0..25 {
        assert_eq!(a.tap(Control::PaperButton), b.tap(Control::PaperButton));
    }
}
