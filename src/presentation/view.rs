//! Presentation-layer mapping: controls in, image and message out.
//!
//! The engine owns no view state. This module is the narrow adapter a UI
//! sits on: it maps the three on-screen controls to choices, each choice
//! to a gesture image, and each outcome to the text shown to the player.

use serde::{Deserialize, Serialize};
use strum::EnumIter;
use tracing::info;

use crate::core::{Choice, Outcome, Result};
use crate::rules::{ChoiceSource, GameEngine, RoundResult, UniformChoice};

/// The three on-screen controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum Control {
    RockButton,
    PaperButton,
    ScissorsButton,
}

impl Control {
    /// The choice this control plays.
    #[must_use]
    pub const fn choice(self) -> Choice {
        match self {
            Control::RockButton => Choice::Rock,
            Control::PaperButton => Choice::Paper,
            Control::ScissorsButton => Choice::Scissors,
        }
    }

    /// The control that plays `choice`.
    #[must_use]
    pub const fn for_choice(choice: Choice) -> Control {
        match choice {
            Choice::Rock => Control::RockButton,
            Choice::Paper => Control::PaperButton,
            Choice::Scissors => Control::ScissorsButton,
        }
    }
}

/// Image resource identifier for a gesture.
///
/// Every choice has an image; there is no empty fallback resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GestureImage(&'static str);

impl GestureImage {
    /// Image for a choice.
    #[must_use]
    pub const fn of(choice: Choice) -> Self {
        Self(choice.label())
    }

    /// Resource name (`rock`, `paper`, `scissors`).
    #[must_use]
    pub const fn resource(self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for GestureImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Text shown for an outcome.
#[must_use]
pub const fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Draw => "It's a draw!",
        Outcome::Win => "You win!",
        Outcome::Lose => "You lose!",
    }
}

/// Everything the screen renders after a tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RoundView {
    /// The system's gesture.
    pub system_image: GestureImage,
    /// Result text.
    pub message: &'static str,
    /// Result for styling.
    pub outcome: Outcome,
}

impl From<RoundResult> for RoundView {
    fn from(result: RoundResult) -> Self {
        Self {
            system_image: GestureImage::of(result.system_choice()),
            message: outcome_message(result.outcome),
            outcome: result.outcome,
        }
    }
}

/// Turns taps into views by forwarding them to the engine.
#[derive(Clone, Debug)]
pub struct Presenter<S: ChoiceSource = UniformChoice> {
    engine: GameEngine<S>,
}

impl<S: ChoiceSource> Presenter<S> {
    pub fn new(engine: GameEngine<S>) -> Self {
        Self { engine }
    }

    /// The engine this presenter forwards to.
    pub fn engine(&self) -> &GameEngine<S> {
        &self.engine
    }

    /// Handle a tap on one of the controls.
    pub fn tap(&mut self, control: Control) -> Result<RoundView> {
        let result = self.engine.play_round(control.choice())?;
        let view = RoundView::from(result);
        info!(
            player = %result.player_choice(),
            system = %view.system_image,
            text = view.message,
            "tap handled"
        );
        Ok(view)
    }

    /// Handle a typed gesture label instead of a tap.
    pub fn submit(&mut self, label: &str) -> Result<RoundView> {
        let choice = label.parse::<Choice>()?;
        self.tap(Control::for_choice(choice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineError;
    use crate::rules::ScriptedChoices;
    use strum::IntoEnumIterator;

    #[test]
    fn test_controls_cover_every_choice() {
        let choices: Vec<_> = Control::iter().map(Control::choice).collect();
        assert_eq!(choices, Choice::ALL.to_vec());

        for control in Control::iter() {
            assert_eq!(Control::for_choice(control.choice()), control);
        }
    }

    #[test]
    fn test_images() {
        assert_eq!(GestureImage::of(Choice::Rock).resource(), "rock");
        assert_eq!(GestureImage::of(Choice::Paper).resource(), "paper");
        assert_eq!(GestureImage::of(Choice::Scissors).resource(), "scissors");
    }

    #[test]
    fn test_messages() {
        assert_eq!(outcome_message(Outcome::Draw), "It's a draw!");
        assert_eq!(outcome_message(Outcome::Win), "You win!");
        assert_eq!(outcome_message(Outcome::Lose), "You lose!");
    }

    #[test]
    fn test_tap() {
        let engine = GameEngine::with_source(ScriptedChoices::new([Choice::Rock, Choice::Rock]));
        let mut presenter = Presenter::new(engine);

        let view = presenter.tap(Control::ScissorsButton).unwrap();
        assert_eq!(view.system_image.resource(), "rock");
        assert_eq!(view.message, "You lose!");
        assert_eq!(view.outcome, Outcome::Lose);

        let view = presenter.submit("rock").unwrap();
        assert_eq!(view.message, "It's a draw!");
        assert_eq!(presenter.engine().source().remaining(), 0);
    }

    #[test]
    fn test_submit_invalid() {
        let engine = GameEngine::with_source(ScriptedChoices::new([Choice::Rock]));
        let mut presenter = Presenter::new(engine);

        assert_eq!(
            presenter.submit("well"),
            Err(EngineError::InvalidChoice("well".to_string()))
        );
        assert_eq!(presenter.engine().source().remaining(), 1);
    }

    #[test]
    fn test_view_json() {
        let view = RoundView::from(RoundResult {
            round: crate::core::Round::new(Choice::Paper, Choice::Rock),
            outcome: Outcome::Win,
        });
        let json = serde_json::to_string(&view).unwrap();
        assert_eq!(
            json,
            r#"{"system_image":"rock","message":"You win!","outcome":"win"}"#
        );
    }
}
