//! Localized console text.

use gridtac_core::{InputError, MatchResult, Move, Role};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::series::SeriesScore;

/// Supported languages.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Locale {
    /// American English.
    #[default]
    #[serde(rename = "en_US")]
    #[strum(to_string = "en_US", serialize = "en")]
    EnUs,
}

impl Locale {
    /// Message table for this language.
    #[instrument]
    pub fn messages(self) -> Messages {
        match self {
            Locale::EnUs => Messages::EN_US,
        }
    }
}

/// Fixed strings for one language.
///
/// Templates use `{}` placeholders filled in order by the methods below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    malformed: &'static str,
    row_out_of_bounds: &'static str,
    col_out_of_bounds: &'static str,
    occupied: &'static str,
    goes_first: &'static str,
    computer_plays: &'static str,
    your_turn: &'static str,
    match_over: &'static str,
    series_over: &'static str,
    nobody: &'static str,
    computer: &'static str,
    human: &'static str,
}

impl Messages {
    const EN_US: Self = Self {
        malformed: "Sorry, input is not valid. It must contain a digit and a character. Please, try again.",
        row_out_of_bounds: "Sorry, input is not valid. Row specified is out of bounds of this board. Please, try again.",
        col_out_of_bounds: "Sorry, input is not valid. Column specified is out of bounds of this board. Please, try again.",
        occupied: "Sorry, input is not valid. That spot is already occupied. Please, try again.",
        goes_first: "{} goes first and will use the '{}' pieces.",
        computer_plays: "Computer plays the {} cell.",
        your_turn: "It's your turn! Please, write what cell you want to play (for example: 'A1'): ",
        match_over: "{} wins this match! Total score: Ties: {}.  Computer: {}.  Human: {}. The game continues until one of the players achieves {} wins.",
        series_over: "{} wins the game! Do you want to play again? ('y' for yes): ",
        nobody: "Nobody",
        computer: "Computer",
        human: "Human",
    };

    /// Explanation for a rejected line of input.
    pub fn input_error(&self, error: &InputError) -> &'static str {
        match error {
            InputError::Malformed => self.malformed,
            InputError::RowOutOfBounds { .. } => self.row_out_of_bounds,
            InputError::ColOutOfBounds { .. } => self.col_out_of_bounds,
            InputError::Occupied(_) => self.occupied,
        }
    }

    /// Display name of a contestant.
    pub fn name(&self, role: Role) -> &'static str {
        match role {
            Role::Computer => self.computer,
            Role::Human => self.human,
        }
    }

    /// Display name of a match winner, `Nobody` for a tie.
    pub fn result_name(&self, result: MatchResult<Role>) -> &'static str {
        result.winner().map_or(self.nobody, |role| self.name(role))
    }

    /// Announces who opens the match and with which symbol.
    pub fn goes_first(&self, starter: Role, symbol: char) -> String {
        fill(self.goes_first, &[self.name(starter).to_string(), symbol.to_string()])
    }

    /// Announces the computer's cell.
    pub fn computer_plays(&self, mv: Move) -> String {
        fill(self.computer_plays, &[mv.to_string()])
    }

    /// Prompt for the human's cell.
    pub fn your_turn(&self) -> &'static str {
        self.your_turn
    }

    /// Result of a match with the running score.
    pub fn match_over(&self, result: MatchResult<Role>, score: &SeriesScore) -> String {
        fill(
            self.match_over,
            &[
                self.result_name(result).to_string(),
                score.ties().to_string(),
                score.computer().to_string(),
                score.human().to_string(),
                score.games_to_win().to_string(),
            ],
        )
    }

    /// Series winner plus the play-again prompt.
    pub fn series_over(&self, winner: Role) -> String {
        fill(self.series_over, &[self.name(winner).to_string()])
    }
}

/// Replaces each `{}` in `template` with the next argument.
fn fill(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;
    while let Some(at) = rest.find("{}") {
        out.push_str(&rest[..at]);
        if let Some(arg) = args.next() {
            out.push_str(arg);
        }
        rest = &rest[at + 2..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_locale_parses_tag() {
        assert_eq!(Locale::from_str("en_US"), Ok(Locale::EnUs));
        assert_eq!(Locale::from_str("en"), Ok(Locale::EnUs));
        assert!(Locale::from_str("xx").is_err());
        assert_eq!(Locale::EnUs.to_string(), "en_US");
    }

    #[test]
    fn test_fill_in_order() {
        assert_eq!(fill("{} and {}", &["a".into(), "b".into()]), "a and b");
        assert_eq!(fill("no slots", &[]), "no slots");
    }

    #[test]
    fn test_computer_plays_names_cell() {
        let m = Locale::EnUs.messages();
        assert_eq!(m.computer_plays(Move::new(2, 0)), "Computer plays the A3 cell.");
    }

    #[test]
    fn test_goes_first() {
        let m = Locale::EnUs.messages();
        assert_eq!(
            m.goes_first(Role::Human, 'x'),
            "Human goes first and will use the 'x' pieces."
        );
    }

    #[test]
    fn test_each_input_error_has_text() {
        let m = Locale::EnUs.messages();
        assert!(m.input_error(&InputError::Malformed).contains("digit"));
        assert!(m.input_error(&InputError::RowOutOfBounds { rows: 3 }).contains("Row"));
        assert!(m.input_error(&InputError::ColOutOfBounds { cols: 3 }).contains("Column"));
        assert!(m.input_error(&InputError::Occupied(Move::new(0, 0))).contains("occupied"));
    }

    #[test]
    fn test_result_name_for_tie() {
        let m = Locale::EnUs.messages();
        assert_eq!(m.result_name(MatchResult::Tie), "Nobody");
        assert_eq!(m.result_name(MatchResult::Winner(Role::Computer)), "Computer");
    }
}
