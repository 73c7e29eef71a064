//! First-to-N series of matches.

use crate::config::GameConfig;
use crate::console::ConsolePresenter;
use derive_getters::Getters;
use gridtac_core::{Board, GreedySelector, MatchController, MatchResult, Role};
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// Running tally of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct SeriesScore {
    /// Tied matches.
    ties: u32,
    /// Matches won by the computer.
    computer: u32,
    /// Matches won by the human.
    human: u32,
    /// Wins needed to take the series.
    games_to_win: u32,
}

impl SeriesScore {
    /// Creates an empty tally.
    #[instrument]
    pub fn new(games_to_win: u32) -> Self {
        Self {
            ties: 0,
            computer: 0,
            human: 0,
            games_to_win,
        }
    }

    /// Records a match and returns the series winner once there is one.
    ///
    /// Ties are counted but never decide a series.
    #[instrument(skip(self))]
    pub fn record(&mut self, result: MatchResult<Role>) -> Option<Role> {
        let (tally, role) = match result {
            MatchResult::Tie => {
                self.ties += 1;
                return None;
            }
            MatchResult::Winner(Role::Computer) => (&mut self.computer, Role::Computer),
            MatchResult::Winner(Role::Human) => (&mut self.human, Role::Human),
        };
        *tally += 1;
        (*tally >= self.games_to_win).then_some(role)
    }

    /// Wins recorded for `role`.
    pub fn wins(&self, role: Role) -> u32 {
        match role {
            Role::Computer => self.computer,
            Role::Human => self.human,
        }
    }
}

/// Plays series on the console until the human declines another.
#[derive(Debug)]
pub struct Session<R, W> {
    config: GameConfig,
    console: ConsolePresenter<R, W>,
    controller: MatchController<Role, StdRng>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session; the computer's fallback is seeded from the config
    /// when a seed is set.
    #[instrument(skip(input, output))]
    pub fn new(config: GameConfig, input: R, output: W) -> Self {
        let selector = match config.seed() {
            Some(seed) => GreedySelector::seeded(*seed),
            None => GreedySelector::from_entropy(),
        };
        let console = ConsolePresenter::new(input, output, config.locale().messages());
        Self {
            config,
            console,
            controller: MatchController::new(Role::Computer, Role::Human, selector),
        }
    }

    /// Consumes the session, returning its console.
    pub fn into_console(self) -> ConsolePresenter<R, W> {
        self.console
    }

    /// Plays one match on a fresh board.
    #[instrument(skip(self))]
    pub fn play_match(&mut self, starter: Role) -> anyhow::Result<MatchResult<Role>> {
        let mut board = Board::new(*self.config.rows(), *self.config.cols())?;
        self.console.begin_match(starter);
        let symbol = self.console.symbols().of(starter);
        let text = self.console.messages().goes_first(starter, symbol);
        self.console.say(&text)?;

        let result = self.controller.run(&mut board, starter, &mut self.console)?;
        Ok(result)
    }

    /// Plays matches until one side reaches the configured number of wins.
    ///
    /// The computer opens the first match and the opener alternates after
    /// every match, ties included.
    #[instrument(skip(self))]
    pub fn play_series(&mut self) -> anyhow::Result<(Role, SeriesScore)> {
        let mut score = SeriesScore::new(*self.config.games_to_win());
        let mut starter = Role::Computer;
        loop {
            let result = self.play_match(starter)?;
            let winner = score.record(result);
            let text = self.console.messages().match_over(result, &score);
            self.console.say(&text)?;
            info!(?result, ?score, "Match recorded");

            if let Some(winner) = winner {
                return Ok((winner, score));
            }
            starter = starter.opponent();
        }
    }

    /// Plays series while the human answers `y` to the play-again prompt.
    ///
    /// Returns the number of series played.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> anyhow::Result<u32> {
        let mut played = 0;
        loop {
            let (winner, _) = self.play_series()?;
            played += 1;
            info!(%winner, played, "Series finished");

            let prompt = self.console.messages().series_over(winner);
            let again = self.console.ask(&prompt)?;
            if again.as_deref().map(str::trim) != Some("y") {
                return Ok(played);
            }
        }
    }
}
