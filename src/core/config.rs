//! Game and round configuration.
//!
//! Both configs are plain data with sensible defaults and `with_*` builders.
//! They serialize with serde so a front end can ship them as JSON.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default double-click window in milliseconds.
pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 400;

/// Configuration for a single round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Two board clicks closer together than this are a double click,
    /// which withdraws a tile placed this round.
    pub double_click_ms: u64,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            double_click_ms: DEFAULT_DOUBLE_CLICK_MS,
        }
    }
}

impl RoundConfig {
    /// Set the double-click window.
    #[must_use]
    pub fn with_double_click_ms(mut self, ms: u64) -> Self {
        self.double_click_ms = ms;
        self
    }

    /// The double-click window as a `Duration`.
    #[must_use]
    pub fn double_click(&self) -> Duration {
        Duration::from_millis(self.double_click_ms)
    }
}

/// Which dice a game hands out each round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameType {
    /// One roll of each of the four route dice per round.
    #[default]
    Normal,
    /// A fixed sequence of tiles covering every regular shape.
    Demo,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub game_type: GameType,

    /// Number of rounds (1-based round numbers run `1..=rounds`).
    pub rounds: u32,

    /// Seed for the dice rolls.
    pub seed: u64,

    /// How many bonus tiles a player may use over the whole game.
    pub bonus_per_game: u32,

    pub round: RoundConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_type: GameType::Normal,
            rounds: 7,
            seed: 42,
            bonus_per_game: 3,
            round: RoundConfig::default(),
        }
    }
}

impl GameConfig {
    /// Set the game type.
    #[must_use]
    pub fn with_game_type(mut self, game_type: GameType) -> Self {
        self.game_type = game_type;
        self
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        assert!(rounds > 0, "Must have at least 1 round");
        self.rounds = rounds;
        self
    }

    /// Set the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the per-game bonus allowance.
    #[must_use]
    pub fn with_bonus_per_game(mut self, count: u32) -> Self {
        self.bonus_per_game = count;
        self
    }

    /// Set the round configuration.
    #[must_use]
    pub fn with_round_config(mut self, round: RoundConfig) -> Self {
        self.round = round;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.game_type, GameType::Normal);
        assert_eq!(config.rounds, 7);
        assert_eq!(config.bonus_per_game, 3);
        assert_eq!(config.round.double_click(), Duration::from_millis(400));
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_game_type(GameType::Demo)
            .with_rounds(1)
            .with_seed(7)
            .with_round_config(RoundConfig::default().with_double_click_ms(250));

        assert_eq!(config.game_type, GameType::Demo);
        assert_eq!(config.rounds, 1);
        assert_eq!(config.seed, 7);
        assert_eq!(config.round.double_click_ms, 250);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 round")]
    fn test_zero_rounds() {
        let _ = GameConfig::default().with_rounds(0);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_game_type(GameType::Demo);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
