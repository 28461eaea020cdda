//! Single-player game flow.
//!
//! A game owns the board, the bonus pool and the dice roller, and runs its
//! rounds one after another over them. Clicks arrive on a channel; each
//! round consumes clicks until its end control is activated.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::board::Board;
use crate::core::{EngineError, GameConfig, GameType};
use crate::dice::{Dice, DiceRoller};
use crate::pools::BonusPool;
use crate::round::{Click, Round, RoundSummary};

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub rounds: Vec<RoundSummary>,
    /// Tiles on the board at the end of the game.
    pub tiles: usize,
    pub bonus_used: u32,
}

pub struct SingleGame {
    config: GameConfig,
    board: Board,
    bonus_pool: BonusPool,
    roller: DiceRoller,
    completed: Vec<RoundSummary>,
}

impl SingleGame {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut roller = DiceRoller::new(config.seed);
        let bonus_pool = BonusPool::new(roller.bonus(), config.bonus_per_game);

        Self {
            config,
            board: Board::new(),
            bonus_pool,
            roller,
            completed: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn bonus_pool(&self) -> &BonusPool {
        &self.bonus_pool
    }

    /// Summaries of the rounds played so far.
    #[must_use]
    pub fn completed(&self) -> &[RoundSummary] {
        &self.completed
    }

    /// Number of the next round to play, or `None` when the game is over.
    #[must_use]
    pub fn next_round(&self) -> Option<u32> {
        let next = self.completed.len() as u32 + 1;
        (next <= self.config.rounds).then_some(next)
    }

    /// The dice handed out in `round`.
    pub fn draw(&mut self, round: u32) -> Vec<Dice> {
        match self.config.game_type {
            GameType::Demo => self.roller.demo(),
            GameType::Normal => self.roller.roll_round(round),
        }
    }

    /// Start over from round 1 with a fresh board, bonus pool and roller.
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }

    /// Play the next round, routing clicks from `clicks` until it ends.
    ///
    /// A round that fails part way leaves uncommitted tiles and bonus usage
    /// behind, so the game is reset before the error is returned.
    pub async fn play_round(&mut self, clicks: &mut UnboundedReceiver<Click>) -> Result<RoundSummary, EngineError> {
        let number = self.next_round().ok_or(EngineError::GameOver {
            rounds: self.config.rounds,
        })?;
        let dice = self.draw(number);

        let mut round = Round::new(number, &mut self.board, &mut self.bonus_pool, self.config.round.clone());
        let completion = round.play(dice)?;
        let result = round.run(clicks).await;
        drop(round);

        if let Err(err) = result {
            self.reset();
            return Err(err);
        }

        let summary = completion.wait().await?;
        self.completed.push(summary.clone());
        Ok(summary)
    }

    /// Play every remaining round.
    pub async fn play(&mut self, clicks: &mut UnboundedReceiver<Click>) -> Result<GameSummary, EngineError> {
        while self.next_round().is_some() {
            self.play_round(clicks).await?;
        }

        Ok(GameSummary {
            rounds: self.completed.clone(),
            tiles: self.board.tile_count(),
            bonus_used: self.bonus_pool.used_total(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = SingleGame::new(GameConfig::default().with_rounds(3));
        assert_eq!(game.next_round(), Some(1));
        assert_eq!(game.board().tile_count(), 0);
        assert!(game.bonus_pool().is_locked());
    }

    #[test]
    fn test_draw_by_game_type() {
        let mut normal = SingleGame::new(GameConfig::default());
        assert_eq!(normal.draw(1).len(), 4);

        let mut demo = SingleGame::new(GameConfig::default().with_game_type(GameType::Demo));
        assert_eq!(demo.draw(1).len(), 9);
    }

    #[test]
    fn test_reset_replays_same_dice() {
        let mut game = SingleGame::new(GameConfig::default().with_seed(5));
        let first: Vec<_> = game.draw(1).iter().map(|d| (d.id(), d.tile().kind())).collect();

        game.reset();
        let again: Vec<_> = game.draw(1).iter().map(|d| (d.id(), d.tile().kind())).collect();
        assert_eq!(first, again);
        assert_eq!(game.next_round(), Some(1));
    }
}
