//! The round turn engine.
//!
//! A `Round` turns clicks from the pool, the bonus pool and the board into
//! placements, withdrawals and re-orientations.
//!
//! ## States
//!
//! - `Ready`: constructed, dice not yet handed out
//! - `Active`: clicks are routed; a dice may be pending
//! - `Ended`: the board is committed and every click is ignored
//!
//! ## Board clicks
//!
//! Evaluated in this order:
//!
//! 1. Within the double-click window of the last *cycle* click: withdraw the
//!    tile, if this round placed it.
//! 2. A dice is pending: place its tile, if the cell is available.
//! 3. Otherwise: cycle the tile's orientation, if this round placed it, and
//!    remember the click time.
//!
//! Placement and withdrawal never move the double-click baseline, so a
//! withdrawal never opens a window of its own.
//!
//! ## Usage
//!
//! ```
//! use route_dice::board::Board;
//! use route_dice::core::{CellPos, RoundConfig};
//! use route_dice::dice::DiceRoller;
//! use route_dice::pools::BonusPool;
//! use route_dice::round::{Click, Outcome, Round};
//! use route_dice::tiles::TileKind;
//!
//! let mut roller = DiceRoller::new(1);
//! let mut board = Board::new();
//! let mut bonus = BonusPool::new(roller.bonus(), 3);
//!
//! let dice = roller.with_tile(TileKind::RailI);
//! let id = dice.id();
//!
//! let mut round = Round::new(1, &mut board, &mut bonus, RoundConfig::default());
//! let _completion = round.play(vec![dice]).unwrap();
//!
//! round.handle(Click::Pool(id)).unwrap();
//! let outcome = round.handle(Click::Board(CellPos::new(4, 1))).unwrap();
//! assert!(matches!(outcome, Outcome::Placed { .. }));
//! assert!(round.end_enabled());
//! ```

use im::Vector;
use rustc_hash::FxHashMap;
use std::time::Instant;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::oneshot;

use crate::board::Board;
use crate::core::{CellPos, DiceId, EngineError, RoundConfig, TileId};
use crate::dice::Dice;
use crate::pools::{BonusPool, DiceSurface, Pool};
use crate::tiles::Tile;

use super::click::{Click, Outcome};
use super::completion::RoundCompletion;
use super::event::{PlacedTile, RoundEvent, RoundRecord, RoundSummary};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    Ready,
    Active,
    Ended,
}

/// One round of play over a borrowed board and bonus pool.
///
/// The board and the bonus pool outlive the round and are shared by every
/// round of a game. The round borrows both exclusively, so only one round
/// can route clicks to them at a time.
pub struct Round<'a> {
    number: u32,
    config: RoundConfig,
    board: &'a mut Board,
    bonus_pool: &'a mut BonusPool,
    pool: Pool,
    /// Tiles placed this round, keyed by tile id, with the dice each came from.
    placed: FxHashMap<TileId, DiceId>,
    pending: Option<DiceId>,
    /// Time of the last board click that reached the cycle branch.
    last_click: Option<Instant>,
    end_enabled: bool,
    state: RoundState,
    completion: Option<oneshot::Sender<RoundSummary>>,
    history: Vector<RoundRecord>,
}

impl<'a> Round<'a> {
    /// Create round `number` (1-based).
    pub fn new(number: u32, board: &'a mut Board, bonus_pool: &'a mut BonusPool, config: RoundConfig) -> Self {
        assert!(number > 0, "Round numbers start at 1");

        Self {
            number,
            config,
            board,
            bonus_pool,
            pool: Pool::new(),
            placed: FxHashMap::default(),
            pending: None,
            last_click: None,
            end_enabled: false,
            state: RoundState::Ready,
            completion: None,
            history: Vector::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub fn pending(&self) -> Option<DiceId> {
        self.pending
    }

    /// Can the round be ended right now?
    #[must_use]
    pub fn end_enabled(&self) -> bool {
        self.end_enabled
    }

    #[must_use]
    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    #[must_use]
    pub fn bonus_pool(&self) -> &BonusPool {
        &*self.bonus_pool
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &*self.board
    }

    /// Number of tiles this round has on the board.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// The dice a tile placed this round came from.
    #[must_use]
    pub fn placed_by(&self, tile: TileId) -> Option<DiceId> {
        self.placed.get(&tile).copied()
    }

    /// Everything that happened this round, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    fn record(&mut self, event: RoundEvent) {
        let sequence = self.history.len() as u32;
        self.history.push_back(RoundRecord::new(self.number, sequence, event));
    }

    // === Lifecycle ===

    /// Hand out the round's dice and start routing clicks.
    ///
    /// The returned completion resolves once, when the round ends.
    pub fn play(&mut self, dice: Vec<Dice>) -> Result<RoundCompletion, EngineError> {
        if self.state != RoundState::Ready {
            return Err(EngineError::RoundAlreadyStarted { round: self.number });
        }

        self.record(RoundEvent::Started {
            dice: dice.iter().map(Dice::id).collect(),
        });
        for d in dice {
            self.pool.add(d);
        }

        self.state = RoundState::Active;
        self.sync_end();
        self.bonus_pool.unlock();

        let (sender, completion) = RoundCompletion::channel(self.number);
        self.completion = Some(sender);
        Ok(completion)
    }

    /// Route clicks from `clicks` until the round ends.
    pub async fn run(&mut self, clicks: &mut UnboundedReceiver<Click>) -> Result<(), EngineError> {
        if self.state == RoundState::Ready {
            return Err(EngineError::RoundNotStarted { round: self.number });
        }

        while self.state == RoundState::Active {
            let click = clicks
                .recv()
                .await
                .ok_or(EngineError::InputClosed { round: self.number })?;
            self.handle(click)?;
        }
        Ok(())
    }

    /// Route one click, timestamped now.
    pub fn handle(&mut self, click: Click) -> Result<Outcome, EngineError> {
        self.handle_at(click, Instant::now())
    }

    /// Route one click with an explicit timestamp.
    pub fn handle_at(&mut self, click: Click, now: Instant) -> Result<Outcome, EngineError> {
        match self.state {
            RoundState::Ready => return Err(EngineError::RoundNotStarted { round: self.number }),
            RoundState::Ended => return Ok(Outcome::Ignored),
            RoundState::Active => {}
        }

        match click {
            Click::Pool(id) if self.pool.is_selectable(id) => Ok(self.on_pool_click(id)),
            Click::BonusPool(id) if self.bonus_pool.is_selectable(id) => Ok(self.on_pool_click(id)),
            Click::Pool(_) | Click::BonusPool(_) => Ok(Outcome::Ignored),
            Click::Board(pos) => self.on_board_click(pos, now),
            Click::End => Ok(self.try_end()),
        }
    }

    // === Click handling ===

    fn dice_tile(&self, id: DiceId) -> Option<Tile> {
        self.pool
            .get(id)
            .or_else(|| self.bonus_pool.get(id))
            .map(|d| d.tile().clone())
    }

    fn set_pending_highlight(&mut self, id: Option<DiceId>) {
        self.pool.pending(id);
        self.bonus_pool.pending(id);
    }

    fn on_pool_click(&mut self, id: DiceId) -> Outcome {
        if self.pending == Some(id) {
            self.pending = None;
            self.board.signal(Vec::new());
            self.set_pending_highlight(None);
            self.record(RoundEvent::Cancelled { dice: id });
            return Outcome::Cancelled { dice: id };
        }

        let Some(tile) = self.dice_tile(id) else {
            return Outcome::Ignored;
        };

        self.pending = Some(id);
        let available = self.board.available_cells(&tile);
        let count = available.len();
        self.board.signal(available);
        self.set_pending_highlight(Some(id));
        self.record(RoundEvent::Selected { dice: id });

        Outcome::Selected { dice: id, available: count }
    }

    fn on_board_click(&mut self, pos: CellPos, now: Instant) -> Result<Outcome, EngineError> {
        // Coordinates off the grid are an illegal click like any other.
        if self.board.cell(pos.x, pos.y).is_err() {
            return Ok(Outcome::Ignored);
        }

        let double_click = self
            .last_click
            .is_some_and(|last| now.saturating_duration_since(last) < self.config.double_click());

        if double_click {
            self.try_to_remove(pos)
        } else if self.pending.is_some() {
            self.try_to_add(pos)
        } else {
            let outcome = self.try_to_cycle(pos);
            self.last_click = Some(now);
            outcome
        }
    }

    /// The id of the tile at `pos`, if this round placed it.
    fn owned_tile_at(&self, pos: CellPos) -> Result<Option<TileId>, EngineError> {
        let tile = self.board.cell(pos.x, pos.y)?.tile().map(Tile::id);
        Ok(tile.filter(|id| self.placed.contains_key(id)))
    }

    fn try_to_remove(&mut self, pos: CellPos) -> Result<Outcome, EngineError> {
        let Some(tile) = self.owned_tile_at(pos)? else {
            return Ok(Outcome::Ignored);
        };
        let Some(&dice) = self.placed.get(&tile) else {
            return Ok(Outcome::Ignored);
        };

        self.board.place(None, pos.x, pos.y, 0)?;
        self.placed.remove(&tile);

        self.pool.enable(dice);
        self.bonus_pool.enable(dice);

        // The freed cell may be a new target for the pending dice.
        if let Some(tile) = self.pending.and_then(|id| self.dice_tile(id)) {
            self.board.signal_available(Some(&tile));
        }

        self.record(RoundEvent::Removed { dice, tile, pos });
        self.sync_end();
        Ok(Outcome::Removed { dice, pos })
    }

    fn try_to_add(&mut self, pos: CellPos) -> Result<Outcome, EngineError> {
        let Some(dice) = self.pending else {
            return Ok(Outcome::Ignored);
        };
        let Some(tile) = self.dice_tile(dice) else {
            return Ok(Outcome::Ignored);
        };
        if !self.board.available_cells(&tile).contains(&pos) {
            return Ok(Outcome::Ignored);
        }

        let placed = self.board.place_best(tile.fork(), pos.x, pos.y, self.number)?;
        self.board.signal(Vec::new());
        self.set_pending_highlight(None);

        self.pool.disable(dice);
        self.bonus_pool.disable(dice);

        self.placed.insert(placed.id(), dice);
        self.pending = None;

        self.record(RoundEvent::Placed {
            dice,
            tile: placed.id(),
            kind: placed.kind(),
            pos,
            transform: placed.transform(),
        });
        self.sync_end();
        Ok(Outcome::Placed {
            dice,
            pos,
            transform: placed.transform(),
        })
    }

    fn try_to_cycle(&mut self, pos: CellPos) -> Result<Outcome, EngineError> {
        let Some(tile) = self.owned_tile_at(pos)? else {
            return Ok(Outcome::Ignored);
        };

        let cycled = self.board.cycle_transform(pos.x, pos.y)?;
        let outcome = match cycled {
            Some(transform) => {
                self.record(RoundEvent::Cycled { tile, pos, transform });
                Outcome::Cycled { pos, transform }
            }
            None => Outcome::Ignored,
        };

        self.sync_end();
        Ok(outcome)
    }

    // === End of round ===

    fn sync_end(&mut self) {
        self.pool.sync(&*self.board);
        self.bonus_pool.sync(&*self.board);

        let enabled = self.pool.remaining().is_empty();
        if enabled != self.end_enabled {
            self.end_enabled = enabled;
            self.record(RoundEvent::EndEnabled { enabled });
        }
    }

    fn try_end(&mut self) -> Outcome {
        if !self.end_enabled {
            return Outcome::Ignored;
        }

        self.board.commit(self.number);

        self.pending = None;
        self.board.signal(Vec::new());
        self.set_pending_highlight(None);

        self.state = RoundState::Ended;
        self.record(RoundEvent::Ended);

        let summary = self.summary();
        if let Some(sender) = self.completion.take() {
            // The caller may have dropped the completion; the round ends anyway.
            let _ = sender.send(summary);
        }
        Outcome::Ended
    }

    fn summary(&self) -> RoundSummary {
        let mut placed: Vec<PlacedTile> = self
            .board
            .inner_cells()
            .filter_map(|cell| {
                let tile = cell.tile()?;
                let dice = self.placed.get(&tile.id())?;
                Some(PlacedTile {
                    dice: *dice,
                    tile: tile.id(),
                    kind: tile.kind(),
                    pos: cell.pos(),
                    transform: tile.transform(),
                })
            })
            .collect();
        placed.sort_by_key(|p| p.pos);

        RoundSummary {
            round: self.number,
            placed,
            bonus: self.bonus_pool.used_this_round(),
        }
    }
}
