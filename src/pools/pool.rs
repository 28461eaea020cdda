//! The round's own dice pool.

use crate::board::Board;
use crate::core::DiceId;
use crate::dice::Dice;

use super::slots::DiceSlots;
use super::DiceSurface;

/// Dice drawn for one round, in draw order.
///
/// ```
/// use route_dice::board::Board;
/// use route_dice::dice::DiceRoller;
/// use route_dice::pools::{DiceSurface, Pool};
///
/// let mut roller = DiceRoller::new(3);
/// let mut pool = Pool::new();
/// for dice in roller.roll_round(1) {
///     pool.add(dice);
/// }
///
/// pool.sync(&Board::new());
/// assert!(pool.remaining().len() <= 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Pool {
    slots: DiceSlots,
}

impl Pool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dice. Panics if a dice with the same id is already here.
    pub fn add(&mut self, dice: Dice) {
        self.slots.add(dice);
    }

    /// Number of dice, placed or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.len() == 0
    }

    /// All dice in draw order.
    pub fn dice(&self) -> impl Iterator<Item = &Dice> {
        self.slots.dice()
    }

    /// Is this dice enabled but without any available cell?
    #[must_use]
    pub fn is_blocked(&self, id: DiceId) -> bool {
        self.slots.is_blocked(id)
    }
}

impl DiceSurface for Pool {
    fn get(&self, id: DiceId) -> Option<&Dice> {
        self.slots.get(id)
    }

    fn is_enabled(&self, id: DiceId) -> bool {
        self.slots.is_enabled(id)
    }

    fn is_selectable(&self, id: DiceId) -> bool {
        self.slots.is_enabled(id)
    }

    fn remaining(&self) -> Vec<&Dice> {
        self.slots.remaining()
    }

    fn enable(&mut self, id: DiceId) {
        self.slots.enable(id);
    }

    fn disable(&mut self, id: DiceId) {
        self.slots.disable(id);
    }

    fn pending(&mut self, id: Option<DiceId>) {
        self.slots.set_pending(id);
    }

    fn pending_dice(&self) -> Option<DiceId> {
        self.slots.pending()
    }

    fn sync(&mut self, board: &Board) {
        self.slots.sync(board);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::DiceRoller;
    use crate::tiles::{Tile, TileKind};

    #[test]
    fn test_remaining_tracks_enabled() {
        let mut roller = DiceRoller::new(1);
        let a = roller.with_tile(TileKind::RailI);
        let b = roller.with_tile(TileKind::RoadI);
        let (a_id, b_id) = (a.id(), b.id());

        let mut pool = Pool::new();
        pool.add(a);
        pool.add(b);
        assert_eq!(pool.remaining().len(), 2);

        pool.disable(a_id);
        let remaining: Vec<_> = pool.remaining().iter().map(|d| d.id()).collect();
        assert_eq!(remaining, vec![b_id]);
        assert!(!pool.is_selectable(a_id));

        pool.enable(a_id);
        assert_eq!(pool.remaining().len(), 2);
    }

    #[test]
    fn test_sync_blocks_unplaceable_dice() {
        let mut roller = DiceRoller::new(1);
        let dice = roller.with_tile(TileKind::RailI);
        let id = dice.id();

        let mut pool = Pool::new();
        pool.add(dice);

        // Fill every cell a rail straight could use. Each placed rail opens
        // up new cells, so keep going until none are left.
        let mut board = Board::new();
        loop {
            let cells = board.available_cells(&Tile::new(TileKind::RailI));
            if cells.is_empty() {
                break;
            }
            for pos in cells {
                board.place_best(Tile::new(TileKind::RailI), pos.x, pos.y, 1).unwrap();
            }
        }

        pool.sync(&board);
        assert!(pool.is_blocked(id));
        assert!(pool.remaining().is_empty());
        // Blocked dice can still be selected.
        assert!(pool.is_selectable(id));
    }
}
