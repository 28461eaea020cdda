//! The bonus pool.
//!
//! Six special crossing tiles shared by the whole game. A player may place
//! at most one of them per round and at most `max_per_game` over the game;
//! each individual bonus dice can be used once. The pool opens with
//! `unlock()` at the start of every round and closes as soon as one of its
//! dice is placed. Withdrawing that tile in the same round opens it again.

use crate::board::Board;
use crate::core::DiceId;
use crate::dice::Dice;

use super::slots::DiceSlots;
use super::DiceSurface;

#[derive(Clone, Debug)]
pub struct BonusPool {
    slots: DiceSlots,
    locked: bool,
    used_this_round: Option<DiceId>,
    used_total: u32,
    max_per_game: u32,
}

impl BonusPool {
    /// Create a locked pool holding `dice`.
    #[must_use]
    pub fn new(dice: Vec<Dice>, max_per_game: u32) -> Self {
        let mut slots = DiceSlots::default();
        for d in dice {
            slots.add(d);
        }
        Self {
            slots,
            locked: true,
            used_this_round: None,
            used_total: 0,
            max_per_game,
        }
    }

    /// Open the pool for a new round, unless the game allowance is used up.
    pub fn unlock(&mut self) {
        self.used_this_round = None;
        self.locked = self.used_total >= self.max_per_game;
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Bonus dice placed so far, this round included.
    #[must_use]
    pub fn used_total(&self) -> u32 {
        self.used_total
    }

    /// Bonus dice placed in the current round.
    #[must_use]
    pub fn used_this_round(&self) -> Option<DiceId> {
        self.used_this_round
    }

    /// All bonus dice, used or not.
    pub fn dice(&self) -> impl Iterator<Item = &Dice> {
        self.slots.dice()
    }
}

impl DiceSurface for BonusPool {
    fn get(&self, id: DiceId) -> Option<&Dice> {
        self.slots.get(id)
    }

    fn is_enabled(&self, id: DiceId) -> bool {
        self.slots.is_enabled(id)
    }

    fn is_selectable(&self, id: DiceId) -> bool {
        !self.locked && self.slots.is_enabled(id)
    }

    /// Unused bonus dice that could be placed right now.
    fn remaining(&self) -> Vec<&Dice> {
        if self.locked {
            Vec::new()
        } else {
            self.slots.remaining()
        }
    }

    fn enable(&mut self, id: DiceId) {
        if !self.slots.enable(id) {
            return;
        }
        self.used_total = self.used_total.saturating_sub(1);
        if self.used_this_round == Some(id) {
            self.used_this_round = None;
            self.locked = self.used_total >= self.max_per_game;
        }
    }

    fn disable(&mut self, id: DiceId) {
        if !self.slots.disable(id) {
            return;
        }
        self.used_total += 1;
        self.used_this_round = Some(id);
        self.locked = true;
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

    fn bonus_pool(max: u32) -> (BonusPool, Vec<DiceId>) {
        let mut roller = DiceRoller::new(1);
        let dice = roller.bonus();
        let ids = dice.iter().map(|d| d.id()).collect();
        (BonusPool::new(dice, max), ids)
    }

    #[test]
    fn test_starts_locked() {
        let (mut pool, ids) = bonus_pool(3);
        assert!(pool.is_locked());
        assert!(!pool.is_selectable(ids[0]));
        assert!(pool.remaining().is_empty());

        pool.unlock();
        assert!(pool.is_selectable(ids[0]));
        assert_eq!(pool.remaining().len(), 6);
    }

    #[test]
    fn test_one_per_round() {
        let (mut pool, ids) = bonus_pool(3);
        pool.unlock();

        pool.disable(ids[0]);
        assert!(pool.is_locked());
        assert_eq!(pool.used_this_round(), Some(ids[0]));
        assert!(!pool.is_selectable(ids[1]));

        pool.unlock();
        assert!(pool.is_selectable(ids[1]));
        assert!(!pool.is_selectable(ids[0]));
    }

    #[test]
    fn test_undo_reopens_pool() {
        let (mut pool, ids) = bonus_pool(3);
        pool.unlock();

        pool.disable(ids[2]);
        pool.enable(ids[2]);

        assert!(!pool.is_locked());
        assert_eq!(pool.used_total(), 0);
        assert!(pool.is_selectable(ids[2]));
    }

    #[test]
    fn test_game_allowance() {
        let (mut pool, ids) = bonus_pool(2);

        for id in &ids[..2] {
            pool.unlock();
            pool.disable(*id);
        }

        pool.unlock();
        assert!(pool.is_locked());
        assert_eq!(pool.used_total(), 2);
    }

    #[test]
    fn test_foreign_dice_ignored() {
        let (mut pool, _) = bonus_pool(3);
        pool.unlock();

        pool.disable(DiceId::new(999));
        assert!(!pool.is_locked());
        assert_eq!(pool.used_total(), 0);
    }
}
