//! Dice storage shared by the pool surfaces.

use crate::board::Board;
use crate::core::DiceId;
use crate::dice::Dice;

#[derive(Clone, Debug)]
struct Slot {
    dice: Dice,
    enabled: bool,
    /// Enabled but with no available cell on the last synced board.
    blocked: bool,
}

/// Ordered dice with enabled/blocked flags and a pending highlight.
#[derive(Clone, Debug, Default)]
pub(crate) struct DiceSlots {
    slots: Vec<Slot>,
    pending: Option<DiceId>,
}

impl DiceSlots {
    pub(crate) fn add(&mut self, dice: Dice) {
        if self.contains(dice.id()) {
            panic!("Dice {} already in pool", dice.id());
        }
        self.slots.push(Slot {
            dice,
            enabled: true,
            blocked: false,
        });
    }

    fn slot(&self, id: DiceId) -> Option<&Slot> {
        self.slots.iter().find(|s| s.dice.id() == id)
    }

    fn slot_mut(&mut self, id: DiceId) -> Option<&mut Slot> {
        self.slots.iter_mut().find(|s| s.dice.id() == id)
    }

    pub(crate) fn contains(&self, id: DiceId) -> bool {
        self.slot(id).is_some()
    }

    pub(crate) fn get(&self, id: DiceId) -> Option<&Dice> {
        self.slot(id).map(|s| &s.dice)
    }

    pub(crate) fn is_enabled(&self, id: DiceId) -> bool {
        self.slot(id).is_some_and(|s| s.enabled)
    }

    pub(crate) fn is_blocked(&self, id: DiceId) -> bool {
        self.slot(id).is_some_and(|s| s.enabled && s.blocked)
    }

    /// Returns true if the dice is held here and was disabled.
    pub(crate) fn enable(&mut self, id: DiceId) -> bool {
        match self.slot_mut(id) {
            Some(slot) if !slot.enabled => {
                slot.enabled = true;
                slot.blocked = false;
                true
            }
            _ => false,
        }
    }

    /// Returns true if the dice is held here and was enabled.
    pub(crate) fn disable(&mut self, id: DiceId) -> bool {
        match self.slot_mut(id) {
            Some(slot) if slot.enabled => {
                slot.enabled = false;
                slot.blocked = false;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn remaining(&self) -> Vec<&Dice> {
        self.slots
            .iter()
            .filter(|s| s.enabled && !s.blocked)
            .map(|s| &s.dice)
            .collect()
    }

    pub(crate) fn dice(&self) -> impl Iterator<Item = &Dice> {
        self.slots.iter().map(|s| &s.dice)
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn set_pending(&mut self, id: Option<DiceId>) {
        self.pending = id.filter(|&id| self.contains(id));
    }

    pub(crate) fn pending(&self) -> Option<DiceId> {
        self.pending
    }

    /// Recompute which enabled dice still have somewhere to go.
    pub(crate) fn sync(&mut self, board: &Board) {
        for slot in self.slots.iter_mut().filter(|s| s.enabled) {
            slot.blocked = board.available_cells(slot.dice.tile()).is_empty();
        }
    }
}
