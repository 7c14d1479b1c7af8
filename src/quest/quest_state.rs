use crate::quest::Cell;
use crate::search::SearchState;
use std::collections::BTreeSet;

/// A snapshot of the quest: the enemies still standing, where the agent is
/// and how many consumables it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestState {
    enemies: BTreeSet<Cell>,
    agent: Cell,
    consumables: usize,
}

/// What the search compares when looking for repeated states.
///
/// Only the *number* of remaining enemies is part of the key, not which
/// enemies remain, so two states that differ only in which enemies were
/// killed count as the same state and the second one reached is pruned.
/// This can hide solutions; it is kept as is because the explored search
/// trees, and therefore the plans found, depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DuplicateKey {
    pub agent: Cell,
    pub consumables: usize,
    pub remaining_enemies: usize,
}

impl QuestState {
    pub fn new(enemies: BTreeSet<Cell>, agent: Cell, consumables: usize) -> Self {
        Self {
            enemies,
            agent,
            consumables,
        }
    }

    pub fn enemies(&self) -> &BTreeSet<Cell> {
        &self.enemies
    }

    pub fn agent(&self) -> Cell {
        self.agent
    }

    pub fn consumables(&self) -> usize {
        self.consumables
    }

    pub fn has_enemy_at(&self, cell: &Cell) -> bool {
        self.enemies.contains(cell)
    }

    pub(crate) fn with_agent(&self, agent: Cell) -> Self {
        Self {
            agent,
            ..self.clone()
        }
    }

    pub(crate) fn with_consumables(&self, consumables: usize) -> Self {
        Self {
            consumables,
            ..self.clone()
        }
    }

    /// Remove every enemy adjacent to the agent and use up one consumable.
    /// Returns the new state and the number of enemies removed.
    pub(crate) fn kill_adjacent(&self) -> (Self, usize) {
        let agent = self.agent;
        let (killed, enemies): (BTreeSet<Cell>, BTreeSet<Cell>) = self
            .enemies
            .iter()
            .partition(|enemy| enemy.is_adjacent(&agent));
        let state = Self {
            enemies,
            agent,
            consumables: self.consumables.saturating_sub(1),
        };
        (state, killed.len())
    }
}

impl SearchState for QuestState {
    type Key = DuplicateKey;

    fn duplicate_key(&self) -> DuplicateKey {
        DuplicateKey {
            agent: self.agent,
            consumables: self.consumables,
            remaining_enemies: self.enemies.len(),
        }
    }
}
