use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{BoardError, Card};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: i64,
    pub title: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub wip_limit: Option<u32>,
    #[serde(default)]
    pub cards: Vec<Card>,
    /// Always derived from `cards.len()`; see [`Column::recount`].
    #[serde(default)]
    pub cards_count: usize,
}

fn default_color() -> String {
    "#FFFFFF".into()
}

impl Column {
    /// Recomputes `cards_count` and the dense positions from the actual
    /// card sequence. The count is never incremented independently.
    pub fn recount(&mut self) {
        for (index, card) in self.cards.iter_mut().enumerate() {
            card.position = index;
            card.column_id = self.id;
        }
        self.cards_count = self.cards.len();
    }

    pub fn at_wip_limit(&self) -> bool {
        match self.wip_limit {
            Some(limit) => self.cards.len() >= limit as usize,
            None => false,
        }
    }
}

/// Ordered sequence of columns. The authoritative instance lives
/// server-side; this is the client's cached copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Board {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Re-derives per-column bookkeeping after a snapshot arrives from
    /// the server, so local invariants hold regardless of wire order.
    pub fn normalize(&mut self) {
        for column in &mut self.columns {
            for card in &mut column.cards {
                card.normalize_tags();
            }
            column.recount();
        }
    }

    pub fn column(&self, column_id: i64) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn column_mut(&mut self, column_id: i64) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.id == column_id)
    }

    /// Locates a card anywhere on the board, returning its column id
    /// and index within that column.
    pub fn locate_card(&self, card_id: i64) -> Option<(i64, usize)> {
        for column in &self.columns {
            if let Some(index) = column.cards.iter().position(|c| c.id == card_id) {
                return Some((column.id, index));
            }
        }
        None
    }

    /// Checks the structural invariants: every card id appears in
    /// exactly one column, positions within a column are the dense
    /// permutation `[0, len)`, and `cards_count` matches the sequence.
    pub fn verify_invariants(&self) -> Result<(), BoardError> {
        let mut seen: HashSet<i64> = HashSet::new();
        for column in &self.columns {
            if column.cards_count != column.cards.len() {
                return Err(BoardError::InvariantViolation(format!(
                    "column {} reports {} cards but holds {}",
                    column.id,
                    column.cards_count,
                    column.cards.len()
                )));
            }
            for (index, card) in column.cards.iter().enumerate() {
                if !seen.insert(card.id) {
                    return Err(BoardError::InvariantViolation(format!(
                        "card {} appears in more than one column",
                        card.id
                    )));
                }
                if card.position != index {
                    return Err(BoardError::InvariantViolation(format!(
                        "card {} in column {} has position {} at index {}",
                        card.id, column.id, card.position, index
                    )));
                }
                if card.column_id != column.id {
                    return Err(BoardError::InvariantViolation(format!(
                        "card {} claims column {} but sits in column {}",
                        card.id, card.column_id, column.id
                    )));
                }
            }
        }
        Ok(())
    }
}
