use crate::domain::{Card, Region};

/// The currently selected swimlane filter. Pure view state: never sent
/// to the server, never persisted, never mutates card data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterState {
    #[default]
    All,
    Region(Region),
}

impl FilterState {
    pub fn matches(&self, card: &Card) -> bool {
        match self {
            FilterState::All => true,
            FilterState::Region(region) => card.matches_filter(*region),
        }
    }
}

/// Which of the two swimlanes a card (or drop target) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    Matching,
    NonMatching,
}

/// The two disjoint swimlane views of one column. Borrowed from the
/// canonical card sequence; never stored, always re-derived per render.
#[derive(Debug)]
pub struct Swimlanes<'a> {
    pub matching: Vec<&'a Card>,
    pub non_matching: Vec<&'a Card>,
}

/// Stable partition of a column's cards by the current filter. The
/// concatenation of the two lanes is a permutation of the input and
/// relative order is preserved within each lane. With no filter, every
/// card lands in `matching`.
pub fn partition<'a>(cards: &'a [Card], filter: FilterState) -> Swimlanes<'a> {
    let mut matching = Vec::new();
    let mut non_matching = Vec::new();
    for card in cards {
        if filter.matches(card) {
            matching.push(card);
        } else {
            non_matching.push(card);
        }
    }
    Swimlanes {
        matching,
        non_matching,
    }
}

/// Maps a swimlane-local drop position back to an index in the full
/// column sequence, by counting how many cards of the other lane
/// precede the insertion point.
///
/// Dropping at lane index `k` means "immediately before the k-th card
/// of that lane"; dropping past the lane's last card resolves to just
/// after it. An empty lane resolves to the end of the column.
pub fn resolve_drop_index(
    cards: &[Card],
    filter: FilterState,
    lane: Lane,
    lane_index: usize,
) -> usize {
    let in_lane = |card: &Card| match lane {
        Lane::Matching => filter.matches(card),
        Lane::NonMatching => !filter.matches(card),
    };

    let mut seen_in_lane = 0;
    let mut last_lane_pos = None;
    for (global, card) in cards.iter().enumerate() {
        if in_lane(card) {
            if seen_in_lane == lane_index {
                return global;
            }
            seen_in_lane += 1;
            last_lane_pos = Some(global);
        }
    }

    match last_lane_pos {
        Some(pos) => pos + 1,
        None => cards.len(),
    }
}
