use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Region;

pub const MAX_TAGS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub column_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub story_points: u32,
    #[serde(default)]
    pub assignee: Option<UserRef>,
    #[serde(default)]
    pub approver: Option<UserRef>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub region: Option<Region>,
    pub position: usize,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Card {
    /// Deduplicates tags in first-seen order and caps them at [`MAX_TAGS`].
    pub fn normalize_tags(&mut self) {
        let mut seen: Vec<String> = Vec::with_capacity(self.tags.len().min(MAX_TAGS));
        for tag in self.tags.drain(..) {
            if seen.len() == MAX_TAGS {
                break;
            }
            if !seen.contains(&tag) {
                seen.push(tag);
            }
        }
        self.tags = seen;
    }

    pub fn matches_filter(&self, region: Region) -> bool {
        self.region == Some(region)
    }
}
