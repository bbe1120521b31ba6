//! Revision stamps for published content.
//!
//! Every save of a node version advances its stamp. Publishing copies the
//! stamp along with the content, so a target whose stamp equals the source's
//! already holds that exact version.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// The revision of one node version (node + locale) in one store.
///
/// Stamps order by save time in milliseconds, then by a per-millisecond
/// sequence number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct RevisionStamp {
    /// Milliseconds since the Unix epoch.
    wall_time: u64,
    /// Saves within the same millisecond.
    logical: u32,
}

fn wall_clock_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl RevisionStamp {
    /// The revision of a node that has never been saved.
    pub const INITIAL: Self = Self::new(0, 0);

    #[must_use]
    pub const fn new(wall_time: u64, logical: u32) -> Self {
        Self { wall_time, logical }
    }

    #[must_use]
    pub const fn wall_time(&self) -> u64 {
        self.wall_time
    }

    #[must_use]
    pub const fn logical(&self) -> u32 {
        self.logical
    }

    /// The stamp for the next save: the current time if the clock has moved
    /// past `self`, otherwise the next sequence number. Always greater than
    /// `self`.
    #[must_use]
    pub fn tick(&self) -> Self {
        let now = wall_clock_millis();
        if now > self.wall_time {
            return Self::new(now, 0);
        }
        match self.logical.checked_add(1) {
            Some(logical) => Self::new(self.wall_time, logical),
            None => Self::new(self.wall_time.saturating_add(1), 0),
        }
    }

    /// True if `self` was saved after `other`.
    #[must_use]
    pub fn is_newer_than(&self, other: &Self) -> bool {
        self > other
    }
}

impl fmt::Display for RevisionStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.wall_time, self.logical)
    }
}
