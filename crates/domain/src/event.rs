// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime, PrimitiveDateTime};

use crate::types::{ScheduleDate, ScheduleTime};

/// Hours an event remains visible after its end instant passes.
const EVENT_GRACE_HOURS: i64 = 24;

/// A time-limited in-game event shown on the community banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Stable event identifier.
    pub id: String,
    /// Event name.
    pub name: String,
    /// Last day of the event.
    pub end_date: ScheduleDate,
    /// Wall-clock instant the event ends, interpreted as UTC.
    pub end_time: ScheduleTime,
    /// Creation timestamp.
    #[serde(with = "time::serde::timestamp")]
    pub created_at: OffsetDateTime,
}

impl GameEvent {
    /// Returns the instant the event ends, interpreted as UTC.
    #[must_use]
    pub const fn ends_at(&self) -> PrimitiveDateTime {
        PrimitiveDateTime::new(self.end_date.date(), self.end_time.time())
    }

    /// Returns true while the event should still appear on the banner.
    ///
    /// Events stay visible for a 24 hour grace period after their end
    /// instant, so that a run finishing late does not vanish
    /// mid-evening.
    #[must_use]
    pub fn is_visible(&self, now: OffsetDateTime) -> bool {
        now < self.ends_at().assume_utc() + Duration::hours(EVENT_GRACE_HOURS)
    }
}
