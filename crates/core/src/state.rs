// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use party_roster_domain::Schedule;
use serde::Serialize;

/// A short description of what a transition changed.
///
/// Changes are broadcast to live subscribers so clients can refresh
/// the affected roster without polling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleChange {
    /// A character joined as a member.
    MemberJoined {
        /// Nickname of the new member.
        nickname: String,
    },
    /// A member gave up its seat.
    MemberLeft {
        /// Nickname of the departed member.
        nickname: String,
    },
    /// The leader or an admin added a hand-entered member.
    MemberAdded {
        /// Nickname of the new member.
        nickname: String,
    },
    /// The leader or an admin removed a member seat.
    MemberRemoved {
        /// Nickname of the removed member.
        nickname: String,
    },
    /// A member's nickname or job was corrected.
    MemberCorrected {
        /// Nickname of the corrected member after the change.
        nickname: String,
    },
    /// The leader's nickname or job was corrected.
    LeaderCorrected,
    /// Recruitment was opened or closed.
    ClosedChanged {
        /// True when recruitment is now closed.
        closed: bool,
    },
    /// Metadata fields were edited.
    Edited,
}

/// The result of a successful schedule transition.
///
/// Transitions are atomic: they either succeed completely or fail
/// without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The schedule after the transition.
    pub new_schedule: Schedule,
    /// What the transition changed, for live subscribers.
    pub change: ScheduleChange,
}
