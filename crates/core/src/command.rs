// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use party_roster_domain::{JobClass, MemberIdentity, PartyMember, ScheduleEdit};

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request schedule changes. Authorization
/// happens before a command is built; the rules applied here are the
/// same for every caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A character joins the party as a member.
    Join {
        /// The fully described seat the character will occupy.
        member: PartyMember,
    },
    /// A character gives up its member seat.
    Leave {
        /// The leaving character's identifier.
        character_id: String,
    },
    /// The leader or an admin adds a hand-entered member.
    AddMember {
        /// Display nickname for the new seat.
        nickname: String,
        /// Job class for the new seat.
        job: JobClass,
    },
    /// The leader or an admin removes a member seat.
    RemoveMember {
        /// Identity of the seat to remove.
        identity: MemberIdentity,
    },
    /// Corrects a member's job class in place.
    UpdateMemberJob {
        /// Identity of the seat to correct.
        identity: MemberIdentity,
        /// The new job class.
        job: JobClass,
    },
    /// Corrects a member's nickname in place.
    UpdateMemberNickname {
        /// Identity of the seat to correct.
        identity: MemberIdentity,
        /// The new nickname.
        nickname: String,
    },
    /// Corrects the leader's job class.
    UpdateLeaderJob {
        /// The new job class.
        job: JobClass,
    },
    /// Corrects the leader's nickname.
    UpdateLeaderNickname {
        /// The new nickname.
        nickname: String,
    },
    /// Opens or closes recruitment. Member seats are untouched.
    SetClosed {
        /// True to stop recruiting.
        closed: bool,
    },
    /// Overwrites schedule metadata fields.
    Edit {
        /// The fields to change. `None` fields keep their value.
        edit: ScheduleEdit,
    },
}
