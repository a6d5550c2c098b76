// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Date, OffsetDateTime, Time};

use crate::error::DomainError;

/// Alphabet used for login codes. Letters and digits that are easy to
/// confuse (I, O, 0, 1) are excluded.
pub const LOGIN_CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Number of characters in a login code.
pub const LOGIN_CODE_LENGTH: usize = 6;

/// Maximum nickname length in characters.
pub const MAX_NICKNAME_LENGTH: usize = 20;

/// Playable job classes, including advancement branches.
///
/// `Undecided` is the placeholder for members recruited before they have
/// committed to a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobClass {
    Warrior,
    Swordsman,
    Greatsword,
    Archer,
    Crossbowman,
    Longbowman,
    Mage,
    FireMage,
    IceMage,
    LightningMage,
    Rogue,
    DualBlade,
    Fighter,
    Bard,
    Musician,
    Dancer,
    Healer,
    Priest,
    Monk,
    DarkMage,
    Undecided,
}

impl JobClass {
    /// All job classes in display order.
    pub const ALL: [Self; 21] = [
        Self::Warrior,
        Self::Swordsman,
        Self::Greatsword,
        Self::Archer,
        Self::Crossbowman,
        Self::Longbowman,
        Self::Mage,
        Self::FireMage,
        Self::IceMage,
        Self::LightningMage,
        Self::Rogue,
        Self::DualBlade,
        Self::Fighter,
        Self::Bard,
        Self::Musician,
        Self::Dancer,
        Self::Healer,
        Self::Priest,
        Self::Monk,
        Self::DarkMage,
        Self::Undecided,
    ];

    /// Returns the canonical display name for this job class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warrior => "Warrior",
            Self::Swordsman => "Swordsman",
            Self::Greatsword => "Greatsword",
            Self::Archer => "Archer",
            Self::Crossbowman => "Crossbowman",
            Self::Longbowman => "Longbowman",
            Self::Mage => "Mage",
            Self::FireMage => "Fire Mage",
            Self::IceMage => "Ice Mage",
            Self::LightningMage => "Lightning Mage",
            Self::Rogue => "Rogue",
            Self::DualBlade => "Dual Blade",
            Self::Fighter => "Fighter",
            Self::Bard => "Bard",
            Self::Musician => "Musician",
            Self::Dancer => "Dancer",
            Self::Healer => "Healer",
            Self::Priest => "Priest",
            Self::Monk => "Monk",
            Self::DarkMage => "Dark Mage",
            Self::Undecided => "Undecided",
        }
    }

    /// Parses a job class from its display name.
    ///
    /// Matching ignores case and surrounding whitespace, and accepts the
    /// name with or without internal spaces.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidJob` if the input does not name a
    /// known job class.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let normalized: String = input
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        for job in Self::ALL {
            let canonical: String = job
                .as_str()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
                .to_uppercase();
            if normalized == canonical {
                return Ok(job);
            }
        }

        Err(DomainError::InvalidJob {
            value: input.trim().to_string(),
        })
    }
}

impl fmt::Display for JobClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JobClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Broad category of scheduled content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    Abyss,
    Raid,
}

impl ContentType {
    /// Returns the canonical display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Abyss => "Abyss",
            Self::Raid => "Raid",
        }
    }

    /// Parses a content type from its display name, ignoring case and
    /// surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidContentType` for unrecognized input.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        match input.trim().to_uppercase().as_str() {
            "ABYSS" => Ok(Self::Abyss),
            "RAID" => Ok(Self::Raid),
            _ => Err(DomainError::InvalidContentType {
                value: input.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Content difficulty tiers, ordered from easiest to hardest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Difficulty {
    Beginner,
    Hard,
    VeryHard,
    Hell,
}

impl Difficulty {
    /// Returns the canonical display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Hard => "Hard",
            Self::VeryHard => "Very Hard",
            Self::Hell => "Hell",
        }
    }

    /// Parses a difficulty from its display name, ignoring case,
    /// whitespace, and an optional hyphen in "very-hard".
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDifficulty` for unrecognized input.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let normalized: String = input
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect::<String>()
            .to_uppercase();

        match normalized.as_str() {
            "BEGINNER" => Ok(Self::Beginner),
            "HARD" => Ok(Self::Hard),
            "VERYHARD" => Ok(Self::VeryHard),
            "HELL" => Ok(Self::Hell),
            _ => Err(DomainError::InvalidDifficulty {
                value: input.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Account roles. Admins may edit and delete any schedule, guests may
/// read but never mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    User,
    Guest,
}

impl Role {
    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Guest => "guest",
        }
    }

    /// Parses a role from its name, ignoring case and whitespace.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRole` for unrecognized input.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        match input.trim().to_uppercase().as_str() {
            "ADMIN" => Ok(Self::Admin),
            "USER" => Ok(Self::User),
            "GUEST" => Ok(Self::Guest),
            _ => Err(DomainError::InvalidRole {
                value: input.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Calendar date of a schedule, stored as `YYYY-MM-DD`.
///
/// Parsing is strict. "2026-02-30" and "2026-2-3" are both rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct ScheduleDate(Date);

impl ScheduleDate {
    /// Parses a strict `YYYY-MM-DD` date.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDate` if the input is not a real
    /// calendar date in exactly that form.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        let format = format_description!("[year]-[month]-[day]");
        Date::parse(trimmed, &format)
            .map(Self)
            .map_err(|_| DomainError::InvalidDate {
                value: trimmed.to_string(),
            })
    }

    /// Returns the underlying calendar date.
    #[must_use]
    pub const fn date(self) -> Date {
        self.0
    }
}

impl fmt::Display for ScheduleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl FromStr for ScheduleDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ScheduleDate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ScheduleDate> for String {
    fn from(value: ScheduleDate) -> Self {
        value.to_string()
    }
}

/// Wall-clock start time of a schedule, stored as 24-hour `HH:MM`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct ScheduleTime(Time);

impl ScheduleTime {
    /// Parses a strict 24-hour `HH:MM` time.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTime` if the input is not a valid
    /// time in exactly that form.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        let format = format_description!("[hour]:[minute]");
        Time::parse(trimmed, &format)
            .map(Self)
            .map_err(|_| DomainError::InvalidTime {
                value: trimmed.to_string(),
            })
    }

    /// Midnight, used as the fallback for imports with no time column.
    #[must_use]
    pub const fn midnight() -> Self {
        Self(Time::MIDNIGHT)
    }

    /// Returns the underlying wall-clock time.
    #[must_use]
    pub const fn time(self) -> Time {
        self.0
    }
}

impl fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

impl FromStr for ScheduleTime {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ScheduleTime {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ScheduleTime> for String {
    fn from(value: ScheduleTime) -> Self {
        value.to_string()
    }
}

/// Six character login code identifying an account.
///
/// Codes are normalized to uppercase on construction and restricted to
/// the confusion-free alphabet in [`LOGIN_CODE_ALPHABET`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoginCode(String);

impl LoginCode {
    /// Parses and normalizes a login code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLoginCode` if the input is not
    /// exactly six characters from the code alphabet after uppercasing.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let normalized = input.trim().to_uppercase();

        if normalized.len() != LOGIN_CODE_LENGTH
            || !normalized.bytes().all(|b| LOGIN_CODE_ALPHABET.contains(&b))
        {
            return Err(DomainError::InvalidLoginCode {
                value: input.trim().to_string(),
            });
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LoginCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LoginCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LoginCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LoginCode> for String {
    fn from(value: LoginCode) -> Self {
        value.0
    }
}

/// An account holder identified by a login code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Stable account identifier.
    pub id: String,
    /// Display nickname, unique among accounts.
    pub nickname: String,
    /// Role deciding edit and delete capabilities.
    pub role: Role,
    /// Code presented at login.
    pub login_code: LoginCode,
    /// Creation timestamp.
    #[serde(with = "time::serde::timestamp")]
    pub created_at: OffsetDateTime,
}

impl Account {
    /// Returns true when the account holds the admin role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }

    /// Returns true when the account may create and join schedules.
    #[must_use]
    pub const fn can_mutate(&self) -> bool {
        !matches!(self.role, Role::Guest)
    }
}

/// A playable character owned by an account.
///
/// One account may own several characters, each with its own job class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Stable character identifier.
    pub id: String,
    /// Owning account.
    pub account_id: String,
    /// In-game character name.
    pub nickname: String,
    /// Job classes the character can bring, in preference order.
    pub jobs: Vec<JobClass>,
    /// Creation timestamp.
    #[serde(with = "time::serde::timestamp")]
    pub created_at: OffsetDateTime,
}

impl Character {
    /// Returns the job a party seat defaults to, the first listed class
    /// or `Undecided` when none are listed.
    #[must_use]
    pub fn primary_job(&self) -> JobClass {
        self.jobs.first().copied().unwrap_or(JobClass::Undecided)
    }
}
