// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the
//! persistence layer, expressed in Diesel DSL.
//!
//! ## Module Organization
//!
//! - `accounts`: Account rows
//! - `characters`: Character rows
//! - `events`: Game event rows
//! - `schedules`: Schedule documents and compare-and-swap writes
//! - `sessions`: Session rows

pub mod accounts;
pub mod characters;
pub mod events;
pub mod schedules;
pub mod sessions;
