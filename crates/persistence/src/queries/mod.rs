// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic read-only query modules.

pub mod accounts;
pub mod characters;
pub mod events;
pub mod schedules;
pub mod sessions;
