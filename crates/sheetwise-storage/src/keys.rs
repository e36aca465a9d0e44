// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed storage keys. Each holds one JSON document.

/// JSON array of every user record.
pub const USERS: &str = "sheetwise.users";

/// JSON snapshot of the signed-in user, absent when signed out.
pub const CURRENT_SESSION: &str = "sheetwise.currentSession";

/// JSON array of shared sheets for the gallery.
pub const SHARED_SHEETS: &str = "sheetwise.network";

/// JSON array of saved study sheets.
pub const SHEETS: &str = "sheetwise.sheets";
