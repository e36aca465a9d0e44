// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User-facing study operations for Sheetwise.
//!
//! [`StudyContext`] bundles the store, the content service and the quiz
//! settings. It is passed explicitly; operations that act for a user take
//! that user as a parameter.

pub mod context;
pub mod gallery;
pub mod profile;

pub use context::{QuizSettings, StudyContext};
pub use profile::ProfileEdit;
