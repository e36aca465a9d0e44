// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Sheetwise integration tests.
//!
//! Provides a scripted content service, sample data and a harness that
//! wires them to an in-memory store, so flows can be tested without the
//! network.
//!
//! # Components
//!
//! - [`MockContentService`] - content adapter with queued replies and call capture
//! - [`fixtures`] - a sample sheet, questions and verdicts
//! - [`TestHarness`] - a ready [`StudyContext`](sheetwise_study::StudyContext) over memory storage

pub mod fixtures;
pub mod harness;
pub mod mock_content;

pub use harness::TestHarness;
pub use mock_content::MockContentService;
