// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Partial edits to a learner profile.

use sheetwise_core::SheetwiseError;
use sheetwise_core::types::{AcademicLevel, LearningStyle, MnemonicStyle, UserProfile};

/// Fields to change; `None` leaves the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileEdit {
    pub subject: Option<String>,
    pub level: Option<AcademicLevel>,
    pub learning_style: Option<LearningStyle>,
    pub mnemonic_style: Option<MnemonicStyle>,
}

impl ProfileEdit {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Applies the edit. A blank subject is rejected and nothing changes.
    pub fn apply(&self, profile: &mut UserProfile) -> Result<(), SheetwiseError> {
        let subject = match &self.subject {
            Some(s) if s.trim().is_empty() => {
                return Err(SheetwiseError::Validation(
                    "subject must not be empty".to_string(),
                ));
            }
            Some(s) => Some(s.trim().to_string()),
            None => None,
        };

        if let Some(subject) = subject {
            profile.subject = subject;
        }
        if let Some(level) = self.level {
            profile.level = level;
        }
        if let Some(style) = self.learning_style {
            profile.learning_style = style;
        }
        if let Some(style) = self.mnemonic_style {
            profile.mnemonic_style = style;
        }
        Ok(())
    }
}
