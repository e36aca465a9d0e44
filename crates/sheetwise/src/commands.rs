// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-shot subcommands: account, library, sheets, progress and gallery.

use std::path::Path;

use colored::Colorize;
use sheetwise_core::SheetwiseError;
use sheetwise_study::{ProfileEdit, StudyContext};

use crate::render;

pub fn login(context: &StudyContext, name: &str) -> Result<(), SheetwiseError> {
    let user = context.sign_in(name)?;
    println!("signed in as {}", user.name.bold());
    Ok(())
}

pub fn logout(context: &StudyContext) -> Result<(), SheetwiseError> {
    match context.current_user() {
        Some(user) => {
            context.sign_out()?;
            println!("signed out {}", user.name);
        }
        None => println!("not signed in"),
    }
    Ok(())
}

pub fn whoami(context: &StudyContext) -> Result<(), SheetwiseError> {
    match context.current_user() {
        Some(user) => print!("{}", render::user(&user)),
        None => println!("not signed in"),
    }
    Ok(())
}

/// Prints the profile, applying `edit` first when it changes anything.
pub fn profile(context: &StudyContext, edit: &ProfileEdit) -> Result<(), SheetwiseError> {
    let mut user = context.require_user()?;
    if !edit.is_empty() {
        context.update_profile(&mut user, edit)?;
        println!("{}", "profile updated".green());
    }
    print!("{}", render::user(&user));
    Ok(())
}

pub async fn upload(context: &StudyContext, file: &Path, save: bool) -> Result<(), SheetwiseError> {
    let mut user = context.require_user()?;
    let document = context.load_document(file)?;
    println!("extracting {} ...", document.file_name.cyan());

    let sheet = context.import_document(&mut user, &document, save).await?;
    print!("{}", render::sheet(&sheet, Some(&user)));
    if save {
        println!("\nsaved to your library as {}", sheet.id.cyan());
    } else {
        println!("\n{}", "not saved (--no-save)".dimmed());
    }
    Ok(())
}

pub fn sheets(context: &StudyContext) -> Result<(), SheetwiseError> {
    let user = context.require_user()?;
    let library = context.library(&user);
    if library.is_empty() {
        println!("your library is empty; add a sheet with `sheetwise upload <file>`");
    }
    for sheet in &library {
        println!("{}", render::sheet_line(sheet, &user));
    }
    Ok(())
}

pub fn show(context: &StudyContext, sheet_id: &str) -> Result<(), SheetwiseError> {
    let sheet = context.sheet(sheet_id)?;
    let user = context.current_user();
    print!("{}", render::sheet(&sheet, user.as_ref()));
    Ok(())
}

pub fn progress(context: &StudyContext, sheet_id: Option<&str>) -> Result<(), SheetwiseError> {
    let user = context.require_user()?;
    let sheet = sheet_id.map(|id| context.sheet(id)).transpose()?;
    let report = context.progress(&user, sheet.as_ref());
    if let Some(sheet) = &sheet {
        println!("{}", sheet.title.bold());
    }
    print!("{}", render::progress(&report));
    Ok(())
}

pub fn gallery(context: &StudyContext, subject: Option<&str>) -> Result<(), SheetwiseError> {
    let entries = context.gallery(subject);
    if entries.is_empty() {
        match subject {
            Some(subject) => println!("no shared sheets for {subject}"),
            None => println!("the gallery is empty"),
        }
    }
    for entry in &entries {
        print!("{}", render::shared(entry));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use sheetwise_core::types::AcademicLevel;
    use sheetwise_test_utils::TestHarness;

    use super::*;

    #[tokio::test]
    async fn commands_needing_a_user_fail_when_signed_out() {
        let h = TestHarness::new().await.unwrap();
        assert!(matches!(
            sheets(&h.context),
            Err(SheetwiseError::NoActiveSession)
        ));
        assert!(matches!(
            progress(&h.context, None),
            Err(SheetwiseError::NoActiveSession)
        ));
        assert!(whoami(&h.context).is_ok());
        assert!(logout(&h.context).is_ok());
    }

    #[tokio::test]
    async fn profile_edit_is_saved() {
        let h = TestHarness::new().await.unwrap();
        login(&h.context, "ada").unwrap();
        let edit = ProfileEdit {
            level: Some(AcademicLevel::HighSchool),
            ..ProfileEdit::default()
        };
        profile(&h.context, &edit).unwrap();
        assert_eq!(
            h.context.current_user().unwrap().profile.level,
            AcademicLevel::HighSchool
        );
    }

    #[tokio::test]
    async fn upload_saves_unless_no_save() {
        let h = TestHarness::new().await.unwrap();
        login(&h.context, "ada").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.pdf");
        std::fs::write(&file, b"%PDF-1.7 lecture").unwrap();

        upload(&h.context, &file, false).await.unwrap();
        assert!(h.store.list_sheets().is_empty());

        upload(&h.context, &file, true).await.unwrap();
        assert_eq!(h.store.list_sheets().len(), 1);
        assert_eq!(h.context.current_user().unwrap().sheet_ids.len(), 1);
        assert!(sheets(&h.context).is_ok());
    }

    #[tokio::test]
    async fn unsupported_upload_is_rejected_before_extraction() {
        let h = TestHarness::new().await.unwrap();
        login(&h.context, "ada").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.docx");
        std::fs::write(&file, b"not a pdf").unwrap();

        assert!(matches!(
            upload(&h.context, &file, true).await,
            Err(SheetwiseError::Validation(_))
        ));
        assert!(h.content.calls().await.is_empty());
    }

    #[tokio::test]
    async fn show_unknown_sheet_is_not_found() {
        let h = TestHarness::new().await.unwrap();
        assert!(matches!(
            show(&h.context, "missing"),
            Err(SheetwiseError::NotFound { .. })
        ));
        assert!(matches!(
            progress(&h.context, Some("missing")),
            Err(SheetwiseError::NoActiveSession)
        ));
    }
}
