// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Study flows over the test harness: sign-in, import, quiz, tutor, gallery.

use std::sync::Arc;

use sheetwise_core::types::{AcademicLevel, QuizMode, User};
use sheetwise_core::{KeyValueBackend, SheetwiseError};
use sheetwise_storage::MemoryBackend;
use sheetwise_study::ProfileEdit;
use sheetwise_test_utils::fixtures::{self, SAMPLE_SHEET_ID};
use sheetwise_test_utils::mock_content::ContentCall;
use sheetwise_test_utils::TestHarness;

fn content_error() -> SheetwiseError {
    SheetwiseError::Content {
        message: "service unavailable".into(),
        source: None,
    }
}

#[tokio::test]
async fn first_sign_in_creates_user_and_sets_pointer() {
    let h = TestHarness::new().await.unwrap();
    let ada = h.context.sign_in("  ada ").unwrap();

    assert_eq!(ada.name, "ada");
    assert!(!ada.id.is_empty());
    assert_eq!(h.store.list_users().len(), 1);
    assert_eq!(h.context.current_user().unwrap().id, ada.id);

    let again = h.context.sign_in("ada").unwrap();
    assert_eq!(again.id, ada.id);
    assert_eq!(h.store.list_users().len(), 1);
}

#[tokio::test]
async fn empty_name_is_rejected() {
    let h = TestHarness::new().await.unwrap();
    assert!(matches!(h.context.sign_in("   "), Err(SheetwiseError::Validation(_))));
    assert!(h.store.list_users().is_empty());
}

#[tokio::test]
async fn sign_out_keeps_user_record() {
    let h = TestHarness::new().await.unwrap();
    let ada = h.context.sign_in("ada").unwrap();
    h.context.sign_out().unwrap();

    assert!(h.context.current_user().is_none());
    assert!(matches!(h.context.require_user(), Err(SheetwiseError::NoActiveSession)));
    assert_eq!(h.store.list_users(), vec![ada]);
}

#[tokio::test]
async fn current_user_prefers_fresh_record() {
    let h = TestHarness::new().await.unwrap();
    let mut ada = h.context.sign_in("ada").unwrap();

    // Update the list without touching the pointer.
    ada.mastery.insert("mito".into(), 70);
    h.store.save_user(&ada).unwrap();

    assert_eq!(h.context.current_user().unwrap().mastery_of("mito"), 70);
}

#[tokio::test]
async fn profile_update_is_saved_and_pointer_refreshed() {
    let h = TestHarness::new().await.unwrap();
    let mut ada = h.context.sign_in("ada").unwrap();
    let edit = ProfileEdit {
        subject: Some("Biology".into()),
        level: Some(AcademicLevel::Graduate),
        ..ProfileEdit::default()
    };
    h.context.update_profile(&mut ada, &edit).unwrap();

    let stored = h.store.get_user(&ada.id).unwrap();
    assert_eq!(stored.profile.subject, "Biology");
    assert_eq!(h.store.current_session().unwrap().profile.level, AcademicLevel::Graduate);
}

#[tokio::test]
async fn import_with_persist_adds_sheet_to_library() {
    let h = TestHarness::new().await.unwrap();
    let mut ada = h.context.sign_in("ada").unwrap();

    let sheet = h
        .context
        .import_document(&mut ada, &fixtures::sample_document(), true)
        .await
        .unwrap();

    assert_ne!(sheet.id, SAMPLE_SHEET_ID, "library ids are minted locally");
    assert_eq!(sheet.title, fixtures::sample_sheet().title);
    assert_eq!(ada.sheet_ids, vec![sheet.id.clone()]);
    assert_eq!(h.context.sheet(&sheet.id).unwrap(), sheet);
    assert_eq!(h.context.library(&ada), vec![sheet.clone()]);
    assert_eq!(h.context.current_user().unwrap().sheet_ids, vec![sheet.id]);
    assert_eq!(
        h.content.calls().await[0],
        ContentCall::Extract {
            file_name: "notes.pdf".into(),
            subject: "General".into()
        }
    );
}

#[tokio::test]
async fn imports_with_colliding_extracted_ids_are_both_kept() {
    let lecture = |title: &str| {
        let mut sheet = fixtures::sample_sheet();
        sheet.title = title.to_string();
        Ok::<_, SheetwiseError>(sheet)
    };
    let h = TestHarness::builder()
        .with_sheets(vec![lecture("Lecture 1"), lecture("Lecture 2")])
        .build()
        .await
        .unwrap();
    let mut ada = h.context.sign_in("ada").unwrap();
    let mut bob = h.context.sign_in("bob").unwrap();
    let doc = fixtures::sample_document();

    let first = h.context.import_document(&mut ada, &doc, true).await.unwrap();
    let second = h.context.import_document(&mut bob, &doc, true).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(h.store.list_sheets().len(), 2);
    assert_eq!(h.context.sheet(&first.id).unwrap().title, "Lecture 1");
    assert_eq!(h.context.sheet(&second.id).unwrap().title, "Lecture 2");
    let titles: Vec<String> = h.context.library(&ada).into_iter().map(|s| s.title).collect();
    assert_eq!(titles, vec!["Lecture 1"]);
}

#[tokio::test]
async fn importing_the_same_document_twice_keeps_two_entries() {
    let h = TestHarness::new().await.unwrap();
    let mut ada = h.context.sign_in("ada").unwrap();
    let doc = fixtures::sample_document();

    let first = h.context.import_document(&mut ada, &doc, true).await.unwrap();
    let second = h.context.import_document(&mut ada, &doc, true).await.unwrap();

    assert_eq!(ada.sheet_ids, vec![first.id, second.id]);
    assert_eq!(h.context.library(&ada).len(), 2);
}

#[tokio::test]
async fn import_without_persist_stores_nothing() {
    let h = TestHarness::new().await.unwrap();
    let mut ada = h.context.sign_in("ada").unwrap();
    let sheet = h
        .context
        .import_document(&mut ada, &fixtures::sample_document(), false)
        .await
        .unwrap();

    assert_eq!(sheet.concepts.len(), 3);
    assert!(ada.sheet_ids.is_empty());
    assert!(h.store.list_sheets().is_empty());
    assert!(matches!(
        h.context.sheet(SAMPLE_SHEET_ID),
        Err(SheetwiseError::NotFound { .. })
    ));
}

#[tokio::test]
async fn failed_extraction_changes_nothing() {
    let h = TestHarness::builder()
        .with_sheets(vec![Err(SheetwiseError::schema("extraction", "no concepts were extracted"))])
        .build()
        .await
        .unwrap();
    let mut ada = h.context.sign_in("ada").unwrap();
    let before = ada.clone();

    let err = h
        .context
        .import_document(&mut ada, &fixtures::sample_document(), true)
        .await
        .unwrap_err();
    assert!(err.is_content_failure());
    assert_eq!(ada, before);
    assert!(h.store.list_sheets().is_empty());
}

#[tokio::test]
async fn practice_quiz_updates_mastery_and_history() {
    let h = TestHarness::new().await.unwrap();
    let mut ada = h.context.sign_in("ada").unwrap();
    let sheet = fixtures::sample_sheet();

    let mut session = h.context.start_quiz(&ada, &sheet, QuizMode::Practice).await.unwrap();
    assert!(session.clock().is_none());
    h.context.submit_answer(&mut session, "Mitochondria").await.unwrap();
    h.context.submit_answer(&mut session, "ATP").await.unwrap();
    let last = h.context.submit_answer(&mut session, "no idea").await.unwrap();
    assert!(!last.feedback.is_correct);
    assert!(session.is_complete());

    let record = h.context.complete_quiz(&mut ada, session).unwrap();
    assert_eq!((record.score, record.total), (2, 3));
    assert_eq!(record.mode, QuizMode::Practice);

    let stored = h.context.current_user().unwrap();
    assert_eq!(stored.mastery_of("mito"), 10);
    assert_eq!(stored.mastery_of("atp"), 10);
    assert_eq!(stored.mastery.get("ribo"), Some(&0));
    assert_eq!(stored.history.len(), 1);

    let report = h.context.progress(&stored, Some(&sheet));
    assert_eq!(report.sessions, 1);
    assert_eq!(report.best_percent, Some(66));
}

#[tokio::test]
async fn quiz_generation_receives_weak_concepts() {
    let h = TestHarness::new().await.unwrap();
    let mut ada = h.context.sign_in("ada").unwrap();
    ada.mastery.insert("mito".into(), 90);
    ada.mastery.insert("atp".into(), 30);

    h.context
        .start_quiz(&ada, &fixtures::sample_sheet(), QuizMode::Practice)
        .await
        .unwrap();

    let calls = h.content.calls().await;
    assert_eq!(
        calls.last(),
        Some(&ContentCall::GenerateQuiz {
            sheet_id: SAMPLE_SHEET_ID.into(),
            weak_concept_ids: vec!["ribo".into(), "atp".into()],
        })
    );
}

#[tokio::test]
async fn grading_failure_keeps_question_then_retry_succeeds() {
    let h = TestHarness::builder()
        .with_verdicts(vec![Err(content_error())])
        .build()
        .await
        .unwrap();
    let ada = h.context.sign_in("ada").unwrap();
    let mut session = h
        .context
        .start_quiz(&ada, &fixtures::sample_sheet(), QuizMode::Practice)
        .await
        .unwrap();

    assert!(h.context.submit_answer(&mut session, "Mitochondria").await.is_err());
    assert_eq!(session.position(), 0);

    let answered = h.context.submit_answer(&mut session, "Mitochondria").await.unwrap();
    assert!(answered.feedback.is_correct);
    assert_eq!(session.position(), 1);
}

#[tokio::test]
async fn empty_answer_never_reaches_grader() {
    let h = TestHarness::new().await.unwrap();
    let ada = h.context.sign_in("ada").unwrap();
    let mut session = h
        .context
        .start_quiz(&ada, &fixtures::sample_sheet(), QuizMode::Practice)
        .await
        .unwrap();

    assert!(matches!(
        h.context.submit_answer(&mut session, "").await,
        Err(SheetwiseError::Validation(_))
    ));
    assert!(
        !h.content
            .calls()
            .await
            .iter()
            .any(|c| matches!(c, ContentCall::Grade { .. }))
    );
}

#[tokio::test]
async fn exam_mode_starts_clock_and_counts_unanswered() {
    let h = TestHarness::new().await.unwrap();
    let mut ada = h.context.sign_in("ada").unwrap();
    let mut session = h
        .context
        .start_quiz(&ada, &fixtures::sample_sheet(), QuizMode::Exam)
        .await
        .unwrap();
    assert!(session.clock().is_some());

    h.context.submit_answer(&mut session, "Mitochondria").await.unwrap();
    let record = h.context.complete_quiz(&mut ada, session).unwrap();
    assert_eq!((record.score, record.total), (1, 3));
    assert_eq!(record.mode, QuizMode::Exam);
}

#[tokio::test]
async fn empty_quiz_from_service_is_rejected() {
    let h = TestHarness::builder()
        .with_quizzes(vec![Ok(vec![])])
        .build()
        .await
        .unwrap();
    let ada = h.context.sign_in("ada").unwrap();
    let result = h
        .context
        .start_quiz(&ada, &fixtures::sample_sheet(), QuizMode::Practice)
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn tutor_resolves_concept_by_term_or_id() {
    let h = TestHarness::new().await.unwrap();
    let sheet = fixtures::sample_sheet();

    let by_term = h.context.ask_tutor(&sheet, "mitochondria", "Why?").await.unwrap();
    assert!(by_term.contains("Mitochondria"));
    let by_id = h.context.ask_tutor(&sheet, "atp", "How?").await.unwrap();
    assert!(by_id.contains("ATP"));

    assert!(matches!(
        h.context.ask_tutor(&sheet, "golgi", "Why?").await,
        Err(SheetwiseError::NotFound { .. })
    ));
    assert!(matches!(
        h.context.ask_tutor(&sheet, "atp", "  ").await,
        Err(SheetwiseError::Validation(_))
    ));
}

#[tokio::test]
async fn gallery_filters_by_subject_best_rated_first() {
    let h = TestHarness::builder()
        .with_gallery(vec![
            fixtures::shared_sheet("g1", "Biology", 3.5),
            fixtures::shared_sheet("g2", "History", 5.0),
            fixtures::shared_sheet("g3", "biology", 4.8),
        ])
        .build()
        .await
        .unwrap();

    let bio: Vec<_> = h
        .context
        .gallery(Some("Biology"))
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(bio, vec!["g3", "g1"]);
    assert_eq!(h.context.gallery(None).len(), 3);
}

#[tokio::test]
async fn legacy_pointer_without_id_resolves_by_name() {
    let backend = Arc::new(MemoryBackend::new());
    backend
        .set("sheetwise.users", r#"[{"name": "ada", "mastery": {"mito": 40}}]"#)
        .unwrap();
    backend
        .set("sheetwise.currentSession", r#"{"name": "ada"}"#)
        .unwrap();

    let h = TestHarness::builder().with_backend(backend).build().await.unwrap();
    let user: User = h.context.current_user().unwrap();
    assert_eq!(user.mastery_of("mito"), 40);
}

#[test]
fn gallery_seed_file_is_loaded_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gallery.json");
    let sheets = vec![fixtures::shared_sheet("g1", "Biology", 4.0)];
    std::fs::write(&path, serde_json::to_string(&sheets).unwrap()).unwrap();

    let store = sheetwise_storage::Store::new(Arc::new(MemoryBackend::new()));
    assert_eq!(sheetwise_study::gallery::seed_if_empty(&store, &path).unwrap(), 1);
    assert_eq!(sheetwise_study::gallery::seed_if_empty(&store, &path).unwrap(), 0);

    std::fs::write(&path, "not json").unwrap();
    let empty = sheetwise_storage::Store::new(Arc::new(MemoryBackend::new()));
    assert!(matches!(
        sheetwise_study::gallery::seed_if_empty(&empty, &path),
        Err(SheetwiseError::Config(_))
    ));
}
