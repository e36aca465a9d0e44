// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `sheetwise status` command implementation.
//!
//! Reports which store and content service are in use, how many records the
//! store holds and who is signed in.

use colored::Colorize;
use serde::Serialize;
use sheetwise_config::SheetwiseConfig;
use sheetwise_core::{HealthStatus, PluginAdapter, SheetwiseError};
use sheetwise_study::StudyContext;

/// Structured status output for `--json` mode.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub version: String,
    pub storage_backend: String,
    pub users: usize,
    pub sheets: usize,
    pub shared_sheets: usize,
    pub signed_in: Option<String>,
    pub content_service: String,
    pub model: String,
    pub content_healthy: bool,
    pub content_detail: Option<String>,
}

pub async fn collect(context: &StudyContext, config: &SheetwiseConfig) -> StatusResponse {
    let store = context.store();
    let health = context
        .content()
        .health_check()
        .await
        .unwrap_or_else(|e| HealthStatus::Unhealthy(e.to_string()));
    let (content_healthy, content_detail) = match health {
        HealthStatus::Healthy => (true, None),
        HealthStatus::Degraded(detail) => (true, Some(detail)),
        HealthStatus::Unhealthy(detail) => (false, Some(detail)),
    };

    StatusResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage_backend: store.backend_name().to_string(),
        users: store.list_users().len(),
        sheets: store.list_sheets().len(),
        shared_sheets: store.list_shared_sheets().len(),
        signed_in: context.current_user().map(|u| u.name),
        content_service: context.content().name().to_string(),
        model: config.gemini.model.clone(),
        content_healthy,
        content_detail,
    }
}

pub async fn run_status(
    context: &StudyContext,
    config: &SheetwiseConfig,
    json: bool,
) -> Result<(), SheetwiseError> {
    let status = collect(context, config).await;

    if json {
        let out = serde_json::to_string_pretty(&status)
            .map_err(|e| SheetwiseError::Internal(format!("failed to encode status: {e}")))?;
        println!("{out}");
        return Ok(());
    }

    println!("{} {}", "sheetwise".bold(), status.version);
    println!("  storage:  {}", status.storage_backend);
    println!(
        "  records:  {} users, {} sheets, {} shared",
        status.users, status.sheets, status.shared_sheets
    );
    match &status.signed_in {
        Some(name) => println!("  session:  {}", name.green()),
        None => println!("  session:  {}", "signed out".dimmed()),
    }
    let state = if status.content_healthy {
        "ready".green()
    } else {
        "unavailable".red()
    };
    println!(
        "  content:  {} ({}, {state})",
        status.content_service, status.model
    );
    if let Some(detail) = &status.content_detail {
        println!("            {}", detail.dimmed());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use sheetwise_test_utils::{TestHarness, fixtures};

    use super::*;

    #[tokio::test]
    async fn status_counts_records() {
        let h = TestHarness::builder()
            .with_gallery(vec![fixtures::shared_sheet("g1", "Biology", 4.0)])
            .build()
            .await
            .unwrap();
        h.context.sign_in("ada").unwrap();

        let status = collect(&h.context, &h.config).await;
        assert_eq!(status.storage_backend, "memory");
        assert_eq!(status.users, 1);
        assert_eq!(status.shared_sheets, 1);
        assert_eq!(status.signed_in.as_deref(), Some("ada"));
        assert_eq!(status.content_service, "mock-content");
        assert!(status.content_healthy);
    }

    #[tokio::test]
    async fn offline_content_is_reported_unhealthy() {
        let h = TestHarness::new().await.unwrap();
        let context = StudyContext::new(
            h.store.clone(),
            std::sync::Arc::new(crate::offline::OfflineContent::new("no API key")),
            h.context.settings(),
        );
        let status = collect(&context, &h.config).await;
        assert!(!status.content_healthy);
        assert_eq!(status.content_detail.as_deref(), Some("no API key"));
        assert!(run_status(&context, &h.config, true).await.is_ok());
    }
}
