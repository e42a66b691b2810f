use std::collections::HashSet;

use anyhow::Context;
use quiz_utils::validate::validate_catalog;
use schema::ProgressRecord;
use schema::storage::{JsonFileStorage, ProgressStorage, progress_key};

use crate::catalog::CatalogStore;
use crate::config::EnvVars;

#[derive(Debug, Default)]
pub struct AuditSummary {
    pub records: usize,
    pub enrollments: usize,
    pub findings: Vec<String>,
}

/// Validates the seeded catalog, then sweeps every persisted progress
/// record under the configured data directory:
/// - the stored wallet matches the storage key
/// - enrollments are unique per course and reference known courses
/// - scores are within range and consistent with the pass policy
/// - flags cohere: minted implies passed, passed implies a recorded score
#[tracing::instrument(skip_all, err(Debug))]
pub async fn audit_progress_records(env_vars: &EnvVars) -> anyhow::Result<AuditSummary> {
    let mut catalog = CatalogStore::new();
    catalog.load().await;
    validate_catalog(catalog.courses(), catalog.quizzes())
        .context("seeded catalog failed validation")?;

    let storage = JsonFileStorage::new(&env_vars.data_dir);
    let mut summary = AuditSummary::default();

    for key in storage.keys().context("unable to list progress records")? {
        let Some(raw) = storage
            .get(&key)
            .with_context(|| format!("unable to read progress record {key}"))?
        else {
            continue;
        };

        let record: ProgressRecord = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(%key, error = ?e, "unable to deserialize progress record");
                summary
                    .findings
                    .push(format!("{key}: record does not deserialize"));
                continue;
            }
        };
        summary.records += 1;

        if progress_key(&record.wallet) != key {
            summary.findings.push(format!(
                "{key}: stored wallet {} does not match the storage key",
                record.wallet
            ));
        }

        let mut seen = HashSet::new();
        for entry in &record.enrolled_courses {
            summary.enrollments += 1;

            if !seen.insert(entry.course_id.as_str()) {
                summary.findings.push(format!(
                    "{key}: duplicate enrollment for course {}",
                    entry.course_id
                ));
            }
            if catalog.course(&entry.course_id).is_none() {
                summary.findings.push(format!(
                    "{key}: enrollment references unknown course {}",
                    entry.course_id
                ));
            }
            if let Some(score) = entry.quiz_score {
                if score > 100 {
                    summary.findings.push(format!(
                        "{key}: course {} score {score} is out of range",
                        entry.course_id
                    ));
                }
                if let Some(passed) = entry.quiz_passed {
                    if passed != (score >= quiz_utils::PASSING_PERCENT) {
                        summary.findings.push(format!(
                            "{key}: course {} passed flag disagrees with score {score}",
                            entry.course_id
                        ));
                    }
                }
            }
            if entry.quiz_passed == Some(true) && entry.quiz_score.is_none() {
                summary.findings.push(format!(
                    "{key}: course {} passed without a recorded score",
                    entry.course_id
                ));
            }
            if entry.nft_minted == Some(true) && entry.quiz_passed != Some(true) {
                summary.findings.push(format!(
                    "{key}: course {} minted without a passed quiz",
                    entry.course_id
                ));
            }
        }
    }

    for finding in &summary.findings {
        tracing::warn!(%finding, "audit finding");
    }
    tracing::info!(
        records = summary.records,
        enrollments = summary.enrollments,
        findings = summary.findings.len(),
        "progress audit complete"
    );

    Ok(summary)
}
