use progress_service::{audit::audit_progress_records, config::EnvVars};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().pretty())
        .with(sentry::integrations::tracing::layer())
        .with(EnvFilter::from_default_env())
        .init();
    tracing::info!("Starting progress audit...");
    dotenvy::dotenv().ok();

    let env_vars = EnvVars::new();

    let _guard = if let Some(sentry_dsn) = env_vars.sentry_dsn.clone() {
        tracing::info!("initializing Sentry");
        // NOTE: Events are only emitted, once the guard goes out of scope.
        Some(sentry::init((
            sentry_dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                traces_sample_rate: 1.0,
                ..Default::default()
            },
        )))
    } else {
        None
    };

    match audit_progress_records(&env_vars).await {
        Ok(summary) if summary.findings.is_empty() => {
            tracing::info!(
                records = summary.records,
                enrollments = summary.enrollments,
                "progress records are consistent"
            );
        }
        Ok(summary) => {
            tracing::warn!(
                findings = summary.findings.len(),
                "progress records need attention"
            );
        }
        Err(e) => {
            tracing::error!("Error auditing progress records: {:?}", e);
        }
    }
}
