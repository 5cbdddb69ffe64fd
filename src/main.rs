use anyhow::Context;
use fraud_detector::classifier::forest::TreeEnsemble;
use fraud_detector::classifier::Classifier;
use fraud_detector::config::AppConfig;
use fraud_detector::service::check_service::CheckService;
use fraud_detector::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let model = TreeEnsemble::load(&cfg.model_path).map_err(|e| {
        tracing::error!("cannot load classifier: {e:#}");
        e
    })?;
    let summary = model.summary();
    tracing::info!(
        "loaded classifier name={} version={} trees={}",
        summary.name,
        summary.version,
        summary.trees
    );

    let state = AppState {
        check_service: CheckService::new(Arc::new(model)),
    };
    let app = fraud_detector::http::router::build(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr)
        .await
        .with_context(|| format!("binding {}", cfg.bind_addr))?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
