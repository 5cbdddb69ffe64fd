use anyhow::{bail, Result};
use fraud_detector::classifier::forest::TreeEnsemble;
use fraud_detector::classifier::Classifier;
use fraud_detector::config::AppConfig;
use fraud_detector::domain::check::CheckRequest;
use fraud_detector::service::check_service::CheckService;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();
    let model = TreeEnsemble::load(&cfg.model_path)?;
    let summary = model.summary();
    tracing::info!(
        "model={} version={} trees={} features={:?}",
        summary.name,
        summary.version,
        summary.trees,
        summary.features
    );

    let service = CheckService::new(Arc::new(model));
    let reference = CheckRequest {
        amount: Some(100.0),
        date: Some("2024-05-15".to_string()),
        hour: Some("14:30".to_string()),
        gender: Some("Female".to_string()),
        category: Some("grocery_pos".to_string()),
        age: Some(35),
        zip: Some(10001),
    };

    match service.check(&reference) {
        Ok(resp) => {
            tracing::info!("reference transaction: {}", resp.message);
            Ok(())
        }
        Err((status, body)) => bail!(
            "reference transaction failed ({}): {} {}",
            status,
            body.error.code,
            body.error.message
        ),
    }
}
