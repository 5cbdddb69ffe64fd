use fraud_detector::classifier::forest::TreeEnsemble;
use fraud_detector::classifier::Classifier;
use fraud_detector::domain::check::CheckRequest;
use fraud_detector::service::check_service::CheckService;
use std::sync::Arc;

fn bundled() -> TreeEnsemble {
    TreeEnsemble::load("models/fraud_detector.json").unwrap()
}

fn request(amount: f64, hour: &str, category: &str) -> CheckRequest {
    CheckRequest {
        amount: Some(amount),
        date: Some("2024-05-15".to_string()),
        hour: Some(hour.to_string()),
        gender: Some("Female".to_string()),
        category: Some(category.to_string()),
        age: Some(35),
        zip: Some(10001),
    }
}

#[test]
fn bundled_model_loads() {
    let summary = bundled().summary();
    assert_eq!(summary.kind, "tree_ensemble");
    assert_eq!(summary.trees, 3);
    assert!(summary.features.contains(&"amount".to_string()));
}

#[test]
fn bundled_model_scores_reference_as_legit() {
    let service = CheckService::new(Arc::new(bundled()));
    let out = service.check(&request(100.0, "14:30", "grocery_pos")).unwrap();
    assert_eq!(out.message, "Transaction status: legit");
}

#[test]
fn bundled_model_flags_large_late_online_purchase() {
    let service = CheckService::new(Arc::new(bundled()));
    let out = service.check(&request(950.0, "23:10", "shopping_net")).unwrap();
    assert_eq!(out.message, "Transaction status: fraud");
}

#[test]
fn missing_artifact_is_an_error() {
    let err = TreeEnsemble::load("models/does_not_exist.json").unwrap_err();
    assert!(format!("{err:#}").contains("does_not_exist.json"));
}
