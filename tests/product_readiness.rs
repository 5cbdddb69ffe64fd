#[test]
fn config_defaults_point_at_bundled_model() {
    let cfg = fraud_detector::config::AppConfig::from_env();
    assert!(!cfg.bind_addr.is_empty());
    if std::env::var("MODEL_PATH").is_err() {
        assert_eq!(cfg.model_path, "./models/fraud_detector.json");
        assert!(std::path::Path::new(&cfg.model_path).exists());
    }
}

#[test]
fn endpoints_exist_in_readme() {
    let readme = std::fs::read_to_string("README.md").unwrap_or_default();
    assert!(readme.contains("/api/check"));
    assert!(readme.contains("/ops/readiness"));
    assert!(readme.contains("MODEL_PATH"));
}
