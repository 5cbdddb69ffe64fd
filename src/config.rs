#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub model_path: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            model_path: std::env::var("MODEL_PATH")
                .unwrap_or_else(|_| "./models/fraud_detector.json".to_string()),
        }
    }
}
