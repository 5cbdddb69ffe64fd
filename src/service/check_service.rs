use crate::classifier::Classifier;
use crate::domain::check::{err, CheckRequest, CheckResponse, Rejection};
use crate::domain::record::{build_record, InferenceRecord};
use crate::domain::verdict::Verdict;
use axum::http::StatusCode;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct CheckService {
    pub classifier: Arc<dyn Classifier>,
}

impl CheckService {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    pub fn check(&self, req: &CheckRequest) -> Result<CheckResponse, Rejection> {
        let submission = req.validate().map_err(|(status, body)| {
            tracing::warn!(code = %body.error.code, "rejected check: {}", body.error.message);
            (status, body)
        })?;

        let check_id = Uuid::new_v4();
        let record = build_record(&submission);
        let verdict = self.classify(&record)?;

        tracing::info!(%check_id, features = ?record.features(), verdict = verdict.as_str(), "transaction checked");

        Ok(CheckResponse {
            check_id,
            status: verdict,
            message: verdict.status_line(),
            record,
        })
    }

    /// Runs the classifier on exactly one row and maps its single output to a verdict.
    pub fn classify(&self, record: &InferenceRecord) -> Result<Verdict, Rejection> {
        let predictions = self
            .classifier
            .predict(std::slice::from_ref(record))
            .map_err(internal)?;

        let prediction = match predictions.as_slice() {
            [p] => *p,
            other => {
                tracing::error!(outputs = other.len(), "classifier returned wrong number of outputs");
                return Err(unexpected(&format!(
                    "expected 1 prediction, got {}",
                    other.len()
                )));
            }
        };

        Verdict::from_prediction(prediction).ok_or_else(|| {
            tracing::error!(prediction, "classifier returned a value outside {{0, 1}}");
            unexpected(&format!("prediction {prediction} is not 0 or 1"))
        })
    }
}

fn unexpected(details: &str) -> Rejection {
    let mut body = err("UNEXPECTED_PREDICTION", "classifier returned an unexpected result");
    body.error.details = Some(details.to_string());
    (StatusCode::INTERNAL_SERVER_ERROR, body)
}

fn internal(e: anyhow::Error) -> Rejection {
    tracing::error!("classifier failed: {e:#}");
    (StatusCode::INTERNAL_SERVER_ERROR, err("INTERNAL_ERROR", &e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::mock::{MockBehavior, MockClassifier};

    fn request() -> CheckRequest {
        CheckRequest {
            amount: Some(100.0),
            date: Some("2024-05-15".to_string()),
            hour: Some("14:30".to_string()),
            gender: Some("Female".to_string()),
            category: Some("grocery_pos".to_string()),
            age: Some(35),
            zip: Some(10001),
        }
    }

    fn service(behavior: MockBehavior) -> CheckService {
        CheckService::new(Arc::new(MockClassifier { behavior }))
    }

    #[test]
    fn fixed_mock_verdicts() {
        let legit = CheckService::new(Arc::new(MockClassifier::always(0)));
        let fraud = CheckService::new(Arc::new(MockClassifier::always(1)));
        assert_eq!(legit.check(&request()).unwrap().status, Verdict::Legit);
        assert_eq!(fraud.check(&request()).unwrap().status, Verdict::Fraud);
    }

    #[test]
    fn legit_and_fraud_messages() {
        let out = service(MockBehavior::Always(0)).check(&request()).unwrap();
        assert_eq!(out.message, "Transaction status: legit");
        let out = service(MockBehavior::Always(1)).check(&request()).unwrap();
        assert_eq!(out.message, "Transaction status: fraud");
        assert_eq!(out.status, Verdict::Fraud);
    }

    #[test]
    fn out_of_range_prediction_is_surfaced() {
        let (status, body) = service(MockBehavior::Always(7)).check(&request()).unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.code, "UNEXPECTED_PREDICTION");
    }

    #[test]
    fn missing_output_is_surfaced() {
        let (_, body) = service(MockBehavior::NoOutput).check(&request()).unwrap_err();
        assert_eq!(body.error.code, "UNEXPECTED_PREDICTION");
        assert_eq!(body.error.details.as_deref(), Some("expected 1 prediction, got 0"));
    }

    #[test]
    fn classifier_failure_is_internal_error() {
        let (status, body) = service(MockBehavior::Unavailable).check(&request()).unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.code, "INTERNAL_ERROR");
    }

    #[test]
    fn invalid_input_never_reaches_classifier() {
        let mut req = request();
        req.age = Some(150);
        let (status, body) = service(MockBehavior::Unavailable).check(&req).unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.code, "INVALID_AGE");
    }
}
