use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Legit,
    Fraud,
}

impl Verdict {
    /// Only 0 and 1 are defined; anything else is a classifier fault.
    pub fn from_prediction(prediction: i64) -> Option<Self> {
        match prediction {
            0 => Some(Verdict::Legit),
            1 => Some(Verdict::Fraud),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Legit => "legit",
            Verdict::Fraud => "fraud",
        }
    }

    pub fn status_line(&self) -> String {
        format!("Transaction status: {}", self.as_str())
    }
}
