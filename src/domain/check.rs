use crate::domain::record::InferenceRecord;
use crate::domain::transaction::{Gender, MerchantCategory};
use crate::domain::verdict::Verdict;
use axum::http::StatusCode;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_AGE: i64 = 100;

/// JSON body of `POST /api/check`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CheckRequest {
    pub amount: Option<f64>,
    pub date: Option<String>,
    pub hour: Option<String>,
    pub gender: Option<String>,
    pub category: Option<String>,
    pub age: Option<i64>,
    pub zip: Option<i64>,
}

/// Form body of `POST /check`. Browsers send every field as text.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CheckForm {
    pub amount: String,
    pub date: String,
    pub hour: String,
    pub gender: String,
    pub category: String,
    pub age: String,
    pub zip: String,
}

/// Input that passed validation; every field is present and in range.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub amount: f64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub gender: Gender,
    pub category: MerchantCategory,
    pub age: u8,
    pub zip: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    pub check_id: Uuid,
    pub status: Verdict,
    pub message: String,
    pub record: InferenceRecord,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

pub type Rejection = (StatusCode, ErrorEnvelope);

pub fn err(code: &str, message: &str) -> ErrorEnvelope {
    ErrorEnvelope {
        error: ErrorPayload {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
        },
    }
}

fn bad_request(code: &str, message: &str) -> Rejection {
    (StatusCode::BAD_REQUEST, err(code, message))
}

fn missing(field: &str) -> Rejection {
    bad_request("MISSING_FIELD", &format!("{field} is required"))
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, Rejection> {
    let value = value.trim();
    if value.is_empty() {
        return Err(missing(field));
    }
    Ok(value)
}

impl CheckForm {
    pub fn into_request(self) -> Result<CheckRequest, Rejection> {
        let amount = required("amount", &self.amount)?
            .parse::<f64>()
            .map_err(|_| bad_request("INVALID_AMOUNT", "amount must be a number"))?;
        let age = required("age", &self.age)?
            .parse::<i64>()
            .map_err(|_| bad_request("INVALID_AGE", "age must be a whole number"))?;
        let zip = required("zip", &self.zip)?
            .parse::<i64>()
            .map_err(|_| bad_request("INVALID_ZIP", "zip must be a whole number"))?;

        Ok(CheckRequest {
            amount: Some(amount),
            date: Some(self.date),
            hour: Some(self.hour),
            gender: Some(self.gender),
            category: Some(self.category),
            age: Some(age),
            zip: Some(zip),
        })
    }
}

impl CheckRequest {
    pub fn validate(&self) -> Result<Submission, Rejection> {
        let amount = round_cents(self.amount.ok_or_else(|| missing("amount"))?);
        if !amount.is_finite() || amount < 0.0 {
            return Err(bad_request("INVALID_AMOUNT", "amount must be >= 0"));
        }

        let date = required("date", self.date.as_deref().unwrap_or(""))?;
        let date = parse_date(date)
            .ok_or_else(|| bad_request("INVALID_DATE", "date must be YYYY-MM-DD"))?;

        let hour = required("hour", self.hour.as_deref().unwrap_or(""))?;
        let time = parse_time(hour)
            .ok_or_else(|| bad_request("INVALID_HOUR", "hour must be HH:MM or HH:MM:SS"))?;

        let gender = required("gender", self.gender.as_deref().unwrap_or(""))?;
        let gender = Gender::from_label(gender).ok_or_else(|| {
            bad_request("UNSUPPORTED_GENDER", "gender must be one of: Female, Male")
        })?;

        let category = required("category", self.category.as_deref().unwrap_or(""))?;
        let category = MerchantCategory::parse(category).ok_or_else(|| {
            bad_request("UNSUPPORTED_CATEGORY", "category is not a known merchant category")
        })?;

        let age = self.age.ok_or_else(|| missing("age"))?;
        if !(0..=MAX_AGE).contains(&age) {
            return Err(bad_request("INVALID_AGE", "age must be between 0 and 100"));
        }

        let zip = self.zip.ok_or_else(|| missing("zip"))?;

        Ok(Submission {
            amount,
            date,
            time,
            gender,
            category,
            age: age as u8,
            zip,
        })
    }
}

/// Rounds to cents. Past 1e15 an f64 cannot hold cents anyway, and scaling could overflow.
pub fn round_cents(amount: f64) -> f64 {
    if !amount.is_finite() || amount.abs() > 1e15 {
        return amount;
    }
    (amount * 100.0).round() / 100.0
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}
