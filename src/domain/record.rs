use crate::domain::check::Submission;
use crate::domain::transaction::{Gender, MerchantCategory};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

/// Field names in the order the classifier was trained on.
pub const FEATURE_NAMES: [&str; 7] = ["amount", "month", "hour", "gender", "category", "age", "zip"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Numeric,
    Categorical,
}

pub fn feature_kind(name: &str) -> Option<FeatureKind> {
    match name {
        "amount" | "month" | "hour" | "age" | "zip" => Some(FeatureKind::Numeric),
        "gender" | "category" => Some(FeatureKind::Categorical),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Numeric(f64),
    Categorical(&'static str),
}

/// Single-row classifier input. Built once per check and dropped after the verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InferenceRecord {
    pub amount: f64,
    pub month: u32,
    pub hour: u32,
    pub gender: Gender,
    pub category: MerchantCategory,
    pub age: u8,
    pub zip: i64,
}

impl InferenceRecord {
    pub fn feature(&self, name: &str) -> Option<FeatureValue> {
        let value = match name {
            "amount" => FeatureValue::Numeric(self.amount),
            "month" => FeatureValue::Numeric(self.month as f64),
            "hour" => FeatureValue::Numeric(self.hour as f64),
            "gender" => FeatureValue::Categorical(self.gender.code()),
            "category" => FeatureValue::Categorical(self.category.as_str()),
            "age" => FeatureValue::Numeric(self.age as f64),
            "zip" => FeatureValue::Numeric(self.zip as f64),
            _ => return None,
        };
        Some(value)
    }

    pub fn features(&self) -> Vec<(&'static str, FeatureValue)> {
        FEATURE_NAMES
            .iter()
            .filter_map(|name| self.feature(name).map(|v| (*name, v)))
            .collect()
    }
}

pub fn month_of(date: NaiveDate) -> u32 {
    date.month()
}

pub fn hour_of(time: NaiveTime) -> u32 {
    time.hour()
}

pub fn build_record(submission: &Submission) -> InferenceRecord {
    InferenceRecord {
        amount: submission.amount,
        month: month_of(submission.date),
        hour: hour_of(submission.time),
        gender: submission.gender,
        category: submission.category,
        age: submission.age,
        zip: submission.zip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> Submission {
        Submission {
            amount: 100.0,
            date: NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
            time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            gender: Gender::Female,
            category: MerchantCategory::GroceryPos,
            age: 35,
            zip: 10001,
        }
    }

    #[test]
    fn month_matches_calendar_month() {
        let mut date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        while date <= end {
            let month = month_of(date);
            assert!((1..=12).contains(&month));
            assert_eq!(month, date.format("%m").to_string().parse::<u32>().unwrap());
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn hour_matches_time_of_day() {
        for h in 0..24 {
            for m in [0, 29, 59] {
                let time = NaiveTime::from_hms_opt(h, m, 59).unwrap();
                assert_eq!(hour_of(time), h);
            }
        }
    }

    #[test]
    fn builds_reference_record() {
        let record = build_record(&submission());
        assert_eq!(record.month, 5);
        assert_eq!(record.hour, 14);
        assert_eq!(record.gender.code(), "F");
        assert_eq!(record.category.as_str(), "grocery_pos");
        assert_eq!(record.age, 35);
        assert_eq!(record.zip, 10001);
    }

    #[test]
    fn record_always_has_seven_fields() {
        let mut s = submission();
        s.amount = 0.0;
        s.gender = Gender::Male;
        s.age = 100;
        s.zip = -1;
        for record in [build_record(&submission()), build_record(&s)] {
            let features = record.features();
            let names: Vec<&str> = features.iter().map(|(n, _)| *n).collect();
            assert_eq!(names, FEATURE_NAMES.to_vec());

            let json = serde_json::to_value(&record).unwrap();
            assert_eq!(json.as_object().unwrap().len(), 7);
        }
    }

    #[test]
    fn every_feature_has_a_kind_matching_its_value() {
        let record = build_record(&submission());
        for (name, value) in record.features() {
            match (feature_kind(name), value) {
                (Some(FeatureKind::Numeric), FeatureValue::Numeric(_)) => {}
                (Some(FeatureKind::Categorical), FeatureValue::Categorical(_)) => {}
                other => panic!("mismatched feature {name}: {other:?}"),
            }
        }
        assert_eq!(feature_kind("city_pop"), None);
    }
}
