use crate::domain::check::CheckForm;
use crate::domain::transaction::{Gender, MerchantCategory};
use std::fmt::Write;

const OVERVIEW: &str = r#"<h2>Processed Dataset Overview</h2>
<p>
The dataset behind this model originates from the Credit Card Transactions Fraud Detection Dataset (Kartik Shenoy, Kaggle).
After cleaning, restructuring and preprocessing it was used to train and evaluate a model that detects fraudulent transactions.
The following transformations were applied:
</p>
<ul>
  <li><strong>Data cleaning</strong>: removal of duplicates, missing values and inconsistent records.</li>
  <li><strong>Feature extraction</strong>: new variables derived from trans_date_trans_time (hour, day of week, month) and from geographic or demographic information.</li>
  <li><strong>Encoding</strong>: categorical features such as category and gender converted to numerical form with one-hot encoding.</li>
  <li><strong>Scaling</strong>: continuous variables (amt, city_pop, lat, long) normalized or standardized.</li>
  <li><strong>Label definition</strong>: is_fraud used as the binary target (1 = fraud, 0 = non-fraud).</li>
  <li><strong>Balancing</strong>: undersampling and oversampling considered to address class imbalance.</li>
</ul>
<p>
The resulting dataset is clean, structured and ready for predictive modeling, and backs the real-time predictions served here.
</p>
<h2>Test the model</h2>"#;

#[derive(Debug, Clone)]
pub enum Outcome {
    Status(String),
    Error(String),
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn options(selected: &str, values: &[&str]) -> String {
    let mut out = String::new();
    for v in values {
        let sel = if *v == selected { " selected" } else { "" };
        let _ = write!(out, r#"<option value="{0}"{1}>{0}</option>"#, escape(v), sel);
    }
    out
}

/// Form values shown on a fresh page: zero amounts, today's date and the current time.
pub fn default_form(now: chrono::NaiveDateTime) -> CheckForm {
    CheckForm {
        amount: "0.00".to_string(),
        date: now.format("%Y-%m-%d").to_string(),
        hour: now.format("%H:%M").to_string(),
        gender: Gender::Female.label().to_string(),
        category: MerchantCategory::ALL[0].as_str().to_string(),
        age: "0".to_string(),
        zip: "0".to_string(),
    }
}

pub fn render(form: &CheckForm, outcome: Option<&Outcome>) -> String {
    let categories: Vec<&str> = MerchantCategory::ALL.iter().map(|c| c.as_str()).collect();
    let result = match outcome {
        Some(Outcome::Status(text)) => format!(r#"<p id="status">{}</p>"#, escape(text)),
        Some(Outcome::Error(text)) => format!(r#"<p id="error" class="error">{}</p>"#, escape(text)),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Fraud detector</title>
<style>
body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }}
.grid {{ display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }}
label {{ display: flex; flex-direction: column; }}
.error {{ color: #b00020; }}
</style>
</head>
<body>
<h1>Fraud detector</h1>
{overview}
<form method="post" action="/check">
<label>Amount (R$)<input type="number" name="amount" min="0" step="0.01" value="{amount}" required></label>
<div class="grid">
<label>Date<input type="date" name="date" value="{date}" required></label>
<label>Hour<input type="time" name="hour" value="{hour}" required></label>
<label>Gender<select name="gender">{genders}</select></label>
<label>Category<select name="category">{categories}</select></label>
<label>Age<input type="number" name="age" min="0" max="100" step="1" value="{age}" required></label>
<label>Zip<input type="number" name="zip" step="1" value="{zip}" required></label>
</div>
<button type="submit">Check</button>
</form>
{result}
</body>
</html>
"#,
        overview = OVERVIEW,
        amount = escape(&form.amount),
        date = escape(&form.date),
        hour = escape(&form.hour),
        genders = options(&form.gender, &Gender::LABELS),
        categories = options(&form.category, &categories),
        age = escape(&form.age),
        zip = escape(&form.zip),
        result = result,
    )
}
