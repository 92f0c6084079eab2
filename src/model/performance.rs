use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::payroll::{date, employee_id};
use crate::models::FormError;
use crate::utils::format::{ISO_DATE, deserialize_date, today};

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReview {
    pub id: u64,
    pub employee_id: u64,
    pub score: u8,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default, deserialize_with = "deserialize_date")]
    pub review_date: Option<NaiveDate>,
}

/// Body of `POST /` on the performance service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReview {
    pub employee_id: u64,
    pub score: u8,
    pub comments: String,
    pub review_date: String,
}

/// Badge shown next to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// 80 and above.
    High,
    /// 50 to 79.
    Medium,
    Low,
}

impl ScoreBand {
    pub fn of(score: u8) -> Self {
        if score >= 80 {
            ScoreBand::High
        } else if score >= 50 {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            ScoreBand::High => "score-high",
            ScoreBand::Medium => "score-medium",
            ScoreBand::Low => "score-low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewForm {
    pub employee_id: String,
    pub score: String,
    pub comments: String,
    pub review_date: String,
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self {
            employee_id: String::new(),
            score: String::new(),
            comments: String::new(),
            review_date: today(),
        }
    }
}

impl From<&PerformanceReview> for ReviewForm {
    fn from(r: &PerformanceReview) -> Self {
        Self {
            employee_id: r.employee_id.to_string(),
            score: r.score.to_string(),
            comments: r.comments.clone().unwrap_or_default(),
            review_date: r
                .review_date
                .map(|d| d.format(ISO_DATE).to_string())
                .unwrap_or_default(),
        }
    }
}

impl ReviewForm {
    pub fn to_create(&self) -> Result<CreateReview, FormError> {
        let employee_id = employee_id(&self.employee_id)?;

        let score = self.score.trim();
        if score.is_empty() {
            return Err(FormError::Missing("score"));
        }
        let score: u8 = score.parse().map_err(|_| FormError::ScoreOutOfRange)?;
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(FormError::ScoreOutOfRange);
        }

        let review_date = date(&self.review_date, "reviewDate")?;

        Ok(CreateReview {
            employee_id,
            score,
            comments: self.comments.trim().to_string(),
            review_date: review_date.format(ISO_DATE).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(score: &str) -> ReviewForm {
        ReviewForm {
            employee_id: "9".to_string(),
            score: score.to_string(),
            comments: " Solide trimestre ".to_string(),
            review_date: "2025-03-15".to_string(),
        }
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::of(85).class(), "score-high");
        assert_eq!(ScoreBand::of(80), ScoreBand::High);
        assert_eq!(ScoreBand::of(79), ScoreBand::Medium);
        assert_eq!(ScoreBand::of(60).class(), "score-medium");
        assert_eq!(ScoreBand::of(50), ScoreBand::Medium);
        assert_eq!(ScoreBand::of(49), ScoreBand::Low);
        assert_eq!(ScoreBand::of(40).class(), "score-low");
    }

    #[test]
    fn test_review_without_comments_deserializes() {
        let json = r#"{"id":3,"employeeId":9,"score":72,"reviewDate":"2025-03-15"}"#;
        let review: PerformanceReview = serde_json::from_str(json).unwrap();
        assert_eq!(review.comments, None);
        assert_eq!(review.score, 72);

        let json = r#"{"id":3,"employeeId":9,"score":72,"comments":null,"reviewDate":"2025-03-15"}"#;
        let review: PerformanceReview = serde_json::from_str(json).unwrap();
        assert_eq!(review.comments, None);
    }

    #[test]
    fn test_null_review_date_keeps_the_row() {
        let json = r#"[
            {"id":1,"employeeId":9,"score":72,"reviewDate":"2025-03-15"},
            {"id":2,"employeeId":9,"score":40,"reviewDate":null}
        ]"#;
        let reviews: Vec<PerformanceReview> = serde_json::from_str(json).unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].review_date, NaiveDate::from_ymd_opt(2025, 3, 15));
        assert_eq!(reviews[1].review_date, None);
    }

    #[test]
    fn test_review_form_builds_request() {
        let body = form("85").to_create().unwrap();
        assert_eq!(body.employee_id, 9);
        assert_eq!(body.score, 85);
        assert_eq!(body.comments, "Solide trimestre");
        assert_eq!(body.review_date, "2025-03-15");

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["employeeId"], 9);
        assert_eq!(json["reviewDate"], "2025-03-15");
    }

    #[test]
    fn test_score_must_be_within_range() {
        assert!(form("1").to_create().is_ok());
        assert!(form("100").to_create().is_ok());
        assert_eq!(form("0").to_create(), Err(FormError::ScoreOutOfRange));
        assert_eq!(form("101").to_create(), Err(FormError::ScoreOutOfRange));
        assert_eq!(form("300").to_create(), Err(FormError::ScoreOutOfRange));
        assert_eq!(form("7.5").to_create(), Err(FormError::ScoreOutOfRange));
        assert_eq!(form("").to_create(), Err(FormError::Missing("score")));
    }
}
