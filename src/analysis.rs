use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub content: String,
    pub post_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub post_id: i64,
    pub sentiment: Sentiment,
}

impl AnalysisResponse {
    pub fn new(req: &AnalysisRequest, sentiment: Sentiment) -> Self {
        Self {
            post_id: req.post_id,
            sentiment,
        }
    }
}

/// Discrete label derived from a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "positivo")]
    Positive,
    #[serde(rename = "negativo")]
    Negative,
    #[serde(rename = "neutro")]
    Neutral,
}

impl Sentiment {
    /// Thresholds are exact comparisons against zero. A NaN score falls through to
    /// `Neutral`.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Sentiment::Positive
        } else if score < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positivo",
            Sentiment::Negative => "negativo",
            Sentiment::Neutral => "neutro",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn thresholds_are_exact() {
        assert_eq!(Sentiment::from_score(0.0001), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(-0.0001), Sentiment::Negative);
        assert_eq!(Sentiment::from_score(0.0), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(-0.0), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(f64::MIN_POSITIVE), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(f64::NAN), Sentiment::Neutral);
    }

    #[test]
    fn response_echoes_post_id() {
        for post_id in [0, -3, 42, i64::MAX, i64::MIN] {
            let req = AnalysisRequest {
                content: "whatever".to_string(),
                post_id,
            };
            assert_eq!(AnalysisResponse::new(&req, Sentiment::Neutral).post_id, post_id);
        }
    }

    #[test]
    fn labels_serialize_in_spanish() {
        let resp = AnalysisResponse {
            post_id: 42,
            sentiment: Sentiment::Positive,
        };
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({ "post_id": 42, "sentiment": "positivo" })
        );
        assert_eq!(Sentiment::Negative.to_string(), "negativo");
        assert_eq!(Sentiment::Neutral.to_string(), "neutro");
    }

    #[test]
    fn request_requires_both_fields() {
        assert!(serde_json::from_value::<AnalysisRequest>(json!({ "content": "hi" })).is_err());
        assert!(serde_json::from_value::<AnalysisRequest>(json!({ "post_id": 1 })).is_err());
        assert!(
            serde_json::from_value::<AnalysisRequest>(json!({ "content": "hi", "post_id": "1" }))
                .is_err()
        );
        assert!(
            serde_json::from_value::<AnalysisRequest>(json!({ "content": 5, "post_id": 1 }))
                .is_err()
        );
    }
}
