use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

use super::HistoryEntry;

const REQUIRED_FIELDS: [&str; 5] = ["studentId", "program", "gpa", "history", "targetTerm"];

/// A validated recommendation request
///
/// Built from the raw JSON payload by [`RecommendationQuery::from_payload`], which
/// enforces that every required field is present and truthy before the engine
/// ever sees the request.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationQuery {
    pub student_id: String,
    pub program: String,
    pub gpa: f64,
    pub history: Vec<HistoryEntry>,
    pub target_term: String,
    pub credit_cap_override: Option<u32>,
}

impl RecommendationQuery {
    /// Validates a JSON payload into a query
    pub fn from_payload(payload: &Value) -> AppResult<Self> {
        let object = payload
            .as_object()
            .ok_or_else(|| AppError::InvalidInput("Request body must be a JSON object".to_string()))?;

        let missing: Vec<&str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| !object.get(*field).is_some_and(is_truthy))
            .collect();
        if !missing.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            student_id: label_field(object, "studentId")?,
            program: label_field(object, "program")?,
            gpa: gpa_field(object)?,
            history: history_field(object)?,
            target_term: label_field(object, "targetTerm")?,
            credit_cap_override: credit_cap_field(object)?,
        })
    }
}

/// Truthiness of a JSON value: null, false, 0, "", [] and {} are all falsy
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn label_field(object: &Map<String, Value>, field: &str) -> AppResult<String> {
    match object.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(AppError::InvalidInput(format!(
            "Field {} must be a string or number",
            field
        ))),
    }
}

fn gpa_field(object: &Map<String, Value>) -> AppResult<f64> {
    let gpa = match object.get("gpa") {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    gpa.filter(|g| g.is_finite())
        .ok_or_else(|| AppError::InvalidInput("Field gpa must be numeric".to_string()))
}

fn history_field(object: &Map<String, Value>) -> AppResult<Vec<HistoryEntry>> {
    let items = object
        .get("history")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::InvalidInput("Field history must be a list".to_string()))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let code = item.get("code").and_then(Value::as_str);
            let grade = item.get("grade").and_then(Value::as_str);
            match (code, grade) {
                (Some(code), Some(grade)) => Ok(HistoryEntry::new(code, grade)),
                _ => Err(AppError::InvalidInput(format!(
                    "History item {} must have string fields code and grade",
                    index
                ))),
            }
        })
        .collect()
}

fn credit_cap_field(object: &Map<String, Value>) -> AppResult<Option<u32>> {
    let cap = match object.get("creditCapOverride") {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Some(Value::String(s)) => s.trim().parse::<u32>().ok(),
        _ => None,
    };

    cap.map(Some).ok_or_else(|| {
        AppError::InvalidInput("Field creditCapOverride must be a non-negative integer".to_string())
    })
}

/// One recommended course
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub code: String,
    pub name: String,
    pub credits: u32,
    pub offering_program: Option<String>,
    /// Desirability score, rounded to 2 decimals
    pub score: f64,
    pub rationale: String,
    pub career_tags: Vec<String>,
}

/// Engine output for one request
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub total_recommended_credits: u32,
    pub recommendations: Vec<Recommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "studentId": "2201001",
            "program": "Informatics",
            "gpa": 3.2,
            "history": [{"code": "MATH101", "grade": "A"}],
            "targetTerm": "5"
        })
    }

    fn expect_invalid(payload: Value) -> String {
        match RecommendationQuery::from_payload(&payload) {
            Err(AppError::InvalidInput(msg)) => msg,
            other => panic!("expected invalid input, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_payload() {
        let query = RecommendationQuery::from_payload(&valid_payload()).unwrap();
        assert_eq!(query.student_id, "2201001");
        assert_eq!(query.program, "Informatics");
        assert_eq!(query.gpa, 3.2);
        assert_eq!(query.history, vec![HistoryEntry::new("MATH101", "A")]);
        assert_eq!(query.target_term, "5");
        assert_eq!(query.credit_cap_override, None);
    }

    #[test]
    fn test_numeric_strings_and_numbers_accepted() {
        let mut payload = valid_payload();
        payload["gpa"] = json!("2.75");
        payload["targetTerm"] = json!(5);
        payload["studentId"] = json!(2201001);
        payload["creditCapOverride"] = json!(12);

        let query = RecommendationQuery::from_payload(&payload).unwrap();
        assert_eq!(query.gpa, 2.75);
        assert_eq!(query.target_term, "5");
        assert_eq!(query.student_id, "2201001");
        assert_eq!(query.credit_cap_override, Some(12));
    }

    #[test]
    fn test_missing_fields_are_listed() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("program");
        payload.as_object_mut().unwrap().remove("targetTerm");

        let msg = expect_invalid(payload);
        assert!(msg.contains("program"));
        assert!(msg.contains("targetTerm"));
        assert!(!msg.contains("gpa"));
    }

    #[test]
    fn test_falsy_fields_count_as_missing() {
        for (field, value) in [
            ("studentId", json!("")),
            ("gpa", json!(0)),
            ("history", json!([])),
            ("targetTerm", json!(null)),
        ] {
            let mut payload = valid_payload();
            payload[field] = value;
            let msg = expect_invalid(payload);
            assert!(msg.contains(field), "{field} should be reported missing");
        }
    }

    #[test]
    fn test_non_numeric_gpa_rejected() {
        let mut payload = valid_payload();
        payload["gpa"] = json!("excellent");
        assert!(expect_invalid(payload).contains("gpa"));
    }

    #[test]
    fn test_negative_credit_cap_rejected() {
        let mut payload = valid_payload();
        payload["creditCapOverride"] = json!(-3);
        assert!(expect_invalid(payload).contains("creditCapOverride"));
    }

    #[test]
    fn test_malformed_history_item_rejected() {
        let mut payload = valid_payload();
        payload["history"] = json!([{"code": "MATH101"}]);
        assert!(expect_invalid(payload).contains("History item 0"));
    }

    #[test]
    fn test_non_object_body_rejected() {
        expect_invalid(json!(["not", "an", "object"]));
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let response = RecommendationResponse {
            total_recommended_credits: 3,
            recommendations: vec![Recommendation {
                code: "CS330".to_string(),
                name: "Machine Learning".to_string(),
                credits: 3,
                offering_program: None,
                score: 4.0,
                rationale: "Recommended".to_string(),
                career_tags: vec!["Data Scientist".to_string()],
            }],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["totalRecommendedCredits"], 3);
        assert_eq!(json["recommendations"][0]["offeringProgram"], Value::Null);
        assert_eq!(json["recommendations"][0]["careerTags"][0], "Data Scientist");
    }
}
