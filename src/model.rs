//! Professor entity and the creation payload clients send.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A stored professor record. Serialized with camelCase keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professor {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub second_last_name: String,
    pub age: i32,
    pub degree: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of POST and PUT requests. Missing fields decode to zero values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateProfessorRequest {
    pub first_name: String,
    pub last_name: String,
    pub second_last_name: String,
    pub age: i32,
    pub degree: String,
}

impl Professor {
    /// Build an unsaved professor (id 0) with both timestamps set to the same UTC instant,
    /// truncated to the microsecond precision PostgreSQL stores.
    pub fn from_request(req: CreateProfessorRequest) -> Self {
        let now = Utc::now().trunc_subsecs(6);
        Professor {
            id: 0,
            first_name: req.first_name,
            last_name: req.last_name,
            second_last_name: req.second_last_name,
            age: req.age,
            degree: req.degree,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_request_stamps_equal_timestamps() {
        let before = Utc::now();
        let p = Professor::from_request(CreateProfessorRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            second_last_name: "King".into(),
            age: 36,
            degree: "Mathematics".into(),
        });
        assert_eq!(p.id, 0);
        assert_eq!(p.created_at, p.updated_at);
        assert!(p.created_at >= before.trunc_subsecs(6));
        assert_eq!(p.created_at.timestamp_subsec_nanos() % 1_000, 0);
        assert_eq!(p.first_name, "Ada");
        assert_eq!(p.age, 36);
    }

    #[test]
    fn missing_fields_decode_to_zero_values() {
        let req: CreateProfessorRequest = serde_json::from_str(r#"{"firstName":"Ada"}"#).unwrap();
        assert_eq!(req.first_name, "Ada");
        assert_eq!(req.last_name, "");
        assert_eq!(req.age, 0);
    }

    #[test]
    fn wrong_typed_field_fails_to_decode() {
        let res = serde_json::from_str::<CreateProfessorRequest>(r#"{"age":"old"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let p = Professor::from_request(CreateProfessorRequest::default());
        let v = serde_json::to_value(&p).unwrap();
        for key in ["id", "firstName", "lastName", "secondLastName", "age", "degree", "createdAt", "updatedAt"] {
            assert!(v.get(key).is_some(), "missing key {key}");
        }
    }
}
