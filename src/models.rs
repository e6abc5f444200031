//! Frontend Models
//!
//! Data structures matching the remote store's wire format.

use serde::{Deserialize, Serialize};

/// One customer/tax entry (matches the remote store)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRecord {
    pub id: String,
    pub name: String,
    pub gender: Gender,
    /// ISO-8601 timestamp, display-only
    #[serde(rename = "requestDate")]
    pub request_date: String,
    pub country: String,
}

/// Gender attribute, serialized as "Male"/"Female" on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Gender::Male => "badge badge-male",
            Gender::Female => "badge badge-female",
        }
    }
}

/// Country reference entry for the edit dialog's selector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_record_decodes_wire_fields() {
        let json = r#"{
            "id": "7",
            "name": "Alice Kim",
            "gender": "Female",
            "requestDate": "2024-03-11T00:00:00Z",
            "country": "Canada"
        }"#;

        let record: TaxRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "7");
        assert_eq!(record.gender, Gender::Female);
        assert_eq!(record.request_date, "2024-03-11T00:00:00Z");
    }

    #[test]
    fn test_gender_serializes_as_wire_strings() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), r#""Male""#);
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), r#""Female""#);
    }

    #[test]
    fn test_record_round_trip_keeps_camel_case_date() {
        let record = TaxRecord {
            id: "1".to_string(),
            name: "Bob".to_string(),
            gender: Gender::Male,
            request_date: "2024-01-02T00:00:00Z".to_string(),
            country: "France".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""requestDate":"2024-01-02T00:00:00Z""#));
    }
}
