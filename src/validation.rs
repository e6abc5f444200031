//! Draft Validation
//!
//! Field checks and payload construction for the edit dialog.

use crate::models::TaxRecord;

/// Per-field error messages for the edit form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub country: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.country.is_none()
    }
}

/// Check the draft fields before a save attempt
pub fn validate_draft(name: &str, country: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if name.trim().is_empty() {
        errors.name = Some("Name is required".to_string());
    }
    if country.is_empty() {
        errors.country = Some("Country is required".to_string());
    }

    errors
}

/// Build the update payload: the full original record with the edited
/// fields overwritten. The store expects the complete record back, so
/// untouched fields are sent unchanged.
pub fn build_update_payload(record: &TaxRecord, name: &str, country: &str) -> TaxRecord {
    TaxRecord {
        name: name.trim().to_string(),
        country: country.to_string(),
        ..record.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn make_record() -> TaxRecord {
        TaxRecord {
            id: "7".to_string(),
            name: "Alice Kim".to_string(),
            gender: Gender::Female,
            request_date: "2024-03-11T00:00:00Z".to_string(),
            country: "Canada".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        let errors = validate_draft("Alice K.", "France");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let errors = validate_draft("", "France");
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
        assert!(errors.country.is_none());
    }

    #[test]
    fn test_whitespace_only_name_is_rejected() {
        let errors = validate_draft("   ", "France");
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
    }

    #[test]
    fn test_unset_country_is_rejected() {
        let errors = validate_draft("Alice K.", "");
        assert_eq!(errors.country.as_deref(), Some("Country is required"));
        assert!(errors.name.is_none());
    }

    #[test]
    fn test_both_fields_can_fail_at_once() {
        let errors = validate_draft(" ", "");
        assert!(errors.name.is_some());
        assert!(errors.country.is_some());
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_payload_overwrites_edited_fields_and_trims_name() {
        let record = make_record();
        let payload = build_update_payload(&record, "  Alice K.  ", "France");

        assert_eq!(payload.name, "Alice K.");
        assert_eq!(payload.country, "France");
    }

    #[test]
    fn test_payload_carries_untouched_fields_unchanged() {
        let record = make_record();
        let payload = build_update_payload(&record, "Alice K.", "France");

        assert_eq!(payload.id, record.id);
        assert_eq!(payload.gender, record.gender);
        assert_eq!(payload.request_date, record.request_date);
    }
}
