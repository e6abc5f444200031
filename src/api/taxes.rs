//! Tax Record Endpoints
//!
//! Bindings for the `/taxes` resource.

use crate::models::TaxRecord;

use super::{get_json, put_json};

/// Fetch all tax records, in store order
pub async fn list_taxes() -> Result<Vec<TaxRecord>, String> {
    get_json("/taxes").await
}

/// Replace a record. The body carries the full record, not a diff.
pub async fn update_tax(id: &str, record: &TaxRecord) -> Result<TaxRecord, String> {
    put_json(&format!("/taxes/{}", id), record).await
}
