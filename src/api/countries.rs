//! Country Endpoints
//!
//! Bindings for the read-only `/countries` reference list.

use crate::models::Country;

use super::get_json;

/// Fetch the country reference list for the edit dialog's selector
pub async fn list_countries() -> Result<Vec<Country>, String> {
    get_json("/countries").await
}
