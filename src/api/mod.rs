//! Remote API Bindings
//!
//! HTTP wrappers for the remote store, organized by resource.

mod countries;
mod taxes;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Remote store host; every resource lives under this base path
const BASE_URL: &str = "https://685013d7e7c42cfd17974a33.mockapi.io";

fn url(path: &str) -> String {
    format!("{}{}", BASE_URL, path)
}

/// GET a JSON resource; any non-2xx status is an error
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&url(path))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response.json().await.map_err(|e| e.to_string())
}

/// PUT a JSON body and decode the JSON response
async fn put_json<B, T>(path: &str, body: &B) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = Request::put(&url(path))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response.json().await.map_err(|e| e.to_string())
}

// Re-export all public items
pub use countries::*;
pub use taxes::*;
