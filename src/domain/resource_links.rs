use serde::Serialize;

use crate::domain::AppBaseUrl;

/// The navigation links attached to every serialized newsletter record:
/// `self` points at the record, `collection` at the listing endpoint.
#[derive(Debug, Serialize)]
pub struct ResourceLinks {
    #[serde(rename = "self")]
    pub own: String,
    pub collection: String,
}

impl ResourceLinks {
    /// Build the links for the record `id` from the application base url
    /// alone, independent of the route table.
    pub fn for_record(base_url: &AppBaseUrl, id: i64) -> Self {
        let base = base_url.0.as_str().trim_end_matches('/');
        Self {
            own: format!("{}/newsletters/{}", base, id),
            collection: format!("{}/newsletters", base),
        }
    }
}
