use chrono::{
    DateTime,
    Utc,
};
use serde::Serialize;

use crate::domain::{
    AppBaseUrl,
    Newsletter,
    ResourceLinks,
};

/// The public shape of a newsletter record: a subset of the stored fields
/// plus navigation links. `id` and `body` are never exposed.
#[derive(Debug, Serialize)]
pub struct NewsletterRepresentation {
    pub title: String,
    pub published_at: DateTime<Utc>,
    pub url: ResourceLinks,
}

impl NewsletterRepresentation {
    pub fn from_record(record: &Newsletter, base_url: &AppBaseUrl) -> Self {
        Self {
            title: record.title.clone(),
            published_at: record.published_at,
            url: ResourceLinks::for_record(base_url, record.id),
        }
    }

    /// List form: the same per-record shape, input order preserved.
    pub fn from_records(records: &[Newsletter], base_url: &AppBaseUrl) -> Vec<Self> {
        records
            .iter()
            .map(|record| Self::from_record(record, base_url))
            .collect()
    }
}
