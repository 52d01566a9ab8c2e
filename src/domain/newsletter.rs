use chrono::{
    DateTime,
    Utc,
};

use crate::domain::newsletter_body::NewsletterBody;
use crate::domain::newsletter_title::NewsletterTitle;

/// One persisted newsletter record.
///
/// `id` is assigned by the store on creation and never reassigned;
/// `published_at` is set at creation and not mutable through the public
/// field set.
#[derive(Debug, sqlx::FromRow)]
pub struct Newsletter {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub published_at: DateTime<Utc>,
}

/// Validated creation fields for a newsletter record.
#[derive(Debug)]
pub struct NewNewsletter {
    pub title: NewsletterTitle,
    pub body: NewsletterBody,
}

/// The allow-list of fields a partial update may change.
///
/// Absent fields keep their stored value (merge semantics).
#[derive(Debug, Default)]
pub struct NewsletterUpdate {
    pub title: Option<NewsletterTitle>,
    pub body: Option<NewsletterBody>,
}
