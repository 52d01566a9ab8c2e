pub use app_base_url::AppBaseUrl;
pub use errors::MalformedInput;
pub use newsletter::{
    NewNewsletter,
    Newsletter,
    NewsletterUpdate,
};
pub use newsletter_body::NewsletterBody;
pub use newsletter_title::NewsletterTitle;
pub use resource_links::ResourceLinks;

mod app_base_url;
mod errors;
mod newsletter;
mod newsletter_body;
mod newsletter_title;
mod resource_links;
