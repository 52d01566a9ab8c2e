pub use errors::RouteError;
pub use health_check::health_check;
pub use index::index;
pub use newsletter_by_id::{
    delete_newsletter,
    get_newsletter,
    update_newsletter,
};
pub use newsletters::{
    create_newsletter,
    list_newsletters,
};
pub use representation::NewsletterRepresentation;

mod errors;
mod health_check;
mod index;
mod newsletter_by_id;
mod newsletters;
mod representation;
