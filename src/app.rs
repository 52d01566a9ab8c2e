pub use configuration::*;
pub use startup::NewsletterApp;
pub use telemetry::setup_tracing;

mod configuration;
mod startup;
mod telemetry;
