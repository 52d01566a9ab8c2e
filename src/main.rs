use newsletter_api::app::{
    load_configuration,
    setup_tracing,
    NewsletterApp,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    setup_tracing("newsletter-api".into(), "info".into());
    let configuration = load_configuration().expect("error loading configuration");
    let app = NewsletterApp::from(configuration).await?;
    app.server?.await
}
