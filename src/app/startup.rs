use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{
    web,
    App,
    HttpServer,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing_actix_web::TracingLogger;
use url::Url;

use crate::app::configuration::{
    DatabaseSettings,
    Settings,
};
use crate::domain::AppBaseUrl;
use crate::routes::*;
use crate::store::NewsletterStore;

pub struct NewsletterApp {
    pub server: Result<Server, std::io::Error>,
    pub port: u16,
}

impl NewsletterApp {
    pub async fn from(configuration: Settings) -> Result<NewsletterApp, std::io::Error> {
        let tcp_listener = TcpListener::bind(configuration.application.binding_address())?;
        let port = tcp_listener.local_addr()?.port();
        let store = web::Data::new(NewsletterStore::new(
            NewsletterApp::postgres_pool(configuration.database).await,
        ));
        let base_url =
            web::Data::new(NewsletterApp::app_base_url(&configuration.application.base_url));

        // HttpServer handles all transport level concerns
        let server = HttpServer::new(move || {
            // App is where all the application logic lives: routing, middlewares, request
            // handlers, etc.
            // The store and the base url are registered as application state: they are
            // built once here and injected into every handler that extracts them.
            App::new()
                .wrap(TracingLogger::default())
                .route("/", web::get().to(index))
                .route("/health_check", web::get().to(health_check))
                .route("/newsletters", web::get().to(list_newsletters))
                .route("/newsletters", web::post().to(create_newsletter))
                .route("/newsletters/{id}", web::get().to(get_newsletter))
                .route("/newsletters/{id}", web::patch().to(update_newsletter))
                .route("/newsletters/{id}", web::delete().to(delete_newsletter))
                .app_data(store.clone())
                .app_data(base_url.clone())
        })
        .backlog(configuration.application.max_pending_connections)
        .listen(tcp_listener)
        .map(HttpServer::run);
        Ok(NewsletterApp { port, server })
    }

    pub async fn postgres_pool(database_config: DatabaseSettings) -> PgPool {
        PgPoolOptions::new()
            .connect_timeout(std::time::Duration::from_secs(
                database_config.connect_timeout_seconds,
            ))
            .max_connections(database_config.max_db_connections)
            .connect_with(database_config.database_connection_options())
            .await
            .unwrap_or_else(|_| {
                panic!(
                    "error creating postgres connection pool from config: {:?}",
                    database_config
                )
            })
    }

    fn app_base_url(base_url: &str) -> AppBaseUrl {
        Url::parse(base_url)
            .unwrap_or_else(|e| panic!("invalid application base url: {}: {}", base_url, e))
            .into()
    }
}
