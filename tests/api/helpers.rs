use reqwest::Response;
use serde_json::Value;
use sqlx::{
    Connection,
    PgConnection,
    PgPool,
};
use uuid::Uuid;

use newsletter_api::app::{
    load_configuration,
    setup_tracing,
    DatabaseSettings,
    NewsletterApp,
};

// ensure the `tracing` is instantiated only once
lazy_static::lazy_static! {
 static ref TRACING: () = setup_tracing("test".into(),"debug".into());
}

pub struct TestApp {
    pub address: String,
    pub pool: PgPool,
}

/// When a `tokio` runtime is shut down all tasks spawned on it are dropped.
///
/// `actix_rt::test` spins up a new runtime at the beginning of each test case
/// and they shut down at the end of each test case.
pub async fn spawn_app() -> TestApp {
    lazy_static::initialize(&TRACING);
    if std::env::var("APP_ENVIRONMENT").is_err() {
        std::env::set_var("APP_ENVIRONMENT", "local");
    }

    let configuration = {
        let mut c = load_configuration().unwrap();
        c.database.name = Uuid::new_v4().to_string();
        c.application.port = 0;
        c
    };

    let postgres_pool = setup_test_database(configuration.database.clone()).await;

    let app = NewsletterApp::from(configuration)
        .await
        .expect("error building app");

    tokio::spawn(app.server.expect("error building server"));

    TestApp {
        // the request is done with the protocol:ip:port
        address: format!("http://127.0.0.1:{}", app.port),
        pool: postgres_pool,
    }
}

pub async fn send_get_request(endpoint: &str) -> Response {
    reqwest::Client::new()
        .get(endpoint)
        .send()
        .await
        .expect("Fail to execute get request")
}

pub async fn send_post_request(endpoint: &str, body: String) -> Response {
    reqwest::Client::new()
        .post(endpoint)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .send()
        .await
        .expect("Fail to execute post request")
}

pub async fn send_patch_request(endpoint: &str, body: String) -> Response {
    reqwest::Client::new()
        .patch(endpoint)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .send()
        .await
        .expect("Fail to execute patch request")
}

pub async fn send_delete_request(endpoint: &str) -> Response {
    reqwest::Client::new()
        .delete(endpoint)
        .send()
        .await
        .expect("Fail to execute delete request")
}

/// Create a record through the public API and return its serialized
/// representation.
pub async fn create_newsletter_record(test_app: &TestApp, title: &str, body: &str) -> Value {
    let endpoint = format!("{}/newsletters", test_app.address);
    let response = send_post_request(&endpoint, format!("title={}&body={}", title, body)).await;
    assert_eq!(201, response.status().as_u16());
    response
        .json::<Value>()
        .await
        .expect("invalid json in create response")
}

/// The numeric record id is only visible as the last segment of the `self`
/// link.
pub fn record_id_from_self_link(representation: &Value) -> i64 {
    representation["url"]["self"]
        .as_str()
        .expect("missing `self` link")
        .rsplit('/')
        .next()
        .unwrap()
        .parse()
        .expect("`self` link does not end with a numeric id")
}

async fn setup_test_database(database_settings: DatabaseSettings) -> PgPool {
    let mut connection =
        PgConnection::connect_with(&database_settings.pgserver_connection_options())
            .await
            .expect("error connecting to postgres");

    sqlx::query(&format!("CREATE DATABASE \"{}\"", database_settings.name))
        .execute(&mut connection)
        .await
        .expect("error creating test database");

    let connection_pool = NewsletterApp::postgres_pool(database_settings).await;

    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}
