use serde_json::{
    json,
    Value,
};

use crate::helpers::{
    send_get_request,
    spawn_app,
};

#[actix_rt::test]
async fn index_returns_the_welcome_payload() {
    let endpoint = format!("{}/", spawn_app().await.address);
    let response = send_get_request(&endpoint).await;
    assert_eq!(200, response.status().as_u16());
    assert_eq!(
        json!({ "index": "Welcome to the Newsletter RESTful API" }),
        response.json::<Value>().await.unwrap()
    );
}
