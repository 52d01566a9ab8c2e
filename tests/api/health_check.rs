use crate::helpers::{
    send_get_request,
    spawn_app,
};

#[actix_rt::test]
async fn health_check_succeeds_with_empty_body() {
    let endpoint = format!("{}/health_check", spawn_app().await.address);
    let response = send_get_request(&endpoint).await;
    assert_eq!(200, response.status().as_u16());
    assert_eq!(Some(0), response.content_length());
}
