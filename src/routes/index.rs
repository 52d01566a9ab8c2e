use actix_web::{
    HttpResponse,
    Responder,
};
use serde_json::json;

/// Static welcome payload for the API root.
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({ "index": "Welcome to the Newsletter RESTful API" }))
}
