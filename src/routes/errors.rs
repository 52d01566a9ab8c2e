use actix_web::http::StatusCode;
use actix_web::{
    HttpResponse,
    ResponseError,
};
use custom_error::custom_error;
use serde_json::json;

use crate::domain::MalformedInput;

custom_error! {
///! Error inside route handler
pub RouteError
    InvalidFormData{source:MalformedInput} = "Invalid body data: {source}",
    RecordNotFound{id:i64} = "no newsletter record with id: {id}",
    DatabaseError{source: sqlx::Error} = "{source}",
}

impl ResponseError for RouteError {
    fn status_code(&self) -> StatusCode {
        match self {
            RouteError::InvalidFormData { .. } => StatusCode::BAD_REQUEST,
            RouteError::RecordNotFound { .. } => StatusCode::NOT_FOUND,
            RouteError::DatabaseError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            RouteError::InvalidFormData { .. } => {
                HttpResponse::BadRequest().json(json!({ "message": self.to_string() }))
            }
            RouteError::RecordNotFound { .. } => {
                HttpResponse::NotFound().json(json!({ "message": self.to_string() }))
            }
            RouteError::DatabaseError { .. } => HttpResponse::InternalServerError().finish(),
        }
    }
}
