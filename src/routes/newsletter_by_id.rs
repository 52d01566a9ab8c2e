use std::convert::TryFrom;

use actix_web::{
    web,
    HttpResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{
    AppBaseUrl,
    MalformedInput,
    NewsletterBody,
    NewsletterTitle,
    NewsletterUpdate,
};
use crate::routes::{
    NewsletterRepresentation,
    RouteError,
};
use crate::store::NewsletterStore;

/// The allow-list of mutable fields: a form body naming anything else is
/// rejected before the handler runs. `id` and `published_at` are not
/// updatable.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateFormData {
    title: Option<String>,
    body: Option<String>,
}

#[tracing::instrument(
    name = "fetching newsletter by id",
    skip(id, store, base_url),
    fields(id = %id)
)]
pub async fn get_newsletter(
    id: web::Path<i64>,
    store: web::Data<NewsletterStore>,
    base_url: web::Data<AppBaseUrl>,
) -> Result<HttpResponse, RouteError> {
    let id = id.into_inner();
    let record = store
        .get(id)
        .await?
        .ok_or(RouteError::RecordNotFound { id })?;
    Ok(HttpResponse::Ok().json(NewsletterRepresentation::from_record(&record, &base_url)))
}

#[tracing::instrument(
    name = "updating newsletter fields",
    skip(id, form, store, base_url),
    fields(id = %id)
)]
pub async fn update_newsletter(
    id: web::Path<i64>,
    form: web::Form<UpdateFormData>,
    store: web::Data<NewsletterStore>,
    base_url: web::Data<AppBaseUrl>,
) -> Result<HttpResponse, RouteError> {
    let id = id.into_inner();
    let update = build_update(form)?;
    let record = store
        .update(id, &update)
        .await?
        .ok_or(RouteError::RecordNotFound { id })?;
    Ok(HttpResponse::Ok().json(NewsletterRepresentation::from_record(&record, &base_url)))
}

#[tracing::instrument(
    name = "deleting newsletter",
    skip(id, store),
    fields(id = %id)
)]
pub async fn delete_newsletter(
    id: web::Path<i64>,
    store: web::Data<NewsletterStore>,
) -> Result<HttpResponse, RouteError> {
    let id = id.into_inner();
    if store.delete(id).await? {
        Ok(HttpResponse::Ok().json(json!({ "message": "record successfully deleted" })))
    } else {
        Err(RouteError::RecordNotFound { id })
    }
}

#[tracing::instrument(name = "validating update form data", skip(form))]
fn build_update(form: web::Form<UpdateFormData>) -> Result<NewsletterUpdate, MalformedInput> {
    let form = form.into_inner();
    Ok(NewsletterUpdate {
        title: form
            .title
            .map(NewsletterTitle::try_from)
            .transpose()
            .map_err(|e| {
                tracing::error!("{:?}", e);
                e
            })?,
        body: form
            .body
            .map(NewsletterBody::try_from)
            .transpose()
            .map_err(|e| {
                tracing::error!("{:?}", e);
                e
            })?,
    })
}
