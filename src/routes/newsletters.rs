use std::convert::TryInto;

use actix_web::{
    web,
    HttpResponse,
};
use serde::Deserialize;

use crate::domain::{
    AppBaseUrl,
    MalformedInput,
    NewNewsletter,
};
use crate::routes::{
    NewsletterRepresentation,
    RouteError,
};
use crate::store::NewsletterStore;

#[derive(Deserialize)]
pub struct CreateFormData {
    title: String,
    body: String,
}

#[tracing::instrument(name = "listing all newsletters", skip(store, base_url))]
pub async fn list_newsletters(
    store: web::Data<NewsletterStore>,
    base_url: web::Data<AppBaseUrl>,
) -> Result<HttpResponse, RouteError> {
    let records = store.list_all().await?;
    Ok(HttpResponse::Ok().json(NewsletterRepresentation::from_records(&records, &base_url)))
}

#[tracing::instrument(
    name = "creating new newsletter",
    skip(form, store, base_url),
    fields(title = %form.title)
)]
pub async fn create_newsletter(
    form: web::Form<CreateFormData>,
    store: web::Data<NewsletterStore>,
    base_url: web::Data<AppBaseUrl>,
) -> Result<HttpResponse, RouteError> {
    let new_newsletter = build_new_newsletter(form)?;
    let record = store.create(&new_newsletter).await?;
    Ok(HttpResponse::Created().json(NewsletterRepresentation::from_record(&record, &base_url)))
}

#[tracing::instrument(name = "validating creation form data", skip(form))]
fn build_new_newsletter(form: web::Form<CreateFormData>) -> Result<NewNewsletter, MalformedInput> {
    Ok(NewNewsletter {
        title: form.0.title.try_into().map_err(|e| {
            tracing::error!("{:?}", e);
            e
        })?,
        body: form.0.body.try_into().map_err(|e| {
            tracing::error!("{:?}", e);
            e
        })?,
    })
}
