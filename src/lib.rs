//! A RESTful CRUD API for newsletter records with HATEOAS navigation links.

pub mod app;
pub mod domain;
pub mod routes;
pub mod store;
