//! HTTP surface: REST API handlers, error mapping, and the rendered page.

pub mod error;
pub mod handlers;
pub mod pages;


use crate::task::ports::TaskRepository;
use actix_web::web;
use error::ApiError;
use mockable::Clock;

/// Registers every route of the application: the REST API, the index page,
/// and the embedded static assets.
pub fn configure_app<R, C>(cfg: &mut web::ServiceConfig)
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    cfg.service(
        web::resource("/tasks")
            .route(web::get().to(handlers::list_tasks::<R, C>))
            .route(web::post().to(handlers::create_task::<R, C>)),
    )
    .service(
        web::resource("/tasks/{id}")
            .route(web::get().to(handlers::get_task::<R, C>))
            .route(web::put().to(handlers::update_task::<R, C>))
            .route(web::delete().to(handlers::delete_task::<R, C>)),
    )
    .route("/", web::get().to(pages::index))
    .route("/static/app.js", web::get().to(pages::app_js))
    .route("/static/styles.css", web::get().to(pages::styles_css));
}

/// JSON extractor configuration that reports malformed bodies in the same
/// `{"error": ...}` shape as every other failure.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::bad_request(format!("Invalid request body: {err}")).into()
    })
}
