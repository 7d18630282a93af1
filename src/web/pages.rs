//! Server-rendered page and embedded static assets.
//!
//! The UI is a single minijinja-rendered page plus a vanilla-JS client; all
//! task behaviour goes through the REST API. The select options injected
//! here are the only data the template needs.

use crate::web::error::ApiError;
use actix_web::{HttpResponse, web};
use minijinja::Environment;
use serde::Serialize;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
const APP_JS: &str = include_str!("../../static/app.js");
const STYLES_CSS: &str = include_str!("../../static/styles.css");

/// Value/label pair for a `<select>` element.
#[derive(Debug, Clone, Serialize)]
struct SelectOption {
    value: &'static str,
    label: &'static str,
}

const STATUS_OPTIONS: [SelectOption; 3] = [
    SelectOption {
        value: "pending",
        label: "Pending",
    },
    SelectOption {
        value: "in-progress",
        label: "In Progress",
    },
    SelectOption {
        value: "completed",
        label: "Completed",
    },
];

const PRIORITY_OPTIONS: [SelectOption; 3] = [
    SelectOption {
        value: "low",
        label: "Low",
    },
    SelectOption {
        value: "medium",
        label: "Medium",
    },
    SelectOption {
        value: "high",
        label: "High",
    },
];

#[derive(Serialize)]
struct IndexContext {
    status_options: &'static [SelectOption],
    priority_options: &'static [SelectOption],
}

/// Renders the index page template.
#[derive(Clone)]
pub struct PageRenderer {
    environment: Environment<'static>,
}

impl PageRenderer {
    /// Builds the renderer with the embedded template compiled once.
    ///
    /// # Errors
    ///
    /// Returns a template error when the embedded page fails to parse.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut environment = Environment::new();
        environment.add_template("index.html", INDEX_TEMPLATE)?;
        Ok(Self { environment })
    }

    /// Renders the index page.
    ///
    /// # Errors
    ///
    /// Returns a template error when rendering fails.
    pub fn render_index(&self) -> Result<String, minijinja::Error> {
        let template = self.environment.get_template("index.html")?;
        template.render(IndexContext {
            status_options: &STATUS_OPTIONS,
            priority_options: &PRIORITY_OPTIONS,
        })
    }
}

/// GET `/` — serves the rendered single-page UI.
pub async fn index(renderer: web::Data<PageRenderer>) -> Result<HttpResponse, ApiError> {
    let html = renderer.render_index().map_err(|err| {
        log::error!("Failed to render page: {err}");
        ApiError::internal("Failed to render page")
    })?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

/// GET `/static/app.js` — serves the embedded client script.
pub async fn app_js() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(APP_JS)
}

/// GET `/static/styles.css` — serves the embedded stylesheet.
pub async fn styles_css() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(STYLES_CSS)
}
