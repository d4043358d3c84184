//! Render Descriptors
//!
//! Handlers do not render HTML. They either redirect or hand back a
//! [`View`]: a template name plus the `fields` and `errors` mappings a
//! template would be rendered with, serialized as JSON.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Map, Value};

/// Template identifier plus its named values
#[derive(Debug, Clone, Serialize)]
pub struct View {
    view: &'static str,
    fields: Value,
    errors: Value,
    #[serde(skip)]
    status: StatusCode,
}

impl View {
    pub fn new(view: &'static str) -> Self {
        Self {
            view,
            fields: Value::Object(Map::new()),
            errors: Value::Object(Map::new()),
            status: StatusCode::OK,
        }
    }

    /// Named values for the template
    ///
    /// Anything that does not serialize to a JSON object is ignored.
    pub fn with_fields(mut self, fields: impl Serialize) -> Self {
        if let Ok(value @ Value::Object(_)) = serde_json::to_value(fields) {
            self.fields = value;
        }
        self
    }

    /// Field errors, keyed by field name
    pub fn with_errors(mut self, errors: impl Serialize) -> Self {
        if let Ok(value @ Value::Object(_)) = serde_json::to_value(errors) {
            self.errors = value;
        }
        self
    }

    /// Mark as the re-rendered form of a rejected submission (422)
    pub fn rejected(mut self) -> Self {
        self.status = StatusCode::UNPROCESSABLE_ENTITY;
        self
    }

    pub fn name(&self) -> &'static str {
        self.view
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}
