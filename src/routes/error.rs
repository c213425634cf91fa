use crate::contacts::ContactError;
use crate::views;

use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

/// Everything a loader or action can fail with. Rendered as the error page.
#[derive(Debug)]
pub enum AppError {
    /// No route, or a loader found no record.
    NotFound,
    BadRequest(String),
    Contact(ContactError),
}

impl From<ContactError> for AppError {
    fn from(err: ContactError) -> Self {
        AppError::Contact(err)
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Contact(ContactError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Contact(ContactError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The line shown under "Sorry, an unexpected error has occurred."
    pub fn detail(&self) -> String {
        match self {
            AppError::BadRequest(message) => message.clone(),
            AppError::Contact(err @ ContactError::NotFound(_)) => err.to_string(),
            _ => self
                .status()
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
        }
    }

    pub fn log(&self) {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self);
        } else {
            tracing::debug!("Request rejected with {}: {}", status, self.detail());
        }
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// The standalone error page. Contact routes render theirs inside the layout.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        (self.status(), Html(views::error_page(&self.detail()))).into_response()
    }
}
