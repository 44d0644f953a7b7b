// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use super::flash::{self, FlashMessage};

pub const LOGIN_PATH: &str = "/accounts/login/";

/// Error for the JSON API surface.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Forbidden(msg) => Self::new(StatusCode::FORBIDDEN, msg),
            ApplicationError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApplicationError::Domain(domain_err) => match domain_err {
                DomainError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
                DomainError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
                DomainError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
                DomainError::Persistence(msg) => {
                    tracing::error!(error = %msg, "persistence failure");
                    Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
                }
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

/// Error for the page surface.
///
/// Authentication problems send the browser to the login view and
/// permission problems to `fallback`, both with an error flash. Form
/// problems are answered in place so the form can be shown again.
#[derive(Debug)]
pub struct PageError {
    error: ApplicationError,
    fallback: String,
    form: Option<&'static str>,
}

impl PageError {
    pub fn new(error: ApplicationError, fallback: impl Into<String>) -> Self {
        Self {
            error,
            fallback: fallback.into(),
            form: None,
        }
    }

    pub fn with_form(mut self, form: &'static str) -> Self {
        self.form = Some(form);
        self
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FormErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
    pub errors: Vec<String>,
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let detail = self.error.detail().to_string();
        match self.error {
            ApplicationError::Unauthorized(_) => {
                flash::redirect(LOGIN_PATH, FlashMessage::error(detail))
            }
            ApplicationError::Forbidden(_) => {
                flash::redirect(&self.fallback, FlashMessage::error(detail))
            }
            ApplicationError::Validation(_)
            | ApplicationError::Domain(DomainError::Validation(_)) => {
                let body = FormErrors {
                    form: self.form.map(str::to_string),
                    errors: vec![detail],
                };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            ApplicationError::Conflict(_) | ApplicationError::Domain(DomainError::Conflict(_)) => {
                let body = FormErrors {
                    form: self.form.map(str::to_string),
                    errors: vec![detail],
                };
                (StatusCode::CONFLICT, Json(body)).into_response()
            }
            other => HttpError::from_error(other).into_response(),
        }
    }
}

pub type PageResult<T = Response> = Result<T, PageError>;

pub trait IntoPageResult<T> {
    /// Map failures for a page whose permission fallback is `fallback`.
    fn or_redirect(self, fallback: &str) -> PageResult<T>;

    /// Same as [`IntoPageResult::or_redirect`], tagging validation errors
    /// with the submitted form's name.
    fn for_form(self, form: &'static str, fallback: &str) -> PageResult<T>;
}

impl<T> IntoPageResult<T> for ApplicationResult<T> {
    fn or_redirect(self, fallback: &str) -> PageResult<T> {
        self.map_err(|err| PageError::new(err, fallback))
    }

    fn for_form(self, form: &'static str, fallback: &str) -> PageResult<T> {
        self.map_err(|err| PageError::new(err, fallback).with_form(form))
    }
}
