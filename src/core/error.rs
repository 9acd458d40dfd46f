use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::NotFound(_) => 404,
            _ => 500,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Internal details stay in the log.
        let message = if status.is_server_error() {
            error!("Request failed: {}", self);
            "Something went wrong".to_string()
        } else {
            self.to_string()
        };

        let body = format!(
            "<!DOCTYPE html>\n<html>\n<head><title>{code}</title></head>\n<body>\n<h1>{code}</h1>\n<p>{message}</p>\n<p><a href=\"/\">Back to list</a></p>\n</body>\n</html>\n",
            code = status,
            message = handlebars::html_escape(&message),
        );

        (status, Html(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NotFound("board 1".to_string()).status_code(), 404);
        assert_eq!(AppError::Database(sqlx::Error::RowNotFound).status_code(), 500);
    }

    #[test]
    fn test_not_found_response() {
        let response = AppError::NotFound("board 7".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_response() {
        let response = AppError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
