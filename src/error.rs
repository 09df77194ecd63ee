//! Client Errors
//!
//! Every failure ends up as a toast at the call site; the variants only
//! exist so logs say what actually went wrong.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, DNS...)
    #[error("request failed: {0}")]
    Transport(String),
    /// Any non-2xx response
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    /// Rejected before sending
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Text for the failure toast: validation messages verbatim,
    /// `rejected` when the backend said no, `failed` for everything else
    pub fn toast_message(&self, rejected: &str, failed: &str) -> String {
        match self {
            ApiError::Validation(message) => message.clone(),
            ApiError::Status { .. } => rejected.to_string(),
            _ => failed.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status {
                status: status.as_u16(),
                body: String::new(),
            }
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Encode(err.to_string())
    }
}

/// Form validation failures, shown verbatim to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Заполните все поля")]
    MissingFields,
    #[error("Пользователь не найден")]
    MissingCreator,
    #[error("Допустимы только изображения")]
    NotAnImage,
    #[error("Укажите дату рождения в формате ДД.ММ.ГГГГ")]
    InvalidBirthDate,
}

impl From<FormError> for ApiError {
    fn from(err: FormError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status { status: 500, body: "boom".to_string() };
        assert_eq!(err.to_string(), "backend returned 500: boom");
    }

    #[test]
    fn test_form_error_becomes_local_validation() {
        let err: ApiError = FormError::MissingFields.into();
        assert_eq!(err, ApiError::Validation("Заполните все поля".to_string()));
    }

    #[test]
    fn test_toast_message_by_kind() {
        let rejected = "Ошибка при сохранении данных";
        let failed = "Не удалось сохранить изменения";
        let status = ApiError::Status { status: 400, body: String::new() };
        assert_eq!(status.toast_message(rejected, failed), rejected);
        let offline = ApiError::Transport("offline".to_string());
        assert_eq!(offline.toast_message(rejected, failed), failed);
        let invalid: ApiError = FormError::NotAnImage.into();
        assert_eq!(invalid.toast_message(rejected, failed), "Допустимы только изображения");
    }
}
