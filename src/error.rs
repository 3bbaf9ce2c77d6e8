use aws_sdk_dynamodb::config::http::HttpResponse;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::query::QueryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Clone, Debug, Serialize, strum_macros::AsRefStr)]
#[serde(tag = "type", content = "data")]
pub enum Error {
    // -- Request errors.
    MissingKeyCondition,

    // -- Store errors.
    StoreQuery(String),
    Deserialization(String),
    Serialization(String),

    // -- Startup errors.
    ConfigMissing { var: String },
    ConfigInvalid { var: String, value: String },
    Io(String),
}

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        match self {
            Self::MissingKeyCondition => write!(fmt, "Invalid key_condition parameter"),
            Self::StoreQuery(msg) => write!(fmt, "Error in DynamoDB query: {msg}"),
            Self::Deserialization(msg) => write!(fmt, "Error unmarshalling DynamoDB item: {msg}"),
            Self::Serialization(msg) => write!(fmt, "Error converting items to JSON: {msg}"),
            _ => write!(fmt, "{self:?}"),
        }
    }
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status_code, client_error) = self.client_status_and_error();

        if status_code.is_server_error() {
            tracing::error!(kind = self.as_ref(), "{}", self);
        }

        let response_body = serde_json::json!({
            "error": client_error.as_ref(),
            "details": self.to_string()
        });

        (status_code, Json(response_body)).into_response()
    }
}

impl Error {
    pub fn client_status_and_error(&self) -> (StatusCode, ClientError) {
        match self {
            Self::MissingKeyCondition => (StatusCode::BAD_REQUEST, ClientError::INVALID_PARAMS),

            Self::StoreQuery(_)
            | Self::Deserialization(_)
            | Self::Serialization(_)
            | Self::ConfigMissing { .. }
            | Self::ConfigInvalid { .. }
            | Self::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ClientError::SERVICE_ERROR,
            ),
        }
    }
}

#[derive(Debug, strum_macros::AsRefStr)]
#[allow(non_camel_case_types)]
pub enum ClientError {
    INVALID_PARAMS,
    SERVICE_ERROR,
}

impl From<SdkError<QueryError, HttpResponse>> for Error {
    fn from(err: SdkError<QueryError, HttpResponse>) -> Self {
        Error::StoreQuery(DisplayErrorContext(&err).to_string())
    }
}

impl From<serde_dynamo::Error> for Error {
    fn from(err: serde_dynamo::Error) -> Self {
        Error::Deserialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
