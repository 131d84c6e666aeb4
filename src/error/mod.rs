mod constants;

pub use constants::*;

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use bytes::{BufMut, Bytes, BytesMut};
use sea_orm::DbErr;
use serde_json::{Value, json};

/// Constant-constructible request error: an HTTP status, a stable machine
/// readable code, a human readable message, and optional field-level details
/// (filled in by the validating extractors).
#[derive(Debug)]
pub struct Error {
    status: StatusCode,
    code: &'static str,
    message: &'static str,
    details: Option<Value>,
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl Error {
    #[inline]
    const fn new(status: StatusCode, code: &'static str, message: &'static str) -> Error {
        Self {
            status,
            code,
            message,
            details: None,
        }
    }

    #[inline]
    pub fn with_details(mut self, details: Value) -> Error {
        self.details = Some(details);
        self
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    #[inline]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[inline]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(128).writer();

        let mut body = json!({
            "code": self.code(),
            "error": self.message(),
        });

        if let Some(details) = &self.details {
            body["details"] = details.clone();
        }

        serde_json::to_writer(&mut buf, &body).expect("failed to serialize error");

        buf.into_inner().freeze()
    }
}

impl IntoResponse for Error {
    #[inline]
    fn into_response(self) -> Response {
        let buf = self.to_bytes();
        let mut res = (self.status, buf).into_response();

        res.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
        );

        res
    }
}

impl From<DbErr> for Error {
    #[inline]
    fn from(error: DbErr) -> Self {
        error!("database error: {:?}", error);
        constants::DATABASE_ERROR
    }
}

macro_rules! const_error {
    ($name:ident, $status:ident, $code:literal, $msg:literal) => {
        pub const $name: $crate::error::Error = $crate::error::Error::new(
            ::axum::http::StatusCode::$status,
            concat!("ERR_", $code),
            $msg,
        );
    };
}

#[allow(clippy::useless_attribute)]
#[allow(clippy::needless_pub_self)]
pub(self) use const_error;
