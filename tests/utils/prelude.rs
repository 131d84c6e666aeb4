pub(crate) use super::macros::assert_error;
pub use super::{Env, setup};
pub use air_guitar_backend::error;
pub use assert_json_diff::assert_json_include;
pub use http::StatusCode;
pub use serde_json::{Value, json};
