pub mod macros;
pub mod prelude;
mod request;
mod response;
mod setup;

pub use request::*;
pub use response::*;
pub use setup::*;
