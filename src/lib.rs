pub mod api;
pub mod completion;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod errors;
pub mod services;

pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use errors::AppError;
