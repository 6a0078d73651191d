pub mod dashboard;
mod error;

pub use error::ApiError;
