//! Types shared by the Bistro feature crates

#![allow(clippy::must_use_candidate)]

mod error;

pub use error::{ErrorBody, ErrorDetails, HttpError};
