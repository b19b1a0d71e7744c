//! Custom Axum extractors.
//!
//! Every extractor here rejects with an empty body so malformed input never
//! leaks framework error text into responses. Malformed input is `400`; an
//! oversized body is `413`.

mod id_path;
mod json_body;
mod rejection;

pub use id_path::*;
pub use json_body::*;
pub use rejection::*;
