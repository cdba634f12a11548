//! # Quill Shared
//!
//! Wire types shared between the API surface and its clients.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
