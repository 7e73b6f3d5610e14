//! # Polls Shared
//!
//! Request bodies, page contexts and error documents shared by the HTTP layer.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
