//! HTTP protocol layer
//!
//! Protocol-level helpers shared by the request handlers: MIME lookup,
//! conditional-request evaluation, and response builders.

pub mod conditional;
pub mod mime;
pub mod response;

pub use response::{
    build_file_response, build_method_not_allowed_response, build_not_found_response,
    build_not_modified_response, build_options_response, json_response,
};
