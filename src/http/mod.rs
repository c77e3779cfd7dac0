//! HTTP protocol layer module
//!
//! Response builders shared by the API handlers and the router.

pub mod response;

pub use response::{
    build_404_response, build_405_response, build_413_response, build_body_response,
    build_options_response, finish_response, json_response,
};
