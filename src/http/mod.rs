//! HTTP protocol layer module
//!
//! Response builders shared by the router and the author handler.

pub mod response;

pub use response::{
    build_404_response, build_405_response, build_health_response, build_json_response,
    build_options_response, build_text_response, strip_body, with_server_header,
};
