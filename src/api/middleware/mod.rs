//! HTTP middleware and request extractors.
//!
//! Provides CORS, request tracing, client metadata extraction and a
//! non-rejecting JSON body extractor.

pub mod client_info;
pub mod cors;
pub mod lenient_json;
pub mod tracing;
