//! HTTP middleware stack: CORS, per-request trace IDs, panic capture.

pub mod cors;
pub mod panic;
pub mod trace;
