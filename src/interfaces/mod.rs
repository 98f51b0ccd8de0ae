//! Edges of the crate: the promise handed to the host layer and the JSON
//! lines format used by the command line replay tool.

pub mod bridge;
pub mod json;
