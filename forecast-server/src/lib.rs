//! Router and handlers for the forecast gateway, exposed as a library so
//! integration tests can drive the HTTP surface in-process.

pub mod routes;
