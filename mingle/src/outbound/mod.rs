//! Outbound adapters implementing the client service ports.
//!
//! Adapters are thin translators between the ports and the REST API: they
//! build requests, map HTTP failures into `ServiceError`, and decode JSON
//! bodies. They contain no business logic.

pub mod http;
