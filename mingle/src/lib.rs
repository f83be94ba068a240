//! Social client core and friend-request API.
//!
//! - [`domain`]: identifiers, profile validators, the friend-request status
//!   machine, and the ports the adapters implement.
//! - [`stores`]: observable page state (onboarding, user search).
//! - [`pages`]: view-models deciding what each page renders.
//! - [`outbound`]: reqwest adapters for the REST API.
//! - [`inbound`]: actix-web handlers serving the friend-request routes.

pub mod client;
pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod pages;
pub mod stores;

pub use client::MingleClient;
/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
