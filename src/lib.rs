#![doc = "The `todolite` library crate."]
#![doc = ""]
#![doc = "This crate contains the domain models, credential store, authentication"]
#![doc = "mechanisms, routing configuration, and error handling for the Todolite"]
#![doc = "service. It is used by the main binary (`main.rs`) to construct and run"]
#![doc = "the application, and by the integration tests to build the same app"]
#![doc = "in-process."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

// lib.rs only declares modules. The app factory lives in main.rs (and is
// mirrored inline by the integration tests) because the HttpServiceFactory
// trait bounds do not survive being returned from a library function.
