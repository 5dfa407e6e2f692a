//! # lift-routes
//!
//! Route data model for the lift packager.
//!
//! This crate provides the pure data structures the rest of the workspace is
//! built on: validated route paths, HTTP method sets, the logical-ID naming
//! scheme used for generated infrastructure resources, and the two ways a
//! route set is collected (manifest file or compiled-pages scan).

pub mod error;
pub mod manifest;
pub mod method;
pub mod naming;
pub mod route;
pub mod scan;

pub use error::{Result, RouteError};
pub use method::HttpMethod;
pub use route::{Route, RoutePath};
