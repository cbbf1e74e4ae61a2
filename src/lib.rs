//! Employee record management: a REST service over a single `employees`
//! table, and the form/list client that talks to it.

pub mod api;
pub mod client;
pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod model;
pub mod routes;
pub mod store;
pub mod utils;
