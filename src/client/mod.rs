//! Form/list client for the employee API.
//!
//! [`EmployeeApp`] holds the transient UI state and drives an
//! [`EmployeeApi`]; [`view`] renders that state as text.

pub mod app;
pub mod config;
pub mod error;
pub mod http;
pub mod view;

pub use app::{EmployeeApp, Notifier, SubmitOutcome};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{EmployeeApi, HttpClient};
