//! Clients of the location REST API and the plumbing they share.
//!
//! Responsibilities
//! - `transport`: the `Transport` seam and its `gloo-net` implementation.
//! - `location_service` / `bookmark_service`: typed calls, validation and
//!   error reporting for the sidebars and the App.
//! - `session`, `notifier`, `liveness`: identity from local storage, toast
//!   reporting, and the per-component guard for late responses.
//!
//! Nothing here calls into the browser directly except the concrete
//! `HttpTransport`, `ToastNotifier` and `Session::load`, so the service logic is
//! testable with fakes.

pub mod bookmark_service;
pub mod error;
pub mod liveness;
pub mod location_service;
pub mod notifier;
pub mod session;
pub mod transport;

#[cfg(test)]
pub mod testing;
