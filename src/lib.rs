//! Terminal client for a country directory service.
//!
//! Two views share one data-access path: the listing view owns the list
//! query (sort field, order, limit) and re-fetches whenever it changes; the
//! detail view loads country info and images independently for a single
//! lookup key and drives the image upload workflow. All gateway I/O runs on
//! a tokio runtime; results come back to the UI thread as generation-tagged
//! events so a superseded request can never overwrite newer state.

pub mod config;
pub mod gateway;
pub mod logging;
pub mod ui;
