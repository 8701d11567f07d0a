//! Remote data gateway: the HTTP collaborator owning all country data.
//!
//! The client speaks the gateway's wire contract; the worker drives it on
//! the tokio runtime and reports results back to the UI thread as
//! generation-tagged events.

mod client;
mod error;
mod query;
mod types;
pub mod worker;

pub use client::GatewayClient;
pub use error::GatewayError;
pub use query::{ListQuery, SortField, SortOrder};
pub use types::{CountryDetail, CountrySummary, GalleryImage, ImageRecord};
pub use worker::{GatewayCommand, GatewayCommandSender, ImageSubmission};
