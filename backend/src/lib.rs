//! # Baranya Transit Backend
//!
//! Morning commute accessibility from Baranya county settlements to Pécs.
//!
//! Every settlement is looked up in a hand-curated table of public transport
//! travel times for arrivals between 07:00 and 10:00, classified into a
//! colour-coded bracket, and summarised for the statistics panel. The result
//! is served to the React map frontend over a REST API built on Axum.
//!
//! ## Architecture
//!
//! - [`data`]: the static transport table and the settlement catalogue
//! - [`models`]: settlements, transport records and status brackets
//! - [`services`]: classification, aggregation and map presentation
//! - [`routes`]: serializable response types per endpoint group
//! - [`api`]: consolidated DTO re-exports
//! - [`config`]: `transit.toml` and environment configuration
//! - [`http`]: Axum router and handlers (feature `http-server`)
//!
//! Lookups are total: a settlement missing from the table is reported as
//! unreachable rather than producing an error.

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{TransitError, TransitResult};
