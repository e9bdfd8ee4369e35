//! HTTP server module.
//!
//! An axum-based server exposing the classified dataset to the map frontend.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                  │
//! │  - Path/query extraction                     │
//! │  - JSON serialization, ETag                  │
//! │  - CORS, compression, request tracing        │
//! └───────────────────┬──────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────┐
//! │  TransitDataset (services/)                  │
//! │  - Classified settlements, stats, markers    │
//! └───────────────────┬──────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────┐
//! │  Static data (data/)                         │
//! │  - Transport table, settlement catalogue     │
//! └──────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
