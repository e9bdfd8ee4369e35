//! Static data: the transport table and the settlement catalogue.

pub mod checksum;
pub mod settlements;
pub mod transport_table;

pub use settlements::{bundled_settlements, load_settlements};
pub use transport_table::DESTINATION;
