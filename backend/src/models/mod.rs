pub mod settlement;
pub mod transport;

pub use settlement::*;
pub use transport::*;
