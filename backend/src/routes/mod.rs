pub mod markers;
pub mod metadata;
pub mod settlements;
pub mod stats;
