pub mod ecu;
pub mod version;

pub use ecu::*;
pub use version::*;
