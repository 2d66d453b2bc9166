pub mod preset;
pub mod constraints;
pub mod device;
pub mod address;
pub mod error;
pub mod selection;
pub mod slot;

pub use preset::*;
pub use constraints::*;
pub use device::*;
pub use address::*;
pub use error::*;
pub use selection::*;
pub use slot::*;
