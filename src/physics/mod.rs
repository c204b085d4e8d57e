pub mod dynamics;
pub mod energy;
pub mod gravity;
pub mod orbital;

pub use gravity::acceleration;
pub use orbital::{orbital_elements, OrbitalElements};
