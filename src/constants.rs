pub const G: f64 = 6.67430e-11; // Gravitational constant (m³/kg/s²)
pub const M_EARTH: f64 = 5.972e24; // Mass of Earth (kg)
pub const R_EARTH: f64 = 6.371e6; // Radius of Earth (m)
pub const DEFAULT_ALTITUDE: f64 = 700_000.0; // Reference orbit altitude (m)
pub const DEFAULT_SPEED: f64 = 7_500.0; // Reference orbit initial speed (m/s)

// Numerics
pub const MIN_POSITION_NORM: f64 = 1e-6; // Smallest radius gravity is evaluated at (m)
pub const ECCENTRICITY_RADICAND_TOLERANCE: f64 = 1e-12;
pub const MAX_PREALLOCATED_SAMPLES: usize = 1 << 20; // Larger runs grow on demand

// Math
pub const PI: f64 = std::f64::consts::PI;
