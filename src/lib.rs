pub mod airfoil;
pub mod errors;
pub mod geo;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod run;
pub mod serialize;

pub use errors::AirfoilError;

pub type Result<T> = std::result::Result<T, AirfoilError>;
