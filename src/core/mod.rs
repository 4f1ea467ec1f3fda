pub mod client;
pub mod farmers;
pub mod farms;

pub use crate::domain::model::{Farm, FarmPatch, Farmer, FarmerPatch};
pub use crate::domain::ports::{FarmRepository, FarmerRepository};
pub use crate::utils::error::Result;
