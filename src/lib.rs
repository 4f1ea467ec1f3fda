pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{ClientConfig, ConfigProvider};
pub use core::client::ApiClient;
pub use domain::model::{Farm, FarmPatch, Farmer, FarmerPatch};
pub use domain::ports::{FarmRepository, FarmerRepository};
pub use utils::error::{ClientError, Operation, Result};
