use crate::domain::model::{Farm, FarmPatch, Farmer, FarmerPatch};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait FarmRepository: Send + Sync {
    async fn list_farms(&self) -> Result<Vec<Farm>>;
    async fn get_farm(&self, id: i64) -> Result<Farm>;
    async fn list_farms_by_farmer(&self, farmer_id: i64) -> Result<Vec<Farm>>;
    async fn create_farm(&self, farm: &Farm) -> Result<Farm>;
    async fn update_farm(&self, id: i64, patch: &FarmPatch) -> Result<Farm>;
    async fn delete_farm(&self, id: i64) -> Result<()>;
}

#[async_trait]
pub trait FarmerRepository: Send + Sync {
    async fn list_farmers(&self) -> Result<Vec<Farmer>>;
    async fn get_farmer(&self, id: i64) -> Result<Farmer>;
    async fn create_farmer(&self, farmer: &Farmer) -> Result<Farmer>;
    async fn update_farmer(&self, id: i64, patch: &FarmerPatch) -> Result<Farmer>;
}
