use crate::config::ConfigProvider;
use crate::core::client::ApiClient;
use crate::domain::model::{Farmer, FarmerPatch};
use crate::domain::ports::FarmerRepository;
use crate::utils::error::{Operation, Result};
use async_trait::async_trait;
use reqwest::Method;

#[async_trait]
impl<C: ConfigProvider> FarmerRepository for ApiClient<C> {
    async fn list_farmers(&self) -> Result<Vec<Farmer>> {
        self.get_json(Operation::LoadFarmers, "/farmers").await
    }

    async fn get_farmer(&self, id: i64) -> Result<Farmer> {
        self.get_json(Operation::LoadFarmer, &format!("/farmers/{}", id))
            .await
    }

    async fn create_farmer(&self, farmer: &Farmer) -> Result<Farmer> {
        let payload = farmer.without_id();
        self.send_json(Operation::CreateFarmer, Method::POST, "/farmers", &payload)
            .await
    }

    async fn update_farmer(&self, id: i64, patch: &FarmerPatch) -> Result<Farmer> {
        self.send_json(
            Operation::UpdateFarmer,
            Method::PUT,
            &format!("/farmers/{}", id),
            patch,
        )
        .await
    }
}
