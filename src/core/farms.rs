use crate::config::ConfigProvider;
use crate::core::client::ApiClient;
use crate::domain::model::{Farm, FarmPatch};
use crate::domain::ports::FarmRepository;
use crate::utils::error::{ClientError, Operation, Resource, Result};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};

#[async_trait]
impl<C: ConfigProvider> FarmRepository for ApiClient<C> {
    async fn list_farms(&self) -> Result<Vec<Farm>> {
        self.get_json(Operation::LoadFarms, "/farms").await
    }

    async fn get_farm(&self, id: i64) -> Result<Farm> {
        self.get_json(Operation::LoadFarm, &format!("/farms/{}", id))
            .await
    }

    async fn list_farms_by_farmer(&self, farmer_id: i64) -> Result<Vec<Farm>> {
        self.get_json(
            Operation::LoadFarms,
            &format!("/farms/by-farmer/{}", farmer_id),
        )
        .await
    }

    async fn create_farm(&self, farm: &Farm) -> Result<Farm> {
        // 建立時不送 id，伺服器負責指定
        if let Some(id) = farm.id {
            tracing::debug!("Dropping client-supplied id {} from create request", id);
        }
        let payload = farm.without_id();

        let created: Farm = self
            .send_json(Operation::CreateFarm, Method::POST, "/farms", &payload)
            .await?;
        tracing::info!("✅ Created farm {:?} ({})", created.id, created.name);
        Ok(created)
    }

    async fn update_farm(&self, id: i64, patch: &FarmPatch) -> Result<Farm> {
        self.send_json(
            Operation::UpdateFarm,
            Method::PUT,
            &format!("/farms/{}", id),
            patch,
        )
        .await
    }

    async fn delete_farm(&self, id: i64) -> Result<()> {
        let request = self.request(Method::DELETE, &format!("/farms/{}", id));
        let response = self.send(Operation::DeleteFarm, request).await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            tracing::warn!("⚠️ Farm {} not found", id);
            return Err(ClientError::NotFound {
                resource: Resource::Farm,
                id,
            });
        }

        if !status.is_success() {
            tracing::warn!("⚠️ Deleting farm {} failed with status {}", id, status);
            return Err(ClientError::Status {
                operation: Operation::DeleteFarm,
                status: status.as_u16(),
            });
        }

        tracing::info!("🗑️ Deleted farm {}", id);
        Ok(())
    }
}
