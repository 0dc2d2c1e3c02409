use super::endpoints;
use super::models::{ActiveToggle, Category, NewCategory, NewService, Service};
use super::ApiClient;
use crate::error::AdminResult;
use crate::forms::{CategoryDraft, ServiceDraft};
use crate::validation::validate_new_service;
use serde::Serialize;

impl ApiClient {
    /// The salon's categories with their services
    pub async fn categories(&self) -> AdminResult<Vec<Category>> {
        self.get_json(endpoints::PROVIDER_CATEGORY_ME).await
    }

    pub async fn create_category(&self, category: &NewCategory) -> AdminResult<()> {
        self.send_post(endpoints::PROVIDER_CATEGORY, category).await
    }

    pub async fn update_category(&self, id: &str, draft: &CategoryDraft) -> AdminResult<()> {
        self.send_put(&endpoints::provider_category(id), draft).await
    }

    pub async fn set_category_active(&self, id: &str, active: bool) -> AdminResult<()> {
        let body = ActiveToggle {
            is_active: active,
            provider_category_id: None,
        };
        self.send_put(&endpoints::provider_category(id), &body).await
    }

    pub async fn service(&self, id: &str) -> AdminResult<Service> {
        self.get_json(&endpoints::provider_service(id)).await
    }

    pub async fn create_service(&self, service: &NewService) -> AdminResult<()> {
        validate_new_service(service)?;
        self.send_post(endpoints::PROVIDER_SERVICE, service).await
    }

    pub async fn update_service(&self, id: &str, draft: &ServiceDraft) -> AdminResult<()> {
        self.send_put(&endpoints::provider_service(id), draft).await
    }

    /// Enable or disable a service; disabling names its category as the server requires
    pub async fn set_service_active(
        &self,
        id: &str,
        active: bool,
        provider_category_id: Option<&str>,
    ) -> AdminResult<()> {
        let body = ActiveToggle {
            is_active: active,
            provider_category_id: provider_category_id.map(str::to_string),
        };
        self.send_put(&endpoints::provider_service(id), &body).await
    }

    async fn send_post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> AdminResult<()> {
        let url = self.url(path)?;
        self.private(|http| Ok(http.post(url.clone()).json(body)))
            .await?;
        Ok(())
    }

    async fn send_put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> AdminResult<()> {
        let url = self.url(path)?;
        self.private(|http| Ok(http.put(url.clone()).json(body)))
            .await?;
        Ok(())
    }
}
