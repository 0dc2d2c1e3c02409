use super::endpoints;
use super::models::{ImageKind, SalonProfile};
use super::ApiClient;
use crate::error::AdminResult;
use crate::forms::SalonProfileDraft;
use crate::validation::validate_image_type;
use reqwest::multipart::{Form, Part};

impl ApiClient {
    pub async fn salon(&self) -> AdminResult<SalonProfile> {
        self.get_json(endpoints::SALON).await
    }

    /// Send the changed profile fields
    pub async fn update_salon(&self, draft: &SalonProfileDraft) -> AdminResult<()> {
        let url = self.url(endpoints::SALON)?;
        self.private(|http| Ok(http.patch(url.clone()).json(draft)))
            .await?;
        Ok(())
    }

    /// Upload a new profile or cover picture
    pub async fn upload_image(
        &self,
        kind: ImageKind,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> AdminResult<()> {
        validate_image_type(mime_type)?;
        let url = self.url(&endpoints::s3_upload(kind.field()))?;
        self.private(|http| {
            let part = Part::bytes(bytes.clone())
                .file_name(file_name.to_string())
                .mime_str(mime_type)?;
            Ok(http
                .post(url.clone())
                .multipart(Form::new().part(kind.field(), part)))
        })
        .await?;
        Ok(())
    }

    pub async fn remove_profile_picture(&self) -> AdminResult<()> {
        let url = self.url(endpoints::S3_PROFILE)?;
        self.private(|http| Ok(http.delete(url.clone()))).await?;
        Ok(())
    }

    pub async fn remove_cover_image(&self) -> AdminResult<()> {
        let url = self.url(endpoints::S3_COVER)?;
        self.private(|http| Ok(http.delete(url.clone()))).await?;
        Ok(())
    }

    /// Start payment-provider onboarding and return the hosted onboarding link
    pub async fn start_onboarding(&self) -> AdminResult<String> {
        let url = self.url(endpoints::STRIPE_ONBOARDING)?;
        let body = self
            .private(|http| Ok(http.post(url.clone())))
            .await?
            .text()
            .await?;

        // The link comes back either as a JSON string or as plain text
        Ok(serde_json::from_str::<String>(&body).unwrap_or_else(|_| body.trim().to_string()))
    }
}
