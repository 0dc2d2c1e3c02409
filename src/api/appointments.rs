use super::endpoints;
use super::models::{AppointmentStatus, AppointmentsOverview, StatusUpdate};
use super::ApiClient;
use crate::error::AdminResult;

impl ApiClient {
    /// Today's and upcoming appointments; salons see all members, members their own
    pub async fn appointments(&self) -> AdminResult<AppointmentsOverview> {
        let path = if self.session.is_admin().await {
            endpoints::APPOINTMENTS_PROVIDER
        } else {
            endpoints::APPOINTMENTS_MEMBER
        };
        self.get_json(path).await
    }

    pub async fn set_appointment_status(
        &self,
        id: &str,
        status: AppointmentStatus,
    ) -> AdminResult<()> {
        let url = self.url(&endpoints::appointment(id))?;
        let body = StatusUpdate { status };
        self.private(|http| Ok(http.patch(url.clone()).json(&body)))
            .await?;
        Ok(())
    }

    pub async fn accept_appointment(&self, id: &str) -> AdminResult<()> {
        self.set_appointment_status(id, AppointmentStatus::Accepted)
            .await
    }

    pub async fn cancel_appointment(&self, id: &str) -> AdminResult<()> {
        self.set_appointment_status(id, AppointmentStatus::Cancelled)
            .await
    }
}
