use super::endpoints;
use super::ApiClient;
use crate::availability::{
    AvailabilityOverview, NewAvailability, NewSpecialAvailability, TimeInterval,
};
use crate::error::AdminResult;

impl ApiClient {
    /// Weekly and special availability for the salon, or for one member
    pub async fn availabilities(&self, member_id: Option<&str>) -> AdminResult<AvailabilityOverview> {
        self.get_json(&endpoints::availabilities_for(member_id))
            .await
    }

    pub async fn create_availability(
        &self,
        member_id: Option<&str>,
        slot: &NewAvailability,
    ) -> AdminResult<()> {
        TimeInterval::parse(&slot.start_time, &slot.end_time)?;
        let url = self.url(&endpoints::availabilities_for(member_id))?;
        self.private(|http| Ok(http.post(url.clone()).json(slot)))
            .await?;
        Ok(())
    }

    pub async fn remove_availability(&self, id: &str) -> AdminResult<()> {
        let url = self.url(&endpoints::availability(id))?;
        self.private(|http| Ok(http.delete(url.clone()))).await?;
        Ok(())
    }

    pub async fn create_special_availability(
        &self,
        member_id: Option<&str>,
        slot: &NewSpecialAvailability,
    ) -> AdminResult<()> {
        TimeInterval::parse(&slot.start_time, &slot.end_time)?;
        let url = self.url(&endpoints::special_availabilities_for(member_id))?;
        self.private(|http| Ok(http.post(url.clone()).json(slot)))
            .await?;
        Ok(())
    }

    pub async fn remove_special_availability(&self, id: &str) -> AdminResult<()> {
        let url = self.url(&endpoints::special_availability(id))?;
        self.private(|http| Ok(http.delete(url.clone()))).await?;
        Ok(())
    }
}
