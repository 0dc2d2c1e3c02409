use super::endpoints;
use super::models::{Member, NewMember};
use super::ApiClient;
use crate::error::AdminResult;
use crate::forms::MemberDraft;
use crate::validation::validate_new_member;

impl ApiClient {
    pub async fn members(&self) -> AdminResult<Vec<Member>> {
        self.get_json(endpoints::SALON_MEMBERS).await
    }

    pub async fn member(&self, id: &str) -> AdminResult<Member> {
        self.get_json(&endpoints::salon_member(id)).await
    }

    /// Add a member to the salon
    pub async fn add_member(&self, member: &NewMember) -> AdminResult<()> {
        validate_new_member(member)?;
        let url = self.url(endpoints::SALON)?;
        self.private(|http| Ok(http.post(url.clone()).json(member)))
            .await?;
        Ok(())
    }

    pub async fn update_member(&self, id: &str, draft: &MemberDraft) -> AdminResult<()> {
        let url = self.url(&endpoints::salon_member(id))?;
        self.private(|http| Ok(http.patch(url.clone()).json(draft)))
            .await?;
        Ok(())
    }

    pub async fn remove_member(&self, id: &str) -> AdminResult<()> {
        let url = self.url(&endpoints::salon_member(id))?;
        self.private(|http| Ok(http.delete(url.clone()))).await?;
        Ok(())
    }

    /// Replace the set of services a member performs
    pub async fn assign_services(&self, id: &str, service_ids: &[String]) -> AdminResult<()> {
        let url = self.url(&endpoints::salon_member_assign(id))?;
        self.private(|http| Ok(http.patch(url.clone()).json(service_ids)))
            .await?;
        Ok(())
    }

    /// Remove one service from a member, keeping the others assigned
    pub async fn unassign_service(&self, member: &Member, service_id: &str) -> AdminResult<()> {
        let remaining: Vec<String> = member
            .services
            .iter()
            .filter(|service| service.id != service_id)
            .map(|service| service.id.clone())
            .collect();
        self.assign_services(&member.id, &remaining).await
    }
}
