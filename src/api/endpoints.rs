//! REST paths, relative to the configured API base URL.

pub const LOGIN: &str = "/api/auth/login";
pub const LOGIN_MEMBER: &str = "/api/auth/login/member";
pub const REFRESH: &str = "/api/auth/refresh";
pub const LOGOUT: &str = "/api/auth/logout";

pub const APPOINTMENTS_PROVIDER: &str = "/api/appointments/provider";
pub const APPOINTMENTS_MEMBER: &str = "/api/appointments/member";

pub const SALON: &str = "/api/salon";
pub const SALON_MEMBERS: &str = "/api/salon/members";

pub const PROVIDER_SERVICE: &str = "/api/providerService";
pub const PROVIDER_CATEGORY: &str = "/api/providerCategory";
pub const PROVIDER_CATEGORY_ME: &str = "/api/providerCategory/me";

pub const AVAILABILITIES: &str = "/api/availabilities";
pub const SPECIAL_AVAILABILITIES: &str = "/api/availabilities/special";

pub const S3_PROFILE: &str = "/api/s3/profile";
pub const S3_COVER: &str = "/api/s3/cover";

pub const STRIPE_ONBOARDING: &str = "/api/stripe/startOnboarding";

pub fn appointment(id: &str) -> String {
    format!("/api/appointments/{}", id)
}

pub fn salon_member(id: &str) -> String {
    format!("{}/{}", SALON_MEMBERS, id)
}

pub fn salon_member_assign(id: &str) -> String {
    format!("{}/{}/assign", SALON_MEMBERS, id)
}

pub fn provider_service(id: &str) -> String {
    format!("{}/{}", PROVIDER_SERVICE, id)
}

pub fn provider_category(id: &str) -> String {
    format!("{}/{}", PROVIDER_CATEGORY, id)
}

/// Weekly availability listing/creation, for the salon or one member
pub fn availabilities_for(member_id: Option<&str>) -> String {
    match member_id {
        Some(id) => format!("{}/member/{}", AVAILABILITIES, id),
        None => AVAILABILITIES.to_string(),
    }
}

pub fn availability(id: &str) -> String {
    format!("{}/{}", AVAILABILITIES, id)
}

/// Special availability creation, for the salon or one member
pub fn special_availabilities_for(member_id: Option<&str>) -> String {
    match member_id {
        Some(id) => format!("{}/member/{}", SPECIAL_AVAILABILITIES, id),
        None => SPECIAL_AVAILABILITIES.to_string(),
    }
}

pub fn special_availability(id: &str) -> String {
    format!("{}/{}", SPECIAL_AVAILABILITIES, id)
}

pub fn s3_upload(field: &str) -> String {
    format!("/api/s3/{}", field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_scoped_paths() {
        assert_eq!(availabilities_for(None), "/api/availabilities");
        assert_eq!(availabilities_for(Some("m1")), "/api/availabilities/member/m1");
        assert_eq!(
            special_availabilities_for(Some("m1")),
            "/api/availabilities/special/member/m1"
        );
        assert_eq!(special_availability("s9"), "/api/availabilities/special/s9");
        assert_eq!(salon_member_assign("m1"), "/api/salon/members/m1/assign");
    }
}
