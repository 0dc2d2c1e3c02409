use serde::{Deserialize, Serialize};

/// How a client pays for a service when booking
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentOption {
    Deposit,
    Full,
    #[serde(rename = "NONE")]
    OnSite,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Pending,
    Accepted,
    Cancelled,
}

/// Client who booked an appointment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Short member reference embedded in other records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRef {
    #[serde(default)]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
}

impl MemberRef {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Short service reference embedded in other records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRef {
    #[serde(default)]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    /// Start timestamp, see `utils::time::parse_appointment_time`
    pub date: String,
    /// Length in minutes
    pub duration: u32,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub member_id: Option<String>,
    #[serde(default)]
    pub member: Option<MemberRef>,
    pub service: ServiceRef,
    pub client: Client,
}

/// Appointment listing split the way the dashboard shows it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentsOverview {
    #[serde(default)]
    pub todays_appointments: Vec<Appointment>,
    #[serde(default)]
    pub future_appointments: Vec<Appointment>,
}

impl AppointmentsOverview {
    /// Today's and future appointments together
    pub fn all(&self) -> impl Iterator<Item = &Appointment> {
        self.todays_appointments
            .iter()
            .chain(self.future_appointments.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: u32,
    #[serde(default)]
    pub deposit: Option<u32>,
    /// Length in minutes
    pub duration: u32,
    #[serde(default)]
    pub payment_option: Option<PaymentOption>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub provider_category_id: Option<String>,
}

/// Body for creating a service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: u32,
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_option: Option<PaymentOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit: Option<u32>,
    pub provider_category_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub services: Vec<Service>,
}

/// Body for creating a category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body for enabling or disabling a service or category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveToggle {
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_category_id: Option<String>,
}

/// Staff member of a salon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub services: Vec<ServiceRef>,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Body for adding a member; the access code is the member's login secret
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMember {
    pub first_name: String,
    pub last_name: String,
    pub access_code: String,
}

/// Editable salon profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalonProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub booking_terms: String,
    #[serde(default)]
    pub auto_accept_appointments: bool,
    #[serde(default)]
    pub is_in_vacancy_mode: bool,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
}

/// Which salon picture an upload replaces
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ImageKind {
    ProfilePicture,
    CoverImage,
}

impl ImageKind {
    /// Field name used both in the upload path and the multipart part
    pub fn field(self) -> &'static str {
        match self {
            ImageKind::ProfilePicture => "profilePicture",
            ImageKind::CoverImage => "coverImage",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct StatusUpdate {
    pub status: AppointmentStatus,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_with_services() {
        let json = r#"[{
            "id": "c1",
            "name": "Coupes",
            "services": [
                {"id": "s1", "name": "Coupe femme", "price": 45, "duration": 60,
                 "paymentOption": "DEPOSIT", "deposit": 15, "isActive": false}
            ]
        }]"#;

        let categories: Vec<Category> = serde_json::from_str(json).unwrap();
        assert!(categories[0].is_active);
        let service = &categories[0].services[0];
        assert!(!service.is_active);
        assert_eq!(service.payment_option, Some(PaymentOption::Deposit));
        assert_eq!(service.deposit, Some(15));
    }

    #[test]
    fn test_appointments_overview() {
        let json = r#"{
            "todaysAppointments": [{
                "id": "a1", "date": "2024-03-05T10:00:00", "duration": 30,
                "status": "PENDING", "memberId": "m1",
                "member": {"firstName": "Ana", "lastName": "Lopez"},
                "service": {"id": "s1", "name": "Brushing"},
                "client": {"firstName": "Jean", "lastName": "Dupont", "phoneNumber": "0612345678"}
            }]
        }"#;

        let overview: AppointmentsOverview = serde_json::from_str(json).unwrap();
        assert_eq!(overview.all().count(), 1);
        assert!(overview.future_appointments.is_empty());
        let appointment = &overview.todays_appointments[0];
        assert_eq!(appointment.status, AppointmentStatus::Pending);
        assert_eq!(appointment.member.as_ref().unwrap().full_name(), "Ana Lopez");
    }

    #[test]
    fn test_request_bodies() {
        let body = serde_json::to_value(ActiveToggle {
            is_active: false,
            provider_category_id: Some("c1".to_string()),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"isActive": false, "providerCategoryId": "c1"}));

        let body = serde_json::to_value(StatusUpdate {
            status: AppointmentStatus::Cancelled,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"status": "CANCELLED"}));
    }
}
