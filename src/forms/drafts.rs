use super::{differs, Editable};
use crate::api::models::{Category, Member, PaymentOption, SalonProfile, Service};
use serde::{Deserialize, Serialize};

/// Editable salon profile fields; pictures go through the upload endpoints instead
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalonProfileDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_terms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_accept_appointments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_in_vacancy_mode: Option<bool>,
}

impl Editable for SalonProfile {
    type Draft = SalonProfileDraft;

    fn changed_fields(&self, draft: &SalonProfileDraft) -> Vec<&'static str> {
        let checks = [
            ("name", differs(&draft.name, &self.name)),
            ("address", differs(&draft.address, &self.address)),
            ("email", differs(&draft.email, &self.email)),
            ("phoneNumber", differs(&draft.phone_number, &self.phone_number)),
            ("bookingTerms", differs(&draft.booking_terms, &self.booking_terms)),
            (
                "autoAcceptAppointments",
                differs(&draft.auto_accept_appointments, &self.auto_accept_appointments),
            ),
            (
                "isInVacancyMode",
                differs(&draft.is_in_vacancy_mode, &self.is_in_vacancy_mode),
            ),
        ];
        changed(&checks)
    }

    fn apply(&self, draft: &SalonProfileDraft) -> Self {
        let mut next = self.clone();
        set(&mut next.name, &draft.name);
        set(&mut next.address, &draft.address);
        set(&mut next.email, &draft.email);
        set(&mut next.phone_number, &draft.phone_number);
        set(&mut next.booking_terms, &draft.booking_terms);
        set(&mut next.auto_accept_appointments, &draft.auto_accept_appointments);
        set(&mut next.is_in_vacancy_mode, &draft.is_in_vacancy_mode);
        next
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl Editable for Member {
    type Draft = MemberDraft;

    fn changed_fields(&self, draft: &MemberDraft) -> Vec<&'static str> {
        let email = self.email.clone().unwrap_or_default();
        let phone_number = self.phone_number.clone().unwrap_or_default();
        let checks = [
            ("firstName", differs(&draft.first_name, &self.first_name)),
            ("lastName", differs(&draft.last_name, &self.last_name)),
            ("email", differs(&draft.email, &email)),
            ("phoneNumber", differs(&draft.phone_number, &phone_number)),
        ];
        changed(&checks)
    }

    fn apply(&self, draft: &MemberDraft) -> Self {
        let mut next = self.clone();
        set(&mut next.first_name, &draft.first_name);
        set(&mut next.last_name, &draft.last_name);
        if let Some(email) = &draft.email {
            next.email = Some(email.clone());
        }
        if let Some(phone_number) = &draft.phone_number {
            next.phone_number = Some(phone_number.clone());
        }
        next
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit: Option<u32>,
    /// Minutes; forms edit it as `HH:MM` through `utils::time::parse_duration`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_option: Option<PaymentOption>,
}

impl Editable for Service {
    type Draft = ServiceDraft;

    fn changed_fields(&self, draft: &ServiceDraft) -> Vec<&'static str> {
        let description = self.description.clone().unwrap_or_default();
        let deposit = self.deposit.unwrap_or(0);
        let checks = [
            ("name", differs(&draft.name, &self.name)),
            ("description", differs(&draft.description, &description)),
            ("price", differs(&draft.price, &self.price)),
            ("deposit", differs(&draft.deposit, &deposit)),
            ("duration", differs(&draft.duration, &self.duration)),
            (
                "paymentOption",
                draft.payment_option.is_some() && draft.payment_option != self.payment_option,
            ),
        ];
        changed(&checks)
    }

    fn apply(&self, draft: &ServiceDraft) -> Self {
        let mut next = self.clone();
        set(&mut next.name, &draft.name);
        set(&mut next.price, &draft.price);
        set(&mut next.duration, &draft.duration);
        if draft.description.is_some() {
            next.description = draft.description.clone();
        }
        if draft.deposit.is_some() {
            next.deposit = draft.deposit;
        }
        if draft.payment_option.is_some() {
            next.payment_option = draft.payment_option;
        }
        next
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Editable for Category {
    type Draft = CategoryDraft;

    fn changed_fields(&self, draft: &CategoryDraft) -> Vec<&'static str> {
        let description = self.description.clone().unwrap_or_default();
        let checks = [
            ("name", differs(&draft.name, &self.name)),
            ("description", differs(&draft.description, &description)),
        ];
        changed(&checks)
    }

    fn apply(&self, draft: &CategoryDraft) -> Self {
        let mut next = self.clone();
        set(&mut next.name, &draft.name);
        if draft.description.is_some() {
            next.description = draft.description.clone();
        }
        next
    }
}

fn changed(checks: &[(&'static str, bool)]) -> Vec<&'static str> {
    checks
        .iter()
        .filter(|(_, changed)| *changed)
        .map(|(name, _)| *name)
        .collect()
}

fn set<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormState;

    fn service() -> Service {
        Service {
            id: "s1".to_string(),
            name: "Coupe".to_string(),
            description: None,
            price: 40,
            deposit: Some(12),
            duration: 45,
            payment_option: Some(PaymentOption::Deposit),
            is_active: true,
            provider_category_id: Some("c1".to_string()),
        }
    }

    #[test]
    fn test_service_diff_and_patch_body() {
        let mut form = FormState::new(service());
        form.draft_mut().price = Some(40);
        form.draft_mut().duration = Some(60);
        form.draft_mut().description = Some(String::new());

        // Same price and an empty description equal the baseline
        assert_eq!(form.changed_fields(), vec!["duration"]);
        assert_eq!(
            serde_json::to_value(form.draft()).unwrap(),
            serde_json::json!({"price": 40, "duration": 60, "description": ""})
        );
        assert_eq!(form.merged().duration, 60);
    }

    #[test]
    fn test_service_payment_option_change() {
        let mut form = FormState::new(service());
        form.draft_mut().payment_option = Some(PaymentOption::Full);
        form.draft_mut().deposit = Some(0);
        assert_eq!(form.changed_fields(), vec!["deposit", "paymentOption"]);

        let merged = form.merged();
        assert_eq!(merged.payment_option, Some(PaymentOption::Full));
        assert_eq!(merged.deposit, Some(0));
    }

    #[test]
    fn test_member_optional_fields() {
        let member = Member {
            id: "m1".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            email: None,
            phone_number: Some("0612345678".to_string()),
            services: vec![],
        };
        let mut form = FormState::new(member);
        form.draft_mut().email = Some(String::new());
        assert!(!form.is_dirty());

        form.draft_mut().email = Some("ana@example.com".to_string());
        form.draft_mut().last_name = Some("Lopez".to_string());
        assert_eq!(form.changed_fields(), vec!["email"]);
        assert_eq!(form.merged().email.as_deref(), Some("ana@example.com"));
    }

    #[test]
    fn test_category_draft() {
        let category = Category {
            id: "c1".to_string(),
            name: "Coupes".to_string(),
            description: Some("Toutes les coupes".to_string()),
            is_active: true,
            services: vec![],
        };
        let mut form = FormState::new(category);
        form.draft_mut().name = Some("Coiffure".to_string());
        assert_eq!(form.changed_fields(), vec!["name"]);
        assert_eq!(
            serde_json::to_string(form.draft()).unwrap(),
            r#"{"name":"Coiffure"}"#
        );
    }
}
