//! User-facing workflows of the admin dashboard.
//!
//! Every workflow catches its own errors: failures are logged and turned into
//! an error notification, successes into a success notification. Callers only
//! get back what they need to refresh their view.

use crate::actions::{ActionOutcome, ConfirmAction, Confirmer};
use crate::api::models::{
    Appointment, AppointmentStatus, Category, ImageKind, Member, NewCategory, NewMember,
    NewService, SalonProfile, Service,
};
use crate::api::ApiClient;
use crate::appointments::filter_and_sort;
use crate::availability::{
    DayOfWeek, DayView, NewAvailability, NewSpecialAvailability, SpecialAvailability,
    WeeklyAvailability,
};
use crate::config::AccountKind;
use crate::error::AdminResult;
use crate::forms::{Editable, FormState};
use crate::notify::{Notification, Notifier};
use crate::session::Session;
use crate::validation::{
    check_service, generate_access_code, validate_credentials, validate_salon_profile,
};
use rust_i18n::t;
use std::future::Future;
use tracing::{error, info};

/// Weekly and date-specific availability of the salon or of one member
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub week: WeeklyAvailability,
    pub special: Vec<SpecialAvailability>,
}

impl Schedule {
    /// One row per weekday, Monday first
    pub fn rows(&self, member_view: bool) -> AdminResult<Vec<(DayOfWeek, DayView)>> {
        DayOfWeek::ALL
            .iter()
            .map(|&day| Ok((day, DayView::for_day(&self.week, day, member_view)?)))
            .collect()
    }

    /// One line per special availability, or a single placeholder line when there are none
    pub fn special_lines(&self) -> Vec<String> {
        if self.special.is_empty() {
            return vec![t!("hours.no_special").to_string()];
        }
        self.special
            .iter()
            .map(|s| {
                format!(
                    "{} {} - {}",
                    s.date.format("%d/%m/%Y"),
                    s.start_time,
                    s.end_time
                )
            })
            .collect()
    }
}

pub struct Dashboard<N: Notifier> {
    api: ApiClient,
    notifier: N,
    confirmer: Box<dyn Confirmer>,
}

impl<N: Notifier> Dashboard<N> {
    pub fn new(api: ApiClient, notifier: N, confirmer: Box<dyn Confirmer>) -> Self {
        Self {
            api,
            notifier,
            confirmer,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Run a step, notifying `success` when it works and the error's message when it doesn't
    async fn attempt<T, Fut>(&self, what: &str, success: Option<String>, step: Fut) -> Option<T>
    where
        Fut: Future<Output = AdminResult<T>>,
    {
        match step.await {
            Ok(value) => {
                info!("{} succeeded", what);
                if let Some(message) = success {
                    self.notifier.notify(Notification::success(message));
                }
                Some(value)
            }
            Err(e) => {
                error!("{} failed: {}", what, e);
                self.notifier.notify(Notification::error(e.user_message()));
                None
            }
        }
    }

    fn no_changes(&self) {
        self.notifier
            .notify(Notification::info(t!("notice.no_changes")));
    }

    // Auth

    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
        account: AccountKind,
        remember: bool,
    ) -> Option<Session> {
        if let Err(e) = validate_credentials(email, password) {
            self.notifier.notify(Notification::error(e.user_message()));
            return None;
        }

        self.api.session().set_persist(remember).await;
        let result = match account {
            AccountKind::Salon => self.api.login(email, password).await,
            AccountKind::Member => self.api.login_member(email, password).await,
        };

        match result {
            Ok(session) => Some(session),
            Err(e) => {
                error!("Sign-in failed for {}: {}", email, e);
                let message = match (e.status(), account) {
                    (Some(401), AccountKind::Salon) => t!("error.invalid_credentials").to_string(),
                    (Some(401), AccountKind::Member) => {
                        t!("error.invalid_member_credentials").to_string()
                    }
                    _ => e.user_message(),
                };
                self.notifier.notify(Notification::error(message));
                None
            }
        }
    }

    /// Always ends signed out, even if the server call fails
    pub async fn sign_out(&self) {
        if let Err(e) = self.api.logout().await {
            error!("Logout request failed: {}", e);
        }
        self.notifier
            .notify(Notification::info(t!("notice.signed_out")));
    }

    // Appointments

    pub async fn load_appointments(
        &self,
        status: Option<AppointmentStatus>,
        member_id: Option<&str>,
    ) -> Option<Vec<Appointment>> {
        let overview = self
            .attempt("Loading appointments", None, self.api.appointments())
            .await?;
        Some(
            filter_and_sort(overview.all(), status, member_id)
                .into_iter()
                .cloned()
                .collect(),
        )
    }

    pub async fn accept_appointment(&self, id: &str) -> bool {
        self.attempt(
            "Accepting appointment",
            Some(t!("notice.appointment_accepted").to_string()),
            self.api.accept_appointment(id),
        )
        .await
        .is_some()
    }

    pub async fn cancel_appointment(&self, id: &str) -> ActionOutcome<()> {
        ConfirmAction::cancel_appointment()
            .run(self.confirmer.as_ref(), &self.notifier, || {
                self.api.cancel_appointment(id)
            })
            .await
    }

    // Salon profile

    /// Validate and send the changed profile fields, then adopt the server's copy
    pub async fn save_salon_profile(&self, form: &mut FormState<SalonProfile>) -> bool {
        if !form.is_dirty() {
            self.no_changes();
            return false;
        }

        let step = async {
            validate_salon_profile(&form.merged())?;
            self.api.update_salon(form.draft()).await?;
            self.api.salon().await
        };
        match self
            .attempt("Saving salon profile", Some(t!("notice.changes_saved").to_string()), step)
            .await
        {
            Some(fresh) => {
                form.commit(fresh);
                true
            }
            None => false,
        }
    }

    pub async fn upload_image(
        &self,
        kind: ImageKind,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> bool {
        self.attempt(
            "Uploading picture",
            Some(t!("notice.picture_updated").to_string()),
            self.api.upload_image(kind, file_name, mime_type, bytes),
        )
        .await
        .is_some()
    }

    pub async fn remove_image(&self, kind: ImageKind) -> bool {
        let step = async {
            match kind {
                ImageKind::ProfilePicture => self.api.remove_profile_picture().await,
                ImageKind::CoverImage => self.api.remove_cover_image().await,
            }
        };
        self.attempt(
            "Removing picture",
            Some(t!("notice.picture_removed").to_string()),
            step,
        )
        .await
        .is_some()
    }

    // Members

    pub async fn load_members(&self) -> Option<Vec<Member>> {
        self.attempt("Loading members", None, self.api.members())
            .await
    }

    /// Add a member, generating an access code if none was entered; returns the code
    pub async fn add_member(&self, mut member: NewMember) -> Option<String> {
        if member.access_code.trim().is_empty() {
            member.access_code = generate_access_code();
        }
        self.attempt(
            "Adding member",
            Some(t!("notice.member_added").to_string()),
            self.api.add_member(&member),
        )
        .await?;
        Some(member.access_code)
    }

    pub async fn save_member(&self, form: &mut FormState<Member>) -> bool {
        let id = form.baseline().id.clone();
        let id = id.as_str();
        self.save_form(
            form,
            "Saving member",
            t!("notice.member_updated").to_string(),
            |draft| async move { self.api.update_member(id, &draft).await },
            || self.api.member(id),
        )
        .await
    }

    pub async fn remove_member(&self, id: &str) -> ActionOutcome<()> {
        ConfirmAction::remove_member()
            .run(self.confirmer.as_ref(), &self.notifier, || {
                self.api.remove_member(id)
            })
            .await
    }

    pub async fn assign_services(&self, member_id: &str, service_ids: &[String]) -> bool {
        self.attempt(
            "Assigning services",
            Some(t!("notice.services_assigned").to_string()),
            self.api.assign_services(member_id, service_ids),
        )
        .await
        .is_some()
    }

    /// Take one service away from a member, keeping the rest assigned
    pub async fn unassign_service(&self, member: &Member, service_id: &str) -> bool {
        self.attempt(
            "Unassigning service",
            Some(t!("notice.services_assigned").to_string()),
            self.api.unassign_service(member, service_id),
        )
        .await
        .is_some()
    }

    // Services and categories

    /// Categories with their services
    pub async fn load_categories(&self) -> Option<Vec<Category>> {
        self.attempt("Loading categories", None, self.api.categories())
            .await
    }

    pub async fn create_service(&self, service: &NewService) -> bool {
        self.attempt(
            "Creating service",
            Some(t!("notice.service_added").to_string()),
            self.api.create_service(service),
        )
        .await
        .is_some()
    }

    pub async fn save_service(&self, form: &mut FormState<Service>) -> bool {
        let merged = form.merged();
        if form.is_dirty() {
            let checked = check_service(
                &merged.name,
                merged.price,
                merged.duration,
                merged.payment_option,
                merged.deposit,
            );
            if let Err(e) = checked {
                error!("Service {} not saved: {}", merged.id, e);
                self.notifier.notify(Notification::error(e.user_message()));
                return false;
            }
        }

        let id = form.baseline().id.clone();
        let id = id.as_str();
        self.save_form(
            form,
            "Saving service",
            t!("notice.service_updated").to_string(),
            |draft| async move { self.api.update_service(id, &draft).await },
            || self.api.service(id),
        )
        .await
    }

    /// Flip a service between active and inactive
    pub async fn toggle_service(&self, service: &Service) -> bool {
        let active = !service.is_active;
        let category = if active {
            None
        } else {
            service.provider_category_id.as_deref()
        };
        self.attempt(
            "Toggling service",
            Some(t!("notice.service_updated").to_string()),
            self.api.set_service_active(&service.id, active, category),
        )
        .await
        .is_some()
    }

    pub async fn create_category(&self, category: &NewCategory) -> bool {
        if category.name.trim().is_empty() {
            self.notifier
                .notify(Notification::error(t!("error.required_fields")));
            return false;
        }
        self.attempt(
            "Creating category",
            Some(t!("notice.category_added").to_string()),
            self.api.create_category(category),
        )
        .await
        .is_some()
    }

    /// Categories have no single-item endpoint; the saved copy comes from the listing
    pub async fn save_category(&self, form: &mut FormState<Category>) -> bool {
        let id = form.baseline().id.clone();
        let id = id.as_str();
        let fallback = form.merged();
        self.save_form(
            form,
            "Saving category",
            t!("notice.category_updated").to_string(),
            |draft| async move { self.api.update_category(id, &draft).await },
            || async move {
                self.api.categories().await.map(|categories| {
                    categories
                        .into_iter()
                        .find(|c| c.id == id)
                        .unwrap_or(fallback)
                })
            },
        )
        .await
    }

    pub async fn toggle_category(&self, category: &Category) -> bool {
        self.attempt(
            "Toggling category",
            Some(t!("notice.category_updated").to_string()),
            self.api.set_category_active(&category.id, !category.is_active),
        )
        .await
        .is_some()
    }

    /// Shared save flow: skip clean forms, send the draft, commit the refetched record
    async fn save_form<T, S, SF, R, RF>(
        &self,
        form: &mut FormState<T>,
        what: &str,
        success: String,
        send: S,
        reload: R,
    ) -> bool
    where
        T: Editable,
        S: FnOnce(T::Draft) -> SF,
        SF: Future<Output = AdminResult<()>>,
        R: FnOnce() -> RF,
        RF: Future<Output = AdminResult<T>>,
    {
        if !form.is_dirty() {
            self.no_changes();
            return false;
        }

        let draft = form.draft().clone();
        let step = async {
            send(draft).await?;
            reload().await
        };
        match self.attempt(what, Some(success), step).await {
            Some(fresh) => {
                form.commit(fresh);
                true
            }
            None => false,
        }
    }

    // Availability

    /// Weekly and special availability; `None` member means the salon
    pub async fn weekly_hours(&self, member_id: Option<&str>) -> Option<Schedule> {
        let overview = self
            .attempt("Loading availability", None, self.api.availabilities(member_id))
            .await?;
        let mut special = overview.special_availabilities;
        special.sort_by(|a, b| (a.date, &a.start_time).cmp(&(b.date, &b.start_time)));
        Some(Schedule {
            week: WeeklyAvailability::group_by_day(&overview.availabilities),
            special,
        })
    }

    pub async fn add_slot(&self, member_id: Option<&str>, slot: &NewAvailability) -> bool {
        self.attempt(
            "Adding time slot",
            Some(t!("notice.slot_added").to_string()),
            self.api.create_availability(member_id, slot),
        )
        .await
        .is_some()
    }

    pub async fn remove_slot(&self, id: &str) -> ActionOutcome<()> {
        ConfirmAction::remove_slot()
            .run(self.confirmer.as_ref(), &self.notifier, || {
                self.api.remove_availability(id)
            })
            .await
    }

    pub async fn add_special_slot(
        &self,
        member_id: Option<&str>,
        slot: &NewSpecialAvailability,
    ) -> bool {
        self.attempt(
            "Adding special availability",
            Some(t!("notice.special_added").to_string()),
            self.api.create_special_availability(member_id, slot),
        )
        .await
        .is_some()
    }

    pub async fn remove_special_slot(&self, id: &str) -> ActionOutcome<()> {
        ConfirmAction::remove_special_slot()
            .run(self.confirmer.as_ref(), &self.notifier, || {
                self.api.remove_special_availability(id)
            })
            .await
    }

    // Payments

    /// Link to the payment provider's hosted onboarding
    pub async fn start_onboarding(&self) -> Option<String> {
        self.attempt("Starting onboarding", None, self.api.start_onboarding())
            .await
    }
}
