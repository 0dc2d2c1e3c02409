//! Client-side checks run before a request is sent, plus the small
//! calculations the service and member forms prefill with.

use crate::api::models::{NewMember, NewService, PaymentOption, SalonProfile};
use crate::error::ValidationError;
use crate::session::Session;
use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;

/// MIME types accepted for salon pictures
pub const IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

lazy_static! {
    static ref EMAIL: Regex = Regex::new(
        r#"(?i)^(?:[^<>()\[\].,;:\s@"]+(?:\.[^<>()\[\].,;:\s@"]+)*|".+")@(?:[^<>()\[\].,;:\s@"]+\.)+[^<>()\[\].,;:\s@"]{2,}$"#
    )
    .expect("valid e-mail pattern");
    // French numbers, national or +33/0033 prefixed, optional separators between pairs
    static ref PHONE_NUMBER: Regex = Regex::new(
        r"^(?:(?:\+|00)33\s?[1-9](?:[\s.-]?\d{2}){4}|0[1-9](?:[\s.-]?\d{2}){4})$"
    )
    .expect("valid phone number pattern");
}

type ValidationResult = Result<(), ValidationError>;

fn require(fields: &[(&'static str, bool)]) -> ValidationResult {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email.trim())
}

pub fn is_valid_phone_number(phone_number: &str) -> bool {
    PHONE_NUMBER.is_match(phone_number.trim())
}

pub fn validate_credentials(email: &str, password: &str) -> ValidationResult {
    require(&[("email", filled(email)), ("password", filled(password))])
}

/// Name, e-mail and phone number are mandatory and must be well formed
pub fn validate_salon_profile(profile: &SalonProfile) -> ValidationResult {
    require(&[
        ("name", filled(&profile.name)),
        ("email", filled(&profile.email)),
        ("phoneNumber", filled(&profile.phone_number)),
    ])?;
    if !is_valid_email(&profile.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_valid_phone_number(&profile.phone_number) {
        return Err(ValidationError::InvalidPhoneNumber);
    }
    Ok(())
}

pub fn validate_new_service(service: &NewService) -> ValidationResult {
    check_service(
        &service.name,
        service.price,
        service.duration,
        service.payment_option,
        service.deposit,
    )
}

/// Name, price and duration are mandatory, then the deposit rules apply
pub fn check_service(
    name: &str,
    price: u32,
    duration: u32,
    payment_option: Option<PaymentOption>,
    deposit: Option<u32>,
) -> ValidationResult {
    require(&[
        ("name", filled(name)),
        ("price", price > 0),
        ("duration", duration > 0),
    ])?;
    check_deposit(payment_option, deposit, price)
}

/// A deposit option needs a non-zero deposit, and no deposit may exceed the price
pub fn check_deposit(
    payment_option: Option<PaymentOption>,
    deposit: Option<u32>,
    price: u32,
) -> ValidationResult {
    match deposit {
        Some(deposit) if deposit > price => {
            Err(ValidationError::DepositExceedsPrice { deposit, price })
        }
        None | Some(0) if payment_option == Some(PaymentOption::Deposit) => {
            Err(ValidationError::MissingDeposit)
        }
        _ => Ok(()),
    }
}

pub fn validate_new_member(member: &NewMember) -> ValidationResult {
    require(&[
        ("firstName", filled(&member.first_name)),
        ("lastName", filled(&member.last_name)),
        ("accessCode", filled(&member.access_code)),
    ])?;
    let code = member.access_code.trim();
    if code.len() != 6 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidAccessCode);
    }
    Ok(())
}

pub fn validate_image_type(mime: &str) -> ValidationResult {
    let mime = mime.trim().to_ascii_lowercase();
    if IMAGE_TYPES.contains(&mime.as_str()) {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedFileType(mime))
    }
}

/// `percent` of `price`, rounded to the nearest unit
pub fn calculate_deposit(price: u32, percent: u32) -> u32 {
    (f64::from(price) * f64::from(percent) / 100.0).round() as u32
}

/// Payment option and deposit a new service starts with, from the salon defaults
pub fn default_payment_settings(session: &Session, price: u32) -> (Option<PaymentOption>, u32) {
    let option = session.default_payment_option;
    let deposit = match option {
        Some(PaymentOption::Deposit) => {
            calculate_deposit(price, session.default_deposit.unwrap_or(0))
        }
        _ => 0,
    };
    (option, deposit)
}

/// Random six-digit member access code
pub fn generate_access_code() -> String {
    rand::rng().random_range(100_000..=999_999u32).to_string()
}
