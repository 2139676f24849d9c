use once_cell::sync::Lazy;
use regex::Regex;

use super::models::{
    ContactField, ContactFormData, FieldErrors, NewsletterField, NewsletterFormData,
};

pub const NAME_ERROR: &str = "Name must be between 2 and 50 characters";
pub const EMAIL_ERROR: &str = "Please enter a valid email address";
pub const PHONE_ERROR: &str = "Phone number may only contain digits, +, - and spaces";
pub const MESSAGE_ERROR: &str = "Message must be between 10 and 1000 characters";

const NAME_LEN: (usize, usize) = (2, 50);
const MESSAGE_LEN: (usize, usize) = (10, 1000);

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    )
    .unwrap()
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9+\-\s]*$").unwrap());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

fn length_within(value: &str, (min, max): (usize, usize)) -> bool {
    (min..=max).contains(&value.chars().count())
}

/// Checks every contact field and returns the trimmed record, or all the
/// problems found at once.
pub fn validate_contact(
    form: &ContactFormData,
) -> Result<ContactFormData, FieldErrors<ContactField>> {
    let record = ContactFormData {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone: form.phone.trim().to_string(),
        message: form.message.trim().to_string(),
    };

    let mut errors = FieldErrors::default();
    if !length_within(&record.name, NAME_LEN) {
        errors.insert(ContactField::Name, NAME_ERROR);
    }
    if !is_valid_email(&record.email) {
        errors.insert(ContactField::Email, EMAIL_ERROR);
    }
    if !is_valid_phone(&record.phone) {
        errors.insert(ContactField::Phone, PHONE_ERROR);
    }
    if !length_within(&record.message, MESSAGE_LEN) {
        errors.insert(ContactField::Message, MESSAGE_ERROR);
    }

    if errors.is_empty() {
        Ok(record)
    } else {
        Err(errors)
    }
}

pub fn validate_newsletter(
    form: &NewsletterFormData,
) -> Result<NewsletterFormData, FieldErrors<NewsletterField>> {
    let email = form.email.trim();
    if is_valid_email(email) {
        Ok(NewsletterFormData { email: email.to_string() })
    } else {
        let mut errors = FieldErrors::default();
        errors.insert(NewsletterField::Email, EMAIL_ERROR);
        Err(errors)
    }
}
