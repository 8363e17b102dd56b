// Submission gate applied before any container is touched
use crate::booking::Booking;
use crate::error::ValidationError;

const VALID_PREFIXES: [&str; 2] = ["078", "079"];
const PHONE_LENGTH: usize = 10;

// Exactly ten ASCII digits starting with 078 or 079. No trimming.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_LENGTH
        && phone.bytes().all(|b| b.is_ascii_digit())
        && VALID_PREFIXES.iter().any(|prefix| phone.starts_with(prefix))
}

// Checks the three form fields and builds the booking they describe
pub fn validate_submission(
    name: &str,
    phone: &str,
    description: &str,
) -> Result<Booking, ValidationError> {
    for (field, value) in [("name", name), ("phone", phone), ("description", description)] {
        if value.is_empty() {
            return Err(ValidationError::EmptyField(field));
        }
    }

    if !is_valid_phone(phone) {
        return Err(ValidationError::InvalidPhone(phone.to_string()));
    }

    Ok(Booking::new(name, phone, description))
}
