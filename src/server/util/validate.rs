use crate::server::error::validation::ValidationError;

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 10;
const PASSWORD_MIN_CHARS: usize = 8;

/// Trims a required text field, rejecting empty or whitespace-only input.
///
/// # Arguments
/// - `field` - Human readable field name used in the error message
/// - `value` - Raw input
///
/// # Returns
/// - `Ok(String)` - Trimmed value
/// - `Err(ValidationError::Blank)` - Value is blank
pub fn non_blank(field: &'static str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Blank(field));
    }

    Ok(trimmed.to_string())
}

/// Validates a display name: 2 to 10 characters after trimming, letters of any script
/// and interior spaces.
pub fn name(value: String) -> Result<String, ValidationError> {
    let value = value.trim().to_string();
    let count = value.chars().count();

    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&count)
        || !value.chars().all(|c| c.is_alphabetic() || c == ' ')
    {
        return Err(ValidationError::InvalidName);
    }

    Ok(value)
}

/// Validates an email as `local@domain.tld`.
pub fn email(value: String) -> Result<String, ValidationError> {
    let value = value.trim().to_string();

    let Some((local, domain)) = value.split_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };

    let domain_ok = domain
        .split_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty());

    if local.is_empty() || domain.contains('@') || !domain_ok || value.contains(char::is_whitespace)
    {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(value)
}

/// Validates a plain-text password before hashing. Passwords are not trimmed.
pub fn password(value: String) -> Result<String, ValidationError> {
    if value.chars().count() < PASSWORD_MIN_CHARS {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(value)
}
