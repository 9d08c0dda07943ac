use thiserror::Error;

/// Invalid user input rejected before it reaches the database.
///
/// All variants result in 400 Bad Request with the display message as the body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field was empty or only whitespace.
    #[error("{0} must not be blank")]
    Blank(&'static str),

    /// Names are 2 to 10 letters or spaces.
    #[error("Name must be 2 to 10 letters or spaces")]
    InvalidName,

    #[error("Email address is not valid")]
    InvalidEmail,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
}
