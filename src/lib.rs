//! Random password generation with composition rules and no look-alike characters.

mod charset;
pub mod password_generation;
mod policy;

pub use charset::{CharacterClass, EXCLUDED_CHARACTERS};
pub use password_generation::PasswordGenerator;
pub use policy::{
    GenerationPolicy, DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH, MIN_LENGTH_WITH_SPECIAL,
};

/// A generated password.
///
/// The `Debug` impl is opaque, so a password that ends up in a log line or a panic message doesn't
/// give itself away. Use [`Password::as_str`] to get at the text.
#[derive(Clone, Eq, PartialEq)]
pub struct Password(String);

opaque_debug::implement!(Password);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters. Every character class is ASCII, so bytes and characters agree.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Password {
    fn from(s: String) -> Password {
        Password(s)
    }
}

/// Why a [`GenerationPolicy`] was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("Password length must be at least {min}")]
    LengthTooShort { min: usize },
    #[error("Password length cannot exceed {max}")]
    LengthTooLong { max: usize },
    #[error("Password length must be at least {min} when using special characters")]
    TooShortForSpecial { min: usize },
}
