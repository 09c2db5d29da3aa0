use crate::{CharacterClass, PolicyError};

pub const DEFAULT_LENGTH: usize = 12;
pub const MIN_LENGTH: usize = 3;
pub const MAX_LENGTH: usize = 128;
/// One slot for each mandatory class, plus one for the special character.
pub const MIN_LENGTH_WITH_SPECIAL: usize = 4;

static MANDATORY_CLASSES: [CharacterClass; 3] = [
    CharacterClass::UPPERCASE,
    CharacterClass::LOWERCASE,
    CharacterClass::DIGITS,
];

static ALL_CLASSES: [CharacterClass; 4] = [
    CharacterClass::UPPERCASE,
    CharacterClass::LOWERCASE,
    CharacterClass::DIGITS,
    CharacterClass::SPECIAL,
];

/// The validated parameters for generating one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationPolicy {
    length: usize,
    include_special: bool,
}

impl GenerationPolicy {
    pub fn new(length: usize, include_special: bool) -> Result<GenerationPolicy, PolicyError> {
        Self::check_length(length)?;
        if include_special && length < MIN_LENGTH_WITH_SPECIAL {
            return Err(PolicyError::TooShortForSpecial {
                min: MIN_LENGTH_WITH_SPECIAL,
            });
        }
        Ok(GenerationPolicy {
            length,
            include_special,
        })
    }

    /// Check `length` against the absolute bounds only, ignoring the special-character minimum.
    ///
    /// Callers that validate other input between the two checks use this first and
    /// [`GenerationPolicy::new`] afterwards.
    pub fn check_length(length: usize) -> Result<(), PolicyError> {
        if length < MIN_LENGTH {
            return Err(PolicyError::LengthTooShort { min: MIN_LENGTH });
        }
        if length > MAX_LENGTH {
            return Err(PolicyError::LengthTooLong { max: MAX_LENGTH });
        }
        Ok(())
    }

    /// Number of characters in each password.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Whether the special-character class is enabled.
    pub fn include_special(&self) -> bool {
        self.include_special
    }

    /// The classes a password draws from, in the order their guaranteed characters are placed.
    ///
    /// Every class in this list is represented at least once in each generated password.
    pub fn enabled_classes(&self) -> &'static [CharacterClass] {
        if self.include_special {
            &ALL_CLASSES
        } else {
            &MANDATORY_CLASSES
        }
    }
}

impl Default for GenerationPolicy {
    fn default() -> GenerationPolicy {
        GenerationPolicy {
            length: DEFAULT_LENGTH,
            include_special: false,
        }
    }
}
