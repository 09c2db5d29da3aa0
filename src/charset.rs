use rand::seq::SliceRandom;
use rand::Rng;

/// Characters left out of every class because they're easily mistaken for one another.
pub static EXCLUDED_CHARACTERS: &[char] = &['0', 'O', 'I', 'l', '1'];

/// A named, fixed set of characters a password may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterClass {
    name: &'static str,
    alphabet: &'static str,
}

impl CharacterClass {
    pub const UPPERCASE: CharacterClass = CharacterClass {
        name: "Uppercase",
        alphabet: "ABCDEFGHJKLMNPQRSTUVWXYZ",
    };
    pub const LOWERCASE: CharacterClass = CharacterClass {
        name: "Lowercase",
        alphabet: "abcdefghijkmnpqrstuvwxyz",
    };
    pub const DIGITS: CharacterClass = CharacterClass {
        name: "Numbers",
        alphabet: "23456789",
    };
    pub const SPECIAL: CharacterClass = CharacterClass {
        name: "Special characters",
        alphabet: "!@#$%^&*()_+-=[]{}|;:,.<>?",
    };

    /// The name shown in the report header, e.g. "Uppercase".
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Every character the class can produce, in a fixed order.
    pub fn alphabet(&self) -> &'static str {
        self.alphabet
    }

    pub fn contains(&self, ch: char) -> bool {
        self.alphabet.contains(ch)
    }

    /// Pick one character from the class, uniformly.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        // Alphabets are ASCII, so indexing bytes is indexing characters.
        let byte = self
            .alphabet
            .as_bytes()
            .choose(rng)
            .expect("character classes are never empty");
        char::from(*byte)
    }
}
