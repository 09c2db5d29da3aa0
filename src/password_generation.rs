//! Utilities for generating passwords.

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use crate::{GenerationPolicy, Password};

/// Generate a password that follows `policy`.
///
/// The first slots get one character from each enabled class, so every class is represented.
/// Every other slot picks an enabled class at random and then a character from it; each of those
/// picks is independent, so long passwords are uniform per character rather than evenly split
/// between classes. Finally the whole thing is shuffled, otherwise every password would start
/// with an uppercase letter, a lowercase letter and a digit.
///
/// Note that `rand`'s underlying uniform sampler does the right thing to prevent bias: if it can't
/// generate a value that is within the given range (or really, a multiple of the range), it
/// re-samples.
pub fn generate_password<R>(rng: &mut R, policy: &GenerationPolicy) -> Password
where
    R: Rng + CryptoRng + ?Sized,
{
    let classes = policy.enabled_classes();
    let length = policy.length();
    assert!(
        length >= classes.len(),
        "policy of length {length} cannot hold one character from each of {} classes",
        classes.len()
    );

    let mut buffer = Vec::with_capacity(length);
    for class in classes {
        buffer.push(class.sample(rng));
    }
    while buffer.len() < length {
        let class = classes
            .choose(rng)
            .expect("a policy always enables at least one class");
        buffer.push(class.sample(rng));
    }

    // Fisher-Yates, from the last index down.
    buffer.shuffle(rng);
    Password(buffer.into_iter().collect())
}

/// Owns a random source and hands out passwords from it.
///
/// [`PasswordGenerator::new`] uses the thread-local generator, which is a CSPRNG seeded from the
/// operating system, so separate runs never repeat each other.
pub struct PasswordGenerator<R = ThreadRng> {
    rng: R,
}

impl PasswordGenerator<ThreadRng> {
    pub fn new() -> PasswordGenerator<ThreadRng> {
        PasswordGenerator {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for PasswordGenerator<ThreadRng> {
    fn default() -> PasswordGenerator<ThreadRng> {
        PasswordGenerator::new()
    }
}

impl<R: Rng + CryptoRng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> PasswordGenerator<R> {
        PasswordGenerator { rng }
    }

    pub fn generate(&mut self, policy: &GenerationPolicy) -> Password {
        generate_password(&mut self.rng, policy)
    }
}
