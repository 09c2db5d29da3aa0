use std::io::{self, Write};

use passgen::{GenerationPolicy, Password, EXCLUDED_CHARACTERS};

/// Write the summary header followed by the numbered passwords.
pub(crate) fn write_report(
    mut output: impl Write,
    policy: &GenerationPolicy,
    passwords: &[Password],
) -> io::Result<()> {
    let plural = if passwords.len() > 1 { "s" } else { "" };
    writeln!(&mut output, "Generated password{plural}:")?;
    writeln!(&mut output, "Length: {} characters", policy.length())?;
    writeln!(
        &mut output,
        "Character sets: {}",
        Joined(policy.enabled_classes().iter().map(|c| c.name()))
    )?;
    writeln!(
        &mut output,
        "Excluded similar characters: {}",
        Joined(EXCLUDED_CHARACTERS.iter())
    )?;
    writeln!(&mut output)?;
    for (index, password) in passwords.iter().enumerate() {
        writeln!(&mut output, "{}: {}", index + 1, password.as_str())?;
    }
    output.flush()
}

struct Joined<I>(I);

impl<I, D> std::fmt::Display for Joined<I>
where
    I: Iterator<Item = D> + Clone,
    D: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for item in self.0.clone() {
            if first {
                first = false;
            } else {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
