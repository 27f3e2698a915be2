use anyhow::{Context, Result};
use std::io::Write;

use crate::describe;
use crate::git::SubmoduleSource;

/// Handle encode mode
/// Print the fingerprint of the current submodule states
pub fn handle<S: SubmoduleSource, W: Write>(source: &S, output: &mut W) -> Result<()> {
    let submodules = source.submodules()?;
    if submodules.is_empty() {
        tracing::warn!("No submodules found, the fingerprint is empty");
    }

    let fingerprint = describe::fingerprint(&submodules).context("Failed to encode submodules")?;

    writeln!(output, "{}", fingerprint)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::{Submodule, SubmoduleState};

    struct FixedSource(Vec<Submodule>);

    impl SubmoduleSource for FixedSource {
        fn submodules(&self) -> Result<Vec<Submodule>> {
            Ok(self.0.clone())
        }
    }

    const SHA: &str = "0123456789abcdef0123456789abcdef01234567";

    #[test]
    fn test_prints_fingerprint_line() {
        let source = FixedSource(vec![
            Submodule::new(SubmoduleState::Recorded, SHA, "a"),
            Submodule::new(SubmoduleState::Recorded, SHA, "b"),
        ]);

        let mut output = Vec::new();
        handle(&source, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "A\n");
    }

    #[test]
    fn test_no_submodules_prints_empty_line() {
        let mut output = Vec::new();
        handle(&FixedSource(Vec::new()), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "\n");
    }

    #[test]
    fn test_conflict_prints_nothing() {
        let source = FixedSource(vec![Submodule::new(SubmoduleState::Conflict, SHA, "a")]);

        let mut output = Vec::new();
        let err = handle(&source, &mut output).unwrap_err();
        assert!(output.is_empty());
        assert!(format!("{:#}", err).contains("conflict"));
    }
}
