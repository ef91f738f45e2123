//! Command-line configuration for `kindcli`.

use crate::debugger::DebugLevel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub debug_level: DebugLevel,

    /// External type names to resolve. Empty means interactive mode.
    pub names: Vec<String>,
}

impl CliConfig {
    /// Parse arguments, excluding the program name.
    ///
    /// `--debug=<n>` sets the level; anything else is a name to resolve.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut debug_level = DebugLevel::Off;
        let mut names = Vec::new();

        for arg in args {
            match arg.strip_prefix("--debug=") {
                Some(level) => {
                    debug_level = level
                        .parse::<u8>()
                        .map(DebugLevel::from_u8)
                        .unwrap_or(DebugLevel::Off);
                }
                None => names.push(arg),
            }
        }

        Self { debug_level, names }
    }

    pub fn is_interactive(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn debug_flag_sets_level() {
        let config = CliConfig::from_args(args(&["--debug=4", "int"]));
        assert_eq!(config.debug_level, DebugLevel::Debug);
        assert_eq!(config.names, vec!["int".to_string()]);
        assert!(!config.is_interactive());
    }

    #[test]
    fn bad_debug_level_falls_back_to_off() {
        let config = CliConfig::from_args(args(&["--debug=loud"]));
        assert_eq!(config.debug_level, DebugLevel::Off);
        assert!(config.is_interactive());
    }

    #[test]
    fn names_keep_their_exact_spelling() {
        let config = CliConfig::from_args(args(&[" int", "INT", "string"]));
        assert_eq!(config.names, args(&[" int", "INT", "string"]));
    }
}
