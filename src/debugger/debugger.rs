use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl DebugLevel {
    /// Values above `Trace` saturate to `Trace`.
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => DebugLevel::Off,
            1 => DebugLevel::Error,
            2 => DebugLevel::Warn,
            3 => DebugLevel::Info,
            4 => DebugLevel::Debug,
            _ => DebugLevel::Trace,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "OFF" => Some(DebugLevel::Off),
            "ERROR" => Some(DebugLevel::Error),
            "WARN" => Some(DebugLevel::Warn),
            "INFO" => Some(DebugLevel::Info),
            "DEBUG" => Some(DebugLevel::Debug),
            "TRACE" => Some(DebugLevel::Trace),
            _ => None,
        }
    }
}

/// Subsystem tag printed with every log line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Component {
    Registry,
    Cli,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Registry => write!(f, "registry"),
            Component::Cli => write!(f, "cli"),
        }
    }
}

pub mod color {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const GREEN: &str = "\x1b[32m";
    pub const BLUE: &str = "\x1b[34m";
    pub const GRAY: &str = "\x1b[90m";
    pub const RESET: &str = "\x1b[0m";
}

static DEBUG_LEVEL: AtomicU8 = AtomicU8::new(DebugLevel::Off as u8);

pub fn set_debug_level(level: DebugLevel) {
    DEBUG_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn get_debug_level() -> DebugLevel {
    DebugLevel::from_u8(DEBUG_LEVEL.load(Ordering::Relaxed))
}

pub fn should_log(level: DebugLevel) -> bool {
    level != DebugLevel::Off && level <= get_debug_level()
}

pub fn level_label(level: DebugLevel) -> String {
    use color::*;

    match level {
        DebugLevel::Off => String::new(),
        DebugLevel::Error => format!("{}ERROR{}", RED, RESET),
        DebugLevel::Warn => format!("{}WARN{}", YELLOW, RESET),
        DebugLevel::Info => format!("{}INFO{}", GREEN, RESET),
        DebugLevel::Debug => format!("{}DEBUG{}", BLUE, RESET),
        DebugLevel::Trace => format!("{}TRACE{}", GRAY, RESET),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_by_verbosity() {
        assert!(DebugLevel::Error < DebugLevel::Warn);
        assert!(DebugLevel::Debug < DebugLevel::Trace);
        assert_eq!(DebugLevel::from_u8(9), DebugLevel::Trace);
        assert_eq!(DebugLevel::from_u8(2), DebugLevel::Warn);
    }

    #[test]
    fn level_names_are_case_insensitive() {
        assert_eq!(DebugLevel::from_name("debug"), Some(DebugLevel::Debug));
        assert_eq!(DebugLevel::from_name("OFF"), Some(DebugLevel::Off));
        assert_eq!(DebugLevel::from_name("verbose"), None);
    }

    #[test]
    fn off_is_never_logged() {
        assert!(!should_log(DebugLevel::Off));
    }
}
