pub mod compare;

use clap::ValueEnum;
use diffgroup_core::logging_facility::Profile;

/// Logging profiles selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogProfile {
    /// Human-readable logs, debug level
    Development,
    /// JSON logs, info level
    Production,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
        }
    }
}
