use strum_macros::AsRefStr;

pub type Result<T> = core::result::Result<T, Error>;
pub type RosterResult<T> = core::result::Result<T, RosterError>;

/// Errors while building the roster at startup.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("seed roster lists '{email}' more than once for '{activity}'")]
    DuplicateParticipant { activity: String, email: String },

    #[error("io error reading the seed roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml deserialization error: {0}")]
    TomlDeser(#[from] toml::de::Error),
}

/// Errors returned by the roster operations themselves.
#[derive(Debug, AsRefStr, thiserror::Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("activity not found: {activity}")]
    ActivityNotFound { activity: String },
    #[error("'{email}' is already signed up for '{activity}'")]
    AlreadyRegistered { activity: String, email: String },
    #[error("'{email}' is not registered for '{activity}'")]
    NotRegistered { activity: String, email: String },
    #[error("'{activity}' is full ({max_participants} participants)")]
    ActivityFull {
        activity: String,
        max_participants: u32,
    },
}
