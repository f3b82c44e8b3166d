use std::fmt;

/// Conditions the grocery domain reports to its caller
///
/// None of these are fatal; callers are expected to show them to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The requested feature exists as a placeholder only
    NotImplemented { feature: &'static str },
    /// No friend with the given name is known
    FriendNotFound(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotImplemented { feature } => {
                write!(f, "{} is not implemented yet (coming soon)", feature)
            }
            StoreError::FriendNotFound(name) => write!(f, "Friend '{}' not found", name),
        }
    }
}

impl std::error::Error for StoreError {}
