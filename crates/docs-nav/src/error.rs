pub use anyhow::{Error, Result};

/// Raised when a lookup or navigation query on a
/// [`DocumentationGroup`](crate::model::DocumentationGroup) has nothing to return.
///
/// Every query that can fail this way has a matching `has_*` predicate which callers
/// can check first.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFound {
    #[error("Group: \"{group}\" has no home")]
    NoHome { group: String },
    #[error("Section: \"{name}\" does not exist")]
    NoSuchSection { name: String },
    #[error("Section: \"{name}\" has no next section")]
    NoNextSection { name: String },
    #[error("Section: \"{name}\" has no previous section")]
    NoPreviousSection { name: String },
    /// The section handed to a navigation query does not belong to the group.
    #[error("Section: \"{name}\" was not found")]
    NotInGroup { name: String },
}
