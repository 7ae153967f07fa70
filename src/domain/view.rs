use serde::{Deserialize, Serialize};

/// Per-user access row linking a user to a project. Creating a project for a
/// user inserts an owner grant; other users can be granted narrower access.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewGrant {
    pub user_id: String,
    pub project_id: i64,
    pub bookmark: bool,
    pub read: bool,
    pub write: bool,
    pub delete: bool,
    pub archive: bool,
}

impl ViewGrant {
    /// Default grant for the creating user: bookmarked, read/write, no
    /// delete or archive rights.
    pub fn owner(user_id: impl Into<String>, project_id: i64) -> Self {
        Self {
            user_id: user_id.into(),
            project_id,
            bookmark: true,
            read: true,
            write: true,
            delete: false,
            archive: false,
        }
    }

    pub fn read_only(user_id: impl Into<String>, project_id: i64) -> Self {
        Self {
            user_id: user_id.into(),
            project_id,
            bookmark: false,
            read: true,
            write: false,
            delete: false,
            archive: false,
        }
    }
}
