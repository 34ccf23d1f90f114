//! Swift operation identifiers produced by request routing.

use std::fmt;

/// A container-level Swift operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwiftOperation {
    /// GET container: list objects.
    ListContainer,
    /// HEAD container: existence plus count headers.
    HeadContainer,
    /// PUT container: idempotent create.
    CreateContainer,
    /// POST container: unconditional create/update.
    PostContainer,
    /// DELETE container: delete if empty.
    DeleteContainer,
}

impl SwiftOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ListContainer => "ListContainer",
            Self::HeadContainer => "HeadContainer",
            Self::CreateContainer => "CreateContainer",
            Self::PostContainer => "PostContainer",
            Self::DeleteContainer => "DeleteContainer",
        }
    }
}

impl fmt::Display for SwiftOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
