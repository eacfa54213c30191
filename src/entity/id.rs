//! Entity identifiers
//!
//! Newtype wrappers around [`uuid::Uuid`] so a `FileId` can never be passed
//! where a `FolderId` is expected.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Uuid);

        impl $name {
            /// Allocate a fresh random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

define_id!(
    /// Identifier of a folder.
    FolderId
);

define_id!(
    /// Identifier of a file.
    FileId
);

/// Identifier of either kind of entity, as held in the selection set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityId {
    Folder(FolderId),
    File(FileId),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Folder(id) => write!(f, "folder:{}", id),
            EntityId::File(id) => write!(f, "file:{}", id),
        }
    }
}

impl From<FolderId> for EntityId {
    fn from(id: FolderId) -> Self {
        EntityId::Folder(id)
    }
}

impl From<FileId> for EntityId {
    fn from(id: FileId) -> Self {
        EntityId::File(id)
    }
}

/// Where an entity lives: the top level, or inside a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Location {
    #[default]
    Root,
    Folder(FolderId),
}

impl Location {
    pub fn is_root(&self) -> bool {
        matches!(self, Location::Root)
    }

    pub fn folder_id(&self) -> Option<FolderId> {
        match self {
            Location::Root => None,
            Location::Folder(id) => Some(*id),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Root => write!(f, "ROOT"),
            Location::Folder(id) => write!(f, "{}", id),
        }
    }
}

impl From<FolderId> for Location {
    fn from(id: FolderId) -> Self {
        Location::Folder(id)
    }
}
