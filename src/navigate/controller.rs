//! Navigation controller
//!
//! The current location is always the last breadcrumb, so the trail and the
//! location can never disagree.

use log::{info, warn};

use crate::entity::{Folder, Location};
use crate::error::NavigateError;

/// Display name of the ROOT breadcrumb unless configured otherwise.
pub const DEFAULT_ROOT_LABEL: &str = "My Drive";

/// One step of the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub location: Location,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    trail: Vec<Breadcrumb>,
}

impl Navigator {
    pub fn new(root_label: impl Into<String>) -> Self {
        Self {
            trail: vec![Breadcrumb {
                location: Location::Root,
                name: root_label.into(),
            }],
        }
    }

    pub fn location(&self) -> Location {
        self.trail
            .last()
            .map(|crumb| crumb.location)
            .unwrap_or(Location::Root)
    }

    pub fn trail(&self) -> &[Breadcrumb] {
        &self.trail
    }

    pub fn depth(&self) -> usize {
        self.trail.len() - 1
    }

    /// Step into a direct child of the current location.
    pub fn enter(&mut self, folder: &Folder) -> Result<(), NavigateError> {
        let location = self.location();
        if folder.parent != location {
            warn!("Refusing to enter {}: not a child of {}", folder.id, location);
            return Err(NavigateError::NotAChild {
                folder: folder.id,
                location,
            });
        }

        self.trail.push(Breadcrumb {
            location: Location::Folder(folder.id),
            name: folder.name.clone(),
        });
        info!("Entered {:?} ({})", folder.name, folder.id);
        Ok(())
    }

    /// Truncate the trail so that `index` becomes its last element.
    pub fn jump_to(&mut self, index: usize) -> Result<Location, NavigateError> {
        if index >= self.trail.len() {
            return Err(NavigateError::TrailIndexOutOfRange {
                index,
                len: self.trail.len(),
            });
        }

        self.trail.truncate(index + 1);
        let location = self.location();
        info!("Jumped to breadcrumb {} ({})", index, location);
        Ok(location)
    }

    /// Go to the parent of the current location. At ROOT this stays put.
    pub fn up(&mut self) -> Location {
        let index = self.trail.len().saturating_sub(2);
        self.trail.truncate(index + 1);
        self.location()
    }

    /// Cut the trail at the first breadcrumb whose folder no longer exists.
    ///
    /// Returns true if the trail was shortened.
    pub fn retain_existing<F>(&mut self, exists: F) -> bool
    where
        F: Fn(Location) -> bool,
    {
        let keep = self
            .trail
            .iter()
            .position(|crumb| !exists(crumb.location))
            .unwrap_or(self.trail.len())
            .max(1);

        if keep < self.trail.len() {
            warn!(
                "Current folder removed; falling back to {}",
                self.trail[keep - 1].location
            );
            self.trail.truncate(keep);
            true
        } else {
            false
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::FolderId;
    use chrono::Utc;

    fn folder(name: &str, parent: Location) -> Folder {
        Folder {
            id: FolderId::new(),
            name: name.to_string(),
            parent,
            created_at: Utc::now(),
        }
    }

    fn assert_consistent(nav: &Navigator) {
        let trail = nav.trail();
        assert_eq!(trail[0].location, Location::Root);
        assert_eq!(trail[0].name, DEFAULT_ROOT_LABEL);
        assert_eq!(trail.last().unwrap().location, nav.location());
    }

    #[test]
    fn test_starts_at_root() {
        let nav = Navigator::default();
        assert_eq!(nav.location(), Location::Root);
        assert_eq!(nav.depth(), 0);
        assert_consistent(&nav);
    }

    #[test]
    fn test_enter_and_jump() {
        let mut nav = Navigator::default();
        let a = folder("a", Location::Root);
        let b = folder("b", a.id.into());

        nav.enter(&a).unwrap();
        nav.enter(&b).unwrap();
        assert_eq!(nav.location(), Location::Folder(b.id));
        assert_eq!(nav.depth(), 2);
        assert_consistent(&nav);

        assert_eq!(nav.jump_to(1).unwrap(), Location::Folder(a.id));
        assert_consistent(&nav);
        assert_eq!(nav.jump_to(0).unwrap(), Location::Root);
        assert_eq!(nav.trail().len(), 1);
    }

    #[test]
    fn test_enter_non_child_is_rejected() {
        let mut nav = Navigator::default();
        let a = folder("a", Location::Root);
        let stranger = folder("b", a.id.into());

        assert!(matches!(
            nav.enter(&stranger),
            Err(NavigateError::NotAChild { .. })
        ));
        assert_eq!(nav.location(), Location::Root);
    }

    #[test]
    fn test_jump_out_of_range_is_noop() {
        let mut nav = Navigator::default();
        nav.enter(&folder("a", Location::Root)).unwrap();
        assert_eq!(
            nav.jump_to(2),
            Err(NavigateError::TrailIndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_up_stops_at_root() {
        let mut nav = Navigator::default();
        let a = folder("a", Location::Root);
        nav.enter(&a).unwrap();
        assert_eq!(nav.up(), Location::Root);
        assert_eq!(nav.up(), Location::Root);
        assert_consistent(&nav);
    }

    #[test]
    fn test_retain_existing_truncates_at_first_missing() {
        let mut nav = Navigator::default();
        let a = folder("a", Location::Root);
        let b = folder("b", a.id.into());
        nav.enter(&a).unwrap();
        nav.enter(&b).unwrap();

        let gone = Location::Folder(a.id);
        assert!(nav.retain_existing(|loc| loc != gone));
        assert_eq!(nav.location(), Location::Root);
        assert!(!nav.retain_existing(|_| true));
    }
}
