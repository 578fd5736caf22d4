//! Single-selection accordion state

/// Which FAQ entry, if any, shows its answer.
///
/// At most one entry is expanded at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqSelection {
    expanded: Option<usize>,
}

impl Default for FaqSelection {
    /// The first question starts open
    fn default() -> Self {
        Self { expanded: Some(0) }
    }
}

impl FaqSelection {
    /// Nothing expanded
    pub fn collapsed() -> Self {
        Self { expanded: None }
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Expanded index, or `-1` when everything is collapsed
    pub fn as_index(&self) -> i32 {
        self.expanded.map_or(-1, |i| i as i32)
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Activate the entry at `index`.
    ///
    /// Collapses it when already open, otherwise opens it and closes
    /// whatever was open before.
    pub fn toggle(&mut self, index: usize) {
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_opens_first() {
        let selection = FaqSelection::default();
        assert!(selection.is_expanded(0));
        assert_eq!(selection.as_index(), 0);
    }

    #[test]
    fn test_toggle_from_none() {
        let mut selection = FaqSelection::collapsed();
        assert_eq!(selection.as_index(), -1);

        selection.toggle(3);
        assert_eq!(selection.expanded(), Some(3));
    }

    #[test]
    fn test_toggle_same_collapses() {
        let mut selection = FaqSelection::collapsed();
        selection.toggle(2);
        selection.toggle(2);
        assert_eq!(selection.as_index(), -1);
    }

    #[test]
    fn test_toggle_other_switches() {
        let mut selection = FaqSelection::collapsed();
        selection.toggle(1);
        selection.toggle(4);

        assert_eq!(selection.as_index(), 4);
        assert!(!selection.is_expanded(1));
    }

    #[test]
    fn test_never_two_expanded() {
        let mut selection = FaqSelection::default();
        for step in [0, 5, 5, 2, 3, 3, 3, 1, 0] {
            selection.toggle(step);
            let open = (0..6).filter(|&i| selection.is_expanded(i)).count();
            assert!(open <= 1);
        }
    }
}
