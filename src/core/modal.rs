//! Demo modal visibility and background scroll locking

/// Axis-aligned box in viewport coordinates, as reported by
/// `getBoundingClientRect`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Edges are inclusive
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left
            && x <= self.left + self.width
            && y >= self.top
            && y <= self.top + self.height
    }
}

/// Whether a pointer-down at (`x`, `y`) should dismiss the dialog.
///
/// Only points strictly outside the dialog box count; a dialog that is not
/// laid out yet (`None`) never dismisses.
pub fn is_outside_click(dialog: Option<&Bounds>, x: f64, y: f64) -> bool {
    dialog.is_some_and(|bounds| !bounds.contains(x, y))
}

/// Something whose scrolling can be suspended while an overlay is shown
pub trait ScrollLockTarget {
    fn set_scroll_locked(&mut self, locked: bool);
}

/// Open/closed state of an overlay that locks background scrolling.
///
/// Every transition into `open` locks the target once and every transition
/// out of it unlocks once, so the lock stays balanced whatever the sequence
/// of calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns `true` if the modal was closed before
    pub fn open<T: ScrollLockTarget + ?Sized>(&mut self, target: &mut T) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        target.set_scroll_locked(true);
        true
    }

    /// Returns `true` if the modal was open before
    pub fn close<T: ScrollLockTarget + ?Sized>(&mut self, target: &mut T) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        target.set_scroll_locked(false);
        true
    }

    pub fn set<T: ScrollLockTarget + ?Sized>(&mut self, open: bool, target: &mut T) -> bool {
        if open {
            self.open(target)
        } else {
            self.close(target)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Records lock changes and tracks the resulting state
    #[derive(Debug, Default)]
    pub(crate) struct FakeBody {
        pub locked: bool,
        pub changes: Vec<bool>,
    }

    impl ScrollLockTarget for FakeBody {
        fn set_scroll_locked(&mut self, locked: bool) {
            self.locked = locked;
            self.changes.push(locked);
        }
    }

    fn dialog() -> Bounds {
        Bounds::new(100.0, 50.0, 600.0, 400.0)
    }

    #[test]
    fn test_bounds_contains() {
        let b = dialog();
        assert!(b.contains(100.0, 50.0));
        assert!(b.contains(700.0, 450.0));
        assert!(b.contains(400.0, 200.0));
        assert!(!b.contains(99.9, 200.0));
        assert!(!b.contains(400.0, 451.0));
    }

    #[test]
    fn test_open_locks_close_unlocks() {
        let mut body = FakeBody::default();
        let mut modal = ModalState::default();

        assert!(modal.open(&mut body));
        assert!(body.locked);
        assert!(modal.close(&mut body));
        assert!(!body.locked);
        assert_eq!(body.changes, vec![true, false]);
    }

    #[test]
    fn test_repeated_calls_do_not_touch_lock() {
        let mut body = FakeBody::default();
        let mut modal = ModalState::default();

        assert!(!modal.close(&mut body));
        modal.open(&mut body);
        assert!(!modal.open(&mut body));
        assert_eq!(body.changes, vec![true]);
    }

    #[test]
    fn test_inside_click_does_not_dismiss() {
        let b = dialog();
        assert!(!is_outside_click(Some(&b), 300.0, 300.0));
        assert!(!is_outside_click(Some(&b), 400.0, 51.0));
    }

    #[test]
    fn test_edge_click_does_not_dismiss() {
        let b = dialog();
        assert!(!is_outside_click(Some(&b), 100.0, 50.0));
        assert!(!is_outside_click(Some(&b), 700.0, 450.0));
        assert!(!is_outside_click(Some(&b), 100.0, 450.0));
    }

    #[test]
    fn test_outside_click_dismisses() {
        let b = dialog();
        assert!(is_outside_click(Some(&b), 10.0, 10.0));
        assert!(is_outside_click(Some(&b), 99.5, 200.0));
        assert!(is_outside_click(Some(&b), 400.0, 450.5));
        assert!(is_outside_click(Some(&b), 701.0, 60.0));
    }

    #[test]
    fn test_click_without_dialog_does_not_dismiss() {
        assert!(!is_outside_click(None, 10.0, 10.0));
    }

    #[test]
    fn test_lock_balanced_for_all_sequences() {
        // Every sequence of up to 6 operations through both entry points
        for len in 0..=6u32 {
            for code in 0..4u32.pow(len) {
                let mut body = FakeBody::default();
                let mut modal = ModalState::default();
                let mut c = code;
                for _ in 0..len {
                    match c % 4 {
                        0 => {
                            modal.open(&mut body);
                        }
                        1 => {
                            modal.close(&mut body);
                        }
                        2 => {
                            modal.set(true, &mut body);
                        }
                        _ => {
                            modal.set(false, &mut body);
                        }
                    }
                    c /= 4;
                    assert_eq!(body.locked, modal.is_open());
                }

                let locks = body.changes.iter().filter(|&&l| l).count();
                let unlocks = body.changes.len() - locks;
                assert!(locks == unlocks || locks == unlocks + 1);
                assert!(body.changes.windows(2).all(|w| w[0] != w[1]));

                modal.close(&mut body);
                assert!(!body.locked);
            }
        }
    }
}
