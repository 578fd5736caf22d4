//! Initial loading gate

/// How long the placeholder spinner stays up after mount, in milliseconds
pub const LOADING_DELAY_MS: u64 = 500;

/// One-way switch from "loading" to "ready".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadGate {
    loading: bool,
}

impl Default for LoadGate {
    fn default() -> Self {
        Self { loading: true }
    }
}

impl LoadGate {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Reveal the content. Returns `true` only on the first call.
    pub fn finish(&mut self) -> bool {
        std::mem::replace(&mut self.loading, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading() {
        assert!(LoadGate::default().is_loading());
    }

    #[test]
    fn test_single_transition() {
        let mut gate = LoadGate::default();
        assert!(gate.finish());
        assert!(!gate.is_loading());

        for _ in 0..3 {
            assert!(!gate.finish());
            assert!(!gate.is_loading());
        }
    }
}
