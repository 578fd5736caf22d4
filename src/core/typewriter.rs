//! Looping typewriter effect for the hero headline
//!
//! Types a phrase one character at a time, holds it, deletes it, then moves
//! on to the next phrase and wraps around forever.

/// Delays between ticks, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_ms: u32,
    pub delete_ms: u32,
    /// Pause with the full phrase visible
    pub hold_ms: u32,
    /// Pause with an empty slot before the next phrase
    pub pause_ms: u32,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_ms: 50,
            delete_ms: 30,
            hold_ms: 700,
            pause_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    timing: TypewriterTiming,
    phrase: usize,
    /// Visible characters (not bytes) of the current phrase
    chars: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self::with_timing(phrases, TypewriterTiming::default())
    }

    pub fn with_timing(phrases: &'static [&'static str], timing: TypewriterTiming) -> Self {
        Self {
            phrases,
            timing,
            phrase: 0,
            chars: 0,
            phase: Phase::Typing,
        }
    }

    /// Index of the phrase being typed or deleted
    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    fn current(&self) -> &'static str {
        self.phrases.get(self.phrase).copied().unwrap_or("")
    }

    /// Currently visible text
    pub fn text(&self) -> &'static str {
        let phrase = self.current();
        match phrase.char_indices().nth(self.chars) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    /// Advance one step; returns the delay before the next tick.
    pub fn tick(&mut self) -> u32 {
        if self.phrases.is_empty() {
            return self.timing.type_ms;
        }

        match self.phase {
            Phase::Typing => {
                let len = self.current().chars().count();
                if self.chars < len {
                    self.chars += 1;
                }
                if self.chars >= len {
                    self.phase = Phase::Holding;
                    self.timing.hold_ms
                } else {
                    self.timing.type_ms
                }
            }
            Phase::Holding | Phase::Deleting => {
                self.phase = Phase::Deleting;
                self.chars = self.chars.saturating_sub(1);
                if self.chars == 0 {
                    self.phrase = (self.phrase + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                    self.timing.pause_ms
                } else {
                    self.timing.delete_ms
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASES: &[&str] = &["abc", "de"];

    #[test]
    fn test_types_prefixes() {
        let mut tw = Typewriter::new(PHRASES);
        assert_eq!(tw.text(), "");

        assert_eq!(tw.tick(), 50);
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.tick(), 50);
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.tick(), 700);
        assert_eq!(tw.text(), "abc");
    }

    #[test]
    fn test_deletes_then_advances() {
        let mut tw = Typewriter::new(PHRASES);
        for _ in 0..3 {
            tw.tick();
        }

        assert_eq!(tw.tick(), 30);
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.tick(), 30);
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.tick(), 500);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phrase_index(), 1);

        tw.tick();
        assert_eq!(tw.text(), "d");
    }

    #[test]
    fn test_wraps_around() {
        let mut tw = Typewriter::new(PHRASES);
        // "abc": 3 typing + 3 deleting, "de": 2 typing + 2 deleting
        for _ in 0..10 {
            tw.tick();
        }
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_multibyte_phrases() {
        const EMOJI: &[&str] = &["⚡ok"];
        let mut tw = Typewriter::new(EMOJI);
        tw.tick();
        assert_eq!(tw.text(), "⚡");
        tw.tick();
        assert_eq!(tw.text(), "⚡o");
    }

    #[test]
    fn test_empty_phrase_list() {
        let mut tw = Typewriter::new(&[]);
        assert_eq!(tw.tick(), 50);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_custom_timing() {
        let timing = TypewriterTiming {
            type_ms: 1,
            delete_ms: 2,
            hold_ms: 3,
            pause_ms: 4,
        };
        let mut tw = Typewriter::with_timing(&["x"], timing);
        assert_eq!(tw.tick(), 3);
        assert_eq!(tw.tick(), 4);
        assert_eq!(tw.tick(), 3);
    }
}
