//! AI message generator demo
//!
//! The demo never calls a model. "Generating" always shows the same sample
//! message, whatever the prompt and tone.

use derive_more::Display;

pub const PROMPT_PLACEHOLDER: &str = "e.g. Senior Software Engineer at Amazon";

pub const CANNED_MESSAGE: &str = "Hi [Name], I noticed your profile as a Senior Engineer at Amazon \
    and was impressed by your work with cloud infrastructure. As someone passionate about scalable \
    solutions, I'd love to connect and perhaps exchange insights on AWS best practices. Would you \
    be open to connecting?";

/// Prompts listed under "Recent Generations"
pub const RECENT_PROMPTS: &[&str] = &["Product Manager at Google", "Startup Founder in Fintech"];

/// How long the "Copied!" confirmation stays visible
pub const COPY_FEEDBACK_MS: u64 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Direct,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Professional, Tone::Casual, Tone::Direct];

    /// Parse a `<select>` value; unknown values fall back to the default
    pub fn from_value(value: &str) -> Self {
        Tone::ALL
            .into_iter()
            .find(|tone| tone.to_string() == value)
            .unwrap_or_default()
    }
}

/// Input and output of the demo form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSession {
    pub prompt: String,
    pub tone: Tone,
    output: &'static str,
}

impl Default for DemoSession {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            tone: Tone::default(),
            output: CANNED_MESSAGE,
        }
    }
}

impl DemoSession {
    pub fn output(&self) -> &'static str {
        self.output
    }

    pub fn generate(&mut self) -> &'static str {
        self.output = CANNED_MESSAGE;
        self.output
    }

    /// Copy a recent prompt into the input. Out-of-range indices are ignored.
    pub fn use_recent(&mut self, index: usize) -> bool {
        match RECENT_PROMPTS.get(index) {
            Some(prompt) => {
                self.prompt = (*prompt).to_string();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_ignores_input() {
        let mut session = DemoSession::default();
        let first = session.generate();

        session.prompt = "Nurse in Berlin".to_string();
        session.tone = Tone::Casual;
        assert_eq!(session.generate(), first);
        assert_eq!(session.output(), CANNED_MESSAGE);
    }

    #[test]
    fn test_sample_visible_before_generate() {
        assert_eq!(DemoSession::default().output(), CANNED_MESSAGE);
    }

    #[test]
    fn test_use_recent() {
        let mut session = DemoSession::default();
        assert!(session.use_recent(1));
        assert_eq!(session.prompt, "Startup Founder in Fintech");

        assert!(!session.use_recent(7));
        assert_eq!(session.prompt, "Startup Founder in Fintech");
    }

    #[test]
    fn test_tone_values() {
        for tone in Tone::ALL {
            assert_eq!(Tone::from_value(&tone.to_string()), tone);
        }
        assert_eq!(Tone::from_value("Sarcastic"), Tone::Professional);
    }
}
