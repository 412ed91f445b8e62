//! Configuration for an interactive play session.

/// Configuration for an interactive session.
#[derive(Debug, Clone)]
pub struct PlayConfig {
    /// Text printed before each input line.
    pub prompt: String,
    /// Offer the closest label after an unmatched selection.
    pub hints: bool,
    /// Stop after this many scene transitions.
    pub max_steps: Option<usize>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            hints: true,
            max_steps: None,
        }
    }
}

impl PlayConfig {
    /// Set the input prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Enable or disable "did you mean" hints.
    pub fn with_hints(mut self, hints: bool) -> Self {
        self.hints = hints;
        self
    }

    /// Limit the number of scene transitions (zero means no limit).
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = (max_steps > 0).then_some(max_steps);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = PlayConfig::default();
        assert_eq!(cfg.prompt, "> ");
        assert!(cfg.hints);
        assert_eq!(cfg.max_steps, None);
    }

    #[test]
    fn builder_methods() {
        let cfg = PlayConfig::default()
            .with_prompt("? ")
            .with_hints(false)
            .with_max_steps(10);
        assert_eq!(cfg.prompt, "? ");
        assert!(!cfg.hints);
        assert_eq!(cfg.max_steps, Some(10));
    }

    #[test]
    fn zero_steps_means_unlimited() {
        let cfg = PlayConfig::default().with_max_steps(0);
        assert_eq!(cfg.max_steps, None);
    }
}
