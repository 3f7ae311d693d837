//! Detector configuration

/// Limerick detector configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Minimum summed syllables of the A lines, and of the B lines
    pub min_syllables: usize,
    /// Largest allowed syllable difference within the A lines and within the B lines
    pub max_spread: usize,
    /// Guess syllables of words missing from the dictionary instead of assuming 1
    pub guess_syllables: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_syllables: 4,
            max_spread: 2,
            guess_syllables: false,
        }
    }
}

impl DetectorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("LIMERICK_MIN_SYLLABLES") {
            if let Ok(n) = v.parse() {
                config.min_syllables = n;
            }
        }

        if let Ok(v) = std::env::var("LIMERICK_MAX_SPREAD") {
            if let Ok(n) = v.parse() {
                config.max_spread = n;
            }
        }

        if let Ok(v) = std::env::var("LIMERICK_GUESS") {
            config.guess_syllables = matches!(v.as_str(), "1" | "true" | "yes" | "on");
        }

        config
    }

    pub fn with_guess_syllables(mut self, guess: bool) -> Self {
        self.guess_syllables = guess;
        self
    }
}
