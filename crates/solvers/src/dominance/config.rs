use thiserror::Error;

/// How strictly one strategy must beat another to dominate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dominance {
    /// Worse against every live opponent strategy (`<`).
    #[default]
    Strict,

    /// Never better against any live opponent strategy (`<=`).
    Weak,
}

impl Dominance {
    /// Maps a `strict` flag to a dominance kind.
    #[must_use]
    pub fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Weak }
    }

    /// Returns `true` if `worse` loses to `better` under this dominance kind.
    #[must_use]
    pub fn holds<T: PartialOrd>(self, worse: &T, better: &T) -> bool {
        match self {
            Self::Strict => worse < better,
            Self::Weak => worse <= better,
        }
    }
}

/// Configuration for the dominance solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    dominance: Dominance,
    max_passes: usize,
}

/// Errors that can occur when validating a dominance solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_passes must be at least 1")]
    ZeroPasses,
}

impl Default for Config {
    fn default() -> Self {
        Self::strict()
    }
}

impl Config {
    /// Creates a new config with a validated pass limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_passes` is zero.
    pub fn new(dominance: Dominance, max_passes: usize) -> Result<Self, ConfigError> {
        if max_passes == 0 {
            return Err(ConfigError::ZeroPasses);
        }

        Ok(Self {
            dominance,
            max_passes,
        })
    }

    /// Strict dominance with no pass limit.
    #[must_use]
    pub fn strict() -> Self {
        Self::from_strict(true)
    }

    /// Weak dominance with no pass limit.
    #[must_use]
    pub fn weak() -> Self {
        Self::from_strict(false)
    }

    /// Strict or weak dominance with no pass limit.
    #[must_use]
    pub fn from_strict(strict: bool) -> Self {
        Self {
            dominance: Dominance::from_strict(strict),
            max_passes: usize::MAX,
        }
    }

    /// Returns the dominance kind.
    #[must_use]
    pub fn dominance(&self) -> Dominance {
        self.dominance
    }

    /// Returns the maximum number of row+column passes.
    #[must_use]
    pub fn max_passes(&self) -> usize {
        self.max_passes
    }
}
