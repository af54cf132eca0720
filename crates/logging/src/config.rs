//! Verbose level to filter directive mapping.

use tracing::level_filters::LevelFilter;

/// Verbosity requested on the command line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VerbosityConfig {
    level: u8,
}

impl VerbosityConfig {
    /// Creates a configuration from the number of `-v` flags.
    #[must_use]
    pub const fn from_verbose_level(level: u8) -> Self {
        Self { level }
    }

    /// Returns the verbose level this configuration was built from.
    #[must_use]
    pub const fn level(self) -> u8 {
        self.level
    }

    /// Returns the most verbose level that will be recorded.
    #[must_use]
    pub const fn max_level(self) -> LevelFilter {
        match self.level {
            0 => LevelFilter::ERROR,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Returns the `EnvFilter` directive for this level.
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self.level {
            0 => "error",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_quiet() {
        let config = VerbosityConfig::default();
        assert_eq!(config.level(), 0);
        assert_eq!(config.directive(), "error");
        assert_eq!(config.max_level(), LevelFilter::ERROR);
    }

    #[test]
    fn each_flag_raises_the_level() {
        let directives: Vec<_> = (0..=3)
            .map(|level| VerbosityConfig::from_verbose_level(level).directive())
            .collect();
        assert_eq!(directives, ["error", "info", "debug", "trace"]);
    }

    #[test]
    fn levels_beyond_three_saturate_at_trace() {
        let config = VerbosityConfig::from_verbose_level(u8::MAX);
        assert_eq!(config.directive(), "trace");
        assert_eq!(config.max_level(), LevelFilter::TRACE);
    }
}
