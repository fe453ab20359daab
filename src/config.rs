//! Configuration management for the friend graph analyzer

/// Default configuration for the friend graph analyzer
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory that reports and exports are written to
    pub output_dir: String,

    /// Worker threads for batch queries (0 = all available cores)
    pub threads: usize,

    /// Skip the GraphML export when writing a report
    pub skip_viz: bool,

    /// Lower-case query names to match the loader's normalization
    pub lowercase_queries: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: "friend_results".to_string(),
            threads: 0,
            skip_viz: false,
            lowercase_queries: true,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(
        output_dir: impl Into<String>,
        threads: usize,
        skip_viz: bool,
        lowercase_queries: bool,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            threads,
            skip_viz,
            lowercase_queries,
        }
    }

    /// Number of worker threads to actually use
    pub fn worker_threads(&self) -> usize {
        if self.threads > 0 {
            self.threads
        } else {
            num_cpus::get()
        }
    }

    /// Normalize a name or affiliation given on the command line
    pub fn query_key(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        if self.lowercase_queries {
            trimmed.to_lowercase()
        } else {
            trimmed.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.output_dir, "friend_results");
        assert!(config.worker_threads() >= 1);
        assert_eq!(config.query_key(" Sam "), "sam");
    }

    #[test]
    fn explicit_threads_and_case() {
        let config = Config::new("out", 3, true, false);
        assert_eq!(config.worker_threads(), 3);
        assert_eq!(config.query_key("Sam"), "Sam");
    }
}
