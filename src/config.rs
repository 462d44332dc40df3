//! Declarative layout for the demos: which loggers form the chain and which
//! encodings observe the subject.
//!
//! ```toml
//! observers = ["hex", "octal", "binary"]
//!
//! [[chain]]
//! kind = "error_console"
//! threshold = "error"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chain::{Chain, ChainBuilder, Level, Logger, LoggerKind};
use crate::observer::{Encoding, EncodingObserver, Subject};
use crate::sink::Sink;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSpec {
    pub kind: LoggerKind,
    pub threshold: Level,
}

impl From<LoggerSpec> for Logger {
    fn from(spec: LoggerSpec) -> Self {
        Logger::new(spec.kind, spec.threshold)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternsConfig {
    #[serde(default)]
    pub chain: Vec<LoggerSpec>,
    #[serde(default)]
    pub observers: Vec<Encoding>,
}

impl Default for PatternsConfig {
    fn default() -> Self {
        PatternsConfig {
            chain: vec![
                LoggerSpec {
                    kind: LoggerKind::ErrorConsole,
                    threshold: Level::ERROR,
                },
                LoggerSpec {
                    kind: LoggerKind::File,
                    threshold: Level::DEBUG,
                },
                LoggerSpec {
                    kind: LoggerKind::StandardConsole,
                    threshold: Level::INFO,
                },
            ],
            observers: vec![Encoding::Hex, Encoding::Octal, Encoding::Binary],
        }
    }
}

impl PatternsConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn build_chain<S: Sink>(&self, sink: S) -> Chain<S> {
        self.chain
            .iter()
            .copied()
            .map(Logger::from)
            .collect::<ChainBuilder>()
            .build_with(sink)
    }

    /// A subject at value 0 with one observer per configured encoding.
    pub fn build_subject<S: Sink>(&self, sink: S) -> Subject<S> {
        let mut subject = Subject::with_sink(sink);
        for &encoding in &self.observers {
            subject.attach(EncodingObserver::new(encoding));
        }
        subject
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_shipped_sample_matches_default() {
        let sample = include_str!("../patterns.toml");
        let config = PatternsConfig::from_toml_str(sample).unwrap();
        assert_eq!(config, PatternsConfig::default());
    }

    #[test]
    fn test_threshold_accepts_name_or_number() {
        let toml = r#"
            [[chain]]
            kind = "file"
            threshold = 2

            [[chain]]
            kind = "standard_console"
            threshold = "Info"
        "#;
        let config = PatternsConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.chain[0].threshold, Level::DEBUG);
        assert_eq!(config.chain[1].threshold, Level::INFO);
        assert!(config.observers.is_empty());
    }

    #[test]
    fn test_unknown_level_name_is_parse_error() {
        let toml = "[[chain]]\nkind = \"file\"\nthreshold = \"loud\"\n";
        let err = PatternsConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let toml = "[[chain]]\nkind = \"syslog\"\nthreshold = 1\n";
        assert!(matches!(
            PatternsConfig::from_toml_str(toml),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(PatternsConfig::from_toml_str("colour = true\n").is_err());
    }

    #[test]
    fn test_empty_config_builds_empty_chain() {
        let config = PatternsConfig::from_toml_str("").unwrap();
        let mut chain = config.build_chain(Vec::<String>::new());
        chain.log_message(Level::ERROR, "dropped");
        assert!(chain.is_empty());
        assert!(chain.sink().is_empty());
    }

    #[test]
    fn test_default_builds_demo_layout() {
        let config = PatternsConfig::default();

        let mut chain = config.build_chain(Vec::<String>::new());
        chain.log_message(Level::DEBUG, "d");
        assert_eq!(chain.into_sink(), vec!["File::Logger:d", "Standard Console::Logger:d"]);

        let mut subject = config.build_subject(Vec::<String>::new());
        subject.set_value(15);
        assert_eq!(
            subject.into_sink(),
            vec!["Hexa String: F", "Octal String: 17", "Binary String: 1111"]
        );
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "observers = [\"binary\"]").unwrap();
        let config = PatternsConfig::from_path(file.path()).unwrap();
        assert_eq!(config.observers, vec![Encoding::Binary]);
    }

    #[test]
    fn test_from_path_not_found() {
        let result = PatternsConfig::from_path(Path::new("/nonexistent/patterns.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<ConfigError>();
        assert_sync::<ConfigError>();
    }
}
