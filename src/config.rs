//! Runtime configuration read from the environment

pub const DEFAULT_DELIMITER: char = ';';

/// How log records are written to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Settings shared by the reader, writer and logger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Cell delimiter of the table format
    pub delimiter: char,
    pub log_format: LogFormat,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            log_format: LogFormat::default(),
        }
    }
}

impl ConvertConfig {
    /// Read `AUTOMATA_DELIMITER` and `AUTOMATA_LOG_FORMAT`, returning any
    /// ignored values as warnings to report once logging is up.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup_with_warnings(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source, discarding warnings.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::from_lookup_with_warnings(lookup).0
    }

    /// Unusable values fall back to the defaults. The logger depends on this
    /// config, so problems are collected rather than logged.
    pub fn from_lookup_with_warnings(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();

        let delimiter = match lookup("AUTOMATA_DELIMITER") {
            None => DEFAULT_DELIMITER,
            Some(value) => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if !matches!(c, '/' | '\n' | '\r') => c,
                    _ => {
                        warnings.push(format!(
                            "Ignoring AUTOMATA_DELIMITER={value:?}, expected one character other than '/' or a line break"
                        ));
                        DEFAULT_DELIMITER
                    }
                }
            }
        };

        let log_format = match lookup("AUTOMATA_LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                warnings.push(format!(
                    "Ignoring AUTOMATA_LOG_FORMAT={other:?}, expected \"text\" or \"json\""
                ));
                LogFormat::Text
            }
        };

        (
            Self {
                delimiter,
                log_format,
            },
            warnings,
        )
    }
}
