//! configuration validation stuff
use {
    crate::{
        config::options::{LoggingConfig, MAX_COUNT, NamingCfg, OutputCfg, ThemegenCfg},
        theme::naming::is_word,
        validator,
    },
    std::fmt,
};

/// one broken rule, addressed by its dotted path in the config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// where in the config, e.g. `output.count`
    pub path: String,
    /// what the value should have been
    pub message: &'static str,
}

impl Violation {
    /// a violation of `field` in the section being checked
    pub fn new(field: &str, message: &'static str) -> Self {
        Self {
            path: field.to_string(),
            message,
        }
    }

    /// the same violation seen from the parent `section`
    pub fn under(self, section: &str) -> Self {
        Self {
            path: format!("{section}.{}", self.path),
            ..self
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// trait for validating config structs
pub trait Validate {
    /// every rule the config breaks
    fn violations(&self) -> Vec<Violation>;

    /// validate the config
    fn validate(&self) -> Result<(), Vec<Violation>> {
        let found = self.violations();
        if found.is_empty() { Ok(()) } else { Err(found) }
    }

    /// check if the config is valid
    fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }
}

/// whether every entry is a single ascii word
fn are_words(words: &[String]) -> bool {
    !words.is_empty() && words.iter().all(|w| is_word(w))
}

/// valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

validator! { NamingCfg {
    adjectives: |v: &Vec<String>| are_words(v)
        => "must be a non-empty list of single words (letters only)",
    nouns: |v: &Vec<String>| are_words(v)
        => "must be a non-empty list of single words (letters only)",
} }

validator! { OutputCfg {
    count: |v: &usize| (1..=MAX_COUNT).contains(v) => "must be between 1 and 1000",
} }

validator! { LoggingConfig {
    level: |v: &String| VALID_LOG_LEVELS.contains(&v.to_lowercase().as_str())
        => "must be one of: trace, debug, info, warn, error, off",
} }

validator! { ThemegenCfg { nest naming, nest output, nest logging } }

/// format validation errors into a readable message
pub fn format_validation_errors(errors: &[Violation]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, err) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, err));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_rules() {
        let naming = NamingCfg {
            adjectives: Some(vec!["Neon".into(), "two words".into()]),
            nouns: Some(vec![]),
        };

        let errors = naming.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].path, "adjectives");
        assert_eq!(errors[1].path, "nouns");
    }

    #[test]
    fn test_unset_fields_are_skipped() {
        let naming = NamingCfg {
            adjectives: None,
            nouns: None,
        };
        assert!(naming.is_valid());
    }

    #[test]
    fn test_nested_errors_are_prefixed() {
        let cfg = ThemegenCfg {
            output: Some(OutputCfg {
                format: None,
                count: Some(0),
            }),
            logging: Some(LoggingConfig {
                level: Some("loud".into()),
                ..LoggingConfig::default()
            }),
            ..ThemegenCfg::default()
        };

        let errors = cfg.validate().unwrap_err();
        let rendered: Vec<String> = errors.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            [
                "output.count: must be between 1 and 1000",
                "logging.level: must be one of: trace, debug, info, warn, error, off",
            ]
        );
    }

    #[test]
    fn test_format_validation_errors() {
        let out = format_validation_errors(&[
            Violation::new("a", "bad"),
            Violation::new("c", "worse").under("b"),
        ]);
        assert_eq!(out, "Configuration validation failed:\n  1. a: bad\n  2. b.c: worse\n");
    }
}
