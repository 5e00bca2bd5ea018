//! Layered configuration for the compiler.
//!
//! `defaults/parenc.default.toml` is embedded into the library so that the
//! documented defaults and [CompilerConfig::default] stay in sync. Callers
//! layer their own files and overrides on top via [Loader] before
//! deserializing into [CompilerConfig].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use crate::parser::DEFAULT_MAX_DEPTH;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/parenc.default.toml");

/// Top-level configuration consumed by [Compiler](crate::pipeline::Compiler).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CompilerConfig {
    pub lexer: LexerConfig,
    pub parser: ParserConfig,
    pub codegen: CodegenConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LexerConfig {
    pub unknown_characters: UnknownCharacterPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParserConfig {
    /// Deepest call nesting accepted before parsing fails
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Treatment of characters outside `(`, `)`, `[a-z]`, `[0-9]` and whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownCharacterPolicy {
    #[default]
    Skip,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CodegenConfig {
    pub string_literals: StringLiteralPolicy,
    pub statement_separator: String,
    pub argument_separator: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        CodegenConfig {
            string_literals: StringLiteralPolicy::default(),
            statement_separator: "\n".to_string(),
            argument_separator: ", ".to_string(),
        }
    }
}

/// Rendering of `StringLiteral` nodes, which the target syntax has no form for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StringLiteralPolicy {
    #[default]
    Reject,
    Quote,
}

/// Builds a [CompilerConfig] from stacked sources. Later layers win key by
/// key; the embedded defaults are always the bottom layer.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Loader {
            builder: Config::builder()
                .add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Stack a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Stack a TOML file if it exists, e.g. `./parenc.toml`.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path)
            .format(FileFormat::Toml)
            .required(required);
        self.builder = self.builder.add_source(file);
        self
    }

    /// Set one dotted key above every file, as `--strict` does for
    /// `lexer.unknown_characters`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers. Unknown policy names, bad types and missing required
    /// files all surface here.
    pub fn build(self) -> Result<CompilerConfig, ConfigError> {
        let config: CompilerConfig = self.builder.build()?.try_deserialize()?;
        tracing::debug!(?config, "loaded compiler configuration");
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults with nothing stacked on top.
pub fn load_defaults() -> Result<CompilerConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_defaults_match_default_impl() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config, CompilerConfig::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("lexer.unknown_characters", "reject")
            .expect("override to apply")
            .set_override("codegen.string_literals", "quote")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(
            config.lexer.unknown_characters,
            UnknownCharacterPolicy::Reject
        );
        assert_eq!(config.codegen.string_literals, StringLiteralPolicy::Quote);
        assert_eq!(config.codegen.argument_separator, ", ");
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[codegen]\nstatement_separator = \";\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.codegen.statement_separator, ";");
        assert_eq!(config.codegen.argument_separator, ", ");
        assert_eq!(config.lexer.unknown_characters, UnknownCharacterPolicy::Skip);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("definitely/not/here/parenc.toml")
            .build()
            .expect("config to build");
        assert_eq!(config, CompilerConfig::default());
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new()
            .with_file("definitely/not/here/parenc.toml")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn overrides_max_depth() {
        let config = Loader::new()
            .set_override("parser.max_depth", 8)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.parser.max_depth, 8);
    }

    #[test]
    fn rejects_negative_max_depth() {
        let result = Loader::new()
            .set_override("parser.max_depth", -1)
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn rejects_unknown_policy() {
        let result = Loader::new()
            .set_override("lexer.unknown_characters", "explode")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }
}
