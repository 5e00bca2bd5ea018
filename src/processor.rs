//! Stage inspection API
//!
//! Exposes the output of any pipeline stage in a chosen format. A processing
//! spec is written `<stage>-<format>`:
//!
//! ```text
//! token-simple    token-json
//! ast-json        ast-yaml        ast-treeviz
//! target-json     target-yaml     target-treeviz
//! code-text
//! ```
//!
//! `ast` is the parser's source dialect tree, `target` the transformer's
//! output, and `code` the final rendered text.

use crate::error::CompileError;
use crate::formats::{source_to_treeviz_str, target_to_treeviz_str};
use crate::lexer::Token;
use crate::pipeline::Compiler;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
    Target,
    Code,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    Treeviz,
    Text,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingStage {
    fn name(&self) -> &'static str {
        match self {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
            ProcessingStage::Target => "target",
            ProcessingStage::Code => "code",
        }
    }
}

impl OutputFormat {
    fn name(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Text => "text",
        }
    }
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "target-treeviz"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            "target" => ProcessingStage::Target,
            "code" => ProcessingStage::Code,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            "treeviz" => OutputFormat::Treeviz,
            "text" => OutputFormat::Text,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        let spec = ProcessingSpec { stage, format };
        if !Self::available_specs().contains(&spec) {
            return Err(ProcessingError::InvalidFormatType(format!(
                "format '{}' is not supported for the {} stage",
                format.name(),
                stage.name()
            )));
        }
        Ok(spec)
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        use OutputFormat::*;
        use ProcessingStage::*;
        [
            (Token, Simple),
            (Token, Json),
            (Ast, Json),
            (Ast, Yaml),
            (Ast, Treeviz),
            (Target, Json),
            (Target, Yaml),
            (Target, Treeviz),
            (Code, Text),
        ]
        .into_iter()
        .map(|(stage, format)| ProcessingSpec { stage, format })
        .collect()
    }
}

impl std::fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.stage.name(), self.format.name())
    }
}

/// Errors that can occur during processing
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Invalid stage: {0}")]
    InvalidStage(String),

    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Process source text according to the given specification
pub fn process_source(
    source: &str,
    spec: &ProcessingSpec,
    compiler: &Compiler,
) -> Result<String, ProcessingError> {
    tracing::debug!(%spec, "processing source");
    match spec.stage {
        ProcessingStage::Token => format_tokens(&compiler.tokenize(source)?, spec.format),
        ProcessingStage::Ast => {
            let program = compiler.parse(source)?;
            match spec.format {
                OutputFormat::Treeviz => Ok(source_to_treeviz_str(&program)),
                format => serialize(&program, format),
            }
        }
        ProcessingStage::Target => {
            let program = compiler.lower(source)?;
            match spec.format {
                OutputFormat::Treeviz => Ok(target_to_treeviz_str(&program)),
                format => serialize(&program, format),
            }
        }
        ProcessingStage::Code => Ok(compiler.compile(source)?),
    }
}

/// Read a file and process it according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    compiler: &Compiler,
) -> Result<String, ProcessingError> {
    let content =
        fs::read_to_string(file_path).map_err(|e| ProcessingError::IoError(e.to_string()))?;
    process_source(&content, spec, compiler)
}

/// Format tokens according to the specified format
fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => Ok(tokens.iter().map(Token::to_string).collect()),
        format => serialize(tokens, format),
    }
}

fn serialize<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(value).map_err(|e| ProcessingError::Serialization(e.to_string()))
        }
        other => Err(ProcessingError::InvalidFormatType(format!(
            "'{}' is not a serialization format",
            other.name()
        ))),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::to_string)
        .collect()
}
