//! ContractSubmission - validated user input for one analysis.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::AnalysisError;

/// Language the submitted contract is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SourceLanguage {
    #[default]
    English,
    /// Translated to English before analysis.
    Hindi,
}

impl SourceLanguage {
    pub fn needs_translation(&self) -> bool {
        matches!(self, SourceLanguage::Hindi)
    }
}

/// A contract name plus body text, both non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractSubmission {
    contract_name: String,
    text: String,
    source_language: SourceLanguage,
}

impl ContractSubmission {
    /// Validates pasted input.
    ///
    /// # Errors
    ///
    /// `InputIncomplete` if the name or the text is empty after trimming.
    pub fn new(
        contract_name: impl Into<String>,
        text: impl Into<String>,
        source_language: SourceLanguage,
    ) -> Result<Self, AnalysisError> {
        let contract_name = contract_name.into().trim().to_string();
        let text = text.into();
        if contract_name.is_empty() || text.trim().is_empty() {
            return Err(AnalysisError::InputIncomplete);
        }
        Ok(Self {
            contract_name,
            text,
            source_language,
        })
    }

    /// Builds a submission from an uploaded text file.
    ///
    /// The contract name is the file name without its last extension.
    pub fn from_upload(
        file_name: &str,
        contents: impl Into<String>,
        source_language: SourceLanguage,
    ) -> Result<Self, AnalysisError> {
        Self::new(contract_name_from_file(file_name), contents, source_language)
    }

    /// Reads a UTF-8 text file from disk.
    pub async fn from_file(
        path: &Path,
        source_language: SourceLanguage,
    ) -> Result<Self, AnalysisError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AnalysisError::source_unreadable(format!("{}: {}", path.display(), e)))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        Self::from_upload(file_name, contents, source_language)
    }

    pub fn contract_name(&self) -> &str {
        &self.contract_name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source_language(&self) -> SourceLanguage {
        self.source_language
    }
}

/// `"vendor-agreement.final.txt"` -> `"vendor-agreement.final"`.
///
/// Only a non-empty final extension is removed: `"archive."` is kept as is,
/// while `".txt"` strips to an empty name and is rejected on submission.
pub fn contract_name_from_file(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) if idx + 1 < file_name.len() && !file_name[idx + 1..].contains('/') => {
            &file_name[..idx]
        }
        _ => file_name,
    }
}
