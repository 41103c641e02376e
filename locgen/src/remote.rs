//! Data shapes for a remote translation-management service listing.
//!
//! Integration contract only: a future collaborator can fetch per-language
//! source files from these URLs and drop them under the input root. Nothing
//! in the pipeline consumes these today.

use serde::{Deserialize, Serialize};

/// One downloadable translation source for a language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteTranslationFile {
    pub language_code: String,
    pub file_url: String,
}

/// The service's listing response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteTranslationListing {
    pub results: Vec<RemoteTranslationFile>,
}
