//! Loading and saving rule tables as JSON.
//!
//! ```json
//! {
//!   "rules_version": 1,
//!   "rules": [
//!     { "id": "crisis", "keywords": ["want to die"], "response": "...",
//!       "urgency": "severe", "distress_level": 10 }
//!   ],
//!   "fallback": { "response": "...", "urgency": "mild", "distress_level": 2 }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ChatError;
use crate::rules::{ClassificationRule, Fallback, RuleTable};

/// Current rule file version. Bump this when changing the file shape.
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RuleFile {
    /// Missing or 0 = written before versioning; read as v1.
    #[serde(default)]
    rules_version: u32,
    rules: Vec<ClassificationRule>,
    fallback: Fallback,
}

/// Parse and validate a rule table from JSON text.
pub fn parse_rules(json: &str) -> Result<RuleTable, ChatError> {
    let file: RuleFile = serde_json::from_str(json)?;
    if file.rules_version > CURRENT_VERSION {
        return Err(ChatError::UnsupportedVersion {
            found: file.rules_version,
            supported: CURRENT_VERSION,
        });
    }
    RuleTable::new(file.rules, file.fallback)
}

/// Read, parse and validate a rule table file.
pub fn load_rules(path: &Path) -> Result<RuleTable, ChatError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ChatError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match parse_rules(&contents) {
        Ok(table) => {
            tracing::info!(
                path = %path.display(),
                rules = table.rules().len(),
                "rule table loaded"
            );
            Ok(table)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "rule table rejected");
            Err(e)
        }
    }
}

/// Write `table` to `path` as pretty JSON, stamped with the current version.
pub fn save_rules(path: &Path, table: &RuleTable) -> Result<(), ChatError> {
    let file = RuleFile {
        rules_version: CURRENT_VERSION,
        rules: table.rules().to_vec(),
        fallback: table.fallback().clone(),
    };
    let json = serde_json::to_string_pretty(&file)?;

    let io_err = |source| ChatError::Io {
        path: path.to_path_buf(),
        source,
    };

    // Write to a sibling temp file then rename so readers never see a partial table.
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes()).map_err(io_err)?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(io_err(e));
    }

    tracing::info!(path = %path.display(), rules = file.rules.len(), "rule table saved");
    Ok(())
}
