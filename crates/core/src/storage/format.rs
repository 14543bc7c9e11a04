use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::profile::Profile;

/// Marker identifying a local profile document.
pub const FORMAT_NAME: &str = "workhours-profile";

/// Current document version.
pub const CURRENT_VERSION: u16 = 1;

/// Envelope written around the profile:
///
/// ```text
/// { "format": "workhours-profile", "version": 1, "profile": { ... } }
/// ```
#[derive(Serialize)]
struct DocumentOut<'a> {
    format: &'a str,
    version: u16,
    profile: &'a Profile,
}

/// Header fields are read before the profile so a foreign or newer file
/// is reported as such instead of as a generic parse error.
#[derive(Deserialize)]
struct DocumentHeader {
    format: Option<String>,
    version: Option<u16>,
}

#[derive(Deserialize)]
struct DocumentIn {
    profile: Profile,
}

/// Serialize a profile into a versioned JSON document.
pub fn write_document(profile: &Profile) -> Result<Vec<u8>, CoreError> {
    let doc = DocumentOut {
        format: FORMAT_NAME,
        version: CURRENT_VERSION,
        profile,
    };
    serde_json::to_vec_pretty(&doc)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize profile: {e}")))
}

/// Parse a versioned JSON document back into a profile.
pub fn read_document(data: &[u8]) -> Result<Profile, CoreError> {
    let header: DocumentHeader = serde_json::from_slice(data).map_err(|e| {
        CoreError::InvalidFileFormat(format!("Not a JSON profile document: {e}"))
    })?;

    match header.format.as_deref() {
        Some(FORMAT_NAME) => {}
        Some(other) => {
            return Err(CoreError::InvalidFileFormat(format!(
                "Unknown document format '{other}'"
            )))
        }
        None => {
            return Err(CoreError::InvalidFileFormat(
                "Missing document format marker".into(),
            ))
        }
    }

    let version = header.version.ok_or_else(|| {
        CoreError::InvalidFileFormat("Missing document version".into())
    })?;
    if version == 0 || version > CURRENT_VERSION {
        return Err(CoreError::UnsupportedVersion(version));
    }

    let doc: DocumentIn = serde_json::from_slice(data)?;
    Ok(doc.profile)
}
