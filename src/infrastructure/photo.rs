//! Photo loading and encoding

use crate::error::{Result, StorypageError};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::fs;
use std::path::Path;

/// A photo read from disk, encoded for a generation request.
///
/// The pixels are never touched; all editing happens inside the model.
#[derive(Debug, Clone)]
pub struct EncodedPhoto {
    pub base64: String,
    pub mime_type: String,
    pub file_name: String,
}

impl EncodedPhoto {
    /// Read and encode a photo file. The MIME type comes from the
    /// extension; anything unrecognized is rejected up front.
    pub fn load(path: &Path) -> Result<Self> {
        let mime_type = mime_type_for(path)
            .ok_or_else(|| StorypageError::UnsupportedPhoto(path.to_path_buf()))?;

        let bytes = fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();

        Ok(EncodedPhoto {
            base64: BASE64.encode(&bytes),
            mime_type: mime_type.to_string(),
            file_name,
        })
    }
}

fn mime_type_for(path: &Path) -> Option<&'static str> {
    match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        _ => None,
    }
}
