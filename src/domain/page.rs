//! Page request and result value types

/// Inputs for one generation call: the encoded photo plus the full prompt.
#[derive(Debug, Clone)]
pub struct PageRequest {
    pub photo_base64: String,
    pub mime_type: String,
    pub prompt: String,
}

/// The image half of a produced page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl PageImage {
    /// File extension used when saving this image into the album
    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/png" => "png",
            "image/jpeg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "bin",
        }
    }
}

/// One produced page: the rendered image plus its caption text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub image: PageImage,
    pub caption: String,
}
