//! Logo image resource owned by the document.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// Maximum accepted logo payload size in bytes (1 MiB).
pub const MAX_LOGO_BYTES: usize = 1_048_576;

/// An uploaded logo, stored as an inline-displayable data URL.
///
/// The payload is checked against [`MAX_LOGO_BYTES`] at construction, so a
/// `LogoImage` value is always within the limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoImage {
    content_type: String,
    data_url: String,
}

impl LogoImage {
    /// Encode a raw image payload into a displayable data URL.
    ///
    /// `content_type` is the MIME type reported by the upload boundary;
    /// any browser-recognized image type is accepted.
    pub fn from_bytes(content_type: &str, bytes: &[u8]) -> LedgerResult<Self> {
        if bytes.len() > MAX_LOGO_BYTES {
            return Err(LedgerError::logo_too_large(bytes.len()));
        }
        let data_url = format!("data:{};base64,{}", content_type, STANDARD.encode(bytes));
        Ok(Self {
            content_type: content_type.to_string(),
            data_url,
        })
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Data URL suitable for an `<img src=...>` attribute.
    pub fn data_url(&self) -> &str {
        &self.data_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_at_the_limit_is_accepted() {
        let logo = LogoImage::from_bytes("image/png", &vec![7u8; MAX_LOGO_BYTES]).unwrap();
        assert_eq!(logo.content_type(), "image/png");
        assert!(logo.data_url().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn payload_over_the_limit_is_rejected() {
        let err = LogoImage::from_bytes("image/png", &vec![7u8; MAX_LOGO_BYTES + 1]).unwrap_err();
        assert_eq!(err, LedgerError::logo_too_large(MAX_LOGO_BYTES + 1));
    }

    #[test]
    fn data_url_carries_the_exact_payload() {
        let bytes = b"\x89PNG\r\n\x1a\n";
        let logo = LogoImage::from_bytes("image/png", bytes).unwrap();

        let encoded = logo.data_url().split(',').nth(1).unwrap();
        assert_eq!(STANDARD.decode(encoded).unwrap(), bytes);
    }
}
