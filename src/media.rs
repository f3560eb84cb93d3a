//! Media Handling
//!
//! Validates image uploads and encodes them into embeddable `data:`
//! URLs for storage alongside suggestions.

use mime_guess::Mime;

use crate::domain::{DomainError, DomainResult};

/// Upload size cap: 2 MiB
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// A file handed over by an upload form
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Original file name, used for image-type detection
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Check that the upload is an image of acceptable size
///
/// Returns the detected mime type on success.
pub fn validate(upload: &ImageUpload) -> DomainResult<Mime> {
    let mime = mime_guess::from_path(&upload.file_name)
        .first()
        .filter(|mime| mime.type_() == mime_guess::mime::IMAGE)
        .ok_or_else(|| DomainError::InvalidInput("not a valid image file".to_string()))?;

    if upload.bytes.len() > MAX_IMAGE_BYTES {
        return Err(DomainError::InvalidInput(
            "image size must be less than 2MB".to_string(),
        ));
    }

    Ok(mime)
}

/// Encode an upload into a `data:` URL
///
/// The base64 pass runs on the blocking pool. Validation failures never
/// produce a URL.
pub async fn encode_data_url(upload: ImageUpload) -> DomainResult<String> {
    let mime = validate(&upload)?;

    let encoded = tokio::task::spawn_blocking(move || {
        base64::Engine::encode(&base64::engine::general_purpose::STANDARD, &upload.bytes)
    })
    .await
    .map_err(|e| DomainError::Internal(format!("encoding task failed: {}", e)))?;

    Ok(format!("data:{};base64,{}", mime.essence_str(), encoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_oversized_image() {
        let upload = ImageUpload::new("photo.png", vec![0u8; 3 * 1024 * 1024]);
        assert!(validate(&upload).is_err());
        assert!(matches!(
            encode_data_url(upload).await,
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_rejects_non_image_file() {
        let upload = ImageUpload::new("notes.txt", b"just text".to_vec());
        assert!(matches!(
            encode_data_url(upload).await,
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_accepts_small_png() {
        let upload = ImageUpload::new("photo.png", vec![0u8; 1024 * 1024]);
        let url = encode_data_url(upload).await.expect("Failed to encode");
        assert!(url.starts_with("data:image/png;base64,"));
    }
}
