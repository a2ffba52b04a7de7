/// Cloudinary upload client.
///
/// Uses the signed upload API: the request parameters plus the API secret are
/// hashed with SHA-256 and sent as `signature`.
use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::images::{ImageHost, ImageHostError};

const CLOUDINARY_API_BASE: &str = "https://api.cloudinary.com/v1_1";
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    public_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CloudinaryError {
    error: CloudinaryErrorBody,
}

#[derive(Debug, Deserialize)]
struct CloudinaryErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct CloudinaryHost {
    client: Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
    folder: String,
}

impl CloudinaryHost {
    pub fn new(
        cloud_name: String,
        api_key: String,
        api_secret: String,
        folder: String,
    ) -> Result<Self, ImageHostError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()?,
            cloud_name,
            api_key,
            api_secret,
            folder,
        })
    }

    fn upload_url(&self) -> String {
        format!("{CLOUDINARY_API_BASE}/{}/image/upload", self.cloud_name)
    }

    fn form(&self, file_name: &str, data: Bytes, timestamp: i64) -> Form {
        let timestamp = timestamp.to_string();
        let signature = sign_params(
            &[("folder", self.folder.as_str()), ("timestamp", timestamp.as_str())],
            &self.api_secret,
        );
        Form::new()
            .part("file", Part::bytes(data.to_vec()).file_name(file_name.to_string()))
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp)
            .text("folder", self.folder.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256")
    }
}

#[async_trait]
impl ImageHost for CloudinaryHost {
    /// Retries on 429 and 5xx with exponential backoff.
    async fn upload(&self, file_name: &str, data: Bytes) -> Result<String, ImageHostError> {
        let mut last_error = ImageHostError::Exhausted {
            retries: MAX_RETRIES,
        };

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = std::time::Duration::from_millis(500 * (1 << (attempt - 1)));
                warn!(
                    "Image upload attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let form = self.form(file_name, data.clone(), Utc::now().timestamp());
            let response = match self.client.post(self.upload_url()).multipart(form).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = ImageHostError::Http(e);
                    continue;
                }
            };

            let status = response.status();

            if is_retryable(status) {
                let body = response.text().await.unwrap_or_default();
                warn!("Cloudinary returned {}: {}", status, body);
                last_error = ImageHostError::Api {
                    status: status.as_u16(),
                    message: body,
                };
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<CloudinaryError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(ImageHostError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let uploaded: UploadResponse = response.json().await?;
            debug!(
                "Uploaded {} as {}",
                file_name,
                uploaded.public_id.as_deref().unwrap_or("?")
            );
            return uploaded.secure_url.ok_or(ImageHostError::MissingUrl);
        }

        Err(last_error)
    }
}

fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Cloudinary request signature: `k=v` pairs sorted by key, joined with `&`,
/// with the API secret appended, then hex-encoded SHA-256.
fn sign_params(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted: Vec<_> = params.iter().filter(|(_, v)| !v.is_empty()).collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    let to_sign = sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_is_order_independent() {
        let a = sign_params(&[("timestamp", "1700000000"), ("folder", "t111cw")], "s3cr3t");
        let b = sign_params(&[("folder", "t111cw"), ("timestamp", "1700000000")], "s3cr3t");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_signature_matches_manual_digest() {
        let expected = format!(
            "{:x}",
            Sha256::digest(b"folder=t111cw&timestamp=1700000000s3cr3t")
        );
        let got = sign_params(&[("folder", "t111cw"), ("timestamp", "1700000000")], "s3cr3t");
        assert_eq!(got, expected);
    }

    #[test]
    fn test_signature_skips_empty_values() {
        let with_empty = sign_params(&[("folder", ""), ("timestamp", "1")], "k");
        let without = sign_params(&[("timestamp", "1")], "k");
        assert_eq!(with_empty, without);
    }

    #[test]
    fn test_only_throttling_and_server_errors_retry() {
        assert!(is_retryable(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable(StatusCode::BAD_GATEWAY));
        assert!(!is_retryable(StatusCode::BAD_REQUEST));
        assert!(!is_retryable(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_upload_url() {
        let host = CloudinaryHost::new(
            "kestrel1337".to_string(),
            "key".to_string(),
            "secret".to_string(),
            "t111cw".to_string(),
        )
        .unwrap();
        assert_eq!(
            host.upload_url(),
            "https://api.cloudinary.com/v1_1/kestrel1337/image/upload"
        );
    }
}
