// src/uploads.rs
//! Multipart collection and on-disk storage for uploaded images.
//!
//! Files are written into one flat directory under generated names and are
//! addressed by clients through `/uploads/<name>`.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use rand::Rng;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::error::AppError;

pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;
pub const MAX_FILES: usize = 5;
pub const PUBLIC_PREFIX: &str = "/uploads";

const NAME_ATTEMPTS: usize = 8;

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

/// A fully buffered multipart form: file parts of one field plus plain text fields.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub files: Vec<UploadedFile>,
    pub fields: HashMap<String, String>,
}

impl UploadForm {
    /// Buffers every part of `multipart`, accepting at most `max_files` files under `file_field`.
    ///
    /// Limits are checked while reading, so nothing reaches the disk for a rejected request.
    pub async fn read(
        mut multipart: Multipart,
        file_field: &str,
        max_files: usize,
    ) -> Result<Self, AppError> {
        let mut form = UploadForm::default();

        while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();

            if field.file_name().is_none() {
                let value = field.text().await.map_err(multipart_error)?;
                form.fields.insert(name, value);
                continue;
            }

            if name != file_field {
                return Err(AppError::validation(format!("Unexpected file field '{name}'")));
            }
            if form.files.len() == max_files {
                return Err(AppError::validation(format!(
                    "Too many files: at most {max_files} allowed"
                )));
            }

            let file_name = field.file_name().map(str::to_string);
            let mut bytes = Vec::new();
            while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
                if bytes.len() + chunk.len() > MAX_FILE_SIZE {
                    return Err(AppError::too_large(format!(
                        "File too large: limit is {} MB",
                        MAX_FILE_SIZE / (1024 * 1024)
                    )));
                }
                bytes.extend_from_slice(&chunk);
            }

            form.files.push(UploadedFile { file_name, bytes });
        }

        Ok(form)
    }

    /// Parses a text field; missing and blank values are `None`.
    pub fn parse_field<T: std::str::FromStr>(&self, name: &str) -> Result<Option<T>, AppError> {
        match self.text(name) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<T>()
                .map(Some)
                .map_err(|_| AppError::validation(format!("Invalid value for '{name}'"))),
        }
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::too_large(err.body_text())
    } else {
        AppError::validation(format!("Multipart error: {}", err.body_text()))
    }
}

#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Uses `dir` as the content directory, creating it if absent.
    pub async fn new(dir: impl Into<PathBuf>) -> Result<Self, std::io::Error> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes one file under a fresh name and returns its public URL.
    pub async fn store(&self, file: &UploadedFile) -> Result<String, AppError> {
        for _ in 0..NAME_ATTEMPTS {
            let name = generate_file_name(file.file_name.as_deref());
            let path = self.dir.join(&name);

            let mut handle = match OpenOptions::new().write(true).create_new(true).open(&path).await {
                Ok(handle) => handle,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            };

            let written = async {
                handle.write_all(&file.bytes).await?;
                handle.flush().await
            }
            .await;

            if let Err(e) = written {
                let _ = fs::remove_file(&path).await;
                return Err(e.into());
            }

            tracing::debug!(file = %name, size = file.bytes.len(), "Stored upload");
            return Ok(format!("{PUBLIC_PREFIX}/{name}"));
        }

        Err(AppError::internal("Could not allocate a unique upload file name"))
    }

    /// Stores every file, or none of them: a failure removes the ones already written.
    pub async fn store_batch(&self, files: &[UploadedFile]) -> Result<Vec<String>, AppError> {
        if files.is_empty() {
            return Err(AppError::validation("No files uploaded"));
        }

        let mut urls = Vec::with_capacity(files.len());
        for file in files {
            match self.store(file).await {
                Ok(url) => urls.push(url),
                Err(e) => {
                    self.discard_all(&urls).await;
                    return Err(e);
                }
            }
        }
        Ok(urls)
    }

    /// Removes a previously stored file. Failures are logged, not returned.
    pub async fn discard(&self, url: &str) {
        let Some(name) = stored_name(url) else {
            tracing::warn!(%url, "Refusing to discard a URL outside the upload directory");
            return;
        };
        if let Err(e) = fs::remove_file(self.dir.join(name)).await {
            tracing::warn!(%url, error = %e, "Failed to remove upload");
        }
    }

    pub async fn discard_all(&self, urls: &[String]) {
        for url in urls {
            self.discard(url).await;
        }
    }
}

fn stored_name(url: &str) -> Option<&str> {
    url.strip_prefix(PUBLIC_PREFIX)
        .and_then(|rest| rest.strip_prefix('/'))
        .filter(|name| !name.is_empty() && !name.contains(['/', '\\']) && *name != "..")
}

/// `<unix-millis>-<random>` followed by the original extension, if it has a sane one.
pub fn generate_file_name(original: Option<&str>) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);

    let extension = original
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()));

    match extension {
        Some(ext) => format!("{millis}-{suffix}.{ext}"),
        None => format!("{millis}-{suffix}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, bytes: &[u8]) -> UploadedFile {
        UploadedFile { file_name: Some(name.to_string()), bytes: bytes.to_vec() }
    }

    #[test]
    fn generated_name_keeps_extension() {
        let name = generate_file_name(Some("shop front.JPG"));
        assert!(name.ends_with(".JPG"), "{name}");

        let (stem, _) = name.split_once('.').unwrap();
        let (millis, suffix) = stem.split_once('-').unwrap();
        assert!(millis.parse::<u128>().is_ok());
        assert!(suffix.parse::<u32>().unwrap() < 1_000_000_000);
    }

    #[test]
    fn generated_name_without_extension() {
        assert!(!generate_file_name(Some("README")).contains('.'));
        assert!(!generate_file_name(None).contains('.'));
        assert!(!generate_file_name(Some("evil.p/hp")).contains('/'));
    }

    #[test]
    fn stored_name_rejects_foreign_paths() {
        assert_eq!(stored_name("/uploads/1-2.png"), Some("1-2.png"));
        assert_eq!(stored_name("/uploads/../secret"), None);
        assert_eq!(stored_name("/static/1-2.png"), None);
        assert_eq!(stored_name("/uploads/"), None);
    }

    #[tokio::test]
    async fn store_writes_bytes_under_upload_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UploadStore::new(tmp.path().join("uploads")).await.unwrap();

        let url = store.store(&file("a.png", b"png-bytes")).await.unwrap();
        let name = url.strip_prefix("/uploads/").unwrap();
        assert!(name.ends_with(".png"));

        let saved = std::fs::read(store.dir().join(name)).unwrap();
        assert_eq!(saved, b"png-bytes");
    }

    #[tokio::test]
    async fn store_batch_requires_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UploadStore::new(tmp.path()).await.unwrap();

        let err = store.store_batch(&[]).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn store_batch_gives_unique_names() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UploadStore::new(tmp.path()).await.unwrap();

        let files: Vec<_> = (0..MAX_FILES).map(|i| file("x.jpg", &[i as u8])).collect();
        let mut urls = store.store_batch(&files).await.unwrap();
        urls.sort();
        urls.dedup();
        assert_eq!(urls.len(), MAX_FILES);
        assert_eq!(std::fs::read_dir(store.dir()).unwrap().count(), MAX_FILES);
    }

    #[tokio::test]
    async fn discard_removes_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UploadStore::new(tmp.path()).await.unwrap();

        let url = store.store(&file("a.gif", b"gif")).await.unwrap();
        store.discard(&url).await;
        assert_eq!(std::fs::read_dir(store.dir()).unwrap().count(), 0);
    }
}
