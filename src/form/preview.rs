//! Photo preview: reading a selected image into a data URL.

use std::fmt;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use super::event::{FormEvent, Ticket};

/// Errors that can occur while loading a photo for preview.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The file could not be read.
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension is not a supported image type.
    #[error("not an image file: {}", .0.display())]
    NotAnImage(PathBuf),
}

/// A `data:<mime>;base64,<payload>` URL holding an image's bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    mime: &'static str,
    url: String,
}

impl DataUrl {
    /// Encodes `bytes` as a data URL of the given MIME type.
    pub fn encode(mime: &'static str, bytes: &[u8]) -> Self {
        let url = format!("data:{mime};base64,{}", BASE64_STANDARD.encode(bytes));
        Self { mime, url }
    }

    /// Returns the MIME type.
    pub fn mime(&self) -> &'static str {
        self.mime
    }

    /// Returns the full URL.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Returns the length of the base64 payload.
    pub fn payload_len(&self) -> usize {
        self.url.len() - self.header_len()
    }

    fn header_len(&self) -> usize {
        "data:".len() + self.mime.len() + ";base64,".len()
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// What the preview area currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PhotoPreview {
    /// Placeholder icon; no photo loaded.
    #[default]
    Empty,
    /// A loaded photo.
    Populated { path: PathBuf, data_url: DataUrl },
}

impl PhotoPreview {
    /// Returns `true` if no photo is loaded.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A request to load a photo, issued by the form when a file is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRequest {
    pub ticket: Ticket,
    pub path: PathBuf,
}

/// Returns the image MIME type for a path's extension, if it is a supported image.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// Reads an image file and encodes it as a [`DataUrl`].
pub async fn read_data_url(path: &Path) -> Result<DataUrl, PreviewError> {
    let mime = mime_for_path(path).ok_or_else(|| PreviewError::NotAnImage(path.to_path_buf()))?;
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| PreviewError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(DataUrl::encode(mime, &bytes))
}

/// Spawns a task that reads the requested photo and reports back on `tx`.
///
/// The send is allowed to fail: a closed channel means the UI has gone away.
pub fn spawn_photo_read(request: PhotoRequest, tx: UnboundedSender<FormEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let PhotoRequest { ticket, path } = request;
        let result = read_data_url(&path).await;
        let _ = tx.send(FormEvent::PhotoLoaded {
            ticket,
            path,
            result,
        });
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;
    use tokio::sync::mpsc;

    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    mod mime {
        use super::*;

        #[test]
        fn known_image_extensions() {
            assert_eq!(mime_for_path(Path::new("rex.png")), Some("image/png"));
            assert_eq!(mime_for_path(Path::new("rex.JPG")), Some("image/jpeg"));
            assert_eq!(mime_for_path(Path::new("rex.jpeg")), Some("image/jpeg"));
            assert_eq!(mime_for_path(Path::new("a/b/rex.webp")), Some("image/webp"));
            assert_eq!(mime_for_path(Path::new("logo.svg")), Some("image/svg+xml"));
        }

        #[test]
        fn non_images_rejected() {
            assert_eq!(mime_for_path(Path::new("notes.txt")), None);
            assert_eq!(mime_for_path(Path::new("no_extension")), None);
        }
    }

    mod data_url {
        use super::*;

        #[test]
        fn encodes_header_and_payload() {
            let url = DataUrl::encode("image/png", b"hi");
            assert_eq!(url.as_str(), "data:image/png;base64,aGk=");
            assert_eq!(url.mime(), "image/png");
            assert_eq!(url.payload_len(), 4);
            assert_eq!(url.to_string(), url.as_str());
        }

        #[test]
        fn empty_file_has_empty_payload() {
            let url = DataUrl::encode("image/gif", b"");
            assert_eq!(url.as_str(), "data:image/gif;base64,");
            assert_eq!(url.payload_len(), 0);
        }
    }

    mod read {
        use super::*;

        #[tokio::test]
        async fn reads_image_into_data_url() {
            let dir = tempdir().unwrap();
            let path = dir.path().join("rex.png");
            fs::write(&path, PNG_MAGIC).unwrap();

            let url = read_data_url(&path).await.unwrap();
            assert_eq!(url.as_str(), "data:image/png;base64,iVBORw0KGgo=");
        }

        #[tokio::test]
        async fn missing_file_is_io_error() {
            let dir = tempdir().unwrap();
            let path = dir.path().join("missing.png");

            match read_data_url(&path).await {
                Err(PreviewError::Io { path: p, .. }) => assert_eq!(p, path),
                other => panic!("expected Io error, got {other:?}"),
            }
        }

        #[tokio::test]
        async fn non_image_is_rejected_without_reading() {
            let path = PathBuf::from("/definitely/not/here.txt");
            match read_data_url(&path).await {
                Err(PreviewError::NotAnImage(p)) => assert_eq!(p, path),
                other => panic!("expected NotAnImage, got {other:?}"),
            }
        }

        #[tokio::test]
        async fn spawned_read_reports_on_channel() {
            let dir = tempdir().unwrap();
            let path = dir.path().join("rex.png");
            fs::write(&path, PNG_MAGIC).unwrap();
            let (tx, mut rx) = mpsc::unbounded_channel();

            let request = PhotoRequest {
                ticket: Ticket(7),
                path: path.clone(),
            };
            spawn_photo_read(request, tx).await.unwrap();

            match rx.recv().await {
                Some(FormEvent::PhotoLoaded {
                    ticket,
                    path: p,
                    result,
                }) => {
                    assert_eq!(ticket, Ticket(7));
                    assert_eq!(p, path);
                    assert_eq!(result.unwrap().mime(), "image/png");
                }
                other => panic!("expected PhotoLoaded, got {other:?}"),
            }
        }
    }

    #[test]
    fn preview_defaults_to_empty() {
        assert!(PhotoPreview::default().is_empty());
    }
}
