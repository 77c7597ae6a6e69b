//! Local file capture for identity attachments.
//!
//! Files are read off the interactive path with `tokio::fs` and turned into
//! a `data:` URL preview before any network call, so the preview works
//! offline. A user may re-pick a file while an earlier read is still in
//! flight; the loader hands out generation tickets and a completed read is
//! only committed if its ticket is still current for that field.

use std::collections::HashMap;
use std::path::Path;

use base64::{engine::general_purpose, Engine as _};
use thiserror::Error;

/// Which identity slot an attachment fills. Doubles as the multipart field
/// name on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentKind {
    IdCardFront,
    IdCardBack,
    BusinessLicense,
}

impl AttachmentKind {
    pub fn field_name(&self) -> &'static str {
        match self {
            AttachmentKind::IdCardFront => "idCardFront",
            AttachmentKind::IdCardBack => "idCardBack",
            AttachmentKind::BusinessLicense => "businessLicense",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttachmentKind::IdCardFront => "ID card (front)",
            AttachmentKind::IdCardBack => "ID card (back)",
            AttachmentKind::BusinessLicense => "business license",
        }
    }
}

#[derive(Debug, Error)]
pub enum AttachmentError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is empty")]
    EmptyFile { path: String },
}

/// A captured file: raw bytes for upload plus a ready-made preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
    pub preview: String,
}

impl Attachment {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Ticket handed out when a load starts; checked again before commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    kind: AttachmentKind,
    generation: u64,
}

impl LoadTicket {
    pub fn kind(&self) -> AttachmentKind {
        self.kind
    }
}

/// Tracks the current generation per attachment field so that the
/// last-issued read wins when loads race.
#[derive(Debug, Default)]
pub struct AttachmentLoader {
    generations: HashMap<AttachmentKind, u64>,
}

impl AttachmentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load for `kind`. Invalidates every ticket previously issued
    /// for the same field.
    pub fn begin(&mut self, kind: AttachmentKind) -> LoadTicket {
        let generation = self.generations.entry(kind).or_insert(0);
        *generation += 1;
        LoadTicket {
            kind,
            generation: *generation,
        }
    }

    /// Whether a finished read may still be committed to its field.
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        self.generations.get(&ticket.kind).copied() == Some(ticket.generation)
    }
}

/// Read a file into an [`Attachment`], producing the preview eagerly.
pub async fn load_attachment(path: &Path) -> Result<Attachment, AttachmentError> {
    let display = path.display().to_string();
    let bytes = tokio::fs::read(path).await.map_err(|source| AttachmentError::Io {
        path: display.clone(),
        source,
    })?;
    if bytes.is_empty() {
        return Err(AttachmentError::EmptyFile { path: display });
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "attachment".to_string());
    let mime = sniff_mime(&bytes, path).to_string();
    let preview = data_url(&mime, &bytes);

    Ok(Attachment {
        file_name,
        mime,
        bytes,
        preview,
    })
}

fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(bytes))
}

/// Sniff the image type from magic bytes, falling back to the file
/// extension, then to octet-stream.
fn sniff_mime(bytes: &[u8], path: &Path) -> &'static str {
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return "image/jpeg";
    }
    if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        return "image/png";
    }
    if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        return "image/gif";
    }
    if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return "image/webp";
    }

    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
