use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Whole-file text of a patch target, edited in memory and written back in one go.
///
/// CRLF files are edited as LF and get their CRLF endings back on save, so
/// anchors written with `\n` match either way.
#[derive(Debug, Clone)]
pub struct Snapshot {
    path: PathBuf,
    original: String,
    content: String,
    crlf: bool,
}

impl Snapshot {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::from_text(path, content))
    }

    pub fn from_text(path: &Path, content: String) -> Self {
        let crlf = content.contains("\r\n");
        let content = if crlf {
            content.replace("\r\n", "\n")
        } else {
            content
        };
        Self {
            path: path.to_path_buf(),
            original: content.clone(),
            content,
            crlf,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    pub fn is_changed(&self) -> bool {
        self.content != self.original
    }

    pub fn original_fingerprint(&self) -> String {
        compute_str_hash(&self.original)
    }

    pub fn fingerprint(&self) -> String {
        compute_str_hash(&self.content)
    }

    /// Overwrite the file with the current content.
    pub fn save(&self) -> Result<()> {
        if self.crlf {
            atomic_write(&self.path, &self.content.replace('\n', "\r\n"))
        } else {
            atomic_write(&self.path, &self.content)
        }
    }
}

fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let io_err = |e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    };
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, content).map_err(io_err)?;
    fs::rename(&tmp, path).map_err(io_err)?;
    Ok(())
}

/// `sha256:<hex>` fingerprint of a snapshot's text.
pub fn compute_str_hash(s: &str) -> String {
    format!("sha256:{:x}", Sha256::digest(s.as_bytes()))
}
