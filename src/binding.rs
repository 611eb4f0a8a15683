//! Certificate bindings
//!
//! A binding associates a hostname with a certificate and its private key.
//! Both are opaque text: they are embedded verbatim and never parsed here.
//! The serialized form is a JSON object with exactly the keys `host`, `cert`
//! and `key`, in that order.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::error::{CertBindError, InputKind, Result};

/// Indentation used for binding files
const INDENT: &[u8] = b"    ";

/// A hostname bound to a certificate and key
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(deny_unknown_fields)]
pub struct CertBinding {
    /// The hostname (SNI) the certificate applies to.
    pub host: String,

    /// Certificate file contents, verbatim.
    pub cert: String,

    /// Private key file contents, verbatim.
    pub key: String,
}

impl CertBinding {
    /// Create a binding from in-memory text. Only an empty host is rejected.
    pub fn new(
        host: impl Into<String>,
        cert: impl Into<String>,
        key: impl Into<String>,
    ) -> Result<Self> {
        let host = host.into();
        if host.is_empty() {
            return Err(CertBindError::EmptyHost);
        }
        Ok(Self {
            host,
            cert: cert.into(),
            key: key.into(),
        })
    }

    /// Read the cert and key files in full and bind them to `host`
    pub fn from_files(host: &str, cert_path: &Path, key_path: &Path) -> Result<Self> {
        if host.is_empty() {
            return Err(CertBindError::EmptyHost);
        }
        let cert = read_input(InputKind::Cert, cert_path)?;
        let key = read_input(InputKind::Key, key_path)?;
        Self::new(host, cert, key)
    }

    /// Load a binding file written by [`CertBinding::write_to`] (or by hand)
    pub fn load(path: &Path) -> Result<Self> {
        let json = read_input(InputKind::Binding, path)?;
        let binding: CertBinding =
            serde_json::from_str(&json).map_err(|source| CertBindError::InvalidBinding {
                path: path.to_path_buf(),
                source,
            })?;
        if binding.host.is_empty() {
            return Err(CertBindError::EmptyHost);
        }
        Ok(binding)
    }

    /// Pretty-printed JSON bytes, four-space indent
    pub fn to_json_vec(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.cert.len() + self.key.len() + self.host.len() + 64);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(buf)
    }

    /// Write the binding to `path`, replacing any existing file
    pub fn write_to(&self, path: &Path) -> Result<()> {
        // Render first so a failure never leaves a half-written file behind.
        let bytes = self.to_json_vec()?;
        fs::write(path, &bytes).map_err(|source| CertBindError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "Binding file written");
        Ok(())
    }
}

fn read_input(kind: InputKind, path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| CertBindError::ReadInput {
        kind,
        path: path.to_path_buf(),
        source,
    })?;
    debug!(%kind, path = %path.display(), bytes = text.len(), "Read input file");
    Ok(text)
}

/// Builds one binding file from a hostname, a cert file and a key file
#[derive(Debug, Clone)]
pub struct BindingBuilder {
    host: String,
    cert_path: PathBuf,
    key_path: PathBuf,
}

impl BindingBuilder {
    pub fn new(
        host: impl Into<String>,
        cert_path: impl Into<PathBuf>,
        key_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            host: host.into(),
            cert_path: cert_path.into(),
            key_path: key_path.into(),
        }
    }

    /// Read both inputs and return the binding without writing anything
    pub fn build(&self) -> Result<CertBinding> {
        CertBinding::from_files(&self.host, &self.cert_path, &self.key_path)
    }

    /// Read both inputs, then write the binding to `output`.
    ///
    /// The output file is only touched after both inputs were read, so a
    /// missing cert or key never produces an output file.
    #[instrument(skip(self), fields(host = %self.host))]
    pub fn write(&self, output: &Path) -> Result<CertBinding> {
        let binding = self.build()?;
        binding.write_to(output)?;
        info!(output = %output.display(), "Wrote cert binding");
        Ok(binding)
    }
}
