//! TLS configuration and certificate loading.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use axum_server::tls_rustls::RustlsConfig;

/// Error type for loading TLS credentials.
#[derive(Debug, thiserror::Error)]
pub enum TlsError {
    #[error("Certificate file not found: {0:?}")]
    CertificateNotFound(PathBuf),
    #[error("Private key file not found: {0:?}")]
    KeyNotFound(PathBuf),
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No certificates found in {0:?}")]
    NoCertificates(PathBuf),
    #[error("No private key found in {0:?}")]
    NoPrivateKey(PathBuf),
    #[error("Invalid certificate/key pair: {0}")]
    Invalid(#[source] std::io::Error),
}

/// Load TLS configuration from certificate and key files.
///
/// The resulting config advertises `h2` and `http/1.1` via ALPN.
pub async fn load_tls_config(cert_path: &Path, key_path: &Path) -> Result<RustlsConfig, TlsError> {
    if !cert_path.exists() {
        return Err(TlsError::CertificateNotFound(cert_path.to_path_buf()));
    }
    if !key_path.exists() {
        return Err(TlsError::KeyNotFound(key_path.to_path_buf()));
    }

    let certs = read_certificates(cert_path)?;
    let key = read_private_key(key_path)?;

    tracing::debug!(
        cert_path = ?cert_path,
        key_path = ?key_path,
        certificates = certs.len(),
        "TLS credentials read"
    );

    RustlsConfig::from_der(certs, key)
        .await
        .map_err(TlsError::Invalid)
}

fn open(path: &Path) -> Result<BufReader<File>, TlsError> {
    File::open(path).map(BufReader::new).map_err(|source| TlsError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_certificates(path: &Path) -> Result<Vec<Vec<u8>>, TlsError> {
    let mut reader = open(path)?;
    let certs = rustls_pemfile::certs(&mut reader)
        .map(|cert| cert.map(|der| der.to_vec()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| TlsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    if certs.is_empty() {
        return Err(TlsError::NoCertificates(path.to_path_buf()));
    }
    Ok(certs)
}

fn read_private_key(path: &Path) -> Result<Vec<u8>, TlsError> {
    let mut reader = open(path)?;
    rustls_pemfile::private_key(&mut reader)
        .map_err(|source| TlsError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .map(|key| key.secret_der().to_vec())
        .ok_or_else(|| TlsError::NoPrivateKey(path.to_path_buf()))
}
