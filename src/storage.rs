use aes_gcm::aead::{rand_core::RngCore, Aead, OsRng};
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use pbkdf2::pbkdf2_hmac;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::StorageError;

/// Storage namespace for the persisted job sequence.
pub const JOBS_KEY: &str = "job-storage";

const DEFAULT_PBKDF2_ITERATIONS: u32 = 200_000;

/// Opaque keyed durable store. Any backend satisfying get/set is enough for
/// the collection manager; filter state never passes through here.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;
}

/// HashMap-backed storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// One plain JSON file per key under a root directory.
#[derive(Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", sanitize_key(key)))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read(path)?))
    }

    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        write_file(self.key_path(key), bytes)
    }
}

#[derive(Serialize, Deserialize)]
struct CryptoEnvelope {
    v: u8,
    salt: String,
    iv: String,
    tag: String,
    data: String,
}

/// File storage with the payload sealed in a versioned AES-256-GCM envelope.
/// The key is derived from the password with PBKDF2-HMAC-SHA256; the salt is
/// generated on first write and reused afterwards so the derived key can be
/// cached across writes.
pub struct EncryptedFileStorage {
    root: PathBuf,
    password: String,
    iterations: u32,
    cached: Option<(Vec<u8>, [u8; 32])>,
}

impl EncryptedFileStorage {
    pub fn new(root: impl Into<PathBuf>, password: impl Into<String>) -> Self {
        Self::with_iterations(root, password, DEFAULT_PBKDF2_ITERATIONS)
    }

    pub fn with_iterations(
        root: impl Into<PathBuf>,
        password: impl Into<String>,
        iterations: u32,
    ) -> Self {
        Self {
            root: root.into(),
            password: password.into(),
            iterations,
            cached: None,
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.enc", sanitize_key(key)))
    }

    fn key_for_salt(&mut self, salt: &[u8]) -> [u8; 32] {
        if let Some((cached_salt, cached_key)) = self.cached.as_ref() {
            if cached_salt.as_slice() == salt {
                return *cached_key;
            }
        }
        let key = derive_key(self.password.as_str(), salt, self.iterations);
        self.cached = Some((salt.to_vec(), key));
        key
    }
}

impl Storage for EncryptedFileStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path)?;
        let envelope: CryptoEnvelope = serde_json::from_str(raw.as_str())?;
        let salt = decode_b64(envelope.salt.as_str())?;
        if salt.is_empty() {
            return Err(StorageError::Crypto("empty salt".to_string()));
        }
        let key = match self.cached.as_ref() {
            Some((cached_salt, cached_key)) if *cached_salt == salt => *cached_key,
            _ => derive_key(self.password.as_str(), salt.as_slice(), self.iterations),
        };
        let plaintext = decrypt_envelope(&envelope, &key)?;
        Ok(Some(plaintext))
    }

    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let salt = match self.cached.as_ref() {
            Some((salt, _)) => salt.clone(),
            None => {
                let mut fresh = [0u8; 16];
                OsRng.fill_bytes(&mut fresh);
                fresh.to_vec()
            }
        };
        let derived = self.key_for_salt(salt.as_slice());
        let envelope = encrypt_bytes(bytes, salt.as_slice(), &derived)?;
        let content = serde_json::to_string(&envelope)?;
        write_file(self.key_path(key), content.as_bytes())
    }
}

fn encrypt_bytes(
    bytes: &[u8],
    salt: &[u8],
    key: &[u8; 32],
) -> Result<CryptoEnvelope, StorageError> {
    let mut iv = [0u8; 12];
    OsRng.fill_bytes(&mut iv);
    let cipher = Aes256Gcm::new_from_slice(key.as_slice())
        .map_err(|err| StorageError::Crypto(err.to_string()))?;
    let nonce = Nonce::from_slice(&iv);
    let encrypted = cipher
        .encrypt(nonce, bytes)
        .map_err(|err| StorageError::Crypto(err.to_string()))?;

    if encrypted.len() < 16 {
        return Err(StorageError::Crypto(
            "encryption output too short".to_string(),
        ));
    }
    let split_at = encrypted.len() - 16;
    let (data, tag) = encrypted.split_at(split_at);

    Ok(CryptoEnvelope {
        v: 1,
        salt: B64.encode(salt),
        iv: B64.encode(&iv),
        tag: B64.encode(tag),
        data: B64.encode(data),
    })
}

fn decrypt_envelope(envelope: &CryptoEnvelope, key: &[u8; 32]) -> Result<Vec<u8>, StorageError> {
    let iv = decode_b64(envelope.iv.as_str())?;
    let tag = decode_b64(envelope.tag.as_str())?;
    let data = decode_b64(envelope.data.as_str())?;
    if iv.len() != 12 || tag.is_empty() {
        return Err(StorageError::Crypto("malformed envelope".to_string()));
    }

    let cipher = Aes256Gcm::new_from_slice(key.as_slice())
        .map_err(|err| StorageError::Crypto(err.to_string()))?;
    let nonce = Nonce::from_slice(iv.as_slice());
    let mut combined = Vec::with_capacity(data.len() + tag.len());
    combined.extend_from_slice(data.as_slice());
    combined.extend_from_slice(tag.as_slice());

    cipher
        .decrypt(nonce, combined.as_slice())
        .map_err(|_| StorageError::Crypto("invalid password or corrupted data".to_string()))
}

fn derive_key(password: &str, salt: &[u8], iterations: u32) -> [u8; 32] {
    let mut key = [0u8; 32];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key);
    key
}

fn decode_b64(value: &str) -> Result<Vec<u8>, StorageError> {
    B64.decode(value)
        .map_err(|err| StorageError::Crypto(err.to_string()))
}

fn write_file(path: PathBuf, bytes: &[u8]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}

fn sanitize_key(value: &str) -> String {
    let mut out = String::new();
    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == '.' {
            out.push(ch);
        } else {
            out.push('_');
        }
    }
    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        "store".to_string()
    } else {
        trimmed.to_string()
    }
}
