//! Seams for the encryption collaborators.
//!
//! The codec never chooses an algorithm or touches keys. Callers hand in an
//! [`Encryptor`] when saving and a [`Decryptor`] when loading; plain closures
//! with the matching signature work for both.

use crate::error::CipherError;

/// Turns a plaintext payload into ciphertext.
///
/// The returned bytes must be valid UTF-8 (e.g. a base64 or Fernet token),
/// because the envelope stores the ciphertext as text.
pub trait Encryptor: Send + Sync {
    /// Encrypts the given plaintext.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying primitive fails.
    fn encrypt(&self, plaintext: &str) -> Result<Vec<u8>, CipherError>;
}

/// Turns a stored ciphertext payload back into plaintext JSON.
pub trait Decryptor: Send + Sync {
    /// Decrypts the given payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be decrypted.
    fn decrypt(&self, payload: &str) -> Result<String, CipherError>;
}

impl<F> Encryptor for F
where
    F: Fn(&str) -> Result<Vec<u8>, CipherError> + Send + Sync,
{
    fn encrypt(&self, plaintext: &str) -> Result<Vec<u8>, CipherError> {
        self(plaintext)
    }
}

impl<F> Decryptor for F
where
    F: Fn(&str) -> Result<String, CipherError> + Send + Sync,
{
    fn decrypt(&self, payload: &str) -> Result<String, CipherError> {
        self(payload)
    }
}

/// Identity cipher for records that are stored in plaintext.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEncryption;

impl Encryptor for NoEncryption {
    fn encrypt(&self, plaintext: &str) -> Result<Vec<u8>, CipherError> {
        Ok(plaintext.as_bytes().to_vec())
    }
}

impl Decryptor for NoEncryption {
    fn decrypt(&self, payload: &str) -> Result<String, CipherError> {
        Ok(payload.to_string())
    }
}
