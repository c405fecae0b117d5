//! Stand-in ciphers for unit tests.

use crate::cipher::{Decryptor, Encryptor};
use crate::error::CipherError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Reversible, non-secret "encryption": base64 of the plaintext.
pub(crate) struct Base64Cipher;

impl Encryptor for Base64Cipher {
    fn encrypt(&self, plaintext: &str) -> Result<Vec<u8>, CipherError> {
        Ok(STANDARD.encode(plaintext).into_bytes())
    }
}

impl Decryptor for Base64Cipher {
    fn decrypt(&self, payload: &str) -> Result<String, CipherError> {
        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| CipherError::new(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| CipherError::new(e.to_string()))
    }
}

/// Cipher whose every call fails.
pub(crate) struct FailingCipher;

impl Encryptor for FailingCipher {
    fn encrypt(&self, _plaintext: &str) -> Result<Vec<u8>, CipherError> {
        Err(CipherError::new("key unavailable"))
    }
}

impl Decryptor for FailingCipher {
    fn decrypt(&self, _payload: &str) -> Result<String, CipherError> {
        Err(CipherError::new("key unavailable"))
    }
}

/// Encryptor returning raw bytes that are not UTF-8.
pub(crate) struct NonUtf8Cipher;

impl Encryptor for NonUtf8Cipher {
    fn encrypt(&self, _plaintext: &str) -> Result<Vec<u8>, CipherError> {
        Ok(vec![0xff, 0xfe, 0x00])
    }
}
