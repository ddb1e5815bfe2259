//! Sealed-box encryption of secret values.
//!
//! GitHub decrypts submitted secrets with libsodium's `crypto_box_seal_open`,
//! so ciphertexts must carry the exact sealed-box layout: a fresh 32-byte
//! ephemeral X25519 public key followed by the XSalsa20-Poly1305 ciphertext.
//! The `crypto_box` crate's `seal` reproduces that layout.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use crypto_box::{aead::OsRng, PublicKey, KEY_SIZE};

use crate::error::{Error, Result};

/// Decode a base64-encoded repository public key into an X25519 recipient key.
///
/// # Errors
///
/// Returns `Error::KeyFormat` if the string is not valid base64 or does not
/// decode to exactly 32 bytes.
pub fn decode_public_key(key: &str) -> Result<PublicKey> {
    let bytes = BASE64
        .decode(key)
        .map_err(|e| Error::KeyFormat(format!("not valid base64: {}", e)))?;

    let bytes: [u8; KEY_SIZE] = bytes.try_into().map_err(|b: Vec<u8>| {
        Error::KeyFormat(format!("expected {} key bytes, got {}", KEY_SIZE, b.len()))
    })?;

    Ok(PublicKey::from(bytes))
}

/// Seal a plaintext value against a base64-encoded repository public key.
///
/// Encryption is probabilistic: a fresh ephemeral keypair is generated per
/// call, so sealing the same value twice yields different ciphertexts.
///
/// # Errors
///
/// Returns `Error::KeyFormat` if the key is malformed or the wrong length,
/// `Error::Seal` if encryption itself fails.
pub fn seal(key: &str, plaintext: &str) -> Result<String> {
    let public_key = decode_public_key(key)?;

    let sealed = public_key
        .seal(&mut OsRng, plaintext.as_bytes())
        .map_err(|e| Error::Seal(e.to_string()))?;

    Ok(BASE64.encode(sealed))
}
