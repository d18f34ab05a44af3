//! Identity derivation from SSH public keys.
//!
//! The identity is the OpenSSH `SHA256:` fingerprint without its prefix:
//! unpadded standard base64 of the SHA-256 digest of the wire-format key blob.

use crate::{AuthError, Result as AuthErrorResult};

use postbox_core::{ErrorLocation, Identity};

use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use sha2::{Digest, Sha256};

/// Fingerprint of a raw key blob as presented during authentication.
#[track_caller]
pub fn fingerprint_from_key_blob(blob: &[u8]) -> AuthErrorResult<Identity> {
    if blob.is_empty() {
        return Err(AuthError::MissingPublicKey {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let digest = Sha256::digest(blob);
    Identity::parse(STANDARD_NO_PAD.encode(digest)).map_err(|source| AuthError::Identity {
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Fingerprint of an `authorized_keys` / `.pub` line: `<type> <base64> [comment]`.
///
/// The key type named in the blob must match the declared one.
#[track_caller]
pub fn fingerprint_from_authorized_key(line: &str) -> AuthErrorResult<Identity> {
    let mut fields = line.split_whitespace();

    let (Some(declared_type), Some(encoded)) = (fields.next(), fields.next()) else {
        return Err(AuthError::MissingPublicKey {
            location: ErrorLocation::from(Location::caller()),
        });
    };

    let blob = STANDARD
        .decode(encoded)
        .map_err(|source| AuthError::KeyDecode {
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

    let blob_type = key_type(&blob)?;
    if blob_type != declared_type.as_bytes() {
        return Err(AuthError::InvalidPublicKey {
            message: format!(
                "declared type '{}' does not match key type '{}'",
                declared_type,
                String::from_utf8_lossy(blob_type)
            ),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    fingerprint_from_key_blob(&blob)
}

/// First length-prefixed string of the wire format.
#[track_caller]
fn key_type(blob: &[u8]) -> AuthErrorResult<&[u8]> {
    let invalid = |message: &str| AuthError::InvalidPublicKey {
        message: message.to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (len_bytes, rest) = blob
        .split_first_chunk::<4>()
        .ok_or_else(|| invalid("key blob too short"))?;
    let len = u32::from_be_bytes(*len_bytes) as usize;

    rest.get(..len)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| invalid("key type truncated"))
}
