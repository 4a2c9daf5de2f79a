use crate::coercion::CoercionTable;
use crate::stable_json::{stable_json_bytes, EncodingError};
use crate::value::StructuredValue;
use sha2::{Digest, Sha256};

pub const DIGEST_HEX_LEN: usize = 64;

pub fn stable_hash_hex<'a, E>(entries: E, coercions: &CoercionTable) -> Result<String, EncodingError>
where
    E: IntoIterator<Item = (&'a String, &'a StructuredValue)>,
{
    let bytes = stable_json_bytes(entries, coercions)?;
    Ok(sha256_hex(&bytes))
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}

#[cfg(test)]
#[path = "stable_hash_test.rs"]
mod tests;
