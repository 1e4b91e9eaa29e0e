use std::collections::HashSet;
use std::hash::Hash;

use rand::rng;
use rand::RngCore;

/// Fill a buffer of `len` bytes from the thread-local CSPRNG
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rng().fill_bytes(&mut bytes);
    bytes
}

/// Random token of `len` bytes, hex encoded
pub fn random_hex_token(len: usize) -> String {
    hex::encode(random_bytes(len))
}

/// Draw from `generate` until a value not yet in `issued` comes up, record it
/// and return it.
///
/// `generate` must be able to produce a value outside `issued`, otherwise
/// this never returns.
pub fn issue_unique<T, F>(issued: &mut HashSet<T>, mut generate: F) -> T
where
    T: Eq + Hash + Clone,
    F: FnMut() -> T,
{
    loop {
        let candidate = generate();
        if issued.insert(candidate.clone()) {
            return candidate;
        }
    }
}
