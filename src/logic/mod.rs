mod token;

pub use token::{issue_unique, random_bytes, random_hex_token};
