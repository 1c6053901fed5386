//! Authentication primitives: token minting/validation and password hashing.

pub mod jwt;
pub mod password;
