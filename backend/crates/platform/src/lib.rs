//! Platform Crate - Technical Infrastructure
//!
//! Cryptographic building blocks shared by the backend crates:
//! - Clear text password handling with zeroization
//! - Stored password hash parsing and verification (Argon2id, bcrypt)

pub mod password;
