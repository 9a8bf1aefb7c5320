pub mod image;
pub mod services;
pub mod types;
pub mod verifier;
