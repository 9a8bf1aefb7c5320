// src/core/image/mod.rs
mod decoder;
mod temp;

pub use decoder::decode_base64_image;
pub use temp::TempImage;
