pub mod base64url;

pub use base64url::{decode_segment, encode_segment};
