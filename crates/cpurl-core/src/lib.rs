pub mod config;
pub mod logging;

// Codec modules
pub mod decode;
pub mod encode;
pub mod host;
pub mod normalize;
mod safe;

pub use decode::decode_path;
pub use encode::encode_path;
pub use host::HostOs;
pub use normalize::normalize_url_path;
