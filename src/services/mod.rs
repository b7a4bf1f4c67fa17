// Service exports
pub mod geocoder;
pub mod normalizer;
pub mod normalizer_client;

pub use geocoder::Geocoder;
pub use normalizer::{AddressNormalizer, NormalizerError};
pub use normalizer_client::NormalizerClient;
