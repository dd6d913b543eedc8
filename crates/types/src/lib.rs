pub mod constants;
pub mod ids;
pub mod value;

pub use constants::StreamEncoding;
pub use ids::{Alias, ObjectNumber};
pub use value::{DictValue, Dictionary};
