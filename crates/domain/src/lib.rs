//! rlookup Domain Layer
pub mod address;
pub mod config;
pub mod errors;
pub mod hostname_lookup;

pub use address::{AddressParseMode, LookupAddress};
pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use hostname_lookup::{HostnameLookup, NOT_FOUND_MESSAGE, USAGE_MESSAGE};
