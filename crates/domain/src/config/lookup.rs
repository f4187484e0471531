use serde::{Deserialize, Serialize};

use crate::address::AddressParseMode;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LookupConfig {
    #[serde(default)]
    pub parse_mode: AddressParseMode,
}
