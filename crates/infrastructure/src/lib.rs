//! rlookup Infrastructure Layer
pub mod system;
