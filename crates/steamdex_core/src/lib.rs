//! Public library API for reading Steam library stores.

/// KeyValues/VDF parsing, user identities, and catalog building.
pub mod steam;
