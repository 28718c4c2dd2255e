//! Database layer (Firestore).

pub mod firestore;

pub use firestore::ProfileDb;

/// Collection names as constants.
pub mod collections {
    /// Profile documents (keyed by generated document id)
    pub const USER_PROFILES: &str = "userProfile";
    /// External user entities, referenced by id only
    pub const USERS: &str = "users";
}
