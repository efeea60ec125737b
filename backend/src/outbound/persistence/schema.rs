//! Diesel table definitions.
//!
//! Must match `migrations/` exactly.

diesel::table! {
    /// Registered users.
    ///
    /// `email` carries no unique index: duplicate registrations are allowed.
    users (id) {
        id -> Uuid,
        name -> Text,
        email -> Text,
        password -> Text,
        created_at -> Timestamptz,
    }
}
