//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `tutors`, `animals`) so pages depend
//! on small focused models. Only `session` persists anything.

pub mod animals;
pub mod auth;
pub mod session;
pub mod session_store;
pub mod tutors;
