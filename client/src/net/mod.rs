//! Networking modules for the external REST service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` performs the credential check, `api` handles tutor/animal CRUD,
//! and `types` defines the shared wire schema.

pub mod api;
pub mod gateway;
pub mod types;
