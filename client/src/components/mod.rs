//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render markup shared by several pages. They take signals as
//! props rather than reading context.

pub mod field;
