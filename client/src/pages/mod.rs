//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Every page except `login` sits behind the route guard.

pub mod animal_form;
pub mod animals;
pub mod dashboard;
pub mod login;
pub mod tutor_form;
pub mod tutors;
