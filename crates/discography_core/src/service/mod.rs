//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Join albums with their singers for extended read views.
//!
//! # Invariants
//! - Services never translate, wrap or retry repository errors.
//! - Services hold no mutable state between calls.

pub mod album_service;
pub mod singer_service;
