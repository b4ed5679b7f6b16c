//! Domain model for blog authors and posts.
//!
//! # Responsibility
//! - Define the persisted record shapes and their insert payloads.
//! - Own the field validation rules applied on construction and assignment.
//!
//! # Invariants
//! - Every record value reachable through the public API has passed its
//!   field validators; fields are private and only change through setters.
//! - Author and Post are independent; neither references the other.

pub mod author;
pub mod post;
pub mod validation;
