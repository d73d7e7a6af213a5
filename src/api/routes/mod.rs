//! API Routes
//!
//! Route handlers organized by functionality.

pub mod figures;
pub mod filters;
pub mod health;
pub mod page;
