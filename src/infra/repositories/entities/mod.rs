//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod area;
pub mod creditor;
pub mod donor;
pub mod election;
pub mod mapping;
pub mod member;
pub mod purpose;
pub mod receipt;
pub mod role;
pub mod template;
