//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.
//!
//! Every entity comes with a `New*` input record (no id) that is used for
//! both creation and full replacement.

pub mod area;
pub mod creditor;
pub mod donor;
pub mod election;
pub mod mapping;
pub mod member;
pub mod purpose;
pub mod receipt;
pub mod reference;
pub mod role;
pub mod template;

pub use area::{Area, NewArea};
pub use creditor::{Creditor, NewCreditor};
pub use donor::{Donor, NewDonor};
pub use election::{Election, NewElection};
pub use mapping::{Mapping, NewMapping};
pub use member::{Member, NewMember, Profile, UserAccount};
pub use purpose::{NewPurpose, Purpose};
pub use receipt::{NewReceipt, Receipt};
pub use reference::{Reference, ReferenceColumns};
pub use role::{NewRole, Permission, Role};
pub use template::{NewTemplate, Template};
