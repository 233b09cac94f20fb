//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.
//! Every repository trait has a SeaORM-backed `*Store` implementation and,
//! with the `test-utils` feature, a mockall `Mock*Repository`.

mod area_repository;
mod creditor_repository;
mod donor_repository;
mod election_repository;
pub(crate) mod entities;
mod mapping_repository;
mod member_repository;
mod purpose_repository;
mod receipt_repository;
mod role_repository;
mod template_repository;

pub use area_repository::{AreaRepository, AreaStore};
pub use creditor_repository::{CreditorRepository, CreditorStore};
pub use donor_repository::{DonorRepository, DonorStore};
pub use election_repository::{ElectionRepository, ElectionStore};
pub use mapping_repository::{MappingRepository, MappingStore};
pub use member_repository::{MemberRepository, MemberStore};
pub use purpose_repository::{PurposeRepository, PurposeStore};
pub use receipt_repository::{ReceiptRepository, ReceiptStore};
pub use role_repository::{RoleRepository, RoleStore};
pub use template_repository::{TemplateRepository, TemplateStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use area_repository::MockAreaRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use creditor_repository::MockCreditorRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use donor_repository::MockDonorRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use election_repository::MockElectionRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use mapping_repository::MockMappingRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use member_repository::MockMemberRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use purpose_repository::MockPurposeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use receipt_repository::MockReceiptRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use role_repository::MockRoleRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use template_repository::MockTemplateRepository;
