//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion: repositories and the identity provider are
//! injected as `Arc<dyn Trait>`.

mod area_service;
pub mod container;
mod creditor_service;
mod donor_service;
mod election_service;
mod mapping_service;
mod member_service;
mod purpose_service;
mod receipt_service;
mod role_service;
mod template_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use area_service::{AreaManager, AreaService};
pub use creditor_service::{CreditorManager, CreditorService};
pub use donor_service::{DonorManager, DonorService};
pub use election_service::{ElectionManager, ElectionService};
pub use mapping_service::{MappingManager, MappingService, MappingTargets};
pub use member_service::{MemberManager, MemberService};
pub use purpose_service::{PurposeManager, PurposeService};
pub use receipt_service::{ReceiptManager, ReceiptService};
pub use role_service::{RoleManager, RoleService};
pub use template_service::{TemplateManager, TemplateService};

#[cfg(any(test, feature = "test-utils"))]
pub use area_service::MockAreaService;
#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
#[cfg(any(test, feature = "test-utils"))]
pub use creditor_service::MockCreditorService;
#[cfg(any(test, feature = "test-utils"))]
pub use donor_service::MockDonorService;
#[cfg(any(test, feature = "test-utils"))]
pub use election_service::MockElectionService;
#[cfg(any(test, feature = "test-utils"))]
pub use mapping_service::MockMappingService;
#[cfg(any(test, feature = "test-utils"))]
pub use member_service::MockMemberService;
#[cfg(any(test, feature = "test-utils"))]
pub use purpose_service::MockPurposeService;
#[cfg(any(test, feature = "test-utils"))]
pub use receipt_service::MockReceiptService;
#[cfg(any(test, feature = "test-utils"))]
pub use role_service::MockRoleService;
#[cfg(any(test, feature = "test-utils"))]
pub use template_service::MockTemplateService;
