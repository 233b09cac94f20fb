//! Service Container - Centralized service access.
//!
//! Builds every service from one database connection and one identity
//! provider client, and hands them out as trait objects.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{
    AreaManager, AreaService, CreditorManager, CreditorService, DonorManager, DonorService,
    ElectionManager, ElectionService, MappingManager, MappingService, MappingTargets,
    MemberManager, MemberService, PurposeManager, PurposeService, ReceiptManager, ReceiptService,
    RoleManager, RoleService, TemplateManager, TemplateService,
};
use crate::infra::{
    AreaStore, CreditorStore, DonorStore, ElectionStore, IdentityProvider, MappingStore,
    MemberStore, PurposeStore, ReceiptStore, RoleStore, TemplateStore,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn areas(&self) -> Arc<dyn AreaService>;

    fn purposes(&self) -> Arc<dyn PurposeService>;

    fn creditors(&self) -> Arc<dyn CreditorService>;

    fn donors(&self) -> Arc<dyn DonorService>;

    fn members(&self) -> Arc<dyn MemberService>;

    fn roles(&self) -> Arc<dyn RoleService>;

    fn elections(&self) -> Arc<dyn ElectionService>;

    fn receipts(&self) -> Arc<dyn ReceiptService>;

    fn templates(&self) -> Arc<dyn TemplateService>;

    fn mappings(&self) -> Arc<dyn MappingService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    areas: Arc<dyn AreaService>,
    purposes: Arc<dyn PurposeService>,
    creditors: Arc<dyn CreditorService>,
    donors: Arc<dyn DonorService>,
    members: Arc<dyn MemberService>,
    roles: Arc<dyn RoleService>,
    elections: Arc<dyn ElectionService>,
    receipts: Arc<dyn ReceiptService>,
    templates: Arc<dyn TemplateService>,
    mappings: Arc<dyn MappingService>,
}

impl Services {
    /// Create service container from database connection and identity provider
    pub fn from_connection(
        db: Arc<DatabaseConnection>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        let area_store = Arc::new(AreaStore::new(db.clone()));
        let purpose_store = Arc::new(PurposeStore::new(db.clone()));
        let creditor_store = Arc::new(CreditorStore::new(db.clone()));
        let donor_store = Arc::new(DonorStore::new(db.clone()));
        let member_store = Arc::new(MemberStore::new(db.clone()));
        let role_store = Arc::new(RoleStore::new(db.clone()));

        let targets = MappingTargets {
            purposes: purpose_store.clone(),
            areas: area_store.clone(),
            creditors: creditor_store.clone(),
            donors: donor_store.clone(),
            members: member_store.clone(),
        };

        Self {
            areas: Arc::new(AreaManager::new(area_store)),
            purposes: Arc::new(PurposeManager::new(purpose_store)),
            creditors: Arc::new(CreditorManager::new(creditor_store)),
            donors: Arc::new(DonorManager::new(donor_store.clone())),
            members: Arc::new(MemberManager::new(member_store.clone(), identity.clone())),
            roles: Arc::new(RoleManager::new(role_store.clone(), identity)),
            elections: Arc::new(ElectionManager::new(
                Arc::new(ElectionStore::new(db.clone())),
                role_store,
                member_store,
            )),
            receipts: Arc::new(ReceiptManager::new(
                Arc::new(ReceiptStore::new(db.clone())),
                donor_store,
            )),
            templates: Arc::new(TemplateManager::new(Arc::new(TemplateStore::new(db.clone())))),
            mappings: Arc::new(MappingManager::new(Arc::new(MappingStore::new(db)), targets)),
        }
    }
}

impl ServiceContainer for Services {
    fn areas(&self) -> Arc<dyn AreaService> {
        self.areas.clone()
    }

    fn purposes(&self) -> Arc<dyn PurposeService> {
        self.purposes.clone()
    }

    fn creditors(&self) -> Arc<dyn CreditorService> {
        self.creditors.clone()
    }

    fn donors(&self) -> Arc<dyn DonorService> {
        self.donors.clone()
    }

    fn members(&self) -> Arc<dyn MemberService> {
        self.members.clone()
    }

    fn roles(&self) -> Arc<dyn RoleService> {
        self.roles.clone()
    }

    fn elections(&self) -> Arc<dyn ElectionService> {
        self.elections.clone()
    }

    fn receipts(&self) -> Arc<dyn ReceiptService> {
        self.receipts.clone()
    }

    fn templates(&self) -> Arc<dyn TemplateService> {
        self.templates.clone()
    }

    fn mappings(&self) -> Arc<dyn MappingService> {
        self.mappings.clone()
    }
}
