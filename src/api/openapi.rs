//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{
    area_handler, creditor_handler, donor_handler, election_handler, mapping_handler,
    member_handler, purpose_handler, receipt_handler, role_handler, template_handler,
};
use crate::domain::{
    Area, Creditor, Donor, Election, Mapping, Member, NewArea, NewCreditor, NewDonor, NewElection,
    NewMapping, NewMember, NewPurpose, NewReceipt, NewRole, NewTemplate, Permission, Profile,
    Purpose, Receipt, Reference, Role, Template,
};

/// OpenAPI documentation for the club API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Club API",
        version = "0.1.0",
        description = "Club management backend: members, donors, roles, elections, receipts and booking mappings",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        // Area endpoints
        area_handler::list_areas,
        area_handler::get_area,
        area_handler::create_area,
        area_handler::update_area,
        area_handler::delete_area,
        // Purpose endpoints
        purpose_handler::list_purposes,
        purpose_handler::get_purpose,
        purpose_handler::create_purpose,
        purpose_handler::update_purpose,
        purpose_handler::delete_purpose,
        // Creditor endpoints
        creditor_handler::list_creditors,
        creditor_handler::get_creditor,
        creditor_handler::create_creditor,
        creditor_handler::update_creditor,
        creditor_handler::delete_creditor,
        // Donor endpoints
        donor_handler::list_donors,
        donor_handler::get_donor,
        donor_handler::create_donor,
        donor_handler::update_donor,
        donor_handler::delete_donor,
        // Member endpoints
        member_handler::list_members,
        member_handler::get_member,
        member_handler::create_member,
        member_handler::update_member,
        member_handler::delete_member,
        member_handler::get_profile,
        member_handler::update_profile,
        // Role endpoints
        role_handler::list_roles,
        role_handler::get_role,
        role_handler::create_role,
        role_handler::update_role,
        role_handler::delete_role,
        role_handler::list_role_permissions,
        role_handler::attach_permission,
        role_handler::detach_permission,
        role_handler::list_permissions,
        role_handler::elect,
        role_handler::finish_term,
        role_handler::current_election,
        role_handler::election_history,
        // Election endpoints
        election_handler::list_elections,
        election_handler::get_election,
        election_handler::create_election,
        election_handler::update_election,
        election_handler::delete_election,
        // Receipt endpoints
        receipt_handler::list_receipts,
        receipt_handler::get_receipt,
        receipt_handler::create_receipt,
        receipt_handler::update_receipt,
        receipt_handler::delete_receipt,
        // Template endpoints
        template_handler::list_templates,
        template_handler::get_template,
        template_handler::create_template,
        template_handler::update_template,
        template_handler::delete_template,
        // Mapping endpoints
        mapping_handler::list_mappings,
        mapping_handler::get_mapping,
        mapping_handler::create_mapping,
        mapping_handler::update_mapping,
        mapping_handler::delete_mapping,
    ),
    components(
        schemas(
            Area,
            NewArea,
            Purpose,
            NewPurpose,
            Creditor,
            NewCreditor,
            Donor,
            NewDonor,
            Member,
            NewMember,
            Profile,
            Role,
            NewRole,
            Permission,
            Election,
            NewElection,
            Receipt,
            NewReceipt,
            Template,
            NewTemplate,
            Mapping,
            NewMapping,
            Reference,
            role_handler::ElectRequest,
        )
    ),
    tags(
        (name = "Areas", description = "Organizational areas of the club"),
        (name = "Purposes", description = "Booking purposes"),
        (name = "Creditors", description = "Creditors the club pays"),
        (name = "Donors", description = "Donors the club issues receipts to"),
        (name = "Members", description = "Members and their self-service profiles"),
        (name = "Roles", description = "Roles and their permissions"),
        (name = "Elections", description = "Role holders over time"),
        (name = "Receipts", description = "Donation receipts"),
        (name = "Templates", description = "Document templates"),
        (name = "Mappings", description = "Booking mappings")
    )
)]
pub struct ApiDoc;
