//! HTTP request handlers.

pub mod area_handler;
pub mod creditor_handler;
pub mod donor_handler;
pub mod election_handler;
pub mod mapping_handler;
pub mod member_handler;
pub mod purpose_handler;
pub mod receipt_handler;
pub mod role_handler;
pub mod template_handler;

pub use area_handler::area_routes;
pub use creditor_handler::creditor_routes;
pub use donor_handler::donor_routes;
pub use election_handler::election_routes;
pub use mapping_handler::mapping_routes;
pub use member_handler::member_routes;
pub use purpose_handler::purpose_routes;
pub use receipt_handler::receipt_routes;
pub use role_handler::{permission_routes, role_routes};
pub use template_handler::template_routes;
