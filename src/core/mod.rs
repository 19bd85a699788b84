//! Core view-model types.

mod detail_view;
mod scope;

pub use detail_view::{DepartmentDetailView, EmployeeDetailView, EntityDetailView};
pub use scope::ViewScope;
