pub mod auth_service;
pub mod categories_service;
pub mod dashboard_service;
pub mod goals_service;
pub mod limits_service;
pub mod operations_service;
pub mod query_service;
