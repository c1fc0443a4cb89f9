pub mod category;
pub mod dashboard;
pub mod debt;
pub mod goal;
pub mod ledger;
pub mod limit;
pub mod operation;
pub mod query;
pub mod settings;
pub mod user;
