use serde::{Deserialize, Serialize};

use super::category::Category;
use super::debt::Debt;
use super::goal::Goal;
use super::limit::SpendingLimit;
use super::operation::Operation;
use super::settings::Settings;

/// The main in-memory data container every service works against.
///
/// Contains: the operations log (in display order), categories, spending
/// limits, goals, debts and user settings. Nothing here is persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    /// All income/expense operations, newest first as loaded
    pub operations: Vec<Operation>,

    pub categories: Vec<Category>,

    pub limits: Vec<SpendingLimit>,

    pub goals: Vec<Goal>,

    #[serde(default)]
    pub debts: Vec<Debt>,

    pub settings: Settings,
}
