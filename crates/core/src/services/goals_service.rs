use chrono::NaiveDate;

use crate::models::debt::{Debt, DebtType};
use crate::models::goal::{Goal, GoalType};
use crate::models::ledger::Ledger;

/// Read-side helpers for the goals & debts screen.
pub struct GoalsService;

impl GoalsService {
    pub fn new() -> Self {
        Self
    }

    pub fn get_all_goals(&self, ledger: &Ledger) -> Vec<Goal> {
        ledger.goals.clone()
    }

    pub fn get_all_debts(&self, ledger: &Ledger) -> Vec<Debt> {
        ledger.debts.clone()
    }

    pub fn get_goal<'a>(&self, ledger: &'a Ledger, id: &str) -> Option<&'a Goal> {
        ledger.goals.iter().find(|g| g.id == id)
    }

    pub fn goals_of_type<'a>(&self, ledger: &'a Ledger, goal_type: GoalType) -> Vec<&'a Goal> {
        ledger.goals.iter().filter(|g| g.goal_type == goal_type).collect()
    }

    pub fn total_target(&self, ledger: &Ledger) -> f64 {
        ledger.goals.iter().map(|g| g.target_amount).sum()
    }

    pub fn total_saved(&self, ledger: &Ledger) -> f64 {
        ledger.goals.iter().map(|g| g.current_amount).sum()
    }

    pub fn active_debts<'a>(&self, ledger: &'a Ledger) -> Vec<&'a Debt> {
        ledger.debts.iter().filter(|d| d.is_active()).collect()
    }

    /// Sum of active debts in one direction.
    pub fn active_debt_total(&self, ledger: &Ledger, debt_type: DebtType) -> f64 {
        ledger
            .debts
            .iter()
            .filter(|d| d.is_active() && d.debt_type == debt_type)
            .map(|d| d.amount)
            .sum()
    }

    pub fn overdue_debts<'a>(&self, ledger: &'a Ledger, today: NaiveDate) -> Vec<&'a Debt> {
        ledger.debts.iter().filter(|d| d.is_overdue(today)).collect()
    }
}

impl Default for GoalsService {
    fn default() -> Self {
        Self::new()
    }
}
