use crate::models::ledger::Ledger;
use crate::models::limit::{LimitStatus, SpendingLimit};

/// Aggregates over the monthly spending limits.
pub struct LimitsService;

impl LimitsService {
    pub fn new() -> Self {
        Self
    }

    pub fn get_all(&self, ledger: &Ledger) -> Vec<SpendingLimit> {
        ledger.limits.clone()
    }

    pub fn for_category<'a>(
        &self,
        ledger: &'a Ledger,
        category: &str,
    ) -> Option<&'a SpendingLimit> {
        ledger.limits.iter().find(|l| l.category == category)
    }

    pub fn total_limit(&self, ledger: &Ledger) -> f64 {
        ledger.limits.iter().map(|l| l.limit_amount).sum()
    }

    pub fn total_spent(&self, ledger: &Ledger) -> f64 {
        ledger.limits.iter().map(|l| l.spent).sum()
    }

    pub fn total_remaining(&self, ledger: &Ledger) -> f64 {
        self.total_limit(ledger) - self.total_spent(ledger)
    }

    pub fn with_status<'a>(
        &self,
        ledger: &'a Ledger,
        status: LimitStatus,
    ) -> Vec<&'a SpendingLimit> {
        ledger.limits.iter().filter(|l| l.status() == status).collect()
    }

    pub fn exceeded<'a>(&self, ledger: &'a Ledger) -> Vec<&'a SpendingLimit> {
        self.with_status(ledger, LimitStatus::Exceeded)
    }

    pub fn near_limit<'a>(&self, ledger: &'a Ledger) -> Vec<&'a SpendingLimit> {
        self.with_status(ledger, LimitStatus::NearLimit)
    }
}

impl Default for LimitsService {
    fn default() -> Self {
        Self::new()
    }
}
