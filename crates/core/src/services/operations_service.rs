use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::ledger::Ledger;
use crate::models::operation::{Operation, OperationType};

/// Manages the operations log: lookup, add/update/delete, simple listings.
///
/// Pure business logic, no I/O. Listings always keep the order of the
/// underlying log; nothing is re-sorted.
pub struct OperationsService;

impl OperationsService {
    pub fn new() -> Self {
        Self
    }

    /// Owned snapshot of the whole log. Mutating it does not touch the ledger.
    pub fn get_all(&self, ledger: &Ledger) -> Vec<Operation> {
        ledger.operations.clone()
    }

    pub fn get<'a>(&self, ledger: &'a Ledger, id: &str) -> Option<&'a Operation> {
        ledger.operations.iter().find(|op| op.id == id)
    }

    /// Append a new operation after validating it.
    pub fn add(&self, ledger: &mut Ledger, operation: Operation) -> Result<(), CoreError> {
        self.validate(&operation)?;
        if self.get(ledger, &operation.id).is_some() {
            return Err(CoreError::ValidationError(format!(
                "Operation with id '{}' already exists",
                operation.id
            )));
        }
        tracing::debug!(id = %operation.id, "adding operation");
        ledger.operations.push(operation);
        Ok(())
    }

    /// Replace the operation with the same id, keeping its position.
    pub fn update(&self, ledger: &mut Ledger, operation: Operation) -> Result<(), CoreError> {
        self.validate(&operation)?;
        let slot = ledger
            .operations
            .iter_mut()
            .find(|op| op.id == operation.id)
            .ok_or_else(|| CoreError::OperationNotFound(operation.id.clone()))?;
        tracing::debug!(id = %operation.id, "updating operation");
        *slot = operation;
        Ok(())
    }

    /// Remove an operation by id. Returns `false` if nothing matched.
    pub fn delete(&self, ledger: &mut Ledger, id: &str) -> bool {
        let before = ledger.operations.len();
        ledger.operations.retain(|op| op.id != id);
        let removed = ledger.operations.len() != before;
        if removed {
            tracing::debug!(id, "deleted operation");
        }
        removed
    }

    /// Operations dated within `[from, to]` (inclusive).
    pub fn in_date_range<'a>(
        &self,
        ledger: &'a Ledger,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<&'a Operation>, CoreError> {
        if from > to {
            return Err(CoreError::ValidationError(format!(
                "'from' date ({from}) must not be after 'to' date ({to})"
            )));
        }
        Ok(ledger
            .operations
            .iter()
            .filter(|op| op.date >= from && op.date <= to)
            .collect())
    }

    pub fn by_type<'a>(
        &self,
        ledger: &'a Ledger,
        operation_type: OperationType,
    ) -> Vec<&'a Operation> {
        ledger
            .operations
            .iter()
            .filter(|op| op.operation_type == operation_type)
            .collect()
    }

    /// Exact, case-sensitive category match.
    pub fn by_category<'a>(&self, ledger: &'a Ledger, category: &str) -> Vec<&'a Operation> {
        ledger
            .operations
            .iter()
            .filter(|op| op.category == category)
            .collect()
    }

    /// Distinct category names in first-seen order.
    pub fn categories<'a>(&self, ledger: &'a Ledger) -> Vec<&'a str> {
        let mut seen = std::collections::HashSet::new();
        ledger
            .operations
            .iter()
            .map(|op| op.category.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Validate an operation before it enters the log.
    ///
    /// Rules:
    /// - Id must not be blank
    /// - Amount must be a finite, non-negative number
    fn validate(&self, operation: &Operation) -> Result<(), CoreError> {
        if operation.id.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Operation id must not be empty".into(),
            ));
        }
        if !operation.amount.is_finite() || operation.amount < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Operation amount must be a non-negative number, got {}",
                operation.amount
            )));
        }
        Ok(())
    }
}

impl Default for OperationsService {
    fn default() -> Self {
        Self::new()
    }
}
