use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;

use crate::models::dashboard::{CategoryBreakdown, DashboardSummary, MonthlyTotal};
use crate::models::operation::{Operation, OperationType};

/// Computes the dashboard figures from an operations list.
pub struct DashboardService;

impl DashboardService {
    pub fn new() -> Self {
        Self
    }

    /// Income, expenses and balance over `operations`.
    pub fn summary(&self, operations: &[Operation]) -> DashboardSummary {
        let mut income = 0.0;
        let mut expenses = 0.0;
        for op in operations {
            match op.operation_type {
                OperationType::Income => income += op.amount,
                OperationType::Expense => expenses += op.amount,
            }
        }

        let balance = income - expenses;
        DashboardSummary {
            income,
            expenses,
            balance,
            savings: balance.max(0.0),
            operations_count: operations.len(),
        }
    }

    /// Income and expenses per calendar month, oldest month first.
    /// Months without operations are left out.
    pub fn monthly_totals(&self, operations: &[Operation]) -> Vec<MonthlyTotal> {
        let mut months: BTreeMap<(i32, u32), (f64, f64)> = BTreeMap::new();
        for op in operations {
            let (income, expenses) = months
                .entry((op.date.year(), op.date.month()))
                .or_insert((0.0, 0.0));
            match op.operation_type {
                OperationType::Income => *income += op.amount,
                OperationType::Expense => *expenses += op.amount,
            }
        }

        months
            .into_iter()
            .map(|((year, month), (income, expenses))| MonthlyTotal {
                year,
                month,
                income,
                expenses,
            })
            .collect()
    }

    /// Expenses grouped by category, largest first.
    ///
    /// Ties keep first-seen category order. Empty when there are no expenses.
    pub fn expense_breakdown(&self, operations: &[Operation]) -> Vec<CategoryBreakdown> {
        let mut order: Vec<&str> = Vec::new();
        let mut totals: HashMap<&str, f64> = HashMap::new();

        for op in operations
            .iter()
            .filter(|op| op.operation_type == OperationType::Expense)
        {
            let entry = totals.entry(op.category.as_str()).or_insert_with(|| {
                order.push(op.category.as_str());
                0.0
            });
            *entry += op.amount;
        }

        let total: f64 = totals.values().sum();
        let mut breakdown: Vec<CategoryBreakdown> = order
            .into_iter()
            .map(|category| {
                let amount = totals.get(category).copied().unwrap_or(0.0);
                CategoryBreakdown {
                    category: category.to_string(),
                    amount,
                    percent: if total > 0.0 { amount / total * 100.0 } else { 0.0 },
                }
            })
            .collect();

        // Stable sort keeps first-seen order for equal amounts
        breakdown.sort_by(|a, b| {
            b.amount
                .partial_cmp(&a.amount)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        breakdown
    }

    /// The `n` biggest expense categories.
    pub fn top_categories(&self, operations: &[Operation], n: usize) -> Vec<CategoryBreakdown> {
        let mut breakdown = self.expense_breakdown(operations);
        breakdown.truncate(n);
        breakdown
    }
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new()
    }
}
