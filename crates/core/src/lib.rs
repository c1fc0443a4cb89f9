pub mod browser;
pub mod errors;
pub mod models;
pub mod sample_data;
pub mod services;

use chrono::NaiveDate;
use models::{
    category::{Category, CategoryType},
    dashboard::{CategoryBreakdown, DashboardSummary, MonthlyTotal},
    debt::{Debt, DebtType},
    goal::Goal,
    ledger::Ledger,
    limit::SpendingLimit,
    operation::{Operation, OperationType},
    query::{OperationFilter, OperationPage, PageRequest},
    settings::Settings,
    user::User,
};
use services::{
    auth_service::AuthService, categories_service::CategoriesService,
    dashboard_service::DashboardService, goals_service::GoalsService,
    limits_service::LimitsService, operations_service::OperationsService,
    query_service::QueryService,
};

use browser::OperationsBrowser;
use errors::CoreError;

/// Main entry point for the Finance Tracker core library.
/// Holds the in-memory ledger and all services needed to operate on it.
///
/// Every service is an ordinary owned value; there is no global state.
#[must_use]
pub struct FinanceTracker {
    ledger: Ledger,
    operations_service: OperationsService,
    query_service: QueryService,
    categories_service: CategoriesService,
    limits_service: LimitsService,
    goals_service: GoalsService,
    dashboard_service: DashboardService,
    auth_service: AuthService,
}

impl std::fmt::Debug for FinanceTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceTracker")
            .field("operations", &self.ledger.operations.len())
            .field("categories", &self.ledger.categories.len())
            .field("settings", &self.ledger.settings)
            .field("logged_in", &self.auth_service.is_logged_in())
            .finish()
    }
}

impl FinanceTracker {
    /// Create a tracker seeded with the built-in sample records.
    pub fn with_sample_data() -> Self {
        Self::build(sample_data::ledger())
    }

    /// Create a tracker with no records and default settings.
    pub fn create_empty() -> Self {
        Self::build(Ledger::default())
    }

    /// Create a tracker over an existing ledger (e.g., for tests or imports).
    ///
    /// Settings are validated and every operation is re-added through the
    /// same checks as `insert_operation`, so negative amounts and duplicate
    /// ids are rejected with `ValidationError`.
    pub fn from_ledger(mut ledger: Ledger) -> Result<Self, CoreError> {
        ledger.settings.validate()?;

        let operations = std::mem::take(&mut ledger.operations);
        let operations_service = OperationsService::new();
        for operation in operations {
            operations_service.add(&mut ledger, operation)?;
        }

        Ok(Self::build(ledger))
    }

    // ── Operations ──────────────────────────────────────────────────

    /// Read-only view of the whole operations log, in source order.
    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.ledger.operations
    }

    /// Owned snapshot of the operations log.
    #[must_use]
    pub fn get_operations(&self) -> Vec<Operation> {
        self.operations_service.get_all(&self.ledger)
    }

    #[must_use]
    pub fn get_operation(&self, id: &str) -> Option<&Operation> {
        self.operations_service.get(&self.ledger, id)
    }

    /// Record a new operation. Returns its id.
    pub fn add_operation(
        &mut self,
        date: NaiveDate,
        operation_type: OperationType,
        category: impl Into<String>,
        comment: impl Into<String>,
        amount: f64,
    ) -> Result<String, CoreError> {
        let operation = Operation::new(date, operation_type, category, comment, amount);
        let id = operation.id.clone();
        self.operations_service.add(&mut self.ledger, operation)?;
        Ok(id)
    }

    /// Insert a fully built operation (caller-supplied id and tags).
    pub fn insert_operation(&mut self, operation: Operation) -> Result<(), CoreError> {
        self.operations_service.add(&mut self.ledger, operation)
    }

    pub fn update_operation(&mut self, operation: Operation) -> Result<(), CoreError> {
        self.operations_service.update(&mut self.ledger, operation)
    }

    /// Returns `false` if no operation had that id.
    pub fn delete_operation(&mut self, id: &str) -> bool {
        self.operations_service.delete(&mut self.ledger, id)
    }

    /// Operations within a date range (inclusive).
    pub fn get_operations_in_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<&Operation>, CoreError> {
        self.operations_service.in_date_range(&self.ledger, from, to)
    }

    #[must_use]
    pub fn get_operations_by_type(&self, operation_type: OperationType) -> Vec<&Operation> {
        self.operations_service.by_type(&self.ledger, operation_type)
    }

    #[must_use]
    pub fn get_operations_by_category(&self, category: &str) -> Vec<&Operation> {
        self.operations_service.by_category(&self.ledger, category)
    }

    #[must_use]
    pub fn operation_count(&self) -> usize {
        self.ledger.operations.len()
    }

    // ── Query & Pagination ──────────────────────────────────────────

    /// Filter and paginate the operations log.
    pub fn query_operations(
        &self,
        filter: &OperationFilter,
        request: PageRequest,
    ) -> OperationPage<'_> {
        self.query_service.query(&self.ledger.operations, filter, request)
    }

    /// A fresh browser sized by the configured page size.
    pub fn browser(&self) -> OperationsBrowser {
        OperationsBrowser::new(self.ledger.settings.page_size)
    }

    /// The page the browser currently points at.
    pub fn browse(&self, browser: &OperationsBrowser) -> OperationPage<'_> {
        browser.current(&self.ledger.operations)
    }

    /// Advance the browser one page if the current filter leaves room.
    pub fn next_page(&self, browser: &mut OperationsBrowser) -> bool {
        browser.next_page_in(&self.ledger.operations)
    }

    // ── Categories ──────────────────────────────────────────────────

    #[must_use]
    pub fn get_categories(&self) -> Vec<Category> {
        self.categories_service.get_all(&self.ledger)
    }

    #[must_use]
    pub fn get_categories_by_type(&self, category_type: CategoryType) -> Vec<&Category> {
        self.categories_service.by_type(&self.ledger, category_type)
    }

    #[must_use]
    pub fn get_category(&self, id: &str) -> Option<&Category> {
        self.categories_service.get(&self.ledger, id)
    }

    #[must_use]
    pub fn find_category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories_service.by_name(&self.ledger, name)
    }

    pub fn add_category(&mut self, category: Category) -> Result<(), CoreError> {
        self.categories_service.add(&mut self.ledger, category)
    }

    pub fn update_category(&mut self, category: Category) -> Result<(), CoreError> {
        self.categories_service.update(&mut self.ledger, category)
    }

    pub fn delete_category(&mut self, id: &str) -> bool {
        self.categories_service.delete(&mut self.ledger, id)
    }

    /// Entries for the category filter dropdown, sentinel first.
    #[must_use]
    pub fn category_filter_labels(&self) -> Vec<String> {
        self.categories_service.filter_labels(&self.ledger)
    }

    /// Distinct category names that actually occur in the operations log.
    #[must_use]
    pub fn used_categories(&self) -> Vec<&str> {
        self.operations_service.categories(&self.ledger)
    }

    // ── Limits ──────────────────────────────────────────────────────

    #[must_use]
    pub fn get_limits(&self) -> Vec<SpendingLimit> {
        self.limits_service.get_all(&self.ledger)
    }

    #[must_use]
    pub fn get_limit_for_category(&self, category: &str) -> Option<&SpendingLimit> {
        self.limits_service.for_category(&self.ledger, category)
    }

    #[must_use]
    pub fn total_limit(&self) -> f64 {
        self.limits_service.total_limit(&self.ledger)
    }

    #[must_use]
    pub fn total_spent(&self) -> f64 {
        self.limits_service.total_spent(&self.ledger)
    }

    #[must_use]
    pub fn total_remaining(&self) -> f64 {
        self.limits_service.total_remaining(&self.ledger)
    }

    #[must_use]
    pub fn exceeded_limits(&self) -> Vec<&SpendingLimit> {
        self.limits_service.exceeded(&self.ledger)
    }

    #[must_use]
    pub fn near_limits(&self) -> Vec<&SpendingLimit> {
        self.limits_service.near_limit(&self.ledger)
    }

    // ── Goals & Debts ───────────────────────────────────────────────

    #[must_use]
    pub fn get_goals(&self) -> Vec<Goal> {
        self.goals_service.get_all_goals(&self.ledger)
    }

    #[must_use]
    pub fn get_goal(&self, id: &str) -> Option<&Goal> {
        self.goals_service.get_goal(&self.ledger, id)
    }

    #[must_use]
    pub fn get_debts(&self) -> Vec<Debt> {
        self.goals_service.get_all_debts(&self.ledger)
    }

    #[must_use]
    pub fn get_active_debts(&self) -> Vec<&Debt> {
        self.goals_service.active_debts(&self.ledger)
    }

    #[must_use]
    pub fn active_debt_total(&self, debt_type: DebtType) -> f64 {
        self.goals_service.active_debt_total(&self.ledger, debt_type)
    }

    #[must_use]
    pub fn get_overdue_debts(&self, today: NaiveDate) -> Vec<&Debt> {
        self.goals_service.overdue_debts(&self.ledger, today)
    }

    #[must_use]
    pub fn total_goal_target(&self) -> f64 {
        self.goals_service.total_target(&self.ledger)
    }

    #[must_use]
    pub fn total_goal_saved(&self) -> f64 {
        self.goals_service.total_saved(&self.ledger)
    }

    // ── Dashboard ───────────────────────────────────────────────────

    #[must_use]
    pub fn get_dashboard_summary(&self) -> DashboardSummary {
        self.dashboard_service.summary(&self.ledger.operations)
    }

    #[must_use]
    pub fn get_expense_breakdown(&self) -> Vec<CategoryBreakdown> {
        self.dashboard_service.expense_breakdown(&self.ledger.operations)
    }

    #[must_use]
    pub fn get_top_categories(&self, n: usize) -> Vec<CategoryBreakdown> {
        self.dashboard_service.top_categories(&self.ledger.operations, n)
    }

    /// Income and expenses per month for the dashboard chart.
    #[must_use]
    pub fn get_monthly_totals(&self) -> Vec<MonthlyTotal> {
        self.dashboard_service.monthly_totals(&self.ledger.operations)
    }

    // ── Session ─────────────────────────────────────────────────────

    pub fn login(&mut self, name: &str, email: &str) -> Result<&User, CoreError> {
        self.auth_service.login(name, email)
    }

    pub fn logout(&mut self) -> bool {
        self.auth_service.logout()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.auth_service.is_logged_in()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.auth_service.current_user()
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn get_settings(&self) -> &Settings {
        &self.ledger.settings
    }

    /// Replace the settings after validating them.
    pub fn set_settings(&mut self, settings: Settings) -> Result<(), CoreError> {
        settings.validate()?;
        tracing::debug!(page_size = settings.page_size.get(), "settings updated");
        self.ledger.settings = settings;
        Ok(())
    }

    /// Format a signed amount with the configured currency symbol.
    #[must_use]
    pub fn format_amount(&self, operation: &Operation) -> String {
        self.ledger.settings.format_signed_amount(operation.signed_amount())
    }

    /// Format a date with the configured date format.
    #[must_use]
    pub fn format_date(&self, date: NaiveDate) -> String {
        self.ledger.settings.format_date(date)
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Export all operations as a JSON string.
    pub fn export_operations_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.ledger.operations).map_err(|e| {
            CoreError::Serialization(format!("Failed to serialize operations to JSON: {e}"))
        })
    }

    /// Import operations from a JSON string. Every operation is validated
    /// first; if any fails, none are added (all-or-nothing).
    /// Returns the number of operations imported.
    pub fn import_operations_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let operations: Vec<Operation> = serde_json::from_str(json)?;
        let count = operations.len();

        let mut staged = self.ledger.clone();
        for operation in operations {
            self.operations_service.add(&mut staged, operation)?;
        }

        self.ledger = staged;
        tracing::info!(count, "imported operations");
        Ok(count)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(ledger: Ledger) -> Self {
        Self {
            ledger,
            operations_service: OperationsService::new(),
            query_service: QueryService::new(),
            categories_service: CategoriesService::new(),
            limits_service: LimitsService::new(),
            goals_service: GoalsService::new(),
            dashboard_service: DashboardService::new(),
            auth_service: AuthService::new(),
        }
    }
}
