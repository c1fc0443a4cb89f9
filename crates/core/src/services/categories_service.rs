use crate::errors::CoreError;
use crate::models::category::{Category, CategoryType};
use crate::models::ledger::Ledger;
use crate::models::query::ALL_CATEGORIES_LABEL;

/// Manages the category catalogue shown on the categories screen.
pub struct CategoriesService;

impl CategoriesService {
    pub fn new() -> Self {
        Self
    }

    pub fn get_all(&self, ledger: &Ledger) -> Vec<Category> {
        ledger.categories.clone()
    }

    pub fn by_type<'a>(
        &self,
        ledger: &'a Ledger,
        category_type: CategoryType,
    ) -> Vec<&'a Category> {
        ledger
            .categories
            .iter()
            .filter(|c| c.category_type == category_type)
            .collect()
    }

    pub fn get<'a>(&self, ledger: &'a Ledger, id: &str) -> Option<&'a Category> {
        ledger.categories.iter().find(|c| c.id == id)
    }

    /// Lookup by display name, ignoring case.
    pub fn by_name<'a>(&self, ledger: &'a Ledger, name: &str) -> Option<&'a Category> {
        let needle = name.to_lowercase();
        ledger
            .categories
            .iter()
            .find(|c| c.name.to_lowercase() == needle)
    }

    pub fn add(&self, ledger: &mut Ledger, category: Category) -> Result<(), CoreError> {
        self.validate(&category)?;
        if self.get(ledger, &category.id).is_some() {
            return Err(CoreError::ValidationError(format!(
                "Category with id '{}' already exists",
                category.id
            )));
        }
        tracing::debug!(id = %category.id, name = %category.name, "adding category");
        ledger.categories.push(category);
        Ok(())
    }

    /// Replace the category with the same id. The new name must not be blank.
    pub fn update(&self, ledger: &mut Ledger, category: Category) -> Result<(), CoreError> {
        self.validate(&category)?;
        let slot = ledger
            .categories
            .iter_mut()
            .find(|c| c.id == category.id)
            .ok_or_else(|| CoreError::CategoryNotFound(category.id.clone()))?;
        *slot = category;
        Ok(())
    }

    pub fn delete(&self, ledger: &mut Ledger, id: &str) -> bool {
        let before = ledger.categories.len();
        ledger.categories.retain(|c| c.id != id);
        ledger.categories.len() != before
    }

    /// Entries for the category dropdown: the "all" sentinel, then every
    /// category name in catalogue order.
    pub fn filter_labels(&self, ledger: &Ledger) -> Vec<String> {
        std::iter::once(ALL_CATEGORIES_LABEL.to_string())
            .chain(ledger.categories.iter().map(|c| c.name.clone()))
            .collect()
    }

    fn validate(&self, category: &Category) -> Result<(), CoreError> {
        if category.name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Category name must not be empty".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CategoriesService {
    fn default() -> Self {
        Self::new()
    }
}
