// ═══════════════════════════════════════════════════════════════════
// Query Tests — filtering, pagination and navigation of the
// operations table (QueryService, OperationFilter, OperationsBrowser)
// ═══════════════════════════════════════════════════════════════════

use std::num::NonZeroUsize;

use chrono::NaiveDate;

use finance_tracker_core::browser::OperationsBrowser;
use finance_tracker_core::models::operation::{Operation, OperationType};
use finance_tracker_core::models::query::{
    CategoryFilter, OperationFilter, PageRequest, TypeFilter, ALL_CATEGORIES_LABEL,
};
use finance_tracker_core::services::query_service::QueryService;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn op(id: &str, t: OperationType, category: &str, comment: &str) -> Operation {
    Operation::with_id(id, d(2026, 1, 1), t, category, comment, 100.0)
}

/// Twelve operations: 7 expenses, 5 incomes.
fn twelve() -> Vec<Operation> {
    use OperationType::{Expense, Income};
    vec![
        op("1", Expense, "Продукты", "Супермаркет"),
        op("2", Income, "Зарплата", "Ежемесячная зарплата"),
        op("3", Expense, "Транспорт", "Заправка"),
        op("4", Expense, "Развлечения", "Кино"),
        op("5", Income, "Фриланс", "Проект"),
        op("6", Expense, "Здоровье", "Стоматолог"),
        op("7", Expense, "Одежда", "Куртка"),
        op("8", Income, "Зарплата", "Премия"),
        op("9", Expense, "Продукты", "Рынок"),
        op("10", Income, "Подарки", "Транспорт в подарок"),
        op("11", Expense, "Развлечения", "Концерт"),
        op("12", Income, "Фриланс", "Консультация"),
    ]
}

fn ids(items: &[&Operation]) -> Vec<String> {
    items.iter().map(|o| o.id.clone()).collect()
}

// ═══════════════════════════════════════════════════════════════════
//  Filter predicates
// ═══════════════════════════════════════════════════════════════════

mod filter {
    use super::*;

    #[test]
    fn empty_filter_matches_everything() {
        let ops = twelve();
        let f = OperationFilter::new();
        assert!(f.is_empty());
        assert!(ops.iter().all(|o| f.matches(o)));
    }

    #[test]
    fn search_matches_comment_case_insensitive() {
        let o = op("x", OperationType::Expense, "Продукты", "Супермаркет Пятёрочка");
        assert!(OperationFilter::new().with_search("пятёрочка").matches(&o));
        assert!(OperationFilter::new().with_search("СУПЕР").matches(&o));
    }

    #[test]
    fn search_matches_category_case_insensitive() {
        let o = op("x", OperationType::Expense, "Продукты", "Рынок");
        assert!(OperationFilter::new().with_search("продукты").matches(&o));
        assert!(OperationFilter::new().with_search("ПРОДУКТЫ").matches(&o));
        assert!(OperationFilter::new().with_search("дукт").matches(&o));
    }

    #[test]
    fn search_miss() {
        let o = op("x", OperationType::Expense, "Продукты", "Рынок");
        assert!(!OperationFilter::new().with_search("кино").matches(&o));
    }

    #[test]
    fn type_filter_variants() {
        assert!(TypeFilter::All.matches(OperationType::Income));
        assert!(TypeFilter::All.matches(OperationType::Expense));
        assert!(TypeFilter::IncomeOnly.matches(OperationType::Income));
        assert!(!TypeFilter::IncomeOnly.matches(OperationType::Expense));
        assert!(TypeFilter::ExpenseOnly.matches(OperationType::Expense));
        assert!(!TypeFilter::ExpenseOnly.matches(OperationType::Income));
    }

    #[test]
    fn type_filter_labels() {
        let labels: Vec<&str> = TypeFilter::options().iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Все операции", "Доходы", "Расходы"]);
    }

    #[test]
    fn category_filter_is_exact_and_case_sensitive() {
        let f = CategoryFilter::Exact("Транспорт".into());
        assert!(f.matches("Транспорт"));
        assert!(!f.matches("транспорт"));
        assert!(!f.matches("Транспорт и авто"));
        assert!(CategoryFilter::All.matches("anything"));
    }

    #[test]
    fn category_filter_from_label() {
        assert_eq!(CategoryFilter::from_label(ALL_CATEGORIES_LABEL), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_label("Одежда"),
            CategoryFilter::Exact("Одежда".into())
        );
        assert_eq!(CategoryFilter::All.label(), "Все категории");
        assert_eq!(CategoryFilter::Exact("Одежда".into()).label(), "Одежда");
    }

    #[test]
    fn all_predicates_must_hold() {
        let o = op("x", OperationType::Income, "Фриланс", "Проект");
        let f = OperationFilter::new()
            .with_search("проект")
            .with_type(TypeFilter::IncomeOnly)
            .with_category(CategoryFilter::Exact("Фриланс".into()));
        assert!(f.matches(&o));
        assert!(!f.clone().with_type(TypeFilter::ExpenseOnly).matches(&o));
        assert!(!f
            .clone()
            .with_category(CategoryFilter::Exact("Зарплата".into()))
            .matches(&o));
        assert!(!f.with_search("кино").matches(&o));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  QueryService
// ═══════════════════════════════════════════════════════════════════

mod query {
    use super::*;

    #[test]
    fn no_filters_first_page_of_ten() {
        let ops = twelve();
        let page =
            QueryService::new().query(&ops, &OperationFilter::new(), PageRequest::new(1, size(10)));
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.total_matches, 12);
        assert_eq!(ids(&page.items), (1..=10).map(|i| i.to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn no_filters_second_page_has_remainder() {
        let ops = twelve();
        let page =
            QueryService::new().query(&ops, &OperationFilter::new(), PageRequest::new(2, size(10)));
        assert_eq!(ids(&page.items), vec!["11", "12"]);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.label(), "2 / 2");
    }

    #[test]
    fn income_only_fits_one_page() {
        let ops = twelve();
        let f = OperationFilter::new().with_type(TypeFilter::IncomeOnly);
        let svc = QueryService::new();

        let p1 = svc.query(&ops, &f, PageRequest::new(1, size(10)));
        assert_eq!(p1.total_matches, 5);
        assert_eq!(p1.total_pages, 1);
        assert_eq!(ids(&p1.items), vec!["2", "5", "8", "10", "12"]);

        let p2 = svc.query(&ops, &f, PageRequest::new(2, size(10)));
        assert!(p2.items.is_empty());
        assert_eq!(p2.total_pages, 1);
    }

    #[test]
    fn expense_only_count() {
        let ops = twelve();
        let f = OperationFilter::new().with_type(TypeFilter::ExpenseOnly);
        let page = QueryService::new().query(&ops, &f, PageRequest::new(1, size(10)));
        assert_eq!(page.total_matches, 7);
        assert!(page.items.iter().all(|o| o.operation_type == OperationType::Expense));
    }

    #[test]
    fn lowercase_search_finds_capitalized_category() {
        let ops = twelve();
        let f = OperationFilter::new().with_search("продукты");
        let page = QueryService::new().query(&ops, &f, PageRequest::new(1, size(10)));
        assert_eq!(ids(&page.items), vec!["1", "9"]);
        assert!(page.items.iter().all(|o| o.category == "Продукты"));
    }

    #[test]
    fn category_filter_ignores_comment_text() {
        let ops = twelve();
        // Operation 10 mentions "Транспорт" only in its comment.
        let f = OperationFilter::new().with_category(CategoryFilter::Exact("Транспорт".into()));
        let page = QueryService::new().query(&ops, &f, PageRequest::new(1, size(10)));
        assert_eq!(ids(&page.items), vec!["3"]);
    }

    #[test]
    fn search_covers_comment_too() {
        let ops = twelve();
        let f = OperationFilter::new().with_search("транспорт");
        let page = QueryService::new().query(&ops, &f, PageRequest::new(1, size(10)));
        assert_eq!(ids(&page.items), vec!["3", "10"]);
    }

    #[test]
    fn empty_result_still_reports_one_page() {
        let ops = twelve();
        let f = OperationFilter::new().with_search("несуществующий");
        let page = QueryService::new().query(&ops, &f, PageRequest::new(1, size(10)));
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_matches, 0);
        assert_eq!(page.label(), "1 / 1");
    }

    #[test]
    fn empty_source_list() {
        let page =
            QueryService::new().query(&[], &OperationFilter::new(), PageRequest::new(1, size(10)));
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn page_beyond_total_is_empty_not_error() {
        let ops = twelve();
        let request = PageRequest::new(99, size(10));
        let page = QueryService::new().query(&ops, &OperationFilter::new(), request);
        assert!(page.items.is_empty());
        assert_eq!(page.page, 99);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        let ops = twelve();
        let page = QueryService::new().query(
            &ops,
            &OperationFilter::new(),
            PageRequest::new(usize::MAX, size(10)),
        );
        assert!(page.items.is_empty());
    }

    #[test]
    fn page_zero_is_treated_as_first() {
        let ops = twelve();
        let page =
            QueryService::new().query(&ops, &OperationFilter::new(), PageRequest::new(0, size(10)));
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 10);
    }

    #[test]
    fn total_pages_formula() {
        let ten = size(10);
        assert_eq!(QueryService::total_pages(0, ten), 1);
        assert_eq!(QueryService::total_pages(1, ten), 1);
        assert_eq!(QueryService::total_pages(10, ten), 1);
        assert_eq!(QueryService::total_pages(11, ten), 2);
        assert_eq!(QueryService::total_pages(20, ten), 2);
        assert_eq!(QueryService::total_pages(21, ten), 3);
        assert_eq!(QueryService::total_pages(7, size(1)), 7);
    }

    #[test]
    fn total_pages_matches_max_one_ceil_for_every_count() {
        for page_size in 1..=7 {
            for count in 0..=40 {
                let expected = std::cmp::max(1, (count + page_size - 1) / page_size);
                assert_eq!(QueryService::total_pages(count, size(page_size)), expected);
            }
        }
    }

    #[test]
    fn pages_concatenate_to_filtered_list() {
        let ops = twelve();
        let f = OperationFilter::new().with_type(TypeFilter::ExpenseOnly);
        let svc = QueryService::new();
        let filtered = ids(&svc.filter(&ops, &f));

        let first = svc.query(&ops, &f, PageRequest::new(1, size(3)));
        let mut collected = Vec::new();
        for page in 1..=first.total_pages {
            collected.extend(ids(&svc.query(&ops, &f, PageRequest::new(page, size(3))).items));
        }
        assert_eq!(first.total_pages, 3);
        assert_eq!(collected, filtered);
    }

    #[test]
    fn filtered_order_is_subsequence_of_source() {
        let ops = twelve();
        let svc = QueryService::new();
        let filters = [
            OperationFilter::new().with_search("а"),
            OperationFilter::new().with_type(TypeFilter::IncomeOnly),
            OperationFilter::new().with_category(CategoryFilter::Exact("Развлечения".into())),
        ];
        for f in &filters {
            let matched = svc.filter(&ops, f);
            let positions: Vec<usize> = matched
                .iter()
                .map(|m| ops.iter().position(|o| o.id == m.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
            assert!(matched.iter().all(|m| f.matches(m)));
            let rejected = ops.iter().filter(|o| !f.matches(o)).count();
            assert_eq!(matched.len() + rejected, ops.len());
        }
    }

    #[test]
    fn query_does_not_mutate_source() {
        let ops = twelve();
        let before = ops.clone();
        let f = OperationFilter::new().with_search("к").with_type(TypeFilter::ExpenseOnly);
        let _ = QueryService::new().query(&ops, &f, PageRequest::new(1, size(2)));
        assert_eq!(ops, before);
    }

    #[test]
    fn page_helpers() {
        let ops = twelve();
        let svc = QueryService::new();
        let p1 = svc.query(&ops, &OperationFilter::new(), PageRequest::first(size(10)));
        assert!(p1.has_next());
        assert!(!p1.has_previous());
        let p2 = svc.query(&ops, &OperationFilter::new(), PageRequest::new(2, size(10)));
        assert!(!p2.has_next());
        assert!(p2.has_previous());
        assert_eq!(p2.to_owned_items().len(), 2);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  OperationsBrowser (navigation contract)
// ═══════════════════════════════════════════════════════════════════

mod browser {
    use super::*;

    #[test]
    fn starts_on_first_page() {
        let b = OperationsBrowser::new(size(10));
        assert_eq!(b.page(), 1);
        assert!(b.filter().is_empty());
        assert_eq!(b.page_label(&twelve()), "1 / 2");
    }

    #[test]
    fn previous_on_first_page_is_noop() {
        let mut b = OperationsBrowser::new(size(10));
        assert!(!b.previous_page());
        assert_eq!(b.page(), 1);
    }

    #[test]
    fn next_stops_at_last_page() {
        let ops = twelve();
        let mut b = OperationsBrowser::new(size(10));
        assert!(b.next_page_in(&ops));
        assert_eq!(b.page(), 2);
        assert!(!b.next_page_in(&ops));
        assert_eq!(b.page(), 2);
        assert_eq!(b.page_label(&ops), "2 / 2");
        assert_eq!(ids(&b.current(&ops).items), vec!["11", "12"]);
    }

    #[test]
    fn next_with_explicit_total() {
        let mut b = OperationsBrowser::new(size(10));
        assert!(!b.next_page(1));
        assert!(b.next_page(3));
        assert!(b.next_page(3));
        assert!(!b.next_page(3));
        assert_eq!(b.page(), 3);
        assert!(b.previous_page());
        assert_eq!(b.page(), 2);
    }

    #[test]
    fn search_change_resets_page() {
        let ops = twelve();
        let mut b = OperationsBrowser::new(size(10));
        b.next_page_in(&ops);
        b.set_search_text("к");
        assert_eq!(b.page(), 1);
    }

    #[test]
    fn type_change_resets_page() {
        let mut b = OperationsBrowser::new(size(10));
        b.next_page(5);
        b.set_type_filter(TypeFilter::IncomeOnly);
        assert_eq!(b.page(), 1);
    }

    #[test]
    fn category_change_resets_page() {
        let mut b = OperationsBrowser::new(size(10));
        b.next_page(5);
        b.next_page(5);
        b.set_category_filter(CategoryFilter::Exact("Продукты".into()));
        assert_eq!(b.page(), 1);
    }

    #[test]
    fn reapplying_same_filter_still_resets() {
        let mut b = OperationsBrowser::new(size(10));
        b.next_page(5);
        b.set_type_filter(TypeFilter::All);
        assert_eq!(b.page(), 1);
    }

    #[test]
    fn clear_filters_resets_everything() {
        let mut b = OperationsBrowser::new(size(10));
        b.set_search_text("кино");
        b.set_type_filter(TypeFilter::ExpenseOnly);
        b.next_page(5);
        b.clear_filters();
        assert!(b.filter().is_empty());
        assert_eq!(b.page(), 1);
    }

    #[test]
    fn filtered_label_and_items() {
        let ops = twelve();
        let mut b = OperationsBrowser::new(size(10));
        b.set_type_filter(TypeFilter::IncomeOnly);
        let page = b.current(&ops);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.label(), "1 / 1");
        assert!(!b.next_page_in(&ops));
    }

    #[test]
    fn request_reflects_state() {
        let mut b = OperationsBrowser::new(size(4));
        b.next_page(3);
        let r = b.request();
        assert_eq!(r.page, 2);
        assert_eq!(r.page_size.get(), 4);
        assert_eq!(b.page_size().get(), 4);
    }
}
