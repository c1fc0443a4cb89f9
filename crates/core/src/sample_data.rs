//! Static records the application starts with.
//!
//! There is no persistence layer: a fresh `FinanceTracker` is seeded from
//! these lists and all changes live only in memory.

use chrono::NaiveDate;

use crate::models::category::{Category, CategoryType};
use crate::models::debt::{Debt, DebtStatus, DebtType};
use crate::models::goal::{Goal, GoalType};
use crate::models::ledger::Ledger;
use crate::models::limit::SpendingLimit;
use crate::models::operation::{Operation, OperationType};
use crate::models::settings::Settings;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // All literals below are valid calendar dates.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

/// Build a ledger holding every sample list and default settings.
pub fn ledger() -> Ledger {
    Ledger {
        operations: operations(),
        categories: categories(),
        limits: limits(),
        goals: goals(),
        debts: debts(),
        settings: Settings::default(),
    }
}

/// Twelve operations, newest first.
pub fn operations() -> Vec<Operation> {
    use OperationType::{Expense, Income};

    vec![
        Operation::with_id(
            "1",
            date(2026, 2, 4),
            Expense,
            "Продукты",
            "Супермаркет Пятёрочка",
            3450.0,
        )
        .tagged(["продукты", "еда"]),
        Operation::with_id(
            "2",
            date(2026, 2, 3),
            Income,
            "Зарплата",
            "Ежемесячная зарплата",
            85000.0,
        )
        .tagged(["работа"]),
        Operation::with_id(
            "3",
            date(2026, 2, 3),
            Expense,
            "Транспорт",
            "Заправка автомобиля",
            1200.0,
        )
        .tagged(["авто", "бензин"]),
        Operation::with_id(
            "4",
            date(2026, 2, 2),
            Expense,
            "Развлечения",
            "Кино с семьей",
            2800.0,
        )
        .tagged(["досуг", "семья"]),
        Operation::with_id(
            "5",
            date(2026, 2, 1),
            Income,
            "Фриланс",
            "Проект веб-дизайна",
            15000.0,
        )
        .tagged(["работа", "доход"]),
        Operation::with_id(
            "6",
            date(2026, 2, 1),
            Expense,
            "Здоровье",
            "Стоматолог",
            4500.0,
        )
        .tagged(["здоровье", "врач"]),
        Operation::with_id(
            "7",
            date(2026, 1, 31),
            Expense,
            "Одежда",
            "Зимняя куртка",
            7800.0,
        )
        .tagged(["одежда", "зима"]),
        Operation::with_id(
            "8",
            date(2026, 1, 30),
            Income,
            "Зарплата",
            "Премия за квартал",
            25000.0,
        )
        .tagged(["работа"]),
        Operation::with_id(
            "9",
            date(2026, 1, 29),
            Expense,
            "Продукты",
            "Рынок выходного дня",
            1850.0,
        )
        .tagged(["продукты"]),
        Operation::with_id(
            "10",
            date(2026, 1, 28),
            Expense,
            "Транспорт",
            "Метро (пополнение карты)",
            2000.0,
        )
        .tagged(["транспорт"]),
        Operation::with_id(
            "11",
            date(2026, 1, 27),
            Expense,
            "Развлечения",
            "Концерт",
            3500.0,
        )
        .tagged(["досуг"]),
        Operation::with_id(
            "12",
            date(2026, 1, 25),
            Income,
            "Фриланс",
            "Консультация клиента",
            8000.0,
        )
        .tagged(["работа"]),
    ]
}

pub fn categories() -> Vec<Category> {
    use CategoryType::{Expense, Income, Universal};

    vec![
        // ── Expense ─────────────────────────────────────────────────
        Category::new("1", "Продукты", "SHOPPING_CART", Expense, "#3B82F6")
            .with_stats(185, 52300.0),
        Category::new("2", "Транспорт", "CAR", Expense, "#06B6D4").with_stats(92, 28900.0),
        Category::new("3", "Здоровье", "MEDKIT", Expense, "#10B981").with_stats(34, 45200.0),
        Category::new("4", "Одежда", "SHOPPING_BAG", Expense, "#EC4899").with_stats(23, 31400.0),
        Category::new("5", "Развлечения", "GAMEPAD", Expense, "#F59E0B").with_stats(67, 38900.0),
        Category::new("6", "Коммунальные", "HOME", Expense, "#6366F1").with_stats(12, 19500.0),
        // ── Income ──────────────────────────────────────────────────
        Category::new("7", "Зарплата", "BRIEFCASE", Income, "#10B981").with_stats(5, 425000.0),
        Category::new("8", "Фриланс", "LAPTOP", Income, "#3B82F6").with_stats(12, 180000.0),
        // ── Universal ───────────────────────────────────────────────
        Category::new("9", "Подарки", "GIFT", Universal, "#EC4899").with_stats(8, 15600.0),
    ]
}

pub fn limits() -> Vec<SpendingLimit> {
    vec![
        SpendingLimit::new("1", "Продукты", "Февраль 2026", 18500.0, 20000.0),
        SpendingLimit::new("2", "Транспорт", "Февраль 2026", 12300.0, 15000.0),
        SpendingLimit::new("3", "Развлечения", "Февраль 2026", 8900.0, 10000.0),
        SpendingLimit::new("4", "Здоровье", "Февраль 2026", 15200.0, 15000.0),
    ]
}

pub fn goals() -> Vec<Goal> {
    vec![
        Goal::new(
            "1",
            "Отпуск в Европе",
            "🏖️",
            GoalType::Goal,
            200_000.0,
            145_000.0,
            date(2026, 7, 15),
            "#3B82F6",
        ),
        Goal::new(
            "2",
            "Новый MacBook Pro",
            "💻",
            GoalType::Goal,
            250_000.0,
            180_000.0,
            date(2026, 5, 30),
            "#8B5CF6",
        ),
    ]
}

pub fn debts() -> Vec<Debt> {
    use DebtStatus::{Active, Paid};
    use DebtType::{Borrowed, Lent};

    vec![
        Debt::new(
            "d1",
            Borrowed,
            "Алексей Сидоров",
            25000.0,
            date(2025, 12, 15),
            date(2026, 3, 15),
            Active,
            "Займ на ремонт",
        ),
        Debt::new(
            "d2",
            Lent,
            "Мария Козлова",
            15000.0,
            date(2026, 1, 10),
            date(2026, 2, 10),
            Active,
            "Помощь с переездом",
        ),
        Debt::new(
            "d3",
            Borrowed,
            "Дмитрий Волков",
            10000.0,
            date(2025, 10, 1),
            date(2025, 12, 31),
            Paid,
            "Займ на учёбу",
        ),
        Debt::new(
            "d4",
            Lent,
            "Елена Новикова",
            5000.0,
            date(2025, 11, 20),
            date(2026, 1, 20),
            Paid,
            "Помощь с покупкой",
        ),
    ]
}
