use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

use crate::errors::CoreError;

/// Rows per page in the operations table.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

/// How dates are rendered in tables and cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    /// 04.02.2026
    #[default]
    DayMonthYear,
    /// 02/04/2026
    MonthDayYear,
    /// 2026-02-04
    Iso,
}

impl DateFormat {
    /// `chrono` format string for this choice.
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::DayMonthYear => "%d.%m.%Y",
            DateFormat::MonthDayYear => "%m/%d/%Y",
            DateFormat::Iso => "%Y-%m-%d",
        }
    }

    /// Label shown in the settings dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            DateFormat::DayMonthYear => "ДД.MM.ГГГГ (04.02.2026)",
            DateFormat::MonthDayYear => "MM/DD/YYYY (02/04/2026)",
            DateFormat::Iso => "YYYY-MM-DD (2026-02-04)",
        }
    }

    pub fn options() -> [DateFormat; 3] {
        [DateFormat::DayMonthYear, DateFormat::MonthDayYear, DateFormat::Iso]
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }
}

/// User-configurable settings for the application core.
///
/// Missing fields fall back to their defaults when parsed from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Operations shown per page. A zero value is rejected at parse time.
    pub page_size: NonZeroUsize,

    /// Symbol prefixed to formatted amounts (e.g., "₽", "$").
    pub currency_symbol: String,

    pub date_format: DateFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            currency_symbol: "₽".to_string(),
            date_format: DateFormat::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document and validate them.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.currency_symbol.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Currency symbol must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Render a date with the configured `date_format`.
    pub fn format_date(&self, date: NaiveDate) -> String {
        self.date_format.format(date)
    }

    /// Format an amount the way the operations table does: sign, symbol,
    /// and whole units grouped by thousands (e.g., "-₽ 3 450").
    pub fn format_signed_amount(&self, signed_amount: f64) -> String {
        let sign = if signed_amount < 0.0 { "-" } else { "+" };
        format!(
            "{sign}{} {}",
            self.currency_symbol,
            group_thousands(signed_amount.abs().round() as u64)
        )
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
