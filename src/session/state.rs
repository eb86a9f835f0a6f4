//! Session state and draft editing.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::calculation::{parse_percentage, total_percentage, validate_budget};
use crate::config::PayrollPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{Breakdown, BudgetItem};
use crate::storage::{KeyValueStore, load_json, save_json};

use super::{BREAKDOWN_KEY, BUDGET_ITEMS_KEY, HOURLY_RATE_KEY, SELECTED_MONTH_KEY, TAB_KEY, Tab};

/// Message shown when a submission is blocked by an incomplete budget.
pub const PERCENTAGE_ERROR_MESSAGE: &str = "Percentages must add up to 100%";

/// An editable field of a budget item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetField {
    /// The category name.
    Name,
    /// The percentage, parsed from text (unparseable text reads as zero).
    Percentage,
}

/// The calculator form state, persisted through a [`KeyValueStore`].
///
/// # Example
///
/// ```
/// use budget_engine::config::PayrollPolicy;
/// use budget_engine::session::{Session, Tab};
/// use budget_engine::storage::InMemoryStore;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
/// let mut session = Session::open(InMemoryStore::new(), &PayrollPolicy::default(), today);
///
/// // Defaults: empty rate, current month, 40/40/20 split.
/// assert_eq!(session.selected_month(), 2);
/// assert_eq!(session.budget_items().len(), 3);
///
/// session.set_hourly_rate("250").unwrap();
/// session.submit().unwrap();
/// assert_eq!(session.tab(), Tab::Breakdown);
/// assert_eq!(session.breakdown().unwrap().hourly_rate, "250");
/// ```
#[derive(Debug)]
pub struct Session<S: KeyValueStore> {
    store: S,
    hourly_rate: String,
    selected_month: u32,
    budget_items: Vec<BudgetItem>,
    has_submitted: bool,
    breakdown: Option<Breakdown>,
    tab: Tab,
}

impl<S: KeyValueStore> Session<S> {
    /// Restores a session from the store.
    ///
    /// Keys that are missing or hold malformed values fall back to defaults:
    /// an empty hourly rate, the month of `today`, the policy's default
    /// budget split (with fresh ids), no breakdown, and the calculator tab.
    /// A default budget split is written back at once so its ids stay
    /// stable across reopens.
    pub fn open(store: S, policy: &PayrollPolicy, today: NaiveDate) -> Self {
        let hourly_rate = load_or(&store, HOURLY_RATE_KEY, String::new);

        let current_month = today.month0();
        let mut selected_month = load_or(&store, SELECTED_MONTH_KEY, || current_month);
        if selected_month > 11 {
            warn!(month = selected_month, "Stored month out of range, using current month");
            selected_month = current_month;
        }

        let stored_items: Option<Vec<BudgetItem>> = load_or(&store, BUDGET_ITEMS_KEY, || None);
        let needs_default_items = stored_items.is_none();
        let budget_items = stored_items.unwrap_or_else(|| {
            policy
                .default_budget()
                .iter()
                .map(|item| BudgetItem::new(item.name.clone(), item.percentage))
                .collect()
        });

        let breakdown = load_or(&store, BREAKDOWN_KEY, || None);
        let tab = load_or(&store, TAB_KEY, Tab::default);

        let mut session = Self {
            store,
            hourly_rate,
            selected_month,
            budget_items,
            has_submitted: false,
            breakdown,
            tab,
        };
        if needs_default_items {
            if let Err(err) = session.save_budget_items() {
                warn!(error = %err, "Could not persist default budget items");
            }
        }
        session
    }

    /// The hourly rate exactly as entered.
    pub fn hourly_rate(&self) -> &str {
        &self.hourly_rate
    }

    /// The zero-based month selected in the draft.
    pub fn selected_month(&self) -> u32 {
        self.selected_month
    }

    /// The draft budget items, in display order.
    pub fn budget_items(&self) -> &[BudgetItem] {
        &self.budget_items
    }

    /// Sum of the draft percentages, or `None` if it overflows.
    pub fn total_percentage(&self) -> Option<Decimal> {
        total_percentage(&self.budget_items)
    }

    /// True once [`submit`](Self::submit) has been attempted.
    pub fn has_submitted(&self) -> bool {
        self.has_submitted
    }

    /// The last submitted breakdown.
    pub fn breakdown(&self) -> Option<&Breakdown> {
        self.breakdown.as_ref()
    }

    /// The active tab.
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the session, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Replaces the draft hourly rate. The text is kept as entered.
    pub fn set_hourly_rate(&mut self, hourly_rate: impl Into<String>) -> EngineResult<()> {
        self.hourly_rate = hourly_rate.into();
        save_json(&mut self.store, HOURLY_RATE_KEY, &self.hourly_rate)
    }

    /// Selects a zero-based month.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMonth`] when `month > 11`.
    pub fn select_month(&mut self, month: u32) -> EngineResult<()> {
        if month > 11 {
            return Err(EngineError::InvalidMonth { month });
        }
        self.selected_month = month;
        save_json(&mut self.store, SELECTED_MONTH_KEY, &self.selected_month)
    }

    /// Appends a blank budget item and returns its id.
    pub fn add_budget_item(&mut self) -> EngineResult<String> {
        let item = BudgetItem::blank();
        let id = item.id.clone();
        self.budget_items.push(item);
        self.save_budget_items()?;
        Ok(id)
    }

    /// Edits one field of a budget item.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::BudgetItemNotFound`] for an unknown id.
    pub fn update_budget_item(
        &mut self,
        id: &str,
        field: BudgetField,
        value: &str,
    ) -> EngineResult<()> {
        let item = self
            .budget_items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| EngineError::BudgetItemNotFound { id: id.to_string() })?;

        match field {
            BudgetField::Name => item.name = value.to_string(),
            BudgetField::Percentage => item.percentage = parse_percentage(value),
        }
        self.save_budget_items()
    }

    /// Removes a budget item.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::BudgetItemNotFound`] for an unknown id.
    pub fn remove_budget_item(&mut self, id: &str) -> EngineResult<()> {
        let before = self.budget_items.len();
        self.budget_items.retain(|item| item.id != id);
        if self.budget_items.len() == before {
            return Err(EngineError::BudgetItemNotFound { id: id.to_string() });
        }
        self.save_budget_items()
    }

    /// Switches the active tab. The tab is unchanged if it cannot be saved.
    pub fn set_tab(&mut self, tab: Tab) -> EngineResult<()> {
        save_json(&mut self.store, TAB_KEY, &tab)?;
        self.tab = tab;
        Ok(())
    }

    /// Submits the draft.
    ///
    /// When the percentages add up to 100, the draft becomes the new
    /// breakdown (replacing any previous one), the breakdown tab is
    /// selected, and both are persisted.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBudget`] otherwise; the previous
    /// breakdown and tab are left untouched.
    pub fn submit(&mut self) -> EngineResult<&Breakdown> {
        self.has_submitted = true;

        if let Err(err) = validate_budget(&self.budget_items) {
            warn!(error = %err, "Submission blocked");
            return Err(err);
        }

        let breakdown = Breakdown::new(
            self.hourly_rate.clone(),
            self.selected_month,
            self.budget_items.clone(),
        );
        save_json(&mut self.store, BREAKDOWN_KEY, &breakdown)?;
        self.breakdown = Some(breakdown.clone());
        self.set_tab(Tab::Breakdown)?;

        info!(
            month = breakdown.month,
            items = breakdown.budget_items.len(),
            "Breakdown submitted"
        );
        Ok(self.breakdown.insert(breakdown))
    }

    /// The validation message to display, if any.
    ///
    /// Only shown after a submission attempt, while the percentages do not
    /// add up to 100.
    pub fn validation_message(&self) -> Option<&'static str> {
        (self.has_submitted && self.total_percentage() != Some(Decimal::ONE_HUNDRED))
            .then_some(PERCENTAGE_ERROR_MESSAGE)
    }

    fn save_budget_items(&mut self) -> EngineResult<()> {
        save_json(&mut self.store, BUDGET_ITEMS_KEY, &self.budget_items)
    }
}

fn load_or<T, S>(store: &S, key: &str, default: impl FnOnce() -> T) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore,
{
    match load_json(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => default(),
        Err(err) => {
            warn!(key, error = %err, "Ignoring unreadable stored value");
            default()
        }
    }
}
