//! Remote-populated selection controls
//!
//! Option sets are rebuilt from scratch on every load; an empty list
//! yields a single disabled placeholder.

use std::future::Future;

use crate::api::BudgetApi;
use crate::error::AppError;
use crate::generation::latest;
use crate::models::Item;

pub const NO_ITEMS_LABEL: &str = "No items available";
pub const LOAD_ITEMS_FAILED: &str = "Failed to load items. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: NO_ITEMS_LABEL.to_string(),
            disabled: true,
        }
    }
}

/// The option set shown when nothing can be selected
pub fn placeholder_options() -> Vec<SelectOption> {
    vec![SelectOption::placeholder()]
}

/// Build options for `list`, or the placeholder when it is empty
pub fn options_from<T>(list: &[T], value: impl Fn(&T) -> String, label: impl Fn(&T) -> String) -> Vec<SelectOption> {
    if list.is_empty() {
        return placeholder_options();
    }
    list.iter()
        .map(|entry| SelectOption {
            value: value(entry),
            label: label(entry),
            disabled: false,
        })
        .collect()
}

/// First selectable value, which is what the browser preselects
pub fn default_selection(options: &[SelectOption]) -> Option<String> {
    options.iter().find(|o| !o.disabled).map(|o| o.value.clone())
}

/// Fetch a list and turn it into options
pub async fn load_options<T, Fut>(
    fetch: Fut,
    value: impl Fn(&T) -> String,
    label: impl Fn(&T) -> String,
) -> Result<Vec<SelectOption>, AppError>
where
    Fut: Future<Output = Result<Vec<T>, AppError>>,
{
    let list = fetch.await?;
    Ok(options_from(&list, value, label))
}

/// Options for the items of a project
pub async fn load_item_options<A: BudgetApi>(
    api: &A,
    project_id: u32,
    label: fn(&Item) -> String,
) -> Result<Vec<SelectOption>, AppError> {
    load_options(api.project_items(project_id), |item: &Item| item.id.to_string(), label).await
}

// ========================
// Label Formatters
// ========================

/// `name (category)`
pub fn name_with_category(item: &Item) -> String {
    match item.category.as_deref().filter(|c| !c.is_empty()) {
        Some(category) => format!("{} ({})", item.name, category),
        None => item.name.clone(),
    }
}

pub fn name_only(item: &Item) -> String {
    item.name.clone()
}

/// What an item dialog shows once its open-time load lands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedOptions {
    pub options: Vec<SelectOption>,
    /// Preselected value, empty when nothing is selectable
    pub selection: String,
    /// Inline error when the fetch failed
    pub error: Option<String>,
}

/// Load a project's items for a dialog that is about to open.
/// Returns `None` when the open was superseded while the fetch ran; a
/// failed fetch still opens with the placeholder and an inline error.
pub async fn open_item_options<A: BudgetApi>(
    api: &A,
    project_id: u32,
    label: fn(&Item) -> String,
    is_current: impl Fn() -> bool,
) -> Option<OpenedOptions> {
    let loaded = latest(load_item_options(api, project_id, label), is_current).await?;
    let (options, error) = match loaded {
        Ok(options) => (options, None),
        Err(e) => {
            log::error!("error fetching items: {}", e);
            (placeholder_options(), Some(LOAD_ITEMS_FAILED.to_string()))
        }
    };
    Some(OpenedOptions {
        selection: default_selection(&options).unwrap_or_default(),
        options,
        error,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::generation::Generation;
    use crate::testing::{item, FakeApi};

    #[tokio::test]
    async fn test_empty_list_gives_single_placeholder() {
        let api = FakeApi::default();
        let options = load_item_options(&api, 1, name_with_category).await.unwrap();

        assert_eq!(options.len(), 1);
        assert!(options[0].disabled);
        assert_eq!(options[0].label, NO_ITEMS_LABEL);
        assert_eq!(options[0].value, "");
        assert_eq!(default_selection(&options), None);
    }

    #[tokio::test]
    async fn test_options_use_label_formatter() {
        let api = FakeApi::with_items(vec![
            item(10, 1, "Lumber", "Materials"),
            item(11, 1, "Crew", "Labour"),
            item(12, 2, "Other project", "Misc"),
        ]);

        let edit = load_item_options(&api, 1, name_with_category).await.unwrap();
        let labels: Vec<_> = edit.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["Lumber (Materials)", "Crew (Labour)"]);
        assert_eq!(default_selection(&edit).as_deref(), Some("10"));

        let remove = load_item_options(&api, 1, name_only).await.unwrap();
        assert_eq!(remove[1].label, "Crew");
        assert_eq!(remove[1].value, "11");
    }

    #[tokio::test]
    async fn test_reload_rebuilds_from_scratch() {
        let api = FakeApi::with_items(vec![item(10, 1, "Lumber", "Materials"), item(11, 1, "Crew", "Labour")]);
        let first = load_item_options(&api, 1, name_only).await.unwrap();
        assert_eq!(first.len(), 2);

        api.items.borrow_mut().retain(|i| i.id != 10);
        let second = load_item_options(&api, 1, name_only).await.unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].value, "11");
    }

    #[tokio::test]
    async fn test_fetch_error_propagates() {
        let api = FakeApi::default();
        api.fail_next(AppError::Network("offline".into()));
        assert!(load_item_options(&api, 1, name_only).await.is_err());
    }

    #[test]
    fn test_missing_category_falls_back_to_name() {
        let mut lumber = item(10, 1, "Lumber", "");
        assert_eq!(name_with_category(&lumber), "Lumber");
        lumber.category = None;
        assert_eq!(name_with_category(&lumber), "Lumber");
    }

    #[tokio::test]
    async fn test_open_preselects_first_item() {
        let api = FakeApi::with_items(vec![item(10, 1, "Lumber", "Materials"), item(11, 1, "Crew", "Labour")]);

        let opened = open_item_options(&api, 1, name_with_category, || true).await.unwrap();

        assert_eq!(opened.options.len(), 2);
        assert_eq!(opened.selection, "10");
        assert_eq!(opened.error, None);
    }

    #[tokio::test]
    async fn test_open_after_fetch_failure_shows_placeholder_and_error() {
        let api = FakeApi::with_items(vec![item(10, 1, "Lumber", "Materials")]);
        api.fail_next(AppError::Network("offline".into()));

        let opened = open_item_options(&api, 1, name_only, || true).await.unwrap();

        assert_eq!(opened.options, placeholder_options());
        assert_eq!(opened.selection, "");
        assert_eq!(opened.error.as_deref(), Some(LOAD_ITEMS_FAILED));
    }

    #[tokio::test]
    async fn test_superseded_open_is_discarded() {
        let api = FakeApi::with_items(vec![item(10, 1, "Lumber", "Materials")]);
        let generation = Cell::new(Generation::default());
        let take = || {
            let mut g = generation.get();
            let ticket = g.bump();
            generation.set(g);
            ticket
        };

        let first_ticket = take();
        let first = open_item_options(&api, 1, name_only, || generation.get().is_current(first_ticket));
        let second_ticket = take();
        let second = open_item_options(&api, 1, name_only, || generation.get().is_current(second_ticket));

        assert!(second.await.is_some());
        assert_eq!(first.await, None);
        // both fetches went out; only the newer one is shown
        assert_eq!(api.call_count("GET /api/project_items"), 2);
    }

    #[tokio::test]
    async fn test_open_closed_before_response_is_discarded() {
        let api = FakeApi::default();
        let generation = Cell::new(Generation::default());
        let mut g = generation.get();
        let ticket = g.bump();
        generation.set(g);

        let pending = open_item_options(&api, 1, name_only, || generation.get().is_current(ticket));
        // dialog closed
        let mut g = generation.get();
        g.bump();
        generation.set(g);

        assert_eq!(pending.await, None);
    }
}
