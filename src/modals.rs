//! Modal Controller
//!
//! Form validation, the single mutation request each dialog sends, and the
//! outcome shown to the user.

use chrono::NaiveDate;

use crate::api::BudgetApi;
use crate::error::AppError;
use crate::models::{ItemChanges, NewItem, NewProject};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    CreateProject,
    CreateItem,
    EditItem,
    RemoveItem,
}

impl Operation {
    pub fn success_message(&self) -> &'static str {
        match self {
            Operation::CreateProject => "Project created successfully!",
            Operation::CreateItem => "Item created successfully!",
            Operation::EditItem => "Item updated successfully!",
            Operation::RemoveItem => "Item removed successfully!",
        }
    }

    /// Shown when the server rejects without an `{error}` body
    pub fn rejected_message(&self) -> &'static str {
        match self {
            Operation::CreateProject => "Error creating project",
            Operation::CreateItem => "Error creating item",
            Operation::EditItem => "Error updating item",
            Operation::RemoveItem => "Error removing item",
        }
    }

    pub fn network_message(&self) -> &'static str {
        match self {
            Operation::CreateProject => "Failed to create project. Please try again.",
            Operation::CreateItem => "Failed to create item. Please try again.",
            Operation::EditItem => "Failed to update item. Please try again.",
            Operation::RemoveItem => "Failed to remove item. Please try again.",
        }
    }

    /// Item mutations also change the project view
    pub fn refreshes_items(&self) -> bool {
        !matches!(self, Operation::CreateProject)
    }
}

/// One write request, already validated
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    CreateProject(NewProject),
    CreateItem(NewItem),
    EditItem { item_id: u32, changes: ItemChanges },
    RemoveItem { item_id: u32 },
}

impl Mutation {
    pub fn operation(&self) -> Operation {
        match self {
            Mutation::CreateProject(_) => Operation::CreateProject,
            Mutation::CreateItem(_) => Operation::CreateItem,
            Mutation::EditItem { .. } => Operation::EditItem,
            Mutation::RemoveItem { .. } => Operation::RemoveItem,
        }
    }

    async fn send<A: BudgetApi>(&self, api: &A) -> Result<(), AppError> {
        match self {
            Mutation::CreateProject(project) => api.create_project(project).await,
            Mutation::CreateItem(item) => api.create_item(item).await,
            Mutation::EditItem { item_id, changes } => api.update_item(*item_id, changes).await,
            Mutation::RemoveItem { item_id } => api.delete_item(*item_id).await,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Request succeeded; close the dialog
    Done(String),
    /// Caught locally, no request sent
    Invalid(String),
    /// Server said no
    Rejected(String),
    /// Request never completed
    Failed(String),
}

impl SubmitOutcome {
    pub fn from_error(operation: Operation, err: &AppError) -> Self {
        match err {
            AppError::Validation(message) => SubmitOutcome::Invalid(message.clone()),
            AppError::Rejected { .. } => match err.server_message() {
                Some(message) => SubmitOutcome::Rejected(format!("Error: {}", message)),
                None => SubmitOutcome::Rejected(operation.rejected_message().to_string()),
            },
            AppError::Decode(_) | AppError::Storage(_) => SubmitOutcome::Rejected(operation.rejected_message().to_string()),
            AppError::Network(_) => SubmitOutcome::Failed(operation.network_message().to_string()),
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, SubmitOutcome::Done(_))
    }

    pub fn message(&self) -> &str {
        match self {
            SubmitOutcome::Done(m) | SubmitOutcome::Invalid(m) | SubmitOutcome::Rejected(m) | SubmitOutcome::Failed(m) => m,
        }
    }
}

/// Send a prepared mutation. `on_success` runs only when the server accepted it.
pub async fn submit<A: BudgetApi>(
    api: &A,
    operation: Operation,
    prepared: Result<Mutation, AppError>,
    on_success: impl FnOnce(Operation),
) -> SubmitOutcome {
    let mutation = match prepared {
        Ok(mutation) => mutation,
        Err(e) => return SubmitOutcome::from_error(operation, &e),
    };
    debug_assert_eq!(mutation.operation(), operation);

    match mutation.send(api).await {
        Ok(()) => {
            log::info!("{:?} succeeded", operation);
            on_success(operation);
            SubmitOutcome::Done(operation.success_message().to_string())
        }
        Err(e) => {
            log::error!("{:?} failed: {}", operation, e);
            SubmitOutcome::from_error(operation, &e)
        }
    }
}

// ========================
// Forms
// ========================

/// Raw create-project form fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectForm {
    pub name: String,
    pub status: String,
    pub tag: String,
    pub start_date: String,
    pub end_date: String,
}

impl ProjectForm {
    pub fn to_mutation(&self, username: Option<&str>) -> Result<Mutation, AppError> {
        let username = username
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| AppError::validation("Please set your username first."))?;
        let name = required(&self.name, "Please enter a project name")?;
        let (start_date, end_date) = date_range(&self.start_date, &self.end_date)?;
        let status = match self.status.trim() {
            "" => "Pending".to_string(),
            status => status.to_string(),
        };

        Ok(Mutation::CreateProject(NewProject {
            name,
            status,
            tag: self.tag.trim().to_string(),
            start_date,
            end_date,
            username: username.to_string(),
        }))
    }
}

/// Raw item form fields, shared by create and edit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub name: String,
    pub item_type: String,
    pub amount: String,
    pub category: String,
    pub item_tag: String,
    pub start_date: String,
    pub end_date: String,
}

impl ItemForm {
    pub fn to_create(&self, project_id: Option<u32>) -> Result<Mutation, AppError> {
        let project_id = project_id.ok_or_else(|| AppError::validation("Open a project before adding items."))?;
        let changes = self.changes()?;
        Ok(Mutation::CreateItem(NewItem {
            project_id,
            item_name: changes.item_name,
            item_type: changes.item_type,
            amount: changes.amount,
            category: changes.category,
            item_tag: self.item_tag.trim().to_string(),
            start_date: changes.start_date,
            end_date: changes.end_date,
        }))
    }

    pub fn to_edit(&self, selection: &str) -> Result<Mutation, AppError> {
        let item_id = selected_item(selection, "Please select an item to edit.")?;
        Ok(Mutation::EditItem {
            item_id,
            changes: self.changes()?,
        })
    }

    fn changes(&self) -> Result<ItemChanges, AppError> {
        let item_name = required(&self.name, "Please enter an item name")?;
        let item_type = required(&self.item_type, "Please choose an item type")?;
        let amount = self
            .amount
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::validation("Amount must be a whole number"))?;
        let (start_date, end_date) = date_range(&self.start_date, &self.end_date)?;
        Ok(ItemChanges {
            item_name,
            item_type,
            amount,
            category: self.category.trim().to_string(),
            start_date,
            end_date,
        })
    }
}

/// Remove-item submit; an empty selection never reaches the network
pub fn remove_item(selection: &str) -> Result<Mutation, AppError> {
    let item_id = selected_item(selection, "Please select an item to remove.")?;
    Ok(Mutation::RemoveItem { item_id })
}

fn selected_item(selection: &str, message: &str) -> Result<u32, AppError> {
    selection.trim().parse::<u32>().map_err(|_| AppError::validation(message))
}

fn required(value: &str, message: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::validation(message));
    }
    Ok(value.to_string())
}

/// Validate `YYYY-MM-DD` dates; a blank end date takes the start date
fn date_range(start: &str, end: &str) -> Result<(String, String), AppError> {
    let start = required(start, "Please enter a start date")?;
    let start_date = NaiveDate::parse_from_str(&start, DATE_FORMAT)
        .map_err(|_| AppError::validation("Start date must be YYYY-MM-DD"))?;

    let end = match end.trim() {
        "" => start.clone(),
        end => end.to_string(),
    };
    let end_date = NaiveDate::parse_from_str(&end, DATE_FORMAT)
        .map_err(|_| AppError::validation("End date must be YYYY-MM-DD"))?;

    if end_date < start_date {
        return Err(AppError::validation("End date cannot be before the start date"));
    }
    Ok((start, end))
}
