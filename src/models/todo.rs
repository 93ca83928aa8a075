use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ParseError};

pub type TodoId = u64;

/// Wire and date-picker format for due dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(ParseError::InvalidPriority(s.to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub description: String,
    pub priority: Priority,
    pub category: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Todo {
    /// Pending with a due date on a calendar day before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < today)
    }
}

/// Raw field values as they come from the add form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTodoRequest {
    #[serde(default)]
    pub description: String,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub due_date: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    pub description: Option<String>,
    pub priority: Option<String>,
    /// `Some("")` clears the category.
    pub category: Option<String>,
    /// `Some("")` clears the due date.
    pub due_date: Option<String>,
    /// `Some("")` clears the notes.
    pub notes: Option<String>,
}

/// A validated todo, ready to receive an id from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    pub description: String,
    pub priority: Priority,
    pub category: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub completed: bool,
}

impl TodoDraft {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            priority: Priority::default(),
            category: None,
            due_date: None,
            notes: None,
            completed: false,
        }
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn due(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

impl TryFrom<NewTodoRequest> for TodoDraft {
    type Error = AppError;

    fn try_from(req: NewTodoRequest) -> Result<Self, Self::Error> {
        let description = required_description(&req.description)?;
        let priority = match non_blank(req.priority) {
            Some(p) => p.parse::<Priority>()?,
            None => Priority::default(),
        };
        let due_date = non_blank(req.due_date)
            .map(|d| parse_date(&d))
            .transpose()?;

        Ok(Self {
            description,
            priority,
            category: non_blank(req.category),
            due_date,
            notes: non_blank(req.notes),
            completed: req.completed,
        })
    }
}

/// A validated edit. Outer `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<Option<String>>,
    pub due_date: Option<Option<NaiveDate>>,
    pub notes: Option<Option<String>>,
}

impl TryFrom<UpdateTodoRequest> for TodoPatch {
    type Error = AppError;

    fn try_from(req: UpdateTodoRequest) -> Result<Self, Self::Error> {
        let description = req
            .description
            .as_deref()
            .map(required_description)
            .transpose()?;
        let priority = req
            .priority
            .as_deref()
            .map(str::parse::<Priority>)
            .transpose()?;
        let due_date = match req.due_date {
            Some(raw) => Some(non_blank(Some(raw)).map(|d| parse_date(&d)).transpose()?),
            None => None,
        };

        Ok(Self {
            description,
            priority,
            category: req.category.map(|c| non_blank(Some(c))),
            due_date,
            notes: req.notes.map(|n| non_blank(Some(n))),
        })
    }
}

impl TodoPatch {
    pub fn apply(self, todo: &mut Todo) {
        if let Some(description) = self.description {
            todo.description = description;
        }
        if let Some(priority) = self.priority {
            todo.priority = priority;
        }
        if let Some(category) = self.category {
            todo.category = category;
        }
        if let Some(due_date) = self.due_date {
            todo.due_date = due_date;
        }
        if let Some(notes) = self.notes {
            todo.notes = notes;
        }
    }
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| ParseError::InvalidDate(raw.to_string()))
}

/// Human-readable date as shown in notifications, e.g. `Dec 15, 2023`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn required_description(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Todo item is required!".to_string()));
    }
    Ok(trimmed.to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}
