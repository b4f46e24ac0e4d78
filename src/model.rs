//! Expense data model
//!
//! The wire shapes served by the expenses API. The same shape is injected
//! into the page on first render and returned by every `links.next` page.

use serde::{Deserialize, Serialize};

/// A single purchase as displayed in the list
///
/// All fields arrive pre-formatted by the server (e.g. `"$12.50"`,
/// `"Mar 4, 2024"`), so they are kept as strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Expense {
    pub date: String,
    pub user: String,
    pub name: String,
    pub price: String,
}

impl Expense {
    pub fn new(
        date: impl Into<String>,
        user: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            user: user.into(),
            name: name.into(),
            price: price.into(),
        }
    }
}

/// Pagination links attached to a page of expenses
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Links {
    /// URL of the following page; absent on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// One page of expenses, newest first
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpensePage {
    /// Required; a payload without it is malformed
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub links: Links,
}

impl ExpensePage {
    pub fn new(expenses: Vec<Expense>, next: Option<String>) -> Self {
        Self {
            expenses,
            links: Links { next },
        }
    }

    /// Builder method: set the next-page link
    pub fn next(mut self, url: impl Into<String>) -> Self {
        self.links.next = Some(url.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Split into the rows to render and the new pagination cursor
    pub fn into_parts(self) -> (Vec<Expense>, Option<String>) {
        (self.expenses, self.links.next)
    }
}
