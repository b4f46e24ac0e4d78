//! Expense list renderer
//!
//! Appends expenses to a container, opening a new date header and table
//! whenever the date changes from the previous expense. Groups are never
//! merged after the fact: dates `[A, B, A]` produce three tables.

use crate::error::PageResult;
use crate::model::Expense;

pub const DATE_CLASS: &str = "date";
pub const TABLE_CLASS: &str = "box table";
pub const ROW_CLASS: &str = "row";
pub const USER_CELL_CLASS: &str = "cell user";
pub const NAME_CELL_CLASS: &str = "cell name";
pub const PRICE_CELL_CLASS: &str = "cell price";

/// The slice of a document the feed writes into
///
/// The browser build implements this over `web_sys::Element`; tests use an
/// in-memory tree.
pub trait Document {
    type Node: Clone;

    /// Create a detached block element with the given class and optional text
    fn create_block(&self, class: &str, text: Option<&str>) -> PageResult<Self::Node>;

    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> PageResult<()>;

    fn set_text(&self, node: &Self::Node, text: &str) -> PageResult<()>;
}

/// Append-only renderer for the expense list
pub struct ExpenseRenderer<D: Document> {
    last_date: Option<String>,
    current_table: Option<D::Node>,
}

impl<D: Document> ExpenseRenderer<D> {
    pub fn new() -> Self {
        Self {
            last_date: None,
            current_table: None,
        }
    }

    /// Append one expense row, starting a new date group if needed
    pub fn append(&mut self, document: &D, container: &D::Node, expense: &Expense) -> PageResult<()> {
        let table = match self.current_table.clone() {
            Some(table) if self.last_date.as_deref() == Some(expense.date.as_str()) => table,
            _ => self.open_group(document, container, &expense.date)?,
        };

        let row = document.create_block(ROW_CLASS, None)?;
        for (class, text) in [
            (USER_CELL_CLASS, &expense.user),
            (NAME_CELL_CLASS, &expense.name),
            (PRICE_CELL_CLASS, &expense.price),
        ] {
            let cell = document.create_block(class, Some(text))?;
            document.append_child(&row, &cell)?;
        }
        document.append_child(&table, &row)
    }

    /// Date of the most recently appended expense
    pub fn last_date(&self) -> Option<&str> {
        self.last_date.as_deref()
    }

    fn open_group(&mut self, document: &D, container: &D::Node, date: &str) -> PageResult<D::Node> {
        let header = document.create_block(DATE_CLASS, Some(date))?;
        document.append_child(container, &header)?;

        let table = document.create_block(TABLE_CLASS, None)?;
        document.append_child(container, &table)?;

        self.last_date = Some(date.to_string());
        self.current_table = Some(table.clone());
        Ok(table)
    }
}

impl<D: Document> Default for ExpenseRenderer<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryDocument;

    fn render(dates: &[&str]) -> (MemoryDocument, usize) {
        let document = MemoryDocument::new();
        let container = document.root("container");
        let mut renderer = ExpenseRenderer::new();

        for (i, date) in dates.iter().enumerate() {
            let expense = Expense::new(*date, "Ann", format!("Item {i}"), "$1.00");
            renderer.append(&document, &container, &expense).unwrap();
        }
        (document, container)
    }

    #[test]
    fn test_same_date_shares_one_group() {
        let (document, container) = render(&["Mar 4", "Mar 4", "Mar 4", "Mar 4"]);

        let children = document.children(&container);
        assert_eq!(children.len(), 2);
        assert_eq!(document.class(&children[0]), DATE_CLASS);
        assert_eq!(document.text(&children[0]), "Mar 4");
        assert_eq!(document.class(&children[1]), TABLE_CLASS);
        assert_eq!(document.children(&children[1]).len(), 4);
    }

    #[test]
    fn test_interrupted_date_starts_new_group() {
        let (document, container) = render(&["A", "B", "A"]);

        let headers: Vec<String> = document
            .find_by_class(&container, DATE_CLASS)
            .iter()
            .map(|node| document.text(node))
            .collect();
        assert_eq!(headers, vec!["A", "B", "A"]);
        assert_eq!(document.find_by_class(&container, TABLE_CLASS).len(), 3);
    }

    #[test]
    fn test_one_group_per_run() {
        let (document, container) = render(&["A", "A", "B", "C", "C", "C", "A"]);

        let tables = document.find_by_class(&container, TABLE_CLASS);
        let sizes: Vec<usize> = tables.iter().map(|t| document.children(t).len()).collect();
        assert_eq!(sizes, vec![2, 1, 3, 1]);
    }

    #[test]
    fn test_row_cells() {
        let document = MemoryDocument::new();
        let container = document.root("container");
        let mut renderer = ExpenseRenderer::new();
        renderer
            .append(&document, &container, &Expense::new("Mar 4", "Ann", "Milk", "$3.50"))
            .unwrap();

        let rows = document.find_by_class(&container, ROW_CLASS);
        assert_eq!(rows.len(), 1);
        let cells: Vec<(String, String)> = document
            .children(&rows[0])
            .iter()
            .map(|cell| (document.class(cell), document.text(cell)))
            .collect();
        assert_eq!(
            cells,
            vec![
                (USER_CELL_CLASS.to_string(), "Ann".to_string()),
                (NAME_CELL_CLASS.to_string(), "Milk".to_string()),
                (PRICE_CELL_CLASS.to_string(), "$3.50".to_string()),
            ]
        );
        assert_eq!(renderer.last_date(), Some("Mar 4"));
    }

    #[test]
    fn test_empty_date_still_opens_a_group() {
        let (document, container) = render(&[""]);
        assert_eq!(document.find_by_class(&container, DATE_CLASS).len(), 1);
    }
}
