//! Plain-text tables for list pages.

use std::fmt;

use crate::hooks::FetchState;
use crate::resources::{ViewKey, ViewRow};

pub const EMPTY_MESSAGE: &str = "No records found";

/// A record that can be shown as one table row.
pub trait Tabular {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    pub fn from_records<T: Tabular>(records: &[T]) -> Self {
        Self {
            headers: T::headers().iter().map(|h| h.to_string()).collect(),
            rows: records.iter().map(Tabular::cells).collect(),
        }
    }

    pub fn from_view(columns: &[ViewKey], rows: &[ViewRow]) -> Self {
        Self {
            headers: columns.iter().map(ViewKey::title).collect(),
            rows: rows
                .iter()
                .map(|row| columns.iter().map(|key| row.text(key)).collect())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(len),
                    None => widths.push(len),
                }
            }
        }
        widths
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let line = widths
        .iter()
        .enumerate()
        .map(|(i, w)| format!("{:<w$}", cells.get(i).map(String::as_str).unwrap_or(""), w = *w))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(f, "{}", line.trim_end())
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        write_row(f, &self.headers, &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_row(f, &rule, &widths)?;
        for row in &self.rows {
            write_row(f, row, &widths)?;
        }
        Ok(())
    }
}

/// What a list page shows for a given fetch state.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Loading,
    Error(String),
    Empty,
    Table(TableView),
}

impl PageView {
    /// Loading wins over everything, then errors; an empty list is never an error.
    pub fn from_state<T: Tabular>(state: &FetchState<Vec<T>>) -> Self {
        Self::build(state, TableView::from_records)
    }

    pub fn from_view_state(state: &FetchState<Vec<ViewRow>>, columns: &[ViewKey]) -> Self {
        Self::build(state, |rows| TableView::from_view(columns, rows))
    }

    fn build<T>(state: &FetchState<Vec<T>>, table: impl FnOnce(&[T]) -> TableView) -> Self {
        if state.loading {
            return PageView::Loading;
        }
        if let Some(message) = &state.error {
            return PageView::Error(message.clone());
        }
        match &state.data {
            Some(records) if !records.is_empty() => PageView::Table(table(records)),
            _ => PageView::Empty,
        }
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageView::Loading => writeln!(f, "Loading..."),
            PageView::Error(message) => writeln!(f, "Error: {}", message),
            PageView::Empty => writeln!(f, "{}", EMPTY_MESSAGE),
            PageView::Table(table) => write!(f, "{}", table),
        }
    }
}
