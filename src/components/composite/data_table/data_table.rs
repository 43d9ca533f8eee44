//! DataTable Component
//!
//! A full-replace data table: rows and columns are swapped wholesale on every
//! repopulation, never diffed. Supports single-row selection.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, Context, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use super::column::{Column, ColumnWidth};
use crate::theme::colors::SwColors;

/// DataTable component
pub struct DataTable<R: Clone + Send + Sync + 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    row_height: f32,
    header_height: f32,
    loading: bool,
    empty_message: SharedString,
    selected: Option<usize>,
    on_row_click: Option<Rc<dyn Fn(usize, &mut Window, &mut App)>>,
}

impl<R: Clone + Send + Sync + 'static> DataTable<R> {
    /// Create a new data table
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            row_height: 36.0,
            header_height: 40.0,
            loading: false,
            empty_message: "No data".into(),
            selected: None,
            on_row_click: None,
        }
    }

    /// Replace the columns
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
    }

    /// Replace the rows; any previous selection is discarded
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.selected = None;
    }

    /// Set loading state
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Set the empty message
    pub fn set_empty_message(&mut self, message: impl Into<SharedString>) {
        self.empty_message = message.into();
    }

    /// Highlight a row; exactly one row is highlighted at a time
    pub fn set_selected(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.rows.len());
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Set the row click handler
    pub fn on_row_click(&mut self, handler: impl Fn(usize, &mut Window, &mut App) + 'static) {
        self.on_row_click = Some(Rc::new(handler));
    }

    fn column_width_style(&self, width: &ColumnWidth) -> f32 {
        match width {
            ColumnWidth::Fixed(w) => *w,
            ColumnWidth::Flex { min } => min.unwrap_or(100.0),
        }
    }

    /// Render the header row
    fn render_header(&self) -> impl IntoElement {
        div()
            .h(px(self.header_height))
            .w_full()
            .flex()
            .items_center()
            .bg(SwColors::table_header_bg())
            .border_b_1()
            .border_color(SwColors::border())
            .children(self.columns.iter().map(|col| {
                let width = self.column_width_style(&col.width);
                div()
                    .id(col.id.clone())
                    .w(px(width))
                    .px_3()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(SwColors::text_primary())
                    .child(col.label.clone())
            }))
    }

    /// Render a data row
    fn render_row(&self, row: &R, index: usize) -> impl IntoElement {
        let bg = if self.selected == Some(index) {
            SwColors::table_row_selected()
        } else if index % 2 == 0 {
            SwColors::content_bg()
        } else {
            SwColors::table_row_alt()
        };

        let mut tr = div()
            .id(("data-table-row", index))
            .h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .hover(|s| s.bg(SwColors::table_row_hover()))
            .border_b_1()
            .border_color(SwColors::border())
            .children(self.columns.iter().map(|col| {
                let width = self.column_width_style(&col.width);
                let cell_content = col.render_cell(row);
                div()
                    .w(px(width))
                    .px_3()
                    .text_sm()
                    .text_color(SwColors::text_primary())
                    .overflow_hidden()
                    .child(cell_content)
            }));

        if let Some(handler) = self.on_row_click.clone() {
            tr = tr
                .cursor_pointer()
                .on_click(move |_event, window, cx| handler(index, window, cx));
        }

        tr
    }

    /// Render empty state
    fn render_empty(&self) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .py_4()
            .text_color(SwColors::text_muted())
            .child(self.empty_message.clone())
    }

    /// Render loading state
    fn render_loading(&self) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .py_4()
            .text_color(SwColors::text_muted())
            .child("Loading...")
    }
}

impl<R: Clone + Send + Sync + 'static> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let mut table = div()
            .size_full()
            .flex()
            .flex_col()
            .bg(SwColors::content_bg())
            .border_1()
            .border_color(SwColors::border())
            .rounded_md()
            .overflow_hidden();

        table = table.child(self.render_header());

        if self.loading {
            table = table.child(self.render_loading());
        } else if self.rows.is_empty() {
            table = table.child(self.render_empty());
        } else {
            let rows_content = div()
                .id("data-table-rows")
                .flex_1()
                .overflow_y_scroll()
                .children(
                    self.rows
                        .iter()
                        .enumerate()
                        .map(|(i, row)| self.render_row(row, i)),
                );
            table = table.child(rows_content);
        }

        table
    }
}
