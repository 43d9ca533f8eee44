//! Vendor Table
//!
//! Per-vendor totals with clickable working / non-working count badges.
//! Activating a badge drives the drill-down into that vendor's districts.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::domain::station::Status;
use crate::domain::vendor::VendorSummaryRow;
use crate::features::dashboard::controller::DashboardController;
use crate::i18n::t;
use crate::theme::colors::SwColors;

/// Vendor summary table component
pub struct VendorTable {
    entities: AppEntities,
    controller: DashboardController,
}

impl VendorTable {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = DashboardController::new(entities.clone());

        cx.observe(&entities.dashboard, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.drilldown, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller,
        }
    }

    fn render_badge(
        &self,
        row_index: usize,
        vendor: &str,
        branch: Status,
        count: u64,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let active = self
            .entities
            .drilldown
            .read(cx)
            .matches_vendor(vendor, branch);
        let color = if branch.is_working() {
            SwColors::working()
        } else {
            SwColors::non_working()
        };

        let id = match branch {
            Status::Working => ("vendor-working-badge", row_index),
            Status::NonWorking => ("vendor-non-working-badge", row_index),
        };
        let vendor = vendor.to_string();

        div()
            .id(id)
            .px_3()
            .py_1()
            .rounded_full()
            .bg(color)
            .text_color(SwColors::text_light())
            .text_sm()
            .cursor_pointer()
            .when(active, |s| s.border_2().border_color(SwColors::accent_blue()))
            .hover(|s| s.opacity(0.85))
            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                this.controller.select_vendor(vendor.clone(), branch, cx);
            }))
            .child(count.to_string())
    }

    fn render_row(
        &self,
        index: usize,
        row: &VendorSummaryRow,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let bg = if index % 2 == 0 {
            SwColors::content_bg()
        } else {
            SwColors::table_row_alt()
        };

        div()
            .h(px(40.0))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .border_b_1()
            .border_color(SwColors::border())
            .child(
                div()
                    .flex_1()
                    .px_3()
                    .text_sm()
                    .text_color(SwColors::text_primary())
                    .child(row.vendor.clone()),
            )
            .child(
                div()
                    .w(px(80.0))
                    .px_3()
                    .text_sm()
                    .text_color(SwColors::text_primary())
                    .child(row.total.to_string()),
            )
            .child(
                div().w(px(110.0)).px_3().child(self.render_badge(
                    index,
                    &row.vendor,
                    Status::Working,
                    row.working,
                    cx,
                )),
            )
            .child(
                div().w(px(110.0)).px_3().child(self.render_badge(
                    index,
                    &row.vendor,
                    Status::NonWorking,
                    row.not_working,
                    cx,
                )),
            )
    }

    fn render_header_cell(&self, label: gpui::SharedString, width: Option<f32>) -> impl IntoElement {
        let cell = div()
            .px_3()
            .text_sm()
            .font_weight(gpui::FontWeight::MEDIUM)
            .text_color(SwColors::text_primary())
            .child(label);
        match width {
            Some(w) => cell.w(px(w)),
            None => cell.flex_1(),
        }
    }
}

impl Render for VendorTable {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let dashboard = self.entities.dashboard.read(cx);
        let rows = dashboard.vendor_rows.clone();
        let loading = dashboard.vendors_loading;

        let mut body = div().flex().flex_col().w_full();

        if loading && rows.is_empty() {
            body = body.child(
                div()
                    .py_4()
                    .flex()
                    .justify_center()
                    .text_sm()
                    .text_color(SwColors::text_muted())
                    .child(t(locale, "table-loading")),
            );
        } else if rows.is_empty() {
            body = body.child(
                div()
                    .py_4()
                    .flex()
                    .justify_center()
                    .text_sm()
                    .text_color(SwColors::text_muted())
                    .child(t(locale, "table-no-data")),
            );
        } else {
            body = body.children(
                rows.iter()
                    .enumerate()
                    .map(|(i, row)| self.render_row(i, row, cx).into_any_element()),
            );
        }

        div()
            .flex()
            .flex_col()
            .w_full()
            .bg(SwColors::content_bg())
            .border_1()
            .border_color(SwColors::border())
            .rounded_md()
            .overflow_hidden()
            .child(
                div()
                    .px_3()
                    .py_2()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .bg(SwColors::header_bg())
                    .text_color(SwColors::text_header())
                    .child(t(locale, "vendor-title")),
            )
            .child(
                div()
                    .h(px(36.0))
                    .w_full()
                    .flex()
                    .items_center()
                    .bg(SwColors::table_header_bg())
                    .border_b_1()
                    .border_color(SwColors::border())
                    .child(self.render_header_cell(t(locale, "col-vendor"), None))
                    .child(self.render_header_cell(t(locale, "col-total"), Some(80.0)))
                    .child(self.render_header_cell(t(locale, "col-working"), Some(110.0)))
                    .child(self.render_header_cell(t(locale, "col-not-working"), Some(110.0))),
            )
            .child(body)
    }
}
