//! Summary Panel
//!
//! Working / not-working totals with a two-slice proportion chart.

use gpui::{
    div, prelude::*, px, relative, Context, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::domain::summary::slice_percentages;
use crate::i18n::t;
use crate::theme::colors::SwColors;

/// Summary panel component
pub struct SummaryPanel {
    entities: AppEntities,
}

impl SummaryPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.dashboard, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_count(
        &self,
        label: gpui::SharedString,
        count: u64,
        percent: u8,
        color: gpui::Rgba,
    ) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .items_center()
            .gap_1()
            .child(
                div()
                    .text_size(px(28.0))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(color)
                    .child(count.to_string()),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(SwColors::text_secondary())
                    .child(format!("{label} ({percent}%)")),
            )
    }
}

impl Render for SummaryPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let dashboard = self.entities.dashboard.read(cx);

        let (working, not_working) = dashboard
            .summary
            .as_ref()
            .map(|s| (s.working, s.not_working))
            .unwrap_or((0, 0));
        let (working_pct, not_working_pct) = slice_percentages(working, not_working);
        let loading = dashboard.summary_loading;

        let mut panel = div()
            .flex()
            .flex_col()
            .gap_3()
            .p_4()
            .bg(SwColors::content_bg())
            .border_1()
            .border_color(SwColors::border())
            .rounded_md()
            .child(
                div()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(SwColors::text_primary())
                    .child(t(locale, "summary-title")),
            );

        if loading && dashboard.summary.is_none() {
            return panel.child(
                div()
                    .py_4()
                    .text_sm()
                    .text_color(SwColors::text_muted())
                    .child(t(locale, "table-loading")),
            );
        }

        panel = panel
            .child(
                div()
                    .flex()
                    .justify_around()
                    .child(self.render_count(
                        t(locale, "summary-working"),
                        working,
                        working_pct,
                        SwColors::working(),
                    ))
                    .child(self.render_count(
                        t(locale, "summary-not-working"),
                        not_working,
                        not_working_pct,
                        SwColors::non_working(),
                    )),
            )
            // Proportion bar: two slices, widths from the floored percentages
            .child(
                div()
                    .h(px(14.0))
                    .w_full()
                    .flex()
                    .rounded_sm()
                    .overflow_hidden()
                    .bg(SwColors::border())
                    .child(
                        div()
                            .h_full()
                            .w(relative(working_pct as f32 / 100.0))
                            .bg(SwColors::working()),
                    )
                    .child(
                        div()
                            .h_full()
                            .w(relative(not_working_pct as f32 / 100.0))
                            .bg(SwColors::non_working()),
                    ),
            );

        panel
    }
}
