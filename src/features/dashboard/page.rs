//! Dashboard Page
//!
//! Assembles the filter bar and all dashboard panels. The drill-down panels
//! appear and disappear based on the selection state machine.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, InteractiveElement, IntoElement,
    ParentElement, Render, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::Button;
use crate::domain::filter::{SensorType, StatusFilter};
use crate::features::dashboard::block_table::BlockTable;
use crate::features::dashboard::controller::DashboardController;
use crate::features::dashboard::district_table::DistrictTable;
use crate::features::dashboard::map_panel::MapPanel;
use crate::features::dashboard::summary_panel::SummaryPanel;
use crate::features::dashboard::vendor_table::VendorTable;
use crate::i18n::t;
use crate::theme::colors::SwColors;
use crate::utils::format::format_date;

/// Dashboard page component
pub struct DashboardPage {
    entities: AppEntities,
    controller: DashboardController,
    summary_panel: Entity<SummaryPanel>,
    map_panel: Entity<MapPanel>,
    vendor_table: Entity<VendorTable>,
    district_table: Entity<DistrictTable>,
    block_table: Entity<BlockTable>,
}

impl DashboardPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = DashboardController::new(entities.clone());

        let summary_panel = cx.new(|cx| SummaryPanel::new(entities.clone(), cx));
        let map_panel = cx.new(|cx| MapPanel::new(entities.clone(), cx));
        let vendor_table = cx.new(|cx| VendorTable::new(entities.clone(), cx));
        let district_table = cx.new(|cx| DistrictTable::new(entities.clone(), cx));
        let block_table = cx.new(|cx| BlockTable::new(entities.clone(), cx));

        cx.observe(&entities.filter, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.drilldown, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller,
            summary_panel,
            map_panel,
            vendor_table,
            district_table,
            block_table,
        }
    }

    fn render_type_toggle(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let active = self.entities.filter.read(cx).sensor_type;

        let type_button = |sensor_type: SensorType, cx: &mut Context<Self>| {
            let button = if active == sensor_type {
                Button::primary(("type-toggle", sensor_type as usize), sensor_type.label())
            } else {
                Button::outline(("type-toggle", sensor_type as usize), sensor_type.label())
            };
            button.on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                this.controller.set_sensor_type(sensor_type, cx);
            }))
        };

        div()
            .flex()
            .items_center()
            .gap_2()
            .child(type_button(SensorType::Aws, cx))
            .child(type_button(SensorType::Arg, cx))
    }

    fn render_date_stepper(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let filter = self.entities.filter.read(cx);
        let date_label = format_date(&filter.date);
        let locale = self.entities.i18n.read(cx).locale;

        div()
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .text_sm()
                    .text_color(SwColors::text_secondary())
                    .child(t(locale, "filter-date")),
            )
            .child(
                div()
                    .id("date-prev")
                    .px_2()
                    .py_1()
                    .rounded_md()
                    .border_1()
                    .border_color(SwColors::input_border())
                    .text_sm()
                    .text_color(SwColors::text_primary())
                    .cursor_pointer()
                    .hover(|s| s.bg(SwColors::table_row_hover()))
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.controller.prev_day(cx);
                    }))
                    .child(format!("◀ {}", t(locale, "filter-prev-day"))),
            )
            .child(
                div()
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .bg(SwColors::input_bg())
                    .border_1()
                    .border_color(SwColors::input_border())
                    .text_sm()
                    .text_color(SwColors::text_primary())
                    .child(date_label),
            )
            .child(
                div()
                    .id("date-next")
                    .px_2()
                    .py_1()
                    .rounded_md()
                    .border_1()
                    .border_color(SwColors::input_border())
                    .text_sm()
                    .text_color(SwColors::text_primary())
                    .cursor_pointer()
                    .hover(|s| s.bg(SwColors::table_row_hover()))
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.controller.next_day(cx);
                    }))
                    .child(format!("{} ▶", t(locale, "filter-next-day"))),
            )
    }

    fn render_status_chips(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let active = self.entities.filter.read(cx).status_filter;
        let locale = self.entities.i18n.read(cx).locale;

        div()
            .flex()
            .items_center()
            .gap_2()
            .children(StatusFilter::all().iter().enumerate().map(|(i, &status)| {
                let accent = match status {
                    StatusFilter::All => SwColors::accent_blue(),
                    StatusFilter::Working => SwColors::working(),
                    StatusFilter::NonWorking => SwColors::non_working(),
                };
                let is_active = active == status;

                let mut chip = div()
                    .id(("status-chip", i))
                    .px_3()
                    .py_1()
                    .rounded_full()
                    .text_sm()
                    .cursor_pointer()
                    .border_1()
                    .border_color(accent)
                    .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                        this.controller.set_status_filter(status, cx);
                    }))
                    .child(t(locale, status.title_key()));

                if is_active {
                    chip = chip.bg(accent).text_color(SwColors::text_light());
                } else {
                    chip = chip
                        .text_color(accent)
                        .hover(|s| s.bg(SwColors::table_row_hover()));
                }

                chip
            }))
    }

    fn render_filter_bar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        // only a non-working district selection has fault detail to export
        let exportable = {
            let dd = self.entities.drilldown.read(cx);
            dd.district().is_some() && dd.block_panel_visible()
        };

        div()
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .p_3()
            .bg(SwColors::content_bg())
            .border_1()
            .border_color(SwColors::border())
            .rounded_md()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(self.render_type_toggle(cx))
                    .child(self.render_date_stepper(cx))
                    .child(self.render_status_chips(cx)),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        Button::outline("refresh-btn", t(locale, "action-refresh")).on_click(
                            cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.refresh(cx);
                            }),
                        ),
                    )
                    .child(
                        Button::primary("export-btn", t(locale, "action-export"))
                            .disabled(!exportable)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.export_report(cx);
                            })),
                    ),
            )
    }
}

impl Render for DashboardPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let drilldown = self.entities.drilldown.read(cx).clone();

        let mut page = div()
            .id("dashboard-page")
            .size_full()
            .flex()
            .flex_col()
            .overflow_y_scroll()
            .p_4()
            .gap_4()
            .child(self.render_filter_bar(cx))
            .child(
                div()
                    .w_full()
                    .flex()
                    .gap_4()
                    .child(div().w(px(320.0)).child(self.summary_panel.clone()))
                    .child(div().flex_1().child(self.map_panel.clone())),
            )
            .child(self.vendor_table.clone());

        if drilldown.district_panel_visible() {
            page = page.child(self.district_table.clone());
        }

        if drilldown.block_panel_visible() {
            page = page.child(self.block_table.clone());
        }

        page
    }
}
