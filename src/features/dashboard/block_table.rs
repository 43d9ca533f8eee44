//! Block Fault Table
//!
//! Per-station fault detail for the selected district. Column set follows
//! the sensor type: rain gauges only show rainfall, weather stations the
//! full suite.

use gpui::{
    div, prelude::*, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::{Column, DataTable};
use crate::domain::fault::{visible_columns, BlockFaultRow};
use crate::domain::filter::SensorType;
use crate::i18n::{t, Locale};
use crate::theme::colors::SwColors;

/// Block fault table component
pub struct BlockTable {
    entities: AppEntities,
    table: Entity<DataTable<BlockFaultRow>>,
}

impl BlockTable {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let locale = entities.i18n.read(cx).locale;
        let sensor_type = entities.filter.read(cx).sensor_type;

        let table = cx.new(|cx| {
            let mut table = DataTable::<BlockFaultRow>::new(cx);
            table.set_columns(Self::create_columns(locale, sensor_type));
            table.set_empty_message(t(locale, "table-no-data"));
            table
        });

        // Observe dashboard data for rows and loading state
        let table_clone = table.clone();
        cx.observe(&entities.dashboard, move |_this, dashboard, cx| {
            let (rows, loading) = {
                let state = dashboard.read(cx);
                (state.fault_rows.clone(), state.faults_loading)
            };
            table_clone.update(cx, |table, cx| {
                table.set_rows(rows);
                table.set_loading(loading);
                cx.notify();
            });
        })
        .detach();

        // Column set depends on the sensor type filter
        let table_clone = table.clone();
        let i18n = entities.i18n.clone();
        cx.observe(&entities.filter, move |_this, filter, cx| {
            let sensor_type = filter.read(cx).sensor_type;
            let locale = i18n.read(cx).locale;
            table_clone.update(cx, |table, cx| {
                table.set_columns(Self::create_columns(locale, sensor_type));
                cx.notify();
            });
        })
        .detach();

        // Column headers depend on the locale
        let table_clone = table.clone();
        let filter = entities.filter.clone();
        cx.observe(&entities.i18n, move |_this, i18n, cx| {
            let locale = i18n.read(cx).locale;
            let sensor_type = filter.read(cx).sensor_type;
            table_clone.update(cx, |table, cx| {
                table.set_columns(Self::create_columns(locale, sensor_type));
                table.set_empty_message(t(locale, "table-no-data"));
                cx.notify();
            });
        })
        .detach();

        cx.observe(&entities.drilldown, |_this, _, cx| cx.notify())
            .detach();

        Self { entities, table }
    }

    fn create_columns(locale: Locale, sensor_type: SensorType) -> Vec<Column<BlockFaultRow>> {
        visible_columns(sensor_type)
            .iter()
            .map(|&col| {
                let width = match col.key() {
                    "block" => 140.0,
                    "station_id" => 110.0,
                    "agency" => 120.0,
                    _ => 95.0,
                };
                Column::new(col.key(), t(locale, col.title_key()), move |row: &BlockFaultRow| {
                    div()
                        .text_sm()
                        .child(row.display(col))
                        .into_any_element()
                })
                .fixed_width(width)
            })
            .collect()
    }
}

impl Render for BlockTable {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let district = self
            .entities
            .drilldown
            .read(cx)
            .district()
            .map(str::to_string);

        let title = match district {
            Some(district) => format!("{} · {district}", t(locale, "block-title")),
            None => t(locale, "block-title").to_string(),
        };

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
                    .child(title),
            )
            .child(div().h(gpui::px(280.0)).child(self.table.clone()))
    }
}
