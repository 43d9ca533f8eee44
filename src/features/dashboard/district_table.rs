//! District Table
//!
//! District breakdown for the selected vendor badge, rendered through the
//! DataTable composite. Exactly one row is highlighted at a time, driven by
//! the drill-down selection; on the non-working branch a row click also
//! loads that district's block faults.

use gpui::{
    div, prelude::*, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::{Column, DataTable};
use crate::domain::district::DistrictSummaryRow;
use crate::features::dashboard::controller::DashboardController;
use crate::i18n::{t, Locale};
use crate::theme::colors::SwColors;

/// Index of the row matching the drill-down's selected district
fn selected_index(rows: &[DistrictSummaryRow], district: Option<&str>) -> Option<usize> {
    let district = district?;
    rows.iter().position(|row| row.district == district)
}

/// District breakdown table component
pub struct DistrictTable {
    entities: AppEntities,
    table: Entity<DataTable<DistrictSummaryRow>>,
}

impl DistrictTable {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let locale = entities.i18n.read(cx).locale;

        let table = cx.new(|cx| {
            let mut table = DataTable::<DistrictSummaryRow>::new(cx);
            table.set_columns(Self::create_columns(locale));
            table.set_empty_message(t(locale, "table-no-data"));
            table
        });

        // Row clicks resolve their district from the table's own rows
        let controller = DashboardController::new(entities.clone());
        let weak_table = table.downgrade();
        table.update(cx, |table, _cx| {
            table.on_row_click(move |index, _window, cx| {
                let Some(table) = weak_table.upgrade() else {
                    return;
                };
                let district = table.read(cx).rows().get(index).map(|r| r.district.clone());
                if let Some(district) = district {
                    controller.select_district(district, cx);
                }
            });
        });

        // Rows and loading state follow the dashboard; the selection is
        // reapplied after every replacement since set_rows discards it.
        let table_clone = table.clone();
        let drilldown = entities.drilldown.clone();
        cx.observe(&entities.dashboard, move |_this, dashboard, cx| {
            let (rows, loading) = {
                let state = dashboard.read(cx);
                (state.district_rows.clone(), state.districts_loading)
            };
            let district = drilldown.read(cx).district().map(str::to_string);
            table_clone.update(cx, |table, cx| {
                table.set_rows(rows);
                table.set_loading(loading);
                let index = selected_index(table.rows(), district.as_deref());
                table.set_selected(index);
                cx.notify();
            });
        })
        .detach();

        // Selection highlight follows the drill-down; the panel title does too
        let table_clone = table.clone();
        cx.observe(&entities.drilldown, move |_this, drilldown, cx| {
            let district = drilldown.read(cx).district().map(str::to_string);
            table_clone.update(cx, |table, cx| {
                let index = selected_index(table.rows(), district.as_deref());
                if table.selected() != index {
                    table.set_selected(index);
                    cx.notify();
                }
            });
            cx.notify();
        })
        .detach();

        // Column headers and the empty message depend on the locale
        let table_clone = table.clone();
        cx.observe(&entities.i18n, move |_this, i18n, cx| {
            let locale = i18n.read(cx).locale;
            table_clone.update(cx, |table, cx| {
                table.set_columns(Self::create_columns(locale));
                table.set_empty_message(t(locale, "table-no-data"));
                cx.notify();
            });
            cx.notify();
        })
        .detach();

        Self { entities, table }
    }

    fn create_columns(locale: Locale) -> Vec<Column<DistrictSummaryRow>> {
        vec![
            Column::new(
                "district",
                t(locale, "col-district"),
                |row: &DistrictSummaryRow| {
                    div()
                        .text_sm()
                        .child(row.district.clone())
                        .into_any_element()
                },
            ),
            Column::new(
                "installed",
                t(locale, "col-installed"),
                |row: &DistrictSummaryRow| {
                    div()
                        .text_sm()
                        .child(row.total_installed.to_string())
                        .into_any_element()
                },
            )
            .fixed_width(90.0),
            Column::new(
                "working",
                t(locale, "col-working"),
                |row: &DistrictSummaryRow| {
                    div()
                        .text_sm()
                        .text_color(SwColors::working())
                        .child(row.working.to_string())
                        .into_any_element()
                },
            )
            .fixed_width(90.0),
            Column::new(
                "non_working",
                t(locale, "col-not-working"),
                |row: &DistrictSummaryRow| {
                    div()
                        .text_sm()
                        .text_color(SwColors::non_working())
                        .child(row.non_working.to_string())
                        .into_any_element()
                },
            )
            .fixed_width(110.0),
            Column::new(
                "agency",
                t(locale, "col-agency"),
                |row: &DistrictSummaryRow| {
                    div()
                        .text_sm()
                        .text_color(SwColors::text_secondary())
                        .child(row.agency.clone())
                        .into_any_element()
                },
            )
            .fixed_width(120.0),
        ]
    }
}

impl Render for DistrictTable {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let drilldown = self.entities.drilldown.read(cx);

        let title = match (drilldown.vendor(), drilldown.status_tag()) {
            (Some(vendor), Some(tag)) => {
                format!("{} · {vendor} ({tag})", t(locale, "district-title"))
            }
            _ => t(locale, "district-title").to_string(),
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
            .child(div().h(gpui::px(240.0)).child(self.table.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(district: &str) -> DistrictSummaryRow {
        serde_json::from_str(&format!(
            r#"{{"district": "{district}", "total_installed": 5}}"#
        ))
        .expect("row")
    }

    #[test]
    fn test_selected_index_matches_district() {
        let rows = vec![row("Vaishali"), row("Samastipur"), row("Darbhanga")];
        assert_eq!(selected_index(&rows, Some("Samastipur")), Some(1));
        assert_eq!(selected_index(&rows, Some("Vaishali")), Some(0));
    }

    #[test]
    fn test_selected_index_none_without_selection() {
        let rows = vec![row("Vaishali")];
        assert_eq!(selected_index(&rows, None), None);
    }

    #[test]
    fn test_selected_index_none_for_absent_district() {
        // selection can outlive the row set while a refresh is in flight
        let rows = vec![row("Vaishali")];
        assert_eq!(selected_index(&rows, Some("Samastipur")), None);
        assert_eq!(selected_index(&[], Some("Vaishali")), None);
    }
}
