//! Map Panel
//!
//! Plots station markers on a flat panel using an equirectangular fit of the
//! current marker set's bounding box. Good enough at district scale; no tile
//! imagery is drawn underneath.

use gpui::{
    div, prelude::*, px, relative, ClickEvent, Context, InteractiveElement, IntoElement,
    ParentElement, Render, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::constants::{MAP_EDGE_PADDING, MAP_PANEL_HEIGHT};
use crate::domain::station::StationPoint;
use crate::i18n::t;
use crate::services::service_hub::ServiceHub;
use crate::theme::colors::SwColors;

/// Geographic bounding box of the plotted markers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl GeoBounds {
    /// Fit a bounding box around the given stations
    pub fn fit(stations: &[StationPoint]) -> Option<Self> {
        let first = stations.first()?;
        let mut bounds = Self {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lon: first.lon,
            max_lon: first.lon,
        };
        for s in &stations[1..] {
            bounds.min_lat = bounds.min_lat.min(s.lat);
            bounds.max_lat = bounds.max_lat.max(s.lat);
            bounds.min_lon = bounds.min_lon.min(s.lon);
            bounds.max_lon = bounds.max_lon.max(s.lon);
        }
        Some(bounds)
    }

    /// Project a coordinate into panel-fraction space.
    ///
    /// Returns `(x, y)` in `[0, 1]` with north at the top and the bounding
    /// box inset by the edge padding. A degenerate axis (single station, or
    /// all stations on one meridian) collapses to the center of that axis.
    pub fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        let x = fraction(lon, self.min_lon, self.max_lon);
        let y = 1.0 - fraction(lat, self.min_lat, self.max_lat);
        let inset = 1.0 - 2.0 * MAP_EDGE_PADDING;
        (
            MAP_EDGE_PADDING + x * inset,
            MAP_EDGE_PADDING + y * inset,
        )
    }
}

fn fraction(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span <= f64::EPSILON {
        0.5
    } else {
        ((value - min) / span).clamp(0.0, 1.0)
    }
}

/// Map panel component
pub struct MapPanel {
    entities: AppEntities,
    /// Marker picked by the user; index into the current marker set
    selected: Option<usize>,
}

impl MapPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Marker set replacement invalidates the picked index
        cx.observe(&entities.dashboard, |this, _, cx| {
            this.selected = None;
            cx.notify();
        })
        .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            selected: None,
        }
    }

    fn render_marker(
        &self,
        index: usize,
        station: &StationPoint,
        bounds: &GeoBounds,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let (x, y) = bounds.project(station.lat, station.lon);
        let color = if station.status.is_working() {
            SwColors::working()
        } else {
            SwColors::non_working()
        };
        let picked = self.selected == Some(index);

        div()
            .id(("map-marker", index))
            .absolute()
            .left(relative(x as f32))
            .top(relative(y as f32))
            .size(px(if picked { 12.0 } else { 8.0 }))
            .rounded_full()
            .bg(color)
            .border_1()
            .border_color(if picked {
                SwColors::accent_blue()
            } else {
                gpui::rgba(0xffffffcc)
            })
            .cursor_pointer()
            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                this.selected = Some(index);
                cx.notify();
            }))
    }

    /// Info line for the picked marker: id, district, block, panchayat
    fn render_station_info(&self, station: &StationPoint) -> impl IntoElement {
        let mut parts = vec![station.station_id.clone()];
        if !station.district.is_empty() {
            parts.push(station.district.clone());
        }
        if !station.block.is_empty() {
            parts.push(station.block.clone());
        }
        if let Some(panchayat) = &station.panchayat {
            parts.push(panchayat.clone());
        }

        let color = if station.status.is_working() {
            SwColors::working()
        } else {
            SwColors::non_working()
        };

        div()
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(SwColors::text_primary())
                    .child(parts.join(" · ")),
            )
            .child(
                div()
                    .text_size(px(11.0))
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(color)
                    .child(station.status.as_param()),
            )
    }
}

impl Render for MapPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let stations = self.entities.dashboard.read(cx).stations.clone();

        let canvas = if let Some(bounds) = GeoBounds::fit(&stations) {
            div()
                .relative()
                .flex_1()
                .w_full()
                .bg(gpui::rgb(0xe8f0e8))
                .rounded_sm()
                .overflow_hidden()
                .children(
                    stations
                        .iter()
                        .enumerate()
                        .map(|(i, s)| self.render_marker(i, s, &bounds, cx).into_any_element()),
                )
        } else {
            // No markers to fit; fall back to the configured map center
            let center = cx
                .try_global::<ServiceHub>()
                .map(|hub| hub.config().map)
                .unwrap_or_default();

            div()
                .flex_1()
                .w_full()
                .flex()
                .flex_col()
                .items_center()
                .justify_center()
                .gap_1()
                .bg(gpui::rgb(0xe8f0e8))
                .rounded_sm()
                .child(
                    div()
                        .text_sm()
                        .text_color(SwColors::text_muted())
                        .child(t(locale, "map-no-stations")),
                )
                .child(
                    div()
                        .text_size(px(11.0))
                        .text_color(SwColors::text_muted())
                        .child(format!("{:.4}, {:.4}", center.center_lat, center.center_lon)),
                )
        };

        div()
            .h(px(MAP_PANEL_HEIGHT))
            .w_full()
            .flex()
            .flex_col()
            .gap_2()
            .p_4()
            .bg(SwColors::content_bg())
            .border_1()
            .border_color(SwColors::border())
            .rounded_md()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_sm()
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .text_color(SwColors::text_primary())
                            .child(t(locale, "map-title")),
                    )
                    .child(match self.selected.and_then(|i| stations.get(i)) {
                        Some(station) => self.render_station_info(station).into_any_element(),
                        None => div()
                            .text_size(px(11.0))
                            .text_color(SwColors::text_muted())
                            .child(format!("{} stations", stations.len()))
                            .into_any_element(),
                    }),
            )
            .child(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: &str, lat: f64, lon: f64) -> StationPoint {
        serde_json::from_str(&format!(
            r#"{{"station_id": "{id}", "status": "WORKING", "lat": {lat}, "lon": {lon}}}"#
        ))
        .expect("station")
    }

    #[test]
    fn test_fit_empty_is_none() {
        assert!(GeoBounds::fit(&[]).is_none());
    }

    #[test]
    fn test_fit_covers_all_points() {
        let bounds = GeoBounds::fit(&[
            station("A", 25.0, 85.0),
            station("B", 26.0, 86.5),
            station("C", 25.5, 84.5),
        ])
        .expect("bounds");
        assert_eq!(bounds.min_lat, 25.0);
        assert_eq!(bounds.max_lat, 26.0);
        assert_eq!(bounds.min_lon, 84.5);
        assert_eq!(bounds.max_lon, 86.5);
    }

    #[test]
    fn test_project_corners_respect_padding() {
        let bounds = GeoBounds::fit(&[station("A", 25.0, 85.0), station("B", 26.0, 86.0)])
            .expect("bounds");

        // south-west corner lands bottom-left, inset by the padding
        let (x, y) = bounds.project(25.0, 85.0);
        assert!((x - MAP_EDGE_PADDING).abs() < 1e-9);
        assert!((y - (1.0 - MAP_EDGE_PADDING)).abs() < 1e-9);

        // north-east corner lands top-right
        let (x, y) = bounds.project(26.0, 86.0);
        assert!((x - (1.0 - MAP_EDGE_PADDING)).abs() < 1e-9);
        assert!((y - MAP_EDGE_PADDING).abs() < 1e-9);
    }

    #[test]
    fn test_project_single_point_centers() {
        let bounds = GeoBounds::fit(&[station("A", 25.0, 85.0)]).expect("bounds");
        let (x, y) = bounds.project(25.0, 85.0);
        assert!((x - 0.5).abs() < 1e-9);
        assert!((y - 0.5).abs() < 1e-9);
    }
}
