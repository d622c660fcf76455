//! Render components for each UI region.
//!
//! Layout, top to bottom: header, optional search bar, body, footer. The body
//! splits into the card list on the left and a chart-over-map column on the
//! right; on narrow terminals the right column is skipped entirely and the
//! list takes the full width. The detail popup renders last, over everything.

mod chart;
mod detail;
mod empty;
mod footer;
mod header;
mod list;
mod map;
mod search;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::UiViewModel;

/// Minimum terminal width at which the chart and map column is shown.
const SIDE_PANEL_MIN_WIDTH: u16 = 60;

/// Draws a complete frame from a view model snapshot.
pub fn render(frame: &mut Frame, vm: &UiViewModel, theme: &Theme) {
    let mut constraints = vec![Constraint::Length(3)];
    if vm.search_bar.is_some() {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(3));

    let rows = Layout::vertical(constraints).split(frame.area());

    let mut row = 0;
    header::render(frame, rows[row], &vm.header, theme);
    row += 1;

    if let Some(search_bar) = &vm.search_bar {
        search::render(frame, rows[row], search_bar, theme);
        row += 1;
    }

    render_body(frame, rows[row], vm, theme);
    footer::render(frame, rows[row + 1], &vm.footer, theme);

    if let Some(detail_view) = &vm.detail {
        detail::render(frame, crate::ui::popup_area(frame.area()), detail_view, theme);
    }
}

fn render_body(frame: &mut Frame, area: Rect, vm: &UiViewModel, theme: &Theme) {
    let list_area = if area.width >= SIDE_PANEL_MIN_WIDTH {
        let [list_area, side_area] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(area);
        let [chart_area, map_area] =
            Layout::vertical([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(side_area);

        chart::render(frame, chart_area, &vm.chart, theme);
        map::render(frame, map_area, &vm.map, theme);
        list_area
    } else {
        area
    };

    match &vm.empty_state {
        Some(empty_state) => empty::render(frame, list_area, empty_state, theme),
        None => list::render(frame, list_area, vm, theme),
    }
}
