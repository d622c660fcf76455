//! Specialty distribution bar chart.
//!
//! Horizontal bars, one per specialty present in the filtered set, ordered by
//! the global specialty order so a given specialty keeps its position as
//! filters change. Bar colors cycle through the theme's chart palette.

use ratatui::layout::{Direction, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use ratatui::Frame;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::ChartView;

pub fn render(frame: &mut Frame, area: Rect, chart: &ChartView, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Theme::color(&theme.colors.border)))
        .title(" Doctors per specialty ");

    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .enumerate()
        .map(|(idx, (specialty, count))| {
            Bar::default()
                .value(*count)
                .label(Line::from(specialty.as_str()))
                .style(Style::default().fg(theme.chart_color(idx)))
                .value_style(
                    Style::default()
                        .fg(Theme::color(&theme.colors.selection_fg))
                        .bg(theme.chart_color(idx)),
                )
        })
        .collect();

    let widget = BarChart::default()
        .direction(Direction::Horizontal)
        .block(block)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(widget, area);
}
