//! Clinic location map, drawn on a braille canvas.
//!
//! One marker per filtered record with coordinates, labeled with the record's
//! initials. The viewport comes from the view model's persisted bounds, so
//! filtering down to zero mapped records leaves the view where it was.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::MapView;

pub fn render(frame: &mut Frame, area: Rect, map: &MapView, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Theme::color(&theme.colors.border)))
        .title(format!(" Clinic locations ({}) ", map.markers.len()));

    let Some(bounds) = map.bounds else {
        // No marker has ever been placed; nothing to frame a viewport around.
        let placeholder = Paragraph::new("No clinic locations available")
            .style(Style::default().fg(Theme::color(&theme.colors.text_dim)))
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(placeholder, area);
        return;
    };

    let marker_color = Theme::color(&theme.colors.map_marker_fg);
    let label_color = Theme::color(&theme.colors.text_normal);

    let coords: Vec<(f64, f64)> = map.markers.iter().map(|m| (m.lon, m.lat)).collect();

    let canvas = Canvas::default()
        .block(block)
        .marker(symbols::Marker::Braille)
        .x_bounds([bounds.min_lon, bounds.max_lon])
        .y_bounds([bounds.min_lat, bounds.max_lat])
        .paint(move |ctx| {
            ctx.draw(&Points {
                coords: &coords,
                color: marker_color,
            });
            for marker in &map.markers {
                ctx.print(
                    marker.lon,
                    marker.lat,
                    ratatui::text::Line::styled(
                        marker.label.clone(),
                        Style::default().fg(label_color),
                    ),
                );
            }
        });

    frame.render_widget(canvas, area);
}
