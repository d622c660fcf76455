//! Placeholder shown when no records match the active filters.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

pub fn render(frame: &mut Frame, area: Rect, empty_state: &EmptyState, theme: &Theme) {
    let lines = vec![
        Line::from(""),
        Line::styled(
            empty_state.message.clone(),
            Style::default().fg(Theme::color(&theme.colors.empty_state_fg)),
        ),
        Line::styled(
            empty_state.subtitle.clone(),
            Style::default().fg(Theme::color(&theme.colors.text_dim)),
        ),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Theme::color(&theme.colors.border)))
        .title(" Doctors (0) ");

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(ratatui::layout::Alignment::Center),
        area,
    );
}
