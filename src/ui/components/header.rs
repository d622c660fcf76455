//! Title bar with the active filter summary.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

pub fn render(frame: &mut Frame, area: Rect, header: &HeaderInfo, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Theme::color(&theme.colors.border)));

    let line = Line::from(vec![
        ratatui::text::Span::styled(
            header.title.clone(),
            Style::default()
                .fg(Theme::color(&theme.colors.header_fg))
                .add_modifier(Modifier::BOLD),
        ),
        ratatui::text::Span::styled(
            header.filter_summary.clone(),
            Style::default().fg(Theme::color(&theme.colors.text_dim)),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
