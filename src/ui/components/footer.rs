//! Status bar: keybinding hints for the current mode, plus the year line.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

pub fn render(frame: &mut Frame, area: Rect, footer: &FooterInfo, theme: &Theme) {
    let dim = Style::default().fg(Theme::color(&theme.colors.text_dim));

    let line = Line::from(vec![
        Span::styled(format!(" {} ", footer.keybindings), dim),
        Span::styled(format!("· © {} MediDex ", footer.year), dim),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Theme::color(&theme.colors.border)));

    frame.render_widget(Paragraph::new(line).block(block), area);
}
