//! Query input bar, shown while search mode is active.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

pub fn render(frame: &mut Frame, area: Rect, search_bar: &SearchBarInfo, theme: &Theme) {
    // The border brightens while the input has focus.
    let border_color = if search_bar.typing {
        Theme::color(&theme.colors.search_bar_border)
    } else {
        Theme::color(&theme.colors.border)
    };

    let cursor = if search_bar.typing { "█" } else { "" };
    let line = Line::from(vec![
        Span::styled(" / ", Style::default().fg(Theme::color(&theme.colors.text_dim))),
        Span::styled(
            search_bar.query.clone(),
            Style::default().fg(Theme::color(&theme.colors.text_normal)),
        ),
        Span::styled(cursor, Style::default().fg(Theme::color(&theme.colors.search_bar_border))),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Search ");

    frame.render_widget(Paragraph::new(line).block(block), area);
}
