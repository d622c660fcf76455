//! Detail popup for a single record.
//!
//! Drawn centered over the rest of the UI with the area cleared first. The
//! popup repeats every record field plus the call target and notes; the input
//! layer closes it on Esc, Enter, q, or a click outside its rect.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

pub fn render(frame: &mut Frame, area: Rect, detail: &DetailView, theme: &Theme) {
    frame.render_widget(Clear, area);

    let normal = Style::default().fg(Theme::color(&theme.colors.text_normal));
    let dim = Style::default().fg(Theme::color(&theme.colors.text_dim));
    let label = |text: &'static str| Span::styled(text, dim);

    let lines = vec![
        Line::from(Span::styled(
            detail.name.clone(),
            Style::default()
                .fg(Theme::color(&theme.colors.header_fg))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            detail.specialty.clone(),
            Style::default().fg(Theme::color(&theme.colors.badge_fg)),
        )),
        Line::from(""),
        Line::from(vec![label("Clinic:   "), Span::styled(detail.clinic.clone(), normal)]),
        Line::from(vec![label("Timings:  "), Span::styled(detail.timings.clone(), normal)]),
        Line::from(vec![
            label("Phone:    "),
            Span::styled(
                detail.phone.clone(),
                Style::default().fg(Theme::color(&theme.colors.phone_fg)),
            ),
            Span::styled(format!("  ({})", detail.tel_uri), dim),
        ]),
        Line::from(vec![
            label("Tele:     "),
            Span::styled(
                detail.tele_label.clone(),
                Style::default().fg(Theme::color(&theme.colors.tele_fg)),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(detail.notes.clone(), normal)),
        Line::from(""),
        Line::from(Span::styled("c: call  Esc: close", dim)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Theme::color(&theme.colors.search_bar_border)))
        .title(format!(" Doctor #{} ", detail.id));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
