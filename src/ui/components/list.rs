//! The provider card list.
//!
//! Each filtered record renders as a two-line card: name with specialty badge
//! and teleconsultation indicator, then clinic, timings, and phone. Query
//! matches within the name and clinic are highlighted.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::ui::helpers::highlight_spans;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ProviderCard, UiViewModel};

pub fn render(frame: &mut Frame, area: Rect, vm: &UiViewModel, theme: &Theme) {
    let items: Vec<ListItem> = vm
        .cards
        .iter()
        .map(|card| card_item(card, theme))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Theme::color(&theme.colors.border)))
        .title(format!(" Doctors ({}) ", vm.cards.len()));

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .fg(Theme::color(&theme.colors.selection_fg))
            .bg(Theme::color(&theme.colors.selection_bg)),
    );

    let mut list_state = ListState::default();
    if !vm.cards.is_empty() {
        list_state.select(Some(vm.selected_index));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn card_item<'a>(card: &'a ProviderCard, theme: &Theme) -> ListItem<'a> {
    let name_style = Style::default()
        .fg(Theme::color(&theme.colors.text_normal))
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Theme::color(&theme.colors.text_dim));
    let highlight = Style::default()
        .fg(Theme::color(&theme.colors.match_highlight_fg))
        .bg(Theme::color(&theme.colors.match_highlight_bg));

    let mut title = vec![Span::styled(
        format!(" {} ", card.initials),
        Style::default().fg(Theme::color(&theme.colors.badge_fg)),
    )];
    title.extend(highlight_spans(&card.name, &card.name_highlights, name_style, highlight));
    title.push(Span::styled(
        format!("  [{}]", card.specialty),
        Style::default().fg(Theme::color(&theme.colors.badge_fg)),
    ));
    if card.tele {
        title.push(Span::styled(
            "  Tele ✓",
            Style::default().fg(Theme::color(&theme.colors.tele_fg)),
        ));
    }

    let mut details = vec![Span::styled("    ", dim)];
    details.extend(highlight_spans(&card.clinic, &card.clinic_highlights, dim, highlight));
    details.push(Span::styled(format!(" · {} · ", card.timings), dim));
    details.push(Span::styled(
        card.phone.clone(),
        Style::default().fg(Theme::color(&theme.colors.phone_fg)),
    ));

    ListItem::new(vec![Line::from(title), Line::from(details)])
}
