use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use rentride_core::pricing::format_amount;

use crate::app::{App, Row, Tab};
use crate::theme::Theme;

/// Scrollable list for the active tab
pub struct ContentWidget;

impl ContentWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let filter = if app.search_query.is_empty() {
            String::new()
        } else {
            format!(" [/{}]", app.search_query)
        };
        let title = match app.tab {
            Tab::Inbox => format!(
                " Inbox ({} unread){} ",
                app.catalog.unread_count(),
                filter
            ),
            Tab::Trips => format!(" Add-ons{} ", filter),
            tab => format!(" {}{} ", tab.title(), filter),
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg0));

        let query = (!app.search_query.is_empty()).then(|| app.search_query.to_lowercase());
        let symbol = &app.config.pricing.currency_symbol;

        let items: Vec<ListItem> = app
            .rows()
            .into_iter()
            .map(|row| {
                let (marker, text, detail, base_style) = match row {
                    Row::Vehicle(v) => (
                        "",
                        v.display_name(),
                        format!(
                            "{} · {} seats · {}/day · ★{:.1} · {}",
                            v.category,
                            v.seats,
                            format_amount(symbol, v.daily_rate),
                            v.rating,
                            v.city
                        ),
                        Style::default().fg(theme.fg0),
                    ),
                    Row::Addon { addon, selected } => (
                        if selected { "[x] " } else { "[ ] " },
                        addon.name.clone(),
                        format_amount(symbol, addon.price),
                        Style::default().fg(theme.fg0),
                    ),
                    Row::Message(m) => (
                        if m.unread { "● " } else { "  " },
                        m.subject.clone(),
                        format!("{} · {}", m.sender, m.sent_at.format("%b %d")),
                        if m.unread {
                            Style::default().fg(theme.unread)
                        } else {
                            Style::default().fg(theme.grey2)
                        },
                    ),
                    Row::Faq(f) => (
                        "",
                        f.question.clone(),
                        f.answer.clone(),
                        Style::default().fg(theme.fg0),
                    ),
                };

                let mut spans = vec![Span::styled(marker, Style::default().fg(theme.yellow))];
                match &query {
                    Some(q) => spans.extend(highlight_matches(&text, q, base_style, theme)),
                    None => spans.push(Span::styled(text, base_style)),
                }

                ListItem::new(vec![
                    Line::from(spans),
                    Line::from(Span::styled(
                        format!("  {}", detail),
                        Style::default().fg(theme.grey0),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(theme.selection));

        let mut state = ListState::default();
        state.select(Some(app.selected()));

        frame.render_stateful_widget(list, area, &mut state);
    }
}

/// Split `text` into spans, highlighting every case-insensitive occurrence
/// of `query` (already lowercased)
pub fn highlight_matches<'a>(
    text: &str,
    query: &str,
    base_style: Style,
    theme: &Theme,
) -> Vec<Span<'a>> {
    let text_lower = text.to_lowercase();
    // Lowercasing can change byte lengths outside ASCII; skip highlighting then
    if query.is_empty() || text_lower.len() != text.len() {
        return vec![Span::styled(text.to_string(), base_style)];
    }

    let highlight_style = base_style.fg(theme.bg0).bg(theme.yellow);
    let mut spans = Vec::new();
    let mut last_end = 0;

    for (start, _) in text_lower.match_indices(query) {
        if start > last_end {
            spans.push(Span::styled(text[last_end..start].to_string(), base_style));
        }
        let end = start + query.len();
        spans.push(Span::styled(text[start..end].to_string(), highlight_style));
        last_end = end;
    }

    if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(spans: &[Span]) -> Vec<String> {
        spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_highlight_matches() {
        let theme = Theme::default();
        let spans = highlight_matches("Maruti Swift", "swi", Style::default(), &theme);
        assert_eq!(contents(&spans), ["Maruti ", "Swi", "ft"]);
        assert_eq!(spans[1].style.bg, Some(theme.yellow));
    }

    #[test]
    fn test_highlight_no_match() {
        let theme = Theme::default();
        let spans = highlight_matches("Honda City", "xyz", Style::default(), &theme);
        assert_eq!(contents(&spans), ["Honda City"]);
    }

    #[test]
    fn test_highlight_repeated_matches() {
        let theme = Theme::default();
        let spans = highlight_matches("Tata Tiago", "ta", Style::default(), &theme);
        assert_eq!(contents(&spans), ["Ta", "ta", " Tiago"]);
    }
}
