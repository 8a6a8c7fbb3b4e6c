use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};
use crate::theme::Theme;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let status_text = match &app.mode {
            Mode::Search(query) => format!(" /{}", query),
            Mode::Normal => match &app.status_message {
                Some(msg) => format!(" {}", msg),
                None => format!(
                    " NORMAL | {} | {}/{}",
                    app.tab.title(),
                    (app.selected() + 1).min(app.row_count()),
                    app.row_count()
                ),
            },
        };

        let help_hint = help_hint(&app.mode);
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

fn help_hint(mode: &Mode) -> &'static str {
    match mode {
        Mode::Search(_) => " enter:apply esc:cancel ",
        Mode::Normal => " q:quit tab:switch j/k:move /:search enter:select ",
    }
}
