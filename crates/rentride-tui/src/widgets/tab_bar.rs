use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Tab};
use crate::scroll::{BarPose, TabBarConfigExt};
use crate::theme::{blend, Theme};

pub struct TabBarWidget;

impl TabBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let pose = app.tab_bar.pose();
        let shift = row_shift(pose, app.config.ui.tab_bar.hidden_offset(), area.height);

        // The slot keeps its height; the bar slides down inside it
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg0)), area);
        if shift >= area.height {
            return;
        }
        let bar_area = Rect {
            y: area.y + shift,
            height: area.height - shift,
            ..area
        };

        let fade = |color| blend(color, theme.bg0, pose.opacity);
        let bar_bg = fade(theme.bg1);

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(fade(theme.grey0)).bg(bar_bg))
            .style(Style::default().bg(bar_bg));

        let slot_width = (bar_area.width / Tab::ALL.len() as u16).max(1) as usize;
        let spans: Vec<Span> = Tab::ALL
            .iter()
            .map(|tab| {
                let mut label = format!("{} {}", tab.icon(), tab.title());
                if *tab == Tab::Inbox {
                    let unread = app.catalog.unread_count();
                    if unread > 0 {
                        label.push_str(&format!(" ({})", unread));
                    }
                }
                let style = if *tab == app.tab {
                    Style::default()
                        .fg(fade(theme.accent))
                        .bg(bar_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(fade(theme.grey2)).bg(bar_bg)
                };
                Span::styled(center(&label, slot_width), style)
            })
            .collect();

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), bar_area);
    }
}

/// Rows the bar is pushed down within a slot of `slot_height` rows
///
/// Spring overshoot (negative translation) keeps the bar at rest.
pub fn row_shift(pose: BarPose, hidden_offset: f64, slot_height: u16) -> u16 {
    if hidden_offset <= 0.0 || slot_height == 0 {
        return 0;
    }
    let fraction = (pose.translate_y / hidden_offset).clamp(0.0, 1.0);
    (fraction * slot_height as f64).round() as u16
}

/// Pad `label` on both sides to fill `width` display columns
fn center(label: &str, width: usize) -> String {
    let label_width = label.width();
    if label_width >= width {
        return label.to_string();
    }
    let left = (width - label_width) / 2;
    let right = width - label_width - left;
    format!("{}{}{}", " ".repeat(left), label, " ".repeat(right))
}
