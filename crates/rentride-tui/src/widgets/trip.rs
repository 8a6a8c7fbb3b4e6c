use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use rentride_core::pricing::{format_amount, PriceBreakdown};

use crate::app::App;
use crate::theme::Theme;

/// Price summary for the trip being booked
pub struct TripWidget;

impl TripWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let block = Block::default()
            .title(" Trip summary ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.grey0))
            .style(Style::default().bg(theme.bg0));

        let symbol = &app.config.pricing.currency_symbol;
        let lines: Vec<Line> = match app.quote() {
            None => vec![Line::from(Span::styled(
                "Pick a vehicle on the Explore tab",
                Style::default().fg(theme.grey2),
            ))],
            Some(Err(e)) => vec![Line::from(Span::styled(
                e.to_string(),
                Style::default().fg(theme.red),
            ))],
            Some(Ok(breakdown)) => {
                let mut lines: Vec<Line> = summary_rows(&breakdown, symbol)
                    .into_iter()
                    .map(|(label, value)| {
                        Line::from(vec![
                            Span::styled(
                                format!("{:<24}", label),
                                Style::default().fg(theme.grey2),
                            ),
                            Span::styled(value, Style::default().fg(theme.fg0)),
                        ])
                    })
                    .collect();
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:<24}", "Payable"),
                        Style::default().fg(theme.fg1).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format_amount(symbol, breakdown.totals.final_amount),
                        Style::default().fg(theme.green).add_modifier(Modifier::BOLD),
                    ),
                ]));
                lines.push(Line::from(Span::styled(
                    "+/-: days  space: add-on  c: coupon",
                    Style::default().fg(theme.grey0),
                )));
                lines
            }
        };

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

/// Label/value rows of a breakdown, up to (not including) the payable amount
pub fn summary_rows(breakdown: &PriceBreakdown, symbol: &str) -> Vec<(String, String)> {
    let mut rows = vec![
        ("Vehicle".to_string(), breakdown.vehicle_name.clone()),
        (
            format!(
                "{} day(s) × {}",
                breakdown.days,
                format_amount(symbol, breakdown.daily_rate)
            ),
            format_amount(symbol, breakdown.rental),
        ),
    ];
    if !breakdown.addons.is_empty() {
        let names: Vec<&str> = breakdown.addons.iter().map(|a| a.name.as_str()).collect();
        rows.push((
            format!("Add-ons ({})", names.join(", ")),
            format_amount(symbol, breakdown.addons_total()),
        ));
    }
    rows.push((
        "Platform fee".to_string(),
        format_amount(symbol, breakdown.platform_fee),
    ));
    rows.push((
        format!("GST {}", breakdown.tax_rate),
        format_amount(symbol, breakdown.totals.tax),
    ));
    rows.push((
        "Total".to_string(),
        format_amount(symbol, breakdown.totals.total),
    ));
    if let Some(code) = &breakdown.coupon {
        rows.push((
            format!("Coupon {}", code),
            format!("-{}", format_amount(symbol, breakdown.totals.discount)),
        ));
    }
    rows
}
