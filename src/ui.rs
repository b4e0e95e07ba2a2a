use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::app::{App, Field, DOWN_MAX, PRICE_MAX, PRICE_MIN};
use crate::format::{fill_ratio, thousands};

struct Slider<'a> {
    label: &'a str,
    value: i64,
    min: i64,
    max: i64,
    hint: Option<&'a str>,
}

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(7),
                Constraint::Length(1),
                Constraint::Min(1),
            ]
            .as_ref(),
        )
        .split(f.size());

    let title = Paragraph::new("Mortgage Calculator")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    render_slider(
        f,
        chunks[1],
        Slider {
            label: "Purchase price",
            value: app.purchase_price,
            min: PRICE_MIN,
            max: PRICE_MAX,
            hint: None,
        },
        app.focus == Field::PurchasePrice,
    );
    render_slider(
        f,
        chunks[2],
        Slider {
            label: "Down payment",
            value: app.down_payment,
            min: app.down_payment_min(),
            max: DOWN_MAX,
            hint: Some("5% or more of purchase price"),
        },
        app.focus == Field::DownPayment,
    );

    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(chunks[3]);

    let term = Paragraph::new(format!("◀ {} ▶", app.term.label()))
        .style(value_style(app.focus == Field::Term))
        .block(labeled_block("Mortgage term", app.focus == Field::Term));
    f.render_widget(term, row[0]);

    let zip_text = if app.focus == Field::ZipCode {
        format!("{}▏", app.zip_code)
    } else {
        app.zip_code.clone()
    };
    let zip = Paragraph::new(zip_text)
        .style(value_style(app.focus == Field::ZipCode))
        .block(labeled_block("ZIP code", app.focus == Field::ZipCode));
    f.render_widget(zip, row[1]);

    render_result(f, chunks[4], app);

    if let Some(status) = &app.status {
        let status = Paragraph::new(status.as_str()).style(Style::default().fg(Color::DarkGray));
        f.render_widget(status, chunks[5]);
    }

    let help = Paragraph::new(
        "Tab/↓/↑: move | ←/→: adjust | PgUp/PgDn: big step | Home/End: limits | Enter: apply | q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    f.render_widget(help, chunks[6]);
}

fn render_slider(f: &mut Frame, area: Rect, slider: Slider, focused: bool) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)].as_ref())
        .split(area);

    let gauge = Gauge::default()
        .block(labeled_block(slider.label, focused))
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio(fill_ratio(slider.value, slider.min, slider.max))
        .label(format!("${}", thousands(slider.value)));
    f.render_widget(gauge, rows[0]);

    let limits = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage(30),
                Constraint::Percentage(40),
                Constraint::Percentage(30),
            ]
            .as_ref(),
        )
        .split(rows[1]);

    let dim = Style::default().fg(Color::DarkGray);
    let low = Paragraph::new(format!("${}", thousands(slider.min))).style(dim);
    f.render_widget(low, limits[0]);
    if let Some(hint) = slider.hint {
        let hint = Paragraph::new(hint).style(dim).alignment(Alignment::Center);
        f.render_widget(hint, limits[1]);
    }
    let high = Paragraph::new(format!("${}", thousands(slider.max)))
        .style(dim)
        .alignment(Alignment::Right);
    f.render_widget(high, limits[2]);
}

fn render_result(f: &mut Frame, area: Rect, app: &App) {
    let apply = if app.focus == Field::Apply {
        Span::styled(
            "[ Apply Now ]",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("[ Apply Now ]", Style::default().fg(Color::Yellow))
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("${}", thousands(app.monthly_payment)),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from("Monthly Payment"),
        Line::from(""),
        Line::from(apply),
        Line::from(Span::styled(
            "Estimate how much you could be paying monthly for your mortgage.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let result = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(result, area);
}

fn labeled_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border)
}

fn value_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(app: &App) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer.get(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_the_computed_payment_with_separators() {
        let app = App::default();
        let screen = rendered(&app);
        assert!(screen.contains("$240,000"));
        assert!(screen.contains("$35,000"));
        assert!(screen.contains("$1,229"));
        assert!(screen.contains("Monthly Payment"));
        assert!(screen.contains("Apply Now"));
        assert!(screen.contains("94115"));
    }

    #[test]
    fn down_payment_limits_follow_the_price() {
        let mut app = App::default();
        app.set_purchase_price(1_000_000);
        let screen = rendered(&app);
        assert!(screen.contains("$50,000"));
        assert!(screen.contains("$500,000"));
    }

    #[test]
    fn status_line_shows_after_apply() {
        let mut app = App::default();
        app.apply_now();
        let screen = rendered(&app);
        assert!(screen.contains("Apply Now: {"));
    }
}
