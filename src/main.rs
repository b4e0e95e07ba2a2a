use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

mod app;
mod calc;
mod format;
mod ui;

use app::{App, Field, DOWN_MAX, PRICE_MAX, PRICE_MIN};

fn main() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::default();
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if handle_key(&mut app, key) {
                return Ok(());
            }
        }
    }
}

// Routes a key to the focused control. Returns true when the app should quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    app.status = None;
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Tab | KeyCode::Down => app.focus = app.focus.next(),
        KeyCode::BackTab | KeyCode::Up => app.focus = app.focus.prev(),
        _ => match app.focus {
            Field::PurchasePrice => match key.code {
                KeyCode::Left | KeyCode::Char('h') => app.adjust_purchase_price(-1),
                KeyCode::Right | KeyCode::Char('l') => app.adjust_purchase_price(1),
                KeyCode::PageDown => app.adjust_purchase_price(-10),
                KeyCode::PageUp => app.adjust_purchase_price(10),
                KeyCode::Home => app.set_purchase_price(PRICE_MIN),
                KeyCode::End => app.set_purchase_price(PRICE_MAX),
                _ => {}
            },
            Field::DownPayment => match key.code {
                KeyCode::Left | KeyCode::Char('h') => app.adjust_down_payment(-1),
                KeyCode::Right | KeyCode::Char('l') => app.adjust_down_payment(1),
                KeyCode::PageDown => app.adjust_down_payment(-10),
                KeyCode::PageUp => app.adjust_down_payment(10),
                KeyCode::Home => app.set_down_payment(0),
                KeyCode::End => app.set_down_payment(DOWN_MAX),
                _ => {}
            },
            Field::Term => match key.code {
                KeyCode::Left | KeyCode::Char('h') => app.cycle_term_back(),
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => app.cycle_term(),
                _ => {}
            },
            Field::ZipCode => match key.code {
                KeyCode::Char(c) => app.push_zip(c),
                KeyCode::Backspace => app.pop_zip(),
                _ => {}
            },
            Field::Apply => {
                if key.code == KeyCode::Enter {
                    app.apply_now();
                }
            }
        },
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn q_and_esc_quit_from_anywhere() {
        let mut app = App::default();
        assert!(handle_key(&mut app, key(KeyCode::Char('q'))));
        app.focus = Field::ZipCode;
        assert!(handle_key(&mut app, key(KeyCode::Esc)));
    }

    #[test]
    fn arrows_drive_the_focused_slider() {
        let mut app = App::default();
        handle_key(&mut app, key(KeyCode::Right));
        assert_eq!(app.purchase_price, 241_000);
        handle_key(&mut app, key(KeyCode::PageDown));
        assert_eq!(app.purchase_price, 231_000);
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Field::DownPayment);
        handle_key(&mut app, key(KeyCode::Left));
        assert_eq!(app.down_payment, 34_000);
    }

    #[test]
    fn typing_reaches_the_zip_field_only_when_focused() {
        let mut app = App::default();
        handle_key(&mut app, key(KeyCode::Char('5')));
        assert_eq!(app.zip_code, "94115");
        app.focus = Field::ZipCode;
        handle_key(&mut app, key(KeyCode::Backspace));
        handle_key(&mut app, key(KeyCode::Char('7')));
        assert_eq!(app.zip_code, "94117");
    }

    #[test]
    fn space_rotates_the_term() {
        let mut app = App::default();
        app.focus = Field::Term;
        let before = app.monthly_payment;
        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.term.years(), 15);
        assert!(app.monthly_payment > before);
    }

    #[test]
    fn enter_on_the_button_reports_the_request() {
        let mut app = App::default();
        app.focus = Field::Apply;
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.status.is_some());
        // the next keystroke clears the message
        handle_key(&mut app, key(KeyCode::Tab));
        assert!(app.status.is_none());
    }
}
