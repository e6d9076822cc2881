#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::EnableBracketedPaste;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use super::screens;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::ModelName;
use crate::domain::models::Route;
use crate::domain::services::events::EventsService;
use crate::domain::services::WorkflowController;

fn handle_char_input(controller: &mut WorkflowController, input: Input) {
    match input {
        Input {
            key: Key::Char('n'),
            ctrl: true,
            ..
        } if controller.route() == Route::Login => {
            controller.navigate(Route::Signup);
        }
        Input {
            key: Key::Char('f'),
            ctrl: true,
            ..
        } if controller.route() == Route::Login => {
            controller.navigate(Route::ForgetPassword);
        }
        Input {
            key: Key::Backspace,
            ..
        } => {
            controller.input_backspace();
        }
        Input {
            key: Key::Char(c),
            ctrl: false,
            alt: false,
        } => {
            controller.input_str(&c.to_string());
        }
        _ => (),
    }
}

/// Handles one event to completion. Returns true when the application should
/// exit.
pub fn handle_event(
    controller: &mut WorkflowController,
    event: Event,
    tx: &mpsc::UnboundedSender<Action>,
) -> Result<bool> {
    match event {
        Event::ProcessResponse(session, res) => {
            controller.handle_process_response(session, res);
            return Ok(false);
        }
        Event::AskResponse(session, res) => {
            controller.handle_ask_response(session, res);
            return Ok(false);
        }
        Event::LogoutResponse(res) => {
            controller.handle_logout_response(res);
            return Ok(false);
        }
        Event::KeyboardCTRLC() => return Ok(true),
        Event::UITick() => return Ok(false),
        _ => (),
    }

    // A notification blocks the screen underneath until it is dismissed.
    if controller.notification().is_some() {
        if matches!(event, Event::KeyboardEnter() | Event::KeyboardEsc()) {
            controller.dismiss_notification();
        }
        return Ok(false);
    }

    match event {
        Event::KeyboardCTRLO() => {
            controller.cycle_model();
        }
        Event::KeyboardEnter() => {
            return controller.submit(tx);
        }
        Event::KeyboardEsc() => {
            controller.go_back();
        }
        Event::KeyboardTab() => {
            controller.focus_next_field();
        }
        Event::KeyboardPaste(text) => {
            controller.input_str(&text);
        }
        Event::KeyboardCharInput(input) => {
            handle_char_input(controller, input);
        }
        _ => (),
    }

    return Ok(false);
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    controller: &mut WorkflowController,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);

    loop {
        terminal.draw(|frame| {
            screens::render(frame, controller);
        })?;

        let event = events.next().await?;
        if handle_event(controller, event, &tx)? {
            break;
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let model = ModelName::parse(&Config::get(ConfigKey::Model)).unwrap_or_default();
    let route = Route::parse(&Config::get(ConfigKey::Route)).unwrap_or_default();
    let mut controller = WorkflowController::new(model, route);

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    start_loop(&mut terminal, &mut controller, tx, rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
