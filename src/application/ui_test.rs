use anyhow::Result;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use super::handle_event;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::GatewayError;
use crate::domain::models::ModelName;
use crate::domain::models::Route;
use crate::domain::services::WorkflowController;

fn key(c: char) -> Event {
    return Event::KeyboardCharInput(Input {
        key: Key::Char(c),
        ctrl: false,
        alt: false,
    });
}

fn ctrl(c: char) -> Event {
    return Event::KeyboardCharInput(Input {
        key: Key::Char(c),
        ctrl: true,
        alt: false,
    });
}

fn type_text(
    controller: &mut WorkflowController,
    text: &str,
    tx: &mpsc::UnboundedSender<Action>,
) -> Result<()> {
    for c in text.chars() {
        handle_event(controller, key(c), tx)?;
    }
    return Ok(());
}

#[test]
fn it_quits_on_ctrl_c() -> Result<()> {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut controller = WorkflowController::default();

    assert!(handle_event(&mut controller, Event::KeyboardCTRLC(), &tx)?);
    return Ok(());
}

#[test]
fn it_moves_between_account_screens() -> Result<()> {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut controller = WorkflowController::default();

    handle_event(&mut controller, ctrl('n'), &tx)?;
    assert_eq!(controller.route(), Route::Signup);

    handle_event(&mut controller, Event::KeyboardEsc(), &tx)?;
    assert_eq!(controller.route(), Route::Login);

    handle_event(&mut controller, ctrl('f'), &tx)?;
    assert_eq!(controller.route(), Route::ForgetPassword);

    handle_event(&mut controller, Event::KeyboardEnter(), &tx)?;
    assert_eq!(controller.route(), Route::Login);

    handle_event(&mut controller, Event::KeyboardEnter(), &tx)?;
    assert_eq!(controller.route(), Route::Main);

    return Ok(());
}

#[test]
fn it_edits_the_question_input() -> Result<()> {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut controller = WorkflowController::new(ModelName::Gemini, Route::Main);

    type_text(&mut controller, "Hellp", &tx)?;
    handle_event(
        &mut controller,
        Event::KeyboardCharInput(Input {
            key: Key::Backspace,
            ctrl: false,
            alt: false,
        }),
        &tx,
    )?;
    type_text(&mut controller, "o", &tx)?;
    handle_event(
        &mut controller,
        Event::KeyboardPaste(" there\nfriend".to_string()),
        &tx,
    )?;

    assert_eq!(controller.question(), "Hello there friend");
    return Ok(());
}

#[test]
fn it_cycles_models() -> Result<()> {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut controller = WorkflowController::new(ModelName::Gemini, Route::Main);

    handle_event(&mut controller, Event::KeyboardCTRLO(), &tx)?;
    assert_eq!(controller.model(), ModelName::Groq);

    handle_event(&mut controller, Event::KeyboardCTRLO(), &tx)?;
    assert_eq!(controller.model(), ModelName::Gemini);

    return Ok(());
}

#[test]
fn it_blocks_input_behind_notifications() -> Result<()> {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut controller = WorkflowController::new(ModelName::Gemini, Route::Main);

    handle_event(
        &mut controller,
        Event::LogoutResponse(Err(GatewayError::Logout { status: 500 })),
        &tx,
    )?;
    assert!(controller.notification().is_some());

    type_text(&mut controller, "ignored", &tx)?;
    handle_event(&mut controller, Event::KeyboardCTRLO(), &tx)?;
    assert_eq!(controller.question(), "");
    assert_eq!(controller.model(), ModelName::Gemini);

    handle_event(&mut controller, Event::KeyboardEnter(), &tx)?;
    assert!(controller.notification().is_none());

    type_text(&mut controller, "typed", &tx)?;
    assert_eq!(controller.question(), "typed");

    return Ok(());
}

#[test]
fn it_submits_commands_on_enter() -> Result<()> {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut controller = WorkflowController::new(ModelName::Gemini, Route::Main);

    type_text(&mut controller, "/about", &tx)?;
    handle_event(&mut controller, Event::KeyboardEnter(), &tx)?;
    assert_eq!(controller.route(), Route::About);

    handle_event(&mut controller, Event::KeyboardEsc(), &tx)?;
    assert_eq!(controller.route(), Route::Main);

    type_text(&mut controller, "/quit", &tx)?;
    assert!(handle_event(&mut controller, Event::KeyboardEnter(), &tx)?);

    return Ok(());
}
