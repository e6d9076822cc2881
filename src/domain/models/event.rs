use tui_textarea::Input;

use super::AskResponse;
use super::GatewayError;
use super::ProcessResponse;

pub enum Event {
    AskResponse(u64, Result<AskResponse, GatewayError>),
    LogoutResponse(Result<(), GatewayError>),
    ProcessResponse(u64, Result<ProcessResponse, GatewayError>),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardCTRLO(),
    KeyboardEnter(),
    KeyboardEsc(),
    KeyboardPaste(String),
    KeyboardTab(),
    UITick(),
}
