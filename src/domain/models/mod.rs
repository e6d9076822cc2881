mod action;
mod chat_turn;
mod event;
mod form;
mod gateway;
mod model_name;
mod notification;
mod route;
mod slash_commands;
mod staged_file;

pub use action::*;
pub use chat_turn::*;
pub use event::*;
pub use form::*;
pub use gateway::*;
pub use model_name::*;
pub use notification::*;
pub use route::*;
pub use slash_commands::*;
pub use staged_file::*;
