#[cfg(test)]
#[path = "workflow_test.rs"]
mod tests;

use std::path::Path;

use anyhow::Result;
use strum::VariantNames;
use tokio::sync::mpsc;

use super::StagingStore;
use crate::domain::models::help_text;
use crate::domain::models::Action;
use crate::domain::models::AskResponse;
use crate::domain::models::ChatTurn;
use crate::domain::models::Form;
use crate::domain::models::GatewayError;
use crate::domain::models::ModelName;
use crate::domain::models::Notification;
use crate::domain::models::ProcessResponse;
use crate::domain::models::Route;
use crate::domain::models::SlashCommand;
use crate::domain::models::StagedFile;
use crate::domain::models::ASK_FALLBACK_ERROR;

pub const PROCESS_UNREACHABLE_ERROR: &str =
    "Unable to connect to the server. Please check if the backend is running and accessible.";
pub const LOGOUT_ERROR: &str = "An error occurred during logout. Please try again.";
const UPLOAD_LOCKED: &str =
    "Files are being processed. Wait for processing to finish before changing the upload list.";

/// Owns every piece of session state: staged and processed files, the chat
/// transcript, the model selection, the question input, the current route and
/// the blocking notification. Screens only ever read from it.
///
/// Gateway calls are never made from here. Operations send an [`Action`] to
/// the actions worker and the matching `handle_*_response` is called with the
/// outcome once it arrives. Each operation kind has its own in-flight flag, so
/// a second request of the same kind is dropped until the first resolves.
///
/// A successful logout starts a new session. Responses to requests sent in an
/// earlier session are discarded.
pub struct WorkflowController {
    session: u64,
    route: Route,
    staging: StagingStore,
    processed: Vec<StagedFile>,
    chat_history: Vec<ChatTurn>,
    model: ModelName,
    question: String,
    processing: bool,
    pending_question: Option<String>,
    logging_out: bool,
    notification: Option<Notification>,
    pub login_form: Form,
    pub signup_form: Form,
    pub reset_form: Form,
}

impl Default for WorkflowController {
    fn default() -> WorkflowController {
        return WorkflowController::new(ModelName::default(), Route::default());
    }
}

impl WorkflowController {
    pub fn new(model: ModelName, route: Route) -> WorkflowController {
        return WorkflowController {
            session: 0,
            route,
            staging: StagingStore::default(),
            processed: vec![],
            chat_history: vec![],
            model,
            question: "".to_string(),
            processing: false,
            pending_question: None,
            logging_out: false,
            notification: None,
            login_form: Form::login(),
            signup_form: Form::signup(),
            reset_form: Form::forget_password(),
        };
    }

    pub fn session(&self) -> u64 {
        return self.session;
    }

    pub fn route(&self) -> Route {
        return self.route;
    }

    pub fn staged(&self) -> &[StagedFile] {
        return self.staging.files();
    }

    pub fn processed(&self) -> &[StagedFile] {
        return &self.processed;
    }

    pub fn chat_history(&self) -> &[ChatTurn] {
        return &self.chat_history;
    }

    pub fn model(&self) -> ModelName {
        return self.model;
    }

    pub fn question(&self) -> &str {
        return &self.question;
    }

    pub fn notification(&self) -> Option<&Notification> {
        return self.notification.as_ref();
    }

    pub fn is_processing(&self) -> bool {
        return self.processing;
    }

    pub fn is_asking(&self) -> bool {
        return self.pending_question.is_some();
    }

    pub fn is_logging_out(&self) -> bool {
        return self.logging_out;
    }

    /// Questions are only offered once the backend holds at least one document.
    pub fn can_ask(&self) -> bool {
        return !self.processed.is_empty();
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(from = %self.route, to = %route, "navigate");
        self.route = route;
    }

    pub fn go_back(&mut self) {
        match self.route {
            Route::Signup | Route::ForgetPassword => self.navigate(Route::Login),
            Route::About => self.navigate(Route::Main),
            Route::Login | Route::Main => (),
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        tracing::debug!(kind = ?notification.kind, text = notification.text.as_str(), "notification");
        self.notification = Some(notification);
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    pub fn select_model(&mut self, model: ModelName) {
        self.model = model;
    }

    pub fn cycle_model(&mut self) {
        self.model = self.model.next();
    }

    pub fn set_question(&mut self, text: &str) {
        self.question = text.to_string();
    }

    fn active_form_mut(&mut self) -> Option<&mut Form> {
        match self.route {
            Route::Login => return Some(&mut self.login_form),
            Route::Signup => return Some(&mut self.signup_form),
            Route::ForgetPassword => return Some(&mut self.reset_form),
            Route::Main | Route::About => return None,
        }
    }

    /// Routes typed or pasted text to whatever input the current screen has.
    pub fn input_str(&mut self, text: &str) {
        if self.route == Route::Main {
            self.question += &text.replace(['\n', '\r'], " ");
            return;
        }

        if let Some(form) = self.active_form_mut() {
            form.push_str(text);
        }
    }

    pub fn input_backspace(&mut self) {
        if self.route == Route::Main {
            self.question.pop();
            return;
        }

        if let Some(form) = self.active_form_mut() {
            form.pop_char();
        }
    }

    pub fn focus_next_field(&mut self) {
        if let Some(form) = self.active_form_mut() {
            form.focus_next();
        }
    }

    /// Handles Enter on the current screen. Returns true when the application
    /// should exit.
    pub fn submit(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        match self.route {
            Route::Main => return self.submit_input(tx),
            Route::Login => {
                self.login_form.clear();
                self.navigate(Route::Main);
            }
            Route::Signup => {
                self.signup_form.clear();
                self.navigate(Route::Login);
            }
            Route::ForgetPassword => {
                self.reset_form.clear();
                self.navigate(Route::Login);
            }
            Route::About => (),
        }

        return Ok(false);
    }

    fn submit_input(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        if let Some(command) = SlashCommand::parse(&self.question) {
            self.question.clear();
            return self.handle_command(command, tx);
        }

        if self.question.trim().is_empty() {
            return Ok(false);
        }

        if !self.can_ask() {
            self.notify(Notification::info(
                "Process at least one PDF before asking questions. Run /help to see how.",
            ));
            return Ok(false);
        }

        self.ask_question(tx)?;
        return Ok(false);
    }

    fn handle_command(
        &mut self,
        command: SlashCommand,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        if command.is_quit() {
            return Ok(true);
        }

        if command.is_add() {
            if command.args.is_empty() {
                self.notify(Notification::error(
                    "You must pass at least one file path with `/add`. Run `/help` for more details.",
                ));
            } else if Path::new(command.rest()).is_file() {
                // A single unquoted path with spaces in it.
                self.stage_paths(&[command.rest().to_string()]);
            } else {
                self.stage_paths(&command.args);
            }
        } else if command.is_remove() {
            match command.index_arg() {
                Some(index) => {
                    self.unstage(index);
                }
                None => {
                    self.notify(Notification::error(
                        "You must pass the number of a staged file with `/remove`. Run `/help` for more details.",
                    ));
                }
            }
        } else if command.is_process() {
            self.start_process(tx)?;
        } else if command.is_model() {
            match command.args.first() {
                Some(name) => match ModelName::parse(name) {
                    Some(model) => self.select_model(model),
                    None => self.notify(Notification::error(&format!(
                        "No model named {name}. Possible values are: {}",
                        ModelName::VARIANTS.join(", ")
                    ))),
                },
                None => self.cycle_model(),
            }
        } else if command.is_logout() {
            self.logout(tx)?;
        } else if command.is_about() {
            self.navigate(Route::About);
        } else if command.is_help() {
            self.notify(Notification::info(&help_text()));
        }

        return Ok(false);
    }

    /// Stages local files by path. Paths that aren't existing files and files
    /// that aren't PDFs are skipped and reported. Returns how many files were
    /// staged.
    pub fn stage_paths(&mut self, paths: &[String]) -> usize {
        if self.processing {
            self.notify(Notification::info(UPLOAD_LOCKED));
            return 0;
        }

        let mut missing: Vec<String> = vec![];
        let mut candidates: Vec<StagedFile> = vec![];
        for path_str in paths {
            let path = Path::new(path_str);
            if !path.is_file() {
                missing.push(path_str.to_string());
                continue;
            }
            candidates.push(StagedFile::from_path(path));
        }

        let rejected = candidates
            .iter()
            .filter(|file| return !file.is_pdf())
            .map(|file| return file.name.to_string())
            .collect::<Vec<String>>();

        let admitted = self.staging.add(candidates);
        tracing::debug!(
            admitted = admitted,
            missing = missing.len(),
            rejected = rejected.len(),
            "staged files"
        );

        let mut problems: Vec<String> = vec![];
        if !missing.is_empty() {
            problems.push(format!("File not found: {}", missing.join(", ")));
        }
        if !rejected.is_empty() {
            problems.push(format!(
                "Only PDF files can be uploaded, skipped: {}",
                rejected.join(", ")
            ));
        }
        if !problems.is_empty() {
            self.notify(Notification::info(&problems.join("\n")));
        }

        return admitted;
    }

    pub fn unstage(&mut self, index: usize) -> Option<StagedFile> {
        if self.processing {
            self.notify(Notification::info(UPLOAD_LOCKED));
            return None;
        }

        return self.staging.remove_at(index);
    }

    /// Sends every staged file for processing. A no-op when nothing is staged
    /// or a process call is already in flight. Returns whether a request was
    /// sent.
    pub fn start_process(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        if self.processing || self.staging.is_empty() {
            return Ok(false);
        }

        tx.send(Action::ProcessDocuments(
            self.session,
            self.staging.files().to_vec(),
        ))?;
        self.processing = true;

        return Ok(true);
    }

    fn is_stale(&self, session: u64, kind: &str) -> bool {
        if session == self.session {
            return false;
        }

        tracing::debug!(
            session,
            current = self.session,
            kind,
            "Dropping response from an ended session"
        );
        return true;
    }

    pub fn handle_process_response(
        &mut self,
        session: u64,
        res: Result<ProcessResponse, GatewayError>,
    ) {
        if self.is_stale(session, "process") {
            return;
        }
        self.processing = false;

        match res {
            Ok(res) => {
                // Staging is locked while processing, so the staged list is
                // exactly the batch that was sent.
                let batch = self.staging.files().to_vec();
                self.staging.clear();
                self.processed.extend(batch);
                self.notify(Notification::info(&res.message));
            }
            Err(err) => {
                tracing::error!(error = ?err, "Failed to process files");
                let text = match err {
                    GatewayError::Network(_) => PROCESS_UNREACHABLE_ERROR.to_string(),
                    _ => format!("An error occurred while processing files: {err}"),
                };
                self.notify(Notification::error(&text));
            }
        }
    }

    /// Sends the current input as a question using the selected model. A no-op
    /// when the input is blank or a question is already in flight.
    pub fn ask_question(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        if self.question.trim().is_empty() || self.pending_question.is_some() {
            return Ok(false);
        }

        let question = self.question.to_string();
        tx.send(Action::AskQuestion(
            self.session,
            question.to_string(),
            self.model,
        ))?;
        self.pending_question = Some(question);

        return Ok(true);
    }

    pub fn handle_ask_response(&mut self, session: u64, res: Result<AskResponse, GatewayError>) {
        if self.is_stale(session, "ask") {
            return;
        }
        let question = self.pending_question.take().unwrap_or_default();

        match res {
            Ok(res) => {
                self.chat_history.push(ChatTurn::new(&question, &res.answer));
                // Keep whatever was typed while the answer was pending.
                if self.question == question {
                    self.question.clear();
                }
            }
            Err(err) => {
                tracing::error!(error = ?err, "Failed to ask question");
                let text = match err {
                    GatewayError::Application { message } => message,
                    _ => ASK_FALLBACK_ERROR.to_string(),
                };
                self.notify(Notification::error(&text));
            }
        }
    }

    pub fn logout(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        if self.logging_out {
            return Ok(false);
        }

        tx.send(Action::Logout())?;
        self.logging_out = true;

        return Ok(true);
    }

    pub fn handle_logout_response(&mut self, res: Result<(), GatewayError>) {
        self.logging_out = false;

        match res {
            Ok(()) => {
                self.session += 1;
                self.processing = false;
                self.pending_question = None;
                self.processed.clear();
                self.chat_history.clear();
                self.navigate(Route::Login);
            }
            Err(err) => {
                tracing::error!(error = ?err, "Failed to log out");
                self.notify(Notification::error(LOGOUT_ERROR));
            }
        }
    }
}
