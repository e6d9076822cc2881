use super::ModelName;
use super::StagedFile;

/// Work the UI hands to the actions worker. Each variant maps to exactly one
/// gateway call. Requests whose result feeds session state carry the session
/// they were sent in, and the worker echoes it back on the matching event.
pub enum Action {
    ProcessDocuments(u64, Vec<StagedFile>),
    AskQuestion(u64, String, ModelName),
    Logout(),
}
