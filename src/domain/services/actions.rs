#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::infrastructure::gateway::GatewayBox;

fn report(tx: &mpsc::UnboundedSender<Event>, event: Event) {
    if tx.send(event).is_err() {
        tracing::warn!("UI is gone, dropping gateway response");
    }
}

pub struct ActionsService {}

impl ActionsService {
    /// Runs every received action on its own task so a slow upload never holds
    /// up a question or a logout. Outcomes are reported back as events in the
    /// order they complete. Returns once the action channel closes.
    pub async fn start(
        gateway: GatewayBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        while let Some(action) = rx.recv().await {
            let worker_gateway = gateway.clone();
            let worker_tx = tx.clone();

            match action {
                Action::ProcessDocuments(session, files) => {
                    tracing::debug!(session, files = files.len(), "process documents");
                    tokio::spawn(async move {
                        let res = worker_gateway.process_documents(&files).await;
                        report(&worker_tx, Event::ProcessResponse(session, res));
                    });
                }
                Action::AskQuestion(session, question, model) => {
                    tracing::debug!(session, model = %model, "ask question");
                    tokio::spawn(async move {
                        let res = worker_gateway.ask_question(&question, model).await;
                        report(&worker_tx, Event::AskResponse(session, res));
                    });
                }
                Action::Logout() => {
                    tracing::debug!("logout");
                    tokio::spawn(async move {
                        let res = worker_gateway.logout().await;
                        report(&worker_tx, Event::LogoutResponse(res));
                    });
                }
            }
        }

        return Ok(());
    }
}
