use anyhow::Result;
use ratatui::backend::TestBackend;
use ratatui::prelude::*;
use ratatui::Terminal;
use test_utils::Fixtures;
use tokio::sync::mpsc;

use super::popup::centered;
use super::render;
use super::sections;
use super::Section;
use crate::domain::models::Action;
use crate::domain::models::AskResponse;
use crate::domain::models::ModelName;
use crate::domain::models::Notification;
use crate::domain::models::ProcessResponse;
use crate::domain::models::Route;
use crate::domain::services::WorkflowController;

fn titles(sections: &[Section]) -> Vec<String> {
    return sections
        .iter()
        .map(|section| return section.title.to_string())
        .collect();
}

fn section_text(sections: &[Section], title: &str) -> String {
    return sections
        .iter()
        .find(|section| return section.title == title)
        .map(|section| {
            return section
                .lines
                .iter()
                .map(|line| {
                    return line
                        .spans
                        .iter()
                        .map(|span| {
                            return span.content.to_string();
                        })
                        .collect::<Vec<String>>()
                        .join("");
                })
                .collect::<Vec<String>>()
                .join("\n");
        })
        .unwrap_or_default();
}

fn stage(controller: &mut WorkflowController, name: &str) {
    let fixtures = Fixtures::new();
    let path = fixtures.pdf(name).to_string_lossy().to_string();
    controller.stage_paths(&[path]);
}

fn processed_controller(tx: &mpsc::UnboundedSender<Action>) -> Result<WorkflowController> {
    let mut controller = WorkflowController::new(ModelName::Gemini, Route::Main);
    stage(&mut controller, "report.pdf");
    controller.start_process(tx)?;
    controller.handle_process_response(
        controller.session(),
        Ok(ProcessResponse {
            message: "1 document indexed".to_string(),
        }),
    );
    controller.dismiss_notification();

    return Ok(controller);
}

fn render_to_string(controller: &WorkflowController) -> Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(80, 24))?;
    terminal.draw(|frame| {
        render(frame, controller);
    })?;

    return Ok(format!("{:?}", terminal.backend().buffer()));
}

mod auth {
    use super::*;

    #[test]
    fn it_masks_the_password_field() {
        let mut controller = WorkflowController::new(ModelName::Gemini, Route::Login);
        controller.input_str("me@example.com");
        controller.focus_next_field();
        controller.input_str("hunter2");

        let res = sections(&controller);

        assert_eq!(titles(&res), vec!["Log in", "Need help?"]);
        insta::assert_snapshot!(section_text(&res, "Log in"), @r###"
          Email address: me@example.com
        > Password: *******█
        "###);
    }

    #[test]
    fn it_links_to_the_other_account_screens() {
        let controller = WorkflowController::new(ModelName::Gemini, Route::Login);
        let res = sections(&controller);
        let text = section_text(&res, "Need help?");

        assert!(text.contains("CTRL+N Don't have an account? Sign up"));
        assert!(text.contains("CTRL+F Forgot your password?"));
    }

    #[test]
    fn it_shows_the_signup_fields() {
        let controller = WorkflowController::new(ModelName::Gemini, Route::Signup);
        let res = sections(&controller);

        assert_eq!(
            section_text(&res, "Create an account"),
            "> Email address: █\n  Password: \n  Confirm password: "
        );
    }

    #[test]
    fn it_shows_the_reset_field() {
        let controller = WorkflowController::new(ModelName::Gemini, Route::ForgetPassword);
        let res = sections(&controller);

        assert_eq!(titles(&res), vec!["Reset your password", "Need help?"]);
        assert_eq!(
            section_text(&res, "Reset your password"),
            "> Email address: █"
        );
    }
}

mod main_page {
    use super::*;

    #[test]
    fn it_hides_questions_until_files_are_processed() {
        let controller = WorkflowController::new(ModelName::Gemini, Route::Main);
        let res = sections(&controller);

        assert_eq!(titles(&res), vec!["Menu", "Getting started", "Command"]);
        assert!(section_text(&res, "Menu").contains("/logout Log out"));
    }

    #[test]
    fn it_lists_staged_files_with_numbers() {
        let mut controller = WorkflowController::new(ModelName::Gemini, Route::Main);
        stage(&mut controller, "report.pdf");
        stage(&mut controller, "appendix.pdf");

        let res = sections(&controller);

        assert_eq!(titles(&res), vec!["Menu", "Files to Upload", "Command"]);
        insta::assert_snapshot!(section_text(&res, "Files to Upload"), @r###"
        1. report.pdf
        2. appendix.pdf
        /process to upload, /remove NUMBER to drop a file
        "###);
    }

    #[test]
    fn it_shows_a_processing_indicator() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut controller = WorkflowController::new(ModelName::Gemini, Route::Main);
        stage(&mut controller, "report.pdf");
        controller.start_process(&tx)?;

        let res = sections(&controller);

        assert!(section_text(&res, "Files to Upload").ends_with("Processing..."));
        return Ok(());
    }

    #[test]
    fn it_opens_questions_once_files_are_processed() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut controller = processed_controller(&tx)?;
        controller.select_model(ModelName::Groq);

        let res = sections(&controller);

        assert_eq!(
            titles(&res),
            vec![
                "Menu",
                "Processed Files",
                "Model",
                "Chat History",
                "Ask a question"
            ]
        );
        assert_eq!(section_text(&res, "Processed Files"), "1. report.pdf");
        assert!(section_text(&res, "Model").starts_with("Groq"));
        return Ok(());
    }

    #[test]
    fn it_shows_the_chat_history() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut controller = processed_controller(&tx)?;
        controller.set_question("What is the summary?");
        controller.ask_question(&tx)?;
        controller.handle_ask_response(
            controller.session(),
            Ok(AskResponse {
                answer: "It summarizes X.".to_string(),
            }),
        );
        controller.input_str("And the date?");

        let res = sections(&controller);

        insta::assert_snapshot!(section_text(&res, "Chat History"), @r###"
        You: What is the summary?
        Answer: It summarizes X.
        "###);
        assert_eq!(section_text(&res, "Ask a question"), "> And the date?█");
        return Ok(());
    }

    #[test]
    fn it_shows_a_pending_question() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut controller = processed_controller(&tx)?;
        controller.set_question("Still there?");
        controller.ask_question(&tx)?;

        let res = sections(&controller);

        assert_eq!(
            section_text(&res, "Chat History"),
            "Waiting for an answer..."
        );
        return Ok(());
    }
}

mod rendering {
    use super::*;

    #[test]
    fn it_renders_the_route_title() -> Result<()> {
        let controller = WorkflowController::new(ModelName::Gemini, Route::About);
        let res = render_to_string(&controller)?;

        assert!(res.contains("About pdfchat"));
        assert!(res.contains("ESC back"));
        return Ok(());
    }

    #[test]
    fn it_renders_notifications_on_top() -> Result<()> {
        let mut controller = WorkflowController::new(ModelName::Gemini, Route::Main);
        controller.notify(Notification::error("Unable to connect to the server."));

        let res = render_to_string(&controller)?;

        assert!(res.contains("Error"));
        assert!(res.contains("Unable to connect to the server."));
        assert!(res.contains("Press ENTER to dismiss"));
        return Ok(());
    }

    #[test]
    fn it_centers_popups() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered(area, 40, 6), Rect::new(20, 9, 40, 6));
        assert_eq!(centered(area, 100, 30), area);
    }
}
