use ratatui::prelude::*;

use super::Section;
use crate::domain::models::StagedFile;
use crate::domain::services::WorkflowController;

fn file_lines(files: &[StagedFile]) -> Vec<Line<'static>> {
    return files
        .iter()
        .enumerate()
        .map(|(idx, file)| return Line::from(format!("{}. {}", idx + 1, file.name)))
        .collect();
}

fn menu(controller: &WorkflowController) -> Section {
    let action = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(vec![
        Span::styled("/about", action),
        Span::raw(" About  "),
        Span::styled("/help", action),
        Span::raw(" Commands  "),
        Span::styled("/logout", action),
        Span::raw(" Log out"),
    ])];

    if controller.is_logging_out() {
        lines.push(Line::from(Span::styled(
            "Logging out...",
            Style::default().fg(Color::Yellow),
        )));
    }

    return Section::new("Menu", lines);
}

fn staged(controller: &WorkflowController) -> Section {
    let mut lines = file_lines(controller.staged());
    if controller.is_processing() {
        lines.push(Line::from(Span::styled(
            "Processing...",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "/process to upload, /remove NUMBER to drop a file",
            Style::default().fg(Color::DarkGray),
        )));
    }

    return Section::new("Files to Upload", lines);
}

fn chat(controller: &WorkflowController) -> Section {
    let you = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let assistant = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line<'static>> = vec![];
    for turn in controller.chat_history() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled("You: ", you),
            Span::raw(turn.question.to_string()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Answer: ", assistant),
            Span::raw(turn.answer.to_string()),
        ]));
    }

    if controller.is_asking() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            "Waiting for an answer...",
            Style::default().fg(Color::Yellow),
        )));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No questions yet. Type one below and press ENTER.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    return Section::growing("Chat History", lines);
}

fn getting_started() -> Section {
    return Section::growing(
        "Getting started",
        vec![
            Line::from("Stage PDF files with /add PATH..., then upload them with /process."),
            Line::from("Questions open up once at least one file has been processed."),
        ],
    );
}

fn input(controller: &WorkflowController) -> Section {
    let line = Line::from(vec![
        Span::raw("> "),
        Span::raw(controller.question().to_string()),
        Span::raw("█"),
    ]);

    if controller.can_ask() {
        return Section::new("Ask a question", vec![line]);
    }
    return Section::new("Command", vec![line]);
}

pub fn sections(controller: &WorkflowController) -> Vec<Section> {
    let mut sections = vec![menu(controller)];

    if !controller.staged().is_empty() {
        sections.push(staged(controller));
    }

    if !controller.processed().is_empty() {
        sections.push(Section::new(
            "Processed Files",
            file_lines(controller.processed()),
        ));
    }

    if controller.can_ask() {
        sections.push(Section::new(
            "Model",
            vec![Line::from(vec![
                Span::styled(
                    controller.model().label(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled("  CTRL+O to switch", Style::default().fg(Color::DarkGray)),
            ])],
        ));
        sections.push(chat(controller));
    } else if controller.staged().is_empty() {
        sections.push(getting_started());
    }

    sections.push(input(controller));

    return sections;
}
