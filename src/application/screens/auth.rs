use ratatui::prelude::*;

use super::Section;
use crate::domain::models::Form;
use crate::domain::services::WorkflowController;

fn form_lines(form: &Form) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = vec![];
    for (idx, field) in form.fields.iter().enumerate() {
        let focused = idx == form.focus;
        let mut label_style = Style::default();
        let mut marker = "  ";
        if focused {
            label_style = label_style.add_modifier(Modifier::BOLD);
            marker = "> ";
        }

        let mut value = field.display_value();
        if focused {
            value += "█";
        }

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{}: ", field.label), label_style),
            Span::raw(value),
        ]));
    }

    return lines;
}

fn link(hotkey: &str, text: &str) -> Line<'static> {
    return Line::from(vec![
        Span::styled(
            hotkey.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {text}")),
    ]);
}

pub fn login(controller: &WorkflowController) -> Vec<Section> {
    return vec![
        Section::new("Log in", form_lines(&controller.login_form)),
        Section::new(
            "Need help?",
            vec![
                link("CTRL+N", "Don't have an account? Sign up"),
                link("CTRL+F", "Forgot your password?"),
            ],
        ),
    ];
}

pub fn signup(controller: &WorkflowController) -> Vec<Section> {
    return vec![
        Section::new("Create an account", form_lines(&controller.signup_form)),
        Section::new(
            "Need help?",
            vec![link("ESC", "Already have an account? Log in")],
        ),
    ];
}

pub fn forget_password(controller: &WorkflowController) -> Vec<Section> {
    return vec![
        Section::new(
            "Reset your password",
            form_lines(&controller.reset_form),
        ),
        Section::new(
            "Need help?",
            vec![
                Line::from("Enter the email address of your account and press ENTER."),
                link("ESC", "Remembered it? Log in"),
            ],
        ),
    ];
}
