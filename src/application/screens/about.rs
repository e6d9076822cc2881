use ratatui::prelude::*;

use super::Section;

pub fn sections() -> Vec<Section> {
    let text = r#"
pdfchat lets you ask questions about your own PDF documents.

Stage files with /add, upload them with /process, then type a question.
The backend indexes every processed document and answers with the model
you pick, either Gemini or Groq. Switch models at any time with CTRL+O.

Logging out clears the processed documents and the chat history.
        "#;

    let lines = text
        .trim()
        .split('\n')
        .map(|line| return Line::from(line.to_string()))
        .collect::<Vec<Line<'static>>>();

    return vec![
        Section::growing("About pdfchat", lines),
        Section::new(
            "Version",
            vec![Line::from(format!(
                "{} ({})",
                env!("CARGO_PKG_VERSION"),
                env!("VERGEN_GIT_DESCRIBE")
            ))],
        ),
    ];
}
