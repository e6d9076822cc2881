#[cfg(test)]
#[path = "screens_test.rs"]
mod tests;

mod about;
mod auth;
mod main_page;
mod popup;

use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;

use crate::domain::models::Route;
use crate::domain::services::WorkflowController;

/// One bordered block of a screen. A growing section takes whatever height is
/// left and keeps its last lines in view.
pub struct Section {
    pub title: String,
    pub lines: Vec<Line<'static>>,
    pub grow: bool,
}

impl Section {
    pub fn new(title: &str, lines: Vec<Line<'static>>) -> Section {
        return Section {
            title: title.to_string(),
            lines,
            grow: false,
        };
    }

    pub fn growing(title: &str, lines: Vec<Line<'static>>) -> Section {
        return Section {
            title: title.to_string(),
            lines,
            grow: true,
        };
    }

    fn height(&self) -> u16 {
        return u16::try_from(self.lines.len() + 2).unwrap_or(u16::MAX);
    }
}

pub fn sections(controller: &WorkflowController) -> Vec<Section> {
    match controller.route() {
        Route::Login => return auth::login(controller),
        Route::Signup => return auth::signup(controller),
        Route::ForgetPassword => return auth::forget_password(controller),
        Route::Main => return main_page::sections(controller),
        Route::About => return about::sections(),
    }
}

pub fn hints(route: Route) -> &'static str {
    match route {
        Route::Login => return "TAB next field | ENTER log in | CTRL+N sign up | CTRL+F forgot password | CTRL+C quit",
        Route::Signup | Route::ForgetPassword => {
            return "TAB next field | ENTER submit | ESC back to log in | CTRL+C quit";
        }
        Route::Main => return "ENTER send | CTRL+O switch model | /help commands | CTRL+C quit",
        Route::About => return "ESC back | CTRL+C quit",
    }
}

fn render_sections<B: Backend>(frame: &mut Frame<B>, rect: Rect, sections: &[Section]) {
    let mut constraints = sections
        .iter()
        .map(|section| {
            if section.grow {
                return Constraint::Min(3);
            }
            return Constraint::Length(section.height());
        })
        .collect::<Vec<Constraint>>();

    let has_growing = sections.iter().any(|section| return section.grow);
    if !has_growing {
        constraints.push(Constraint::Min(0));
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(rect);

    for (section, area) in sections.iter().zip(layout.iter()) {
        let mut offset = 0;
        if section.grow {
            let visible = usize::from(area.height.saturating_sub(2));
            offset = u16::try_from(section.lines.len().saturating_sub(visible)).unwrap_or(0);
        }

        frame.render_widget(
            Paragraph::new(section.lines.clone())
                .block(
                    Block::default()
                        .title(section.title.to_string())
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .padding(Padding::new(1, 1, 0, 0)),
                )
                .wrap(Wrap { trim: false })
                .scroll((offset, 0)),
            *area,
        );
    }
}

/// Draws the screen for the current route, then the notification on top of
/// it when one is showing.
pub fn render<B: Backend>(frame: &mut Frame<B>, controller: &WorkflowController) {
    let area = frame.size();
    let route = controller.route();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            route.title(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        layout[0],
    );
    render_sections(frame, layout[1], &sections(controller));
    frame.render_widget(
        Paragraph::new(hints(route)).style(Style::default().fg(Color::DarkGray)),
        layout[2],
    );

    if let Some(notification) = controller.notification() {
        popup::render(frame, area, notification);
    }
}
