use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;

use crate::domain::models::Notification;
use crate::domain::models::NotificationKind;

const DISMISS_HINT: &str = "Press ENTER to dismiss";

pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    return Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
}

fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let lines = text
        .split('\n')
        .map(|line| {
            let len = line.chars().count();
            if len == 0 {
                return 1;
            }
            return (len + width - 1) / width;
        })
        .sum::<usize>();

    return u16::try_from(lines).unwrap_or(u16::MAX);
}

pub fn render<B: Backend>(frame: &mut Frame<B>, area: Rect, notification: &Notification) {
    let width = (area.width * 3 / 5).max(40);
    // Borders plus horizontal padding.
    let inner_width = width.saturating_sub(4);
    let height = wrapped_height(&notification.text, inner_width).saturating_add(4);
    let rect = centered(area, width, height);

    let color = match notification.kind {
        NotificationKind::Info => Color::Cyan,
        NotificationKind::Error => Color::Red,
    };

    let mut lines = notification
        .text
        .split('\n')
        .map(|line| return Line::from(line.to_string()))
        .collect::<Vec<Line>>();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        DISMISS_HINT,
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(notification.title())
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(color))
                    .padding(Padding::new(1, 1, 0, 0)),
            )
            .wrap(Wrap { trim: false }),
        rect,
    );
}
