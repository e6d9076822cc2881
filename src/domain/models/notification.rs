#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// A blocking message. While one is shown it captures all input until it is
/// dismissed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

impl Notification {
    pub fn info(text: &str) -> Notification {
        return Notification {
            kind: NotificationKind::Info,
            text: text.to_string(),
        };
    }

    pub fn error(text: &str) -> Notification {
        return Notification {
            kind: NotificationKind::Error,
            text: text.to_string(),
        };
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            NotificationKind::Info => return "Notice",
            NotificationKind::Error => return "Error",
        }
    }
}
