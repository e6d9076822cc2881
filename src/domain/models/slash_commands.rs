#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /add (/a) [PATH...] - Stages one or more PDF files for upload. Quote paths that contain spaces. Anything that isn't a PDF is skipped.
- /remove (/rm) [NUMBER] - Removes a staged file by its number in the "Files to Upload" list.
- /process (/p) - Uploads every staged file to the backend for processing.
- /model (/m) [gemini,groq] - Selects the model answering your questions. Without a name, switches to the next model.
- /logout - Logs out, clearing processed files and chat history.
- /about - Shows the about page.
- /quit /exit (/q) - Exit pdfchat.
- /help (/h) - Provides this help menu.

Any other text is sent as a question once at least one file has been processed.

HOTKEYS:
- CTRL+O - Switch to the next model.
- CTRL+C - Exit.
- ESC - Go back from the about, sign up and forgot password pages.
- TAB - Move between fields on the log in, sign up and forgot password pages.
- CTRL+N - Open the sign up page from the log in page.
- CTRL+F - Open the forgot password page from the log in page.
        "#;

    return text.trim().to_string();
}

pub struct SlashCommand {
    command: String,
    rest: String,
    pub args: Vec<String>,
}

impl SlashCommand {
    /// Arguments split like a shell would, so quoted paths keep their spaces.
    /// Unbalanced quotes fall back to plain whitespace splitting.
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let text = text.trim();
        let (prefix, rest) = text
            .split_once(char::is_whitespace)
            .unwrap_or((text, ""));
        if prefix.is_empty() {
            return None;
        }

        let rest = rest.trim();
        let args = shlex::split(rest).unwrap_or_else(|| {
            return rest
                .split_whitespace()
                .map(|e| return e.to_string())
                .collect::<Vec<String>>();
        });

        let cmd = SlashCommand {
            command: prefix.to_string(),
            rest: rest.to_string(),
            args,
        };
        if cmd.is_add()
            || cmd.is_remove()
            || cmd.is_process()
            || cmd.is_model()
            || cmd.is_logout()
            || cmd.is_about()
            || cmd.is_help()
            || cmd.is_quit()
        {
            return Some(cmd);
        }

        return None;
    }

    pub fn is_add(&self) -> bool {
        return ["/a", "/add"].contains(&self.command.as_str());
    }

    pub fn is_remove(&self) -> bool {
        return ["/rm", "/remove"].contains(&self.command.as_str());
    }

    pub fn is_process(&self) -> bool {
        return ["/p", "/process"].contains(&self.command.as_str());
    }

    pub fn is_model(&self) -> bool {
        return ["/m", "/model"].contains(&self.command.as_str());
    }

    pub fn is_logout(&self) -> bool {
        return self.command == "/logout";
    }

    pub fn is_about(&self) -> bool {
        return self.command == "/about";
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    /// Everything after the command, untouched.
    pub fn rest(&self) -> &str {
        return &self.rest;
    }

    /// Parses the first argument as a 1-based list position and returns the
    /// matching 0-based index.
    pub fn index_arg(&self) -> Option<usize> {
        let position = self.args.first()?.parse::<usize>().ok()?;
        return position.checked_sub(1);
    }
}
