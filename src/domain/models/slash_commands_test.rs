use super::SlashCommand;

#[test]
fn it_parse_empty_string() {
    assert!(SlashCommand::parse("").is_none());
}

#[test]
fn it_parse_space_only() {
    assert!(SlashCommand::parse("   ").is_none());
}

#[test]
fn it_parse_single_slash() {
    assert!(SlashCommand::parse("/").is_none());
}

#[test]
fn it_parse_question() {
    assert!(SlashCommand::parse("What is the summary?").is_none());
}

#[test]
fn it_parse_unknown_command() {
    assert!(SlashCommand::parse("/upload report.pdf").is_none());
}

#[test]
fn it_parse_valid_prefix() {
    let cmd = SlashCommand::parse("/q").unwrap();
    assert_eq!(cmd.command, "/q");
    assert!(cmd.args.is_empty());
}

#[test]
fn it_is_add_with_paths() {
    let cmd = SlashCommand::parse("/add  report.pdf  notes.pdf ").unwrap();
    assert!(cmd.is_add());
    assert_eq!(cmd.args, vec!["report.pdf", "notes.pdf"]);

    assert!(SlashCommand::parse("/a report.pdf").unwrap().is_add());
}

#[test]
fn it_keeps_quoted_paths_together() {
    let cmd = SlashCommand::parse(r#"/add "/home/me/Annual Report.pdf" 'Q3 notes.pdf' x.pdf"#).unwrap();
    assert_eq!(
        cmd.args,
        vec!["/home/me/Annual Report.pdf", "Q3 notes.pdf", "x.pdf"]
    );
}

#[test]
fn it_keeps_the_raw_rest_of_the_line() {
    let cmd = SlashCommand::parse("/add   /home/me/Annual Report.pdf  ").unwrap();
    assert_eq!(cmd.rest(), "/home/me/Annual Report.pdf");
    assert_eq!(cmd.args, vec!["/home/me/Annual", "Report.pdf"]);
}

#[test]
fn it_splits_on_whitespace_with_unbalanced_quotes() {
    let cmd = SlashCommand::parse(r#"/add "broken.pdf other.pdf"#).unwrap();
    assert_eq!(cmd.args, vec![r#""broken.pdf"#, "other.pdf"]);
}

#[test]
fn it_is_remove() {
    let cmd = SlashCommand::parse("/rm 2").unwrap();
    assert!(cmd.is_remove());
    assert_eq!(cmd.index_arg(), Some(1));

    assert!(SlashCommand::parse("/remove 1").unwrap().is_remove());
}

#[test]
fn it_rejects_invalid_indexes() {
    assert_eq!(SlashCommand::parse("/rm 0").unwrap().index_arg(), None);
    assert_eq!(SlashCommand::parse("/rm -1").unwrap().index_arg(), None);
    assert_eq!(SlashCommand::parse("/rm two").unwrap().index_arg(), None);
    assert_eq!(SlashCommand::parse("/rm").unwrap().index_arg(), None);
}

#[test]
fn it_is_process() {
    assert!(SlashCommand::parse("/p").unwrap().is_process());
    assert!(SlashCommand::parse("/process").unwrap().is_process());
}

#[test]
fn it_is_model() {
    let cmd = SlashCommand::parse("/model groq").unwrap();
    assert!(cmd.is_model());
    assert_eq!(cmd.args, vec!["groq"]);
    assert!(SlashCommand::parse("/m").unwrap().is_model());
}

#[test]
fn it_is_navigation() {
    assert!(SlashCommand::parse("/logout").unwrap().is_logout());
    assert!(SlashCommand::parse("/about").unwrap().is_about());
    assert!(SlashCommand::parse("/help").unwrap().is_help());
    assert!(SlashCommand::parse("/h").unwrap().is_help());
}

#[test]
fn it_is_quit() {
    assert!(SlashCommand::parse("/q").unwrap().is_quit());
    assert!(SlashCommand::parse("/quit").unwrap().is_quit());
    assert!(SlashCommand::parse("/exit").unwrap().is_quit());
}
