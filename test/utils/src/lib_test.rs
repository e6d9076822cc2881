use super::Fixtures;

#[test]
fn it_removes_fixtures_on_drop() {
    let fixtures = Fixtures::new();
    let dir = fixtures.dir().to_path_buf();
    let path = fixtures.pdf("report.pdf");
    assert!(path.is_file());

    drop(fixtures);

    assert!(!path.exists());
    assert!(!dir.exists());
}

#[test]
fn it_keeps_spaces_in_names() {
    let fixtures = Fixtures::new();
    let path = fixtures.pdf("Annual Report.pdf");

    assert!(path.is_file());
    assert_eq!(path.file_name().unwrap(), "Annual Report.pdf");
}
