use super::*;

#[test]
fn settings_file_uses_expected_filename() {
    let path = settings_file().expect("settings_file should resolve");
    assert_eq!(
        path.file_name().and_then(|f| f.to_str()),
        Some(project_identity::SETTINGS_FILE_BASENAME)
    );
}

#[test]
fn expand_home_leaves_absolute_paths_alone() {
    let path = expand_home(Path::new("/var/log/out.txt")).unwrap();
    assert_eq!(path, PathBuf::from("/var/log/out.txt"));
}

#[test]
fn expand_home_rejects_other_users() {
    assert!(expand_home(Path::new("~root/out.txt")).is_err());
}
