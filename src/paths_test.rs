use super::*;

#[test]
fn test_log_path_sits_next_to_glossary() {
    let path = Path::new("/data/terms/physics.json");
    assert_eq!(log_path_for(path), PathBuf::from("/data/terms/physics.log"));
}

#[test]
fn test_log_path_without_extension() {
    assert_eq!(log_path_for(Path::new("notes")), PathBuf::from("notes.log"));
}

#[test]
fn test_log_path_never_equals_glossary_path() {
    let path = Path::new("/data/terms/notes.log");
    assert_eq!(log_path_for(path), PathBuf::from("/data/terms/notes.log.log"));
}

#[test]
fn test_default_path_layout() {
    // The platform data dir may be missing in sandboxed CI
    if let Ok(path) = default_glossary_path() {
        assert!(path.ends_with(Path::new(APP_DIR_NAME).join(DEFAULT_FILE_NAME)));
    }
}
