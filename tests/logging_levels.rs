use taskorder::logging::parse_level_str;
use tracing::Level;

#[test]
fn level_names_parse_case_insensitively() {
    assert_eq!(parse_level_str("DEBUG"), Some(Level::DEBUG));
    assert_eq!(parse_level_str("info"), Some(Level::INFO));
    assert_eq!(parse_level_str("Warn"), Some(Level::WARN));
    assert_eq!(parse_level_str("  trace \n"), Some(Level::TRACE));
    assert_eq!(parse_level_str("error"), Some(Level::ERROR));
}

#[test]
fn unknown_level_names_are_ignored() {
    assert_eq!(parse_level_str("loud"), None);
    assert_eq!(parse_level_str(""), None);
}
