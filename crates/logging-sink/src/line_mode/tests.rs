use super::LineMode;

#[test]
fn line_mode_conversions_round_trip() {
    assert_eq!(LineMode::from(true), LineMode::WithNewline);
    assert_eq!(LineMode::from(false), LineMode::WithoutNewline);

    let append: bool = LineMode::WithNewline.into();
    assert!(append);

    let append: bool = LineMode::WithoutNewline.into();
    assert!(!append);
}

#[test]
fn default_appends_newline() {
    assert_eq!(LineMode::default(), LineMode::WithNewline);
}

#[test]
fn terminated_record_needs_no_newline() {
    assert!(!LineMode::WithNewline.needs_terminator(b"done\n"));
}

#[test]
fn unterminated_record_needs_newline() {
    assert!(LineMode::WithNewline.needs_terminator(b"done"));
}

#[test]
fn empty_record_needs_newline() {
    assert!(LineMode::WithNewline.needs_terminator(b""));
}

#[test]
fn without_newline_never_terminates() {
    assert!(!LineMode::WithoutNewline.needs_terminator(b""));
    assert!(!LineMode::WithoutNewline.needs_terminator(b"done"));
}
