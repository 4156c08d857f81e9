use super::*;

fn form(roll: &str, marks: &str, subject: &str) -> MarkForm {
    MarkForm {
        roll_number: roll.to_owned(),
        marks: marks.to_owned(),
        subject: subject.to_owned(),
    }
}

#[test]
fn parse_mark_accepts_range_bounds() {
    assert_eq!(parse_mark("0"), Ok(0.0));
    assert_eq!(parse_mark(" 100 "), Ok(100.0));
    assert_eq!(parse_mark("72.5"), Ok(72.5));
}

#[test]
fn parse_mark_rejects_out_of_range_and_garbage() {
    assert_eq!(parse_mark("-1"), Err(MARK_OUT_OF_RANGE));
    assert_eq!(parse_mark("100.01"), Err(MARK_OUT_OF_RANGE));
    assert_eq!(parse_mark("abc"), Err(MARK_OUT_OF_RANGE));
    assert_eq!(parse_mark("NaN"), Err(MARK_OUT_OF_RANGE));
    assert_eq!(parse_mark(""), Err(MARK_OUT_OF_RANGE));
}

#[test]
fn new_mark_requires_every_field() {
    assert_eq!(validate_new_mark(&form("", "50", "Math")), Err(FIELDS_REQUIRED));
    assert_eq!(validate_new_mark(&form("1001", " ", "Math")), Err(FIELDS_REQUIRED));
    assert_eq!(validate_new_mark(&form("1001", "50", "  ")), Err(FIELDS_REQUIRED));
}

#[test]
fn new_mark_checks_range_after_presence() {
    assert_eq!(validate_new_mark(&form("1001", "101", "Math")), Err(MARK_OUT_OF_RANGE));
}

#[test]
fn new_mark_is_trimmed() {
    let mark = validate_new_mark(&form(" 1001 ", "88", " Physics ")).unwrap();
    assert_eq!(
        mark,
        NewMark {
            roll_number: "1001".to_owned(),
            marks: 88.0,
            subject: "Physics".to_owned(),
        }
    );
}

#[test]
fn toggle_label_follows_visibility() {
    assert_eq!(complaints_toggle_label(false), "Show Complaints ▼");
    assert_eq!(complaints_toggle_label(true), "Hide Complaints ▲");
}
