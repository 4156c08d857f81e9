//! Case-insensitive list filtering and grouping for the role screens.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::types::{Complaint, ComplaintStatus, MarkRecord, User};

fn any_contains(fields: &[Option<&str>], needle: &str) -> bool {
    fields
        .iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Users whose username, full name, or roll number contains `term`.
/// A blank term keeps everything.
pub fn filter_users(users: &[User], term: &str) -> Vec<User> {
    let needle = term.trim().to_lowercase();
    users
        .iter()
        .filter(|u| {
            needle.is_empty()
                || any_contains(
                    &[Some(u.username.as_str()), u.full_name.as_deref(), u.roll_number.as_deref()],
                    &needle,
                )
        })
        .cloned()
        .collect()
}

/// Marks whose roll number, student name, or subject contains `term`.
pub fn filter_marks(marks: &[MarkRecord], term: &str) -> Vec<MarkRecord> {
    let needle = term.trim().to_lowercase();
    marks
        .iter()
        .filter(|m| {
            needle.is_empty()
                || any_contains(
                    &[m.roll_number.as_deref(), m.student_name.as_deref(), Some(m.subject.as_str())],
                    &needle,
                )
        })
        .cloned()
        .collect()
}

/// Group marks by subject, subjects in first-seen order.
pub fn group_by_subject(marks: Vec<MarkRecord>) -> Vec<(String, Vec<MarkRecord>)> {
    let mut groups: Vec<(String, Vec<MarkRecord>)> = Vec::new();
    for mark in marks {
        match groups.iter_mut().find(|(subject, _)| *subject == mark.subject) {
            Some((_, list)) => list.push(mark),
            None => groups.push((mark.subject.clone(), vec![mark])),
        }
    }
    groups
}

/// Complaints still awaiting a teacher.
pub fn pending_count(complaints: &[Complaint]) -> usize {
    complaints
        .iter()
        .filter(|c| c.status == ComplaintStatus::Submitted)
        .count()
}
