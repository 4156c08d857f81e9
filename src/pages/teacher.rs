//! Teacher screen: mark records grouped by subject, plus the complaint
//! queue.

#[cfg(test)]
#[path = "teacher_test.rs"]
mod teacher_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::panel_header::PanelHeader;
use crate::net::api::ApiClient;
use crate::net::types::{Complaint, ComplaintStatus, MarkRecord, NewMark};
use crate::state::auth::use_auth;
use crate::util::feedback::{load_list, spawn_mutation};
use crate::util::search::{filter_marks, group_by_subject, pending_count};

pub const FIELDS_REQUIRED: &str = "All fields are required.";
pub const MARK_OUT_OF_RANGE: &str = "Mark must be a number between 0 and 100.";

/// Contents of the "add mark" form, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkForm {
    pub roll_number: String,
    pub marks: String,
    pub subject: String,
}

/// # Errors
///
/// Returns [`MARK_OUT_OF_RANGE`] unless `raw` is a number in `0..=100`.
pub fn parse_mark(raw: &str) -> Result<f64, &'static str> {
    match raw.trim().parse::<f64>() {
        Ok(mark) if (0.0..=100.0).contains(&mark) => Ok(mark),
        _ => Err(MARK_OUT_OF_RANGE),
    }
}

/// # Errors
///
/// Returns [`FIELDS_REQUIRED`] for a blank field, then the mark range error.
pub fn validate_new_mark(form: &MarkForm) -> Result<NewMark, &'static str> {
    let roll_number = form.roll_number.trim();
    let subject = form.subject.trim();
    if roll_number.is_empty() || subject.is_empty() || form.marks.trim().is_empty() {
        return Err(FIELDS_REQUIRED);
    }
    Ok(NewMark {
        roll_number: roll_number.to_owned(),
        marks: parse_mark(&form.marks)?,
        subject: subject.to_owned(),
    })
}

pub fn complaints_toggle_label(shown: bool) -> &'static str {
    if shown { "Hide Complaints ▲" } else { "Show Complaints ▼" }
}

#[component]
pub fn TeacherPage() -> impl IntoView {
    let auth = use_auth();
    let api = StoredValue::new(expect_context::<ApiClient>());

    let banner = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let form = RwSignal::new(MarkForm::default());
    let editing = RwSignal::new(None::<(String, String)>);
    let show_complaints = RwSignal::new(false);

    let marks = LocalResource::new(move || {
        let api = api.get_value();
        load_list(auth, banner, "Error loading data", "Failed to fetch marks.", move |token| async move {
            api.list_marks(&token).await
        })
    });
    let complaints = LocalResource::new(move || {
        let api = api.get_value();
        load_list(auth, banner, "Error loading data", "Failed to fetch complaints.", move |token| async move {
            api.list_complaints(&token).await
        })
    });

    let on_add = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mark = match validate_new_mark(&form.get_untracked()) {
            Ok(mark) => mark,
            Err(msg) => {
                banner.set(Some(msg.to_owned()));
                return;
            }
        };
        let api = api.get_value();
        spawn_mutation(
            auth,
            banner,
            "Error adding mark",
            "Failed to add student mark.",
            move |token| async move { api.create_mark(&token, &mark).await },
            move || {
                form.set(MarkForm::default());
                marks.refetch();
            },
        );
    };

    let save_mark = move || {
        let Some((id, raw)) = editing.get_untracked() else {
            return;
        };
        let value = match parse_mark(&raw) {
            Ok(value) => value,
            Err(msg) => {
                banner.set(Some(msg.to_owned()));
                return;
            }
        };
        let api = api.get_value();
        spawn_mutation(
            auth,
            banner,
            "Error updating mark",
            "Failed to update mark.",
            move |token| async move { api.update_mark(&token, &id, value).await },
            move || {
                editing.set(None);
                marks.refetch();
            },
        );
    };

    let delete = move |id: String| {
        let api = api.get_value();
        spawn_mutation(
            auth,
            banner,
            "Error deleting student mark",
            "Failed to delete student mark.",
            move |token| async move { api.delete_mark(&token, &id).await },
            move || marks.refetch(),
        );
    };

    let resolve = move |id: String| {
        let api = api.get_value();
        spawn_mutation(
            auth,
            banner,
            "Error resolving complaint",
            "Failed to resolve complaint.",
            move |token| async move { api.resolve_complaint(&token, &id).await },
            move || complaints.refetch(),
        );
    };

    let refresh = move |_| {
        banner.set(None);
        marks.refetch();
        complaints.refetch();
    };

    let mark_row = move |record: MarkRecord| {
        let id = record.id.clone();
        let edit_target = (record.id.clone(), record.marks.to_string());
        let delete_id = record.id.clone();
        let is_editing = move || editing.with(|e| e.as_ref().is_some_and(|(eid, _)| *eid == id));
        let marks_text = record.marks.to_string();

        view! {
            <li>
                <strong>{record.student_name.clone().unwrap_or_else(|| "N/A".to_owned())}</strong>
                " (Roll: " {record.roll_number.clone().unwrap_or_default()} "): "
                <Show
                    when=is_editing
                    fallback=move || {
                        let edit_target = edit_target.clone();
                        let delete_id = delete_id.clone();
                        view! {
                            <div class="mark-actions-group">
                                <span class="mark-display">{marks_text.clone()}</span>
                                <button class="action-button" on:click=move |_| editing.set(Some(edit_target.clone()))>
                                    "Edit Mark"
                                </button>
                                <button class="delete-button" on:click=move |_| delete(delete_id.clone())>
                                    "Delete"
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="edit-mark-group">
                        <input
                            class="input-small"
                            type="number"
                            prop:value=move || editing.with(|e| e.as_ref().map(|(_, raw)| raw.clone()).unwrap_or_default())
                            on:input=move |ev| {
                                let raw = event_target_value(&ev);
                                editing.update(|e| {
                                    if let Some((_, value)) = e {
                                        *value = raw;
                                    }
                                });
                            }
                        />
                        <button on:click=move |_| save_mark()>"Save"</button>
                        <button class="delete-button" on:click=move |_| editing.set(None)>
                            "Cancel"
                        </button>
                    </div>
                </Show>
            </li>
        }
    };

    let complaint_row = move |c: Complaint| {
        let resolvable = c.status == ComplaintStatus::Submitted;
        let id = c.id.clone();
        view! {
            <li>
                <strong>{c.student_name.clone().unwrap_or_default()}</strong>
                ": " {c.message.clone()} " (Status: " {c.status.label()} ") "
                {resolvable.then(|| view! { <button on:click=move |_| resolve(id.clone())>"Resolve"</button> })}
            </li>
        }
    };

    let grouped = move || {
        marks.get().map(|list| group_by_subject(filter_marks(&list, &search.get())))
    };
    let pending = move || complaints.get().map_or(0, |list| pending_count(&list));

    view! {
        <div class="panel-wrapper teacher-panel">
            <PanelHeader title="Teacher Panel"/>
            <Show when=move || banner.with(Option::is_some)>
                <div class="error-message">{move || banner.get().unwrap_or_default()}</div>
            </Show>

            <form class="panel-section" on:submit=on_add>
                <h2>"Add Student Mark"</h2>
                <input
                    placeholder="Student Roll Number"
                    prop:value=move || form.with(|f| f.roll_number.clone())
                    on:input=move |ev| form.update(|f| f.roll_number = event_target_value(&ev))
                />
                <input
                    type="number"
                    placeholder="Marks (0-100)"
                    prop:value=move || form.with(|f| f.marks.clone())
                    on:input=move |ev| form.update(|f| f.marks = event_target_value(&ev))
                />
                <input
                    placeholder="Subject"
                    prop:value=move || form.with(|f| f.subject.clone())
                    on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                />
                <button type="submit">"Add Mark Record"</button>
            </form>

            <div class="panel-section">
                <h2>"Mark Records by Subject"</h2>
                <div class="search-form-group">
                    <input
                        class="search-input-field"
                        type="search"
                        placeholder="Search by name, roll number, or subject..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button type="button" class="action-button-refresh" on:click=refresh>
                        "Refresh"
                    </button>
                </div>
                <Suspense fallback=move || view! { <p>"Loading student data..."</p> }>
                    {move || {
                        grouped()
                            .map(|groups| {
                                if groups.is_empty() {
                                    view! { <p>"No student marks found yet matching the current search filter."</p> }
                                        .into_any()
                                } else {
                                    groups
                                        .into_iter()
                                        .map(|(subject, records)| {
                                            view! {
                                                <div class="panel-subject-section">
                                                    <h3>{subject}</h3>
                                                    <ul>{records.into_iter().map(mark_row).collect_view()}</ul>
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>

            <div class="panel-section">
                <h2>"Student Complaints (" {pending} " Pending)"</h2>
                <button class="action-button-small" on:click=move |_| show_complaints.update(|s| *s = !*s)>
                    {move || complaints_toggle_label(show_complaints.get())}
                </button>
                <Show when=move || show_complaints.get()>
                    <Suspense fallback=move || view! { <p>"Loading complaints..."</p> }>
                        {move || {
                            complaints
                                .get()
                                .map(|list| view! { <ul>{list.into_iter().map(complaint_row).collect_view()}</ul> })
                        }}
                    </Suspense>
                </Show>
            </div>
        </div>
    }
}
