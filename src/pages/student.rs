//! Student screen: own marks and complaints.

#[cfg(test)]
#[path = "student_test.rs"]
mod student_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::panel_header::PanelHeader;
use crate::net::api::ApiClient;
use crate::net::types::{Complaint, MarkRecord};
use crate::state::auth::use_auth;
use crate::util::feedback::{load_list, spawn_mutation};

/// Trimmed complaint text, or `None` when there is nothing to send.
pub fn validate_complaint(raw: &str) -> Option<String> {
    let message = raw.trim();
    (!message.is_empty()).then(|| message.to_owned())
}

pub fn empty_marks_text(username: &str) -> String {
    format!("No marks recorded yet for {username}.")
}

pub fn status_toggle_label(shown: bool) -> &'static str {
    if shown { "Hide Status ▲" } else { "View Status ▼" }
}

#[component]
pub fn StudentPage() -> impl IntoView {
    let auth = use_auth();
    let api = StoredValue::new(expect_context::<ApiClient>());

    let banner = RwSignal::new(None::<String>);
    let message = RwSignal::new(String::new());
    let show_status = RwSignal::new(false);

    let marks = LocalResource::new(move || {
        let api = api.get_value();
        load_list(auth, banner, "Error loading marks", "Failed to fetch marks.", move |token| async move {
            api.list_marks(&token).await
        })
    });
    let complaints = LocalResource::new(move || {
        let api = api.get_value();
        load_list(
            auth,
            banner,
            "Error loading complaints",
            "Failed to fetch complaints.",
            move |token| async move { api.list_complaints(&token).await },
        )
    });

    let username = move || auth.session().map(|s| s.username().to_owned()).unwrap_or_default();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(text) = validate_complaint(&message.get_untracked()) else {
            return;
        };
        let api = api.get_value();
        spawn_mutation(
            auth,
            banner,
            "Error submitting complaint",
            "Failed to submit complaint.",
            move |token| async move { api.create_complaint(&token, &text).await },
            move || {
                message.set(String::new());
                complaints.refetch();
            },
        );
    };

    let mark_item = |record: MarkRecord| {
        view! {
            <li>
                <strong>{record.subject}</strong>
                ": "
                {record.marks.to_string()}
            </li>
        }
    };
    let complaint_item = |c: Complaint| {
        view! { <li>{c.message} " - Status: " <strong>{c.status.label()}</strong></li> }
    };

    view! {
        <div class="panel-wrapper student-panel">
            <PanelHeader title="Student Portal"/>
            <Show when=move || banner.with(Option::is_some)>
                <div class="error-message">{move || banner.get().unwrap_or_default()}</div>
            </Show>

            <div class="panel-section">
                <h2>{username}</h2>
                <h2>"Your Marks"</h2>
                <Suspense fallback=move || view! { <p>"Loading your records..."</p> }>
                    {move || {
                        marks
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! { <ul><li>{empty_marks_text(&username())}</li></ul> }.into_any()
                                } else {
                                    view! { <ul>{list.into_iter().map(mark_item).collect_view()}</ul> }.into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>

            <form class="panel-section" on:submit=on_submit>
                <h2>"Raise Complaint"</h2>
                <textarea
                    rows=4
                    placeholder="Describe your issue with marks..."
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" disabled=move || message.with(|m| validate_complaint(m).is_none())>
                    "Submit Complaint"
                </button>
            </form>

            <div class="panel-section">
                <h3>"Complaints Status"</h3>
                <button class="action-button-small" on:click=move |_| show_status.update(|s| *s = !*s)>
                    {move || status_toggle_label(show_status.get())}
                </button>
                <Show when=move || show_status.get()>
                    <Suspense fallback=move || view! { <p>"Loading complaints..."</p> }>
                        {move || {
                            complaints
                                .get()
                                .map(|list| {
                                    if list.is_empty() {
                                        view! { <ul><li>"No complaints submitted."</li></ul> }.into_any()
                                    } else {
                                        view! { <ul>{list.into_iter().map(complaint_item).collect_view()}</ul> }
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </Show>
            </div>
        </div>
    }
}
