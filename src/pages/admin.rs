//! Administrator screen: account listing, creation, editing, deletion and
//! password resets.
//!
//! Every mutation refetches the user list on success; the list is never
//! patched locally.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::panel_header::PanelHeader;
use crate::net::api::ApiClient;
use crate::net::types::{NewUser, User, UserUpdate};
use crate::session::Role;
use crate::state::auth::use_auth;
use crate::util::feedback::{load_list, spawn_mutation};
use crate::util::search::filter_users;

pub const MIN_PASSWORD_LEN: usize = 6;

pub const CREDENTIALS_REQUIRED: &str = "Username and password are required.";
pub const STUDENT_FIELDS_REQUIRED: &str = "Full Name and Roll Number are required for student accounts.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long.";

/// Contents of the "add user" form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserForm {
    pub username: String,
    pub password: String,
    pub role: Role,
    pub full_name: String,
    pub roll_number: String,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            role: Role::Student,
            full_name: String::new(),
            roll_number: String::new(),
        }
    }
}

/// Contents of the inline profile editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileForm {
    pub role: Role,
    pub full_name: String,
    pub roll_number: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            role: user.role,
            full_name: user.full_name.clone().unwrap_or_default(),
            roll_number: user.roll_number.clone().unwrap_or_default(),
        }
    }
}

fn student_fields(role: Role, full_name: &str, roll_number: &str) -> Result<(String, String), &'static str> {
    let full_name = full_name.trim();
    let roll_number = roll_number.trim();
    if role == Role::Student && (full_name.is_empty() || roll_number.is_empty()) {
        return Err(STUDENT_FIELDS_REQUIRED);
    }
    Ok((full_name.to_owned(), roll_number.to_owned()))
}

/// # Errors
///
/// Returns the message to show when a required field is blank.
pub fn validate_new_user(form: &UserForm) -> Result<NewUser, &'static str> {
    let username = form.username.trim();
    if username.is_empty() || form.password.is_empty() {
        return Err(CREDENTIALS_REQUIRED);
    }
    let (full_name, roll_number) = student_fields(form.role, &form.full_name, &form.roll_number)?;
    Ok(NewUser {
        username: username.to_owned(),
        password: form.password.clone(),
        role: form.role,
        full_name,
        roll_number,
    })
}

/// # Errors
///
/// Returns the message to show when a student profile lacks name or roll.
pub fn validate_profile(form: &ProfileForm) -> Result<UserUpdate, &'static str> {
    let (full_name, roll_number) = student_fields(form.role, &form.full_name, &form.roll_number)?;
    Ok(UserUpdate {
        role: form.role,
        full_name,
        roll_number,
    })
}

/// # Errors
///
/// Returns [`PASSWORD_TOO_SHORT`] below [`MIN_PASSWORD_LEN`] characters.
pub fn validate_new_password(raw: &str) -> Result<String, &'static str> {
    if raw.chars().count() < MIN_PASSWORD_LEN {
        return Err(PASSWORD_TOO_SHORT);
    }
    Ok(raw.to_owned())
}

/// Name shown first in a user row.
pub fn display_name(user: &User) -> &str {
    user.full_name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(&user.username)
}

fn role_options() -> impl IntoView {
    Role::ALL
        .into_iter()
        .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
        .collect_view()
}

fn parse_role(raw: &str, current: Role) -> Role {
    raw.parse().unwrap_or(current)
}

fn edit_profile(editing: RwSignal<Option<(String, ProfileForm)>>, apply: impl FnOnce(&mut ProfileForm)) {
    editing.update(|e| {
        if let Some((_, profile)) = e {
            apply(profile);
        }
    });
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = use_auth();
    let api = StoredValue::new(expect_context::<ApiClient>());

    let banner = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let form = RwSignal::new(UserForm::default());
    let editing = RwSignal::new(None::<(String, ProfileForm)>);
    let resetting = RwSignal::new(None::<(String, String)>);
    let new_password = RwSignal::new(String::new());

    let users = LocalResource::new(move || {
        let api = api.get_value();
        load_list(auth, banner, "Error loading users", "Failed to fetch user list.", move |token| async move {
            api.list_users(&token).await
        })
    });

    let on_add = move |ev: SubmitEvent| {
        ev.prevent_default();
        notice.set(None);
        let user = match validate_new_user(&form.get_untracked()) {
            Ok(user) => user,
            Err(msg) => {
                banner.set(Some(msg.to_owned()));
                return;
            }
        };
        let api = api.get_value();
        let created = user.username.clone();
        spawn_mutation(
            auth,
            banner,
            "Error creating user",
            "Failed to create user.",
            move |token| async move { api.create_user(&token, &user).await },
            move || {
                form.set(UserForm::default());
                notice.set(Some(format!("User {created} created.")));
                users.refetch();
            },
        );
    };

    let save_edit = move || {
        let Some((id, profile)) = editing.get_untracked() else {
            return;
        };
        notice.set(None);
        let update = match validate_profile(&profile) {
            Ok(update) => update,
            Err(msg) => {
                banner.set(Some(msg.to_owned()));
                return;
            }
        };
        let api = api.get_value();
        spawn_mutation(
            auth,
            banner,
            "Error updating user",
            "Failed to update user.",
            move |token| async move { api.update_user(&token, &id, &update).await },
            move || {
                editing.set(None);
                users.refetch();
            },
        );
    };

    let delete = move |id: String| {
        notice.set(None);
        let api = api.get_value();
        spawn_mutation(
            auth,
            banner,
            "Error deleting user",
            "Failed to delete user.",
            move |token| async move { api.delete_user(&token, &id).await },
            move || {
                notice.set(Some("User deleted successfully.".to_owned()));
                users.refetch();
            },
        );
    };

    let save_password = move || {
        let Some((id, username)) = resetting.get_untracked() else {
            return;
        };
        notice.set(None);
        let password = match validate_new_password(&new_password.get_untracked()) {
            Ok(password) => password,
            Err(msg) => {
                banner.set(Some(msg.to_owned()));
                return;
            }
        };
        let api = api.get_value();
        spawn_mutation(
            auth,
            banner,
            "Error resetting password",
            "Failed to reset password.",
            move |token| async move { api.reset_password(&token, &id, &password).await },
            move || {
                resetting.set(None);
                new_password.set(String::new());
                notice.set(Some(format!("Password for {username} updated successfully!")));
                users.refetch();
            },
        );
    };

    let is_student = move || form.with(|f| f.role == Role::Student);

    let row = move |user: User| {
        let id = user.id.clone();
        let edit_id = user.id.clone();
        let reset_id = user.id.clone();
        let delete_id = user.id.clone();
        let reset_username = user.username.clone();
        let profile = ProfileForm::from_user(&user);
        let is_editing = move || editing.with(|e| e.as_ref().is_some_and(|(eid, _)| *eid == id));
        let is_resetting = move || resetting.with(|r| r.as_ref().is_some_and(|(rid, _)| *rid == reset_id));
        let roll = (user.role == Role::Student)
            .then(|| user.roll_number.clone())
            .flatten()
            .filter(|r| !r.is_empty());

        let edit_value = move |read: fn(&ProfileForm) -> String| {
            move || editing.with(|e| e.as_ref().map(|(_, p)| read(p)).unwrap_or_default())
        };

        view! {
            <li class="user-row">
                <Show
                    when=is_editing
                    fallback=move || {
                        let edit_id = edit_id.clone();
                        let delete_id = delete_id.clone();
                        let reset_target = (user.id.clone(), reset_username.clone());
                        let profile = profile.clone();
                        view! {
                            <div class="user-details-readout">
                                <p>
                                    <strong>{display_name(&user).to_owned()}</strong>
                                    " "
                                    <span class="user-role-tag">"(" {user.role.as_str()} ")"</span>
                                    {roll.clone().map(|r| view! { <span class="user-roll-tag">" [Roll: " {r} "]"</span> })}
                                    <br/>
                                    <small class="text-muted">"Login ID: " {user.username.clone()}</small>
                                </p>
                            </div>
                            <div class="user-actions">
                                <button
                                    class="action-button-small"
                                    on:click=move |_| {
                                        new_password.set(String::new());
                                        resetting.set(Some(reset_target.clone()));
                                    }
                                >
                                    "Reset PW"
                                </button>
                                <button
                                    class="action-button-small"
                                    on:click=move |_| editing.set(Some((edit_id.clone(), profile.clone())))
                                >
                                    "Edit"
                                </button>
                                <button class="delete-button" on:click=move |_| delete(delete_id.clone())>
                                    "Delete"
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="edit-user-form">
                        <input
                            class="input-inline"
                            type="text"
                            placeholder="Full Name"
                            prop:value=edit_value(|p| p.full_name.clone())
                            on:input=move |ev| edit_profile(editing, |p| p.full_name = event_target_value(&ev))
                        />
                        <input
                            class="input-inline"
                            type="text"
                            placeholder="Roll Number"
                            prop:value=edit_value(|p| p.roll_number.clone())
                            on:input=move |ev| edit_profile(editing, |p| p.roll_number = event_target_value(&ev))
                        />
                        <select
                            class="input-inline"
                            prop:value=edit_value(|p| p.role.as_str().to_owned())
                            on:change=move |ev| {
                                let raw = event_target_value(&ev);
                                edit_profile(editing, |p| p.role = parse_role(&raw, p.role));
                            }
                        >
                            {role_options()}
                        </select>
                        <button on:click=move |_| save_edit()>"Save"</button>
                        <button class="delete-button" on:click=move |_| editing.set(None)>
                            "Cancel"
                        </button>
                    </div>
                </Show>
                <Show when=is_resetting>
                    <div class="reset-password-form">
                        <input
                            class="input-inline"
                            type="password"
                            placeholder="New password (min 6 characters)"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                        <button on:click=move |_| save_password()>"Set Password"</button>
                        <button class="delete-button" on:click=move |_| resetting.set(None)>
                            "Cancel"
                        </button>
                    </div>
                </Show>
            </li>
        }
    };

    let visible = move || users.get().map(|list| filter_users(&list, &search.get()));

    view! {
        <div class="panel-wrapper admin-panel">
            <PanelHeader title="Admin Panel"/>
            <Show when=move || banner.with(Option::is_some)>
                <p class="panel-error">{move || banner.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || notice.with(Option::is_some)>
                <p class="panel-notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>

            <form class="panel-section" on:submit=on_add>
                <h2>"User Management (Add New)"</h2>
                <label class="input-label">"Login Username"</label>
                <input
                    placeholder="Unique Login ID (for system access)"
                    prop:value=move || form.with(|f| f.username.clone())
                    on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                />
                <Show when=is_student>
                    <label class="input-label">"Student Full Name"</label>
                    <input
                        placeholder="Full Name (e.g., Jane Doe)"
                        prop:value=move || form.with(|f| f.full_name.clone())
                        on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                    />
                    <label class="input-label">"Roll Number (Unique Marks Identifier)"</label>
                    <input
                        placeholder="Unique Roll Number (e.g., 1001)"
                        prop:value=move || form.with(|f| f.roll_number.clone())
                        on:input=move |ev| form.update(|f| f.roll_number = event_target_value(&ev))
                    />
                </Show>
                <label class="input-label">"Password"</label>
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
                <label class="input-label">"Role"</label>
                <select
                    prop:value=move || form.with(|f| f.role.as_str())
                    on:change=move |ev| {
                        let raw = event_target_value(&ev);
                        form.update(|f| f.role = parse_role(&raw, f.role));
                    }
                >
                    {role_options()}
                </select>
                <button type="submit">"Add User"</button>
            </form>

            <div class="panel-section">
                <h2>"All Users (" {move || visible().map_or(0, |list| list.len())} " Found)"</h2>
                <input
                    type="search"
                    placeholder="Search by username, name, or roll number..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                    {move || {
                        visible().map(|list| view! { <ul>{list.into_iter().map(row).collect_view()}</ul> })
                    }}
                </Suspense>
            </div>
        </div>
    }
}
