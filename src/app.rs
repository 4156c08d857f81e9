//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::session_gate::SessionGate;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::pages::{
    admin::AdminPage, login::LoginPage, role_select::RoleSelectPage, student::StudentPage, teacher::TeacherPage,
};
use crate::session::Role;
use crate::session::gate::LOGIN_PATH;
use crate::state::auth::provide_auth;

const ADMIN_ONLY: &[Role] = &[Role::Admin];
const TEACHER_ONLY: &[Role] = &[Role::Teacher];
const STUDENT_ONLY: &[Role] = &[Role::Student];

/// Root application component.
///
/// Restores the session, provides it and the API client as context, and
/// routes each role screen through its gate.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    provide_auth();
    provide_context(ApiClient::new(&config));

    view! {
        <Title text="Student Mark Tracker"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=LOGIN_PATH/> }>
                <Route path=StaticSegment("") view=RoleSelectPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <SessionGate allowed=ADMIN_ONLY><AdminPage/></SessionGate> }
                />
                <Route
                    path=StaticSegment("teacher")
                    view=|| view! { <SessionGate allowed=TEACHER_ONLY><TeacherPage/></SessionGate> }
                />
                <Route
                    path=StaticSegment("student")
                    view=|| view! { <SessionGate allowed=STUDENT_ONLY><StudentPage/></SessionGate> }
                />
            </Routes>
        </Router>
    }
}
