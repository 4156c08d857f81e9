//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: fetching through `ApiClient`,
//! refetching after every mutation, and page-local form state. Validation
//! lives in plain functions next to each page so it can be tested directly.

pub mod admin;
pub mod login;
pub mod role_select;
pub mod student;
pub mod teacher;
