//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only the session is shared across screens; everything else is page-local
//! signals. `auth` wraps the session store in a context handle.

pub mod auth;
