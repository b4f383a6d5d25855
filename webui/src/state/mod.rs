//! Shared client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides an `RwSignal<AuthState>` via context; pages read it to
//! decide what the signed-in user may do and write it after login.

pub mod auth;
pub mod persist;
