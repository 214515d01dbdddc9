//! Client-side session state.
//!
//! DESIGN
//! ======
//! `auth` holds the plain state model and its pure transitions so they can
//! be tested without a reactive runtime; `store` wraps it in a signal and
//! adds the async actions.

pub mod auth;
pub mod store;
