//! Page shells. The real UI lives elsewhere; these exist to wire the
//! guards and session hooks into the router.

pub mod home;
pub mod login;
pub mod unauthorized;
