//! Client route paths.

/// Login screen; also where signed-out users land.
pub const LOGIN: &str = "/";
/// Account creation screen.
pub const SIGNUP: &str = "/signup";
/// Authenticated profile and gallery screen.
pub const PROFILE: &str = "/profile";
