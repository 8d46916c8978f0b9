//! Form state shared by the login and signup screens.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Submission and display state for an auth form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFormState {
    /// A request is in flight; the submit button is disabled.
    pub loading: bool,
    /// Inline error shown above the form.
    pub error: Option<String>,
    /// Password field renders as plain text.
    pub show_password: bool,
}

impl AuthFormState {
    /// Mark a submission as started. Returns `false` if one is already running.
    pub fn begin_submit(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Mark the submission as finished, recording an error if it failed.
    pub fn finish(&mut self, error: Option<String>) {
        self.loading = false;
        self.error = error;
    }

    pub fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// `type` attribute for the password input.
    #[must_use]
    pub fn password_input_type(&self) -> &'static str {
        if self.show_password { "text" } else { "password" }
    }
}
