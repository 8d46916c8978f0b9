//! File handles picked through `<input type="file">`.
//!
//! In the browser a `SelectedFile` owns the `web_sys::File` that multipart
//! requests attach. Native builds only carry the name, which is all the
//! orchestration code and tests look at.

/// A file the user picked for upload.
#[derive(Clone, Debug)]
pub struct SelectedFile {
    name: String,
    #[cfg(feature = "csr")]
    file: web_sys::File,
}

impl SelectedFile {
    #[cfg(feature = "csr")]
    #[must_use]
    pub fn from_file(file: web_sys::File) -> Self {
        Self { name: file.name(), file }
    }

    /// First file of the `<input type="file">` that fired `ev`, if any.
    #[cfg(feature = "csr")]
    #[must_use]
    pub fn from_input_event(ev: &leptos::ev::Event) -> Option<Self> {
        let input = leptos::prelude::event_target::<web_sys::HtmlInputElement>(ev);
        input.files()?.get(0).map(Self::from_file)
    }

    /// Native builds have no DOM files to read.
    #[cfg(not(feature = "csr"))]
    #[must_use]
    pub fn from_input_event(_ev: &leptos::ev::Event) -> Option<Self> {
        None
    }

    #[cfg(not(feature = "csr"))]
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self { name: name.to_owned() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[cfg(feature = "csr")]
    #[must_use]
    pub fn file(&self) -> &web_sys::File {
        &self.file
    }
}
