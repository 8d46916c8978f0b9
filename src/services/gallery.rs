//! Profile page flows: load, upload, avatar, delete, download, logout.
//!
//! Every mutation returns the server-confirmed value for the page to apply
//! to [`crate::state::gallery::GalleryState`]; nothing is applied
//! optimistically, so a failure needs no rollback.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::net::api::PhotoApi;
use crate::net::error::ApiError;
use crate::net::types::{Photo, Profile};
use crate::net::upload::SelectedFile;
use crate::routes;
use crate::state::session::SessionStore;
use crate::util::download;

/// Confirmation prompt shown before deleting a photo.
pub const DELETE_PROMPT: &str = "Delete this photo?";
/// Notice after a photo upload succeeds.
pub const UPLOAD_SUCCEEDED: &str = "Photo uploaded successfully!";
/// Notice after an avatar change succeeds.
pub const AVATAR_SUCCEEDED: &str = "Avatar updated successfully!";
/// Notice after a photo is deleted.
pub const DELETE_SUCCEEDED: &str = "Photo deleted successfully!";

/// Why a gallery action did not complete. `Display` is the user-facing notice.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GalleryError {
    /// No token is stored; the user never signed in or already signed out.
    #[error("Please log in.")]
    SignedOut,
    /// The profile fetch failed; the stored token has been cleared.
    #[error("Session expired. Please login again.")]
    SessionExpired(#[source] ApiError),
    /// Upload was requested with no file picked.
    #[error("Please select a photo!")]
    NoFileSelected,
    #[error("Upload failed.")]
    Upload(#[source] ApiError),
    #[error("Avatar upload failed.")]
    Avatar(#[source] ApiError),
    #[error("Failed to delete photo.")]
    Delete(#[source] ApiError),
    #[error("Failed to download photo.")]
    Download(#[source] ApiError),
}

impl GalleryError {
    /// Whether the page must send the user back to the login screen.
    #[must_use]
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::SignedOut | Self::SessionExpired(_))
    }

    /// Blocking notice to show, if any. A plain signed-out redirect is silent.
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::SignedOut => None,
            other => Some(other.to_string()),
        }
    }
}

fn require_token<S: SessionStore>(session: &S) -> Result<String, GalleryError> {
    session.read().ok_or(GalleryError::SignedOut)
}

/// Fetch the signed-in user's profile and photos.
///
/// Any failure clears the stored token; the caller redirects to login.
///
/// # Errors
///
/// [`GalleryError::SignedOut`] without a token (no request is made), or
/// [`GalleryError::SessionExpired`] when the fetch fails.
pub async fn load_profile<A, S>(api: &A, session: &S) -> Result<Profile, GalleryError>
where
    A: PhotoApi,
    S: SessionStore,
{
    let token = require_token(session)?;
    match api.fetch_profile(&token).await {
        Ok(profile) => {
            log::debug!("loaded profile with {} photos", profile.photos.len());
            Ok(profile)
        }
        Err(err) => {
            log::error!("profile fetch failed: {err}");
            session.clear();
            Err(GalleryError::SessionExpired(err))
        }
    }
}

/// Upload the picked file as a new gallery photo.
///
/// # Errors
///
/// [`GalleryError::NoFileSelected`] without a file (no request is made),
/// [`GalleryError::SignedOut`] without a token, or [`GalleryError::Upload`].
pub async fn upload_photo<A, S>(
    api: &A,
    session: &S,
    file: Option<&SelectedFile>,
) -> Result<Photo, GalleryError>
where
    A: PhotoApi,
    S: SessionStore,
{
    let file = file.ok_or(GalleryError::NoFileSelected)?;
    let token = require_token(session)?;
    api.upload_photo(&token, file).await.map_err(|err| {
        log::error!("upload of {} failed: {err}", file.name());
        GalleryError::Upload(err)
    })
}

/// Upload the picked file as the new avatar, returning its URL.
///
/// Resolves to `Ok(None)` without a request when no file was picked.
///
/// # Errors
///
/// [`GalleryError::SignedOut`] without a token, or [`GalleryError::Avatar`].
pub async fn change_avatar<A, S>(
    api: &A,
    session: &S,
    file: Option<&SelectedFile>,
) -> Result<Option<String>, GalleryError>
where
    A: PhotoApi,
    S: SessionStore,
{
    let Some(file) = file else {
        return Ok(None);
    };
    let token = require_token(session)?;
    match api.upload_avatar(&token, file).await {
        Ok(url) => Ok(Some(url)),
        Err(err) => {
            log::error!("avatar upload failed: {err}");
            Err(GalleryError::Avatar(err))
        }
    }
}

/// Delete a photo on the server. The caller has already confirmed.
///
/// # Errors
///
/// [`GalleryError::SignedOut`] without a token, or [`GalleryError::Delete`].
pub async fn delete_photo<A, S>(api: &A, session: &S, photo_id: &str) -> Result<(), GalleryError>
where
    A: PhotoApi,
    S: SessionStore,
{
    let token = require_token(session)?;
    api.delete_photo(&token, photo_id).await.map_err(|err| {
        log::error!("delete of {photo_id} failed: {err}");
        GalleryError::Delete(err)
    })
}

/// Save the photo at `url` through the browser's download flow.
///
/// # Errors
///
/// [`GalleryError::Download`] if the bytes could not be fetched or saved.
pub async fn download_photo(url: &str) -> Result<(), GalleryError> {
    download::download_photo(url).await.map_err(|err| {
        log::error!("download of {url} failed: {err}");
        GalleryError::Download(err)
    })
}

/// Forget the session. Returns the route to show next.
pub fn logout<S: SessionStore>(session: &S) -> &'static str {
    session.clear();
    log::info!("signed out");
    routes::LOGIN
}
