//! Profile page model: current user, photo grid, and the open viewer.
//!
//! DESIGN
//! ======
//! The photo list mirrors server state and only changes after the server
//! confirms a mutation. There is no background re-sync; the client trusts
//! the shape of each response.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::net::types::{Photo, Profile};

/// Header label while the profile is still loading.
pub const LOADING_NAME: &str = "Loading...";

/// The signed-in user as shown in the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserSummary {
    pub username: String,
    pub avatar_url: Option<String>,
}

/// State for the profile/gallery screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    pub user: Option<UserSummary>,
    /// Newest first.
    pub photos: Vec<Photo>,
    /// Photo open in the viewer modal.
    pub viewing: Option<Photo>,
    /// An upload is in flight; the upload button is disabled.
    pub uploading: bool,
}

impl GalleryState {
    /// Replace user and photos with a freshly fetched profile.
    pub fn apply_profile(&mut self, profile: Profile) {
        self.user = Some(UserSummary {
            username: profile.username,
            avatar_url: profile.avatar.filter(|a| !a.is_empty()),
        });
        self.photos = profile.photos;
    }

    /// Put a just-uploaded photo at the front of the grid.
    pub fn prepend_photo(&mut self, photo: Photo) {
        self.photos.insert(0, photo);
    }

    /// Drop the photo with `photo_id`, closing the viewer if it showed that
    /// photo. Returns whether anything was removed.
    pub fn remove_photo(&mut self, photo_id: &str) -> bool {
        let before = self.photos.len();
        self.photos.retain(|p| p.id != photo_id);
        if self.viewing.as_ref().is_some_and(|p| p.id == photo_id) {
            self.viewing = None;
        }
        self.photos.len() != before
    }

    /// Swap in a new avatar URL; no-op until the profile has loaded.
    pub fn set_avatar(&mut self, avatar_url: String) {
        if let Some(user) = self.user.as_mut() {
            user.avatar_url = Some(avatar_url);
        }
    }

    pub fn open_viewer(&mut self, photo: Photo) {
        self.viewing = Some(photo);
    }

    pub fn close_viewer(&mut self) {
        self.viewing = None;
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.user.as_ref().map_or(LOADING_NAME, |u| u.username.as_str())
    }

    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.avatar_url.as_deref())
    }
}
