use super::*;
use crate::net::error::ApiError;

#[test]
fn signed_out_and_expired_sessions_redirect_to_login() {
    assert_eq!(redirect_for(&GalleryError::SignedOut), Some(routes::LOGIN));
    assert_eq!(
        redirect_for(&GalleryError::SessionExpired(ApiError::Unavailable)),
        Some(routes::LOGIN)
    );
}

#[test]
fn action_failures_stay_on_the_page() {
    for err in [
        GalleryError::NoFileSelected,
        GalleryError::Upload(ApiError::Unavailable),
        GalleryError::Avatar(ApiError::Unavailable),
        GalleryError::Delete(ApiError::Unavailable),
        GalleryError::Download(ApiError::Unavailable),
    ] {
        assert_eq!(redirect_for(&err), None, "{err:?}");
    }
}
