//! Save a remote image to disk through a synthesized `<a download>` click.
//!
//! The image URL is assumed public (or pre-signed), so the bytes are fetched
//! without the session's bearer header. The object URL created for the blob
//! lives only for the duration of the click.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use crate::net::error::ApiError;

/// Filename used when none can be derived from the URL.
pub const DEFAULT_FILE_NAME: &str = "photo.jpg";

/// Last path segment of `url`, without query string or fragment.
#[must_use]
pub fn download_file_name(url: &str) -> String {
    let last = url.rsplit('/').next().unwrap_or_default();
    let name = last.split(['?', '#']).next().unwrap_or_default();
    if name.is_empty() { DEFAULT_FILE_NAME.to_owned() } else { name.to_owned() }
}

/// Fetch `url` and hand it to the browser as a file download.
///
/// # Errors
///
/// Returns an error if the fetch fails, the server responds with a non-OK
/// status, or the DOM refuses any step of building the download link.
#[allow(clippy::unused_async)]
pub async fn download_photo(url: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let browser = |e: wasm_bindgen::JsValue| ApiError::Browser(format!("{e:?}"));

        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status(), message: None });
        }
        let bytes = resp.binary().await.map_err(|e| ApiError::Decode(e.to_string()))?;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes.as_slice()));
        let blob = web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(browser)?;
        let object_url = web_sys::Url::create_object_url_with_blob(&blob).map_err(browser)?;

        let clicked = click_download_link(&object_url, &download_file_name(url));

        web_sys::Url::revoke_object_url(&object_url).map_err(browser)?;
        clicked
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "csr")]
fn click_download_link(href: &str, file_name: &str) -> Result<(), ApiError> {
    use wasm_bindgen::JsCast;

    let browser = |e: wasm_bindgen::JsValue| ApiError::Browser(format!("{e:?}"));
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ApiError::Browser("no document".to_owned()))?;
    let body = document.body().ok_or_else(|| ApiError::Browser("no body".to_owned()))?;
    let anchor = document
        .create_element("a")
        .map_err(browser)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ApiError::Browser("created element is not an anchor".to_owned()))?;
    anchor.set_href(href);
    anchor.set_download(file_name);
    body.append_child(&anchor).map_err(browser)?;
    anchor.click();
    anchor.remove();
    Ok(())
}
