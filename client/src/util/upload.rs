//! File input helpers for multipart uploads.
//!
//! Selected files never leave the browser as Rust values; outside `hydrate`
//! these helpers report no selection.

use crate::net::api::Upload;

/// First file chosen in the `<input type="file">` that fired `ev`.
pub fn selected_file(ev: &leptos::ev::Event) -> Option<Upload> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;
        let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
        input.files()?.get(0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        None
    }
}

/// Object URL previewing `file` in an `<img>`.
pub fn preview_url(file: &Upload) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::Url::create_object_url_with_blob(file).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = file;
        None
    }
}
