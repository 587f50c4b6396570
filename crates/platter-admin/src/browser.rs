//! Small browser interop helpers
//!
//! New-tab navigation for the public menu viewer and anchor-click
//! downloads for the QR image.

/// Open a URL in a new browser tab
pub fn open_in_new_tab(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            tracing::error!("open_in_new_tab: no window object");
            return;
        };
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            tracing::error!("open_in_new_tab: failed to open {}: {:?}", url, e);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("New tab not available in native mode: {}", url);
    }
}

/// Download a URL via a temporary anchor element with a download name
pub fn download_url(href: &str, filename: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            tracing::error!("download_url: no window object");
            return;
        };
        let Some(document) = window.document() else {
            tracing::error!("download_url: no document object");
            return;
        };

        let anchor = match document.create_element("a") {
            Ok(el) => el,
            Err(e) => {
                tracing::error!("download_url: failed to create anchor: {:?}", e);
                return;
            }
        };

        anchor.set_attribute("href", href).ok();
        anchor.set_attribute("download", filename).ok();

        if let Some(body) = document.body() {
            body.append_child(&anchor).ok();

            if let Some(html_el) = anchor.dyn_ref::<web_sys::HtmlElement>() {
                html_el.click();
            }

            body.remove_child(&anchor).ok();
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("Download not available in native mode: {} -> {}", href, filename);
    }
}
