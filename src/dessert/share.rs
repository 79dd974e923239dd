//! Share summary text and the host share-target seam.

use thiserror::Error;

use super::logic::format_number;

pub const SHARE_TITLE: &str = "Dessert Clicker";
pub const SHARE_MIME: &str = "text/plain";

/// Toast shown when the host has nowhere to send the summary.
pub const SHARING_NOT_AVAILABLE: &str = "Sharing not available";

#[derive(Debug, Error, PartialEq)]
pub enum ShareError {
    #[error("no share target is available on this device")]
    Unavailable,
}

/// A formatted summary ready to hand to the host.
#[derive(Clone, Debug, PartialEq)]
pub struct ShareRequest {
    pub title: &'static str,
    pub text: String,
    pub mime: &'static str,
}

impl ShareRequest {
    pub fn summary(total_sold: u64, total_revenue: u64) -> Self {
        Self {
            title: SHARE_TITLE,
            text: format_summary(total_sold, total_revenue),
            mime: SHARE_MIME,
        }
    }
}

/// Something that can present a share chooser for plain text.
pub trait ShareTarget {
    fn share(&self, request: &ShareRequest) -> Result<(), ShareError>;
}

pub fn format_summary(total_sold: u64, total_revenue: u64) -> String {
    let noun = if total_sold == 1 { "dessert" } else { "desserts" };
    format!(
        "I've sold {} {} for a total of ${}! #DessertClicker",
        format_number(total_sold),
        noun,
        format_number(total_revenue)
    )
}

/// Whether a share can go out, given what the host reports up front.
/// `navigator.share` may exist yet refuse the data, e.g. when a permissions
/// policy blocks web-share inside an iframe.
pub fn check_delivery(has_share_api: bool, accepts_data: bool) -> Result<(), ShareError> {
    if has_share_api && accepts_data {
        Ok(())
    } else {
        Err(ShareError::Unavailable)
    }
}

/// Web Share API (`navigator.share`). Browsers without it, or that refuse the
/// data through `navigator.canShare`, report `Unavailable`, as does every
/// non-wasm build.
pub struct WebShare;

impl ShareTarget for WebShare {
    #[cfg(target_arch = "wasm32")]
    fn share(&self, request: &ShareRequest) -> Result<(), ShareError> {
        let window = web_sys::window().ok_or(ShareError::Unavailable)?;
        let navigator = window.navigator();
        let has = |name: &str| js_sys::Reflect::has(&navigator, &name.into()).unwrap_or(false);

        let data = web_sys::ShareData::new();
        data.set_title(request.title);
        data.set_text(&request.text);

        let has_share_api = has("share");
        // Older browsers ship share() without canShare(); trust share() there.
        let accepts_data = !has("canShare") || navigator.can_share_with_data(&data);
        if let Err(e) = check_delivery(has_share_api, accepts_data) {
            web_sys::console::warn_1(
                &format!(
                    "share: refused by host (share={}, canShare={})",
                    has_share_api, accepts_data
                )
                .into(),
            );
            return Err(e);
        }

        // The promise settles when the chooser closes; a dismissed chooser is not a failure.
        let _ = navigator.share_with_data(&data);

        web_sys::console::log_1(
            &format!(
                "share: opened chooser for {} bytes of {}",
                request.text.len(),
                request.mime
            )
            .into(),
        );
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn share(&self, _request: &ShareRequest) -> Result<(), ShareError> {
        check_delivery(false, false)
    }
}
