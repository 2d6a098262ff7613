use quiz_core::ResultsSummary;

use crate::error::ShareError;

/// Title used for native share sheets.
pub const SHARE_TITLE: &str = "Quiz Results";

/// Payload for a native share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// Transport for share text, provided by the presenter's platform.
pub trait ShareTarget {
    /// # Errors
    ///
    /// Returns `ShareError::Unavailable` when the platform has no share sheet.
    fn native_share(&mut self, request: &ShareRequest) -> Result<(), ShareError>;

    /// # Errors
    ///
    /// Returns `ShareError` when the clipboard cannot be written.
    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), ShareError>;
}

/// How the results ended up leaving the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
}

#[derive(Debug, Clone)]
pub struct ShareService {
    url: String,
}

impl ShareService {
    /// `url` is the link back to the quiz that goes along with the share text.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Share via the native sheet, falling back to the clipboard when there is none.
    ///
    /// # Errors
    ///
    /// Returns `ShareError` if the native share fails for a reason other than
    /// being unavailable, or if the clipboard fallback fails.
    pub fn share<T>(
        &self,
        summary: &ResultsSummary,
        target: &mut T,
    ) -> Result<ShareOutcome, ShareError>
    where
        T: ShareTarget + ?Sized,
    {
        let request = ShareRequest {
            title: SHARE_TITLE.to_string(),
            text: summary.share_text(),
            url: self.url.clone(),
        };

        match target.native_share(&request) {
            Ok(()) => {
                tracing::debug!(percentage = summary.percentage(), "results shared");
                Ok(ShareOutcome::Shared)
            }
            Err(ShareError::Unavailable) => {
                tracing::warn!("native share unavailable, copying results to clipboard");
                target.copy_to_clipboard(&summary.share_text_with_link(&self.url))?;
                Ok(ShareOutcome::Copied)
            }
            Err(err) => Err(err),
        }
    }
}
