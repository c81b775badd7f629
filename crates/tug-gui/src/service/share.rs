//! Share adapter.
//!
//! Desktop platforms have no share sheet. The payload is opened as a
//! `mailto:` link; without a mail handler the caller copies the text to the
//! clipboard instead and tells the user.

use tug_core::share::SharePayload;

/// What the share adapter managed to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// A mail composer was opened.
    Opened,
    /// No handler; copy this text to the clipboard.
    CopyToClipboard(String),
}

/// Share `payload` through the default mail handler.
///
/// The launcher is waited on off the runtime so its exit status can decide
/// the clipboard fallback.
pub async fn share(payload: SharePayload) -> ShareOutcome {
    share_with(payload, |url| open::that(url)).await
}

async fn share_with<F>(payload: SharePayload, launch: F) -> ShareOutcome
where
    F: FnOnce(String) -> std::io::Result<()> + Send + 'static,
{
    let url = payload.mailto_url();
    let opened = match tokio::task::spawn_blocking(move || launch(url)).await {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(e) => Err(format!("Share task failed: {}", e)),
    };
    match opened {
        Ok(()) => ShareOutcome::Opened,
        Err(err) => {
            tracing::warn!(error = %err, "No mail handler; falling back to clipboard");
            ShareOutcome::CopyToClipboard(payload.clipboard_text())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::thread::ThreadId;

    fn payload() -> SharePayload {
        SharePayload {
            title: "Mantra".to_string(),
            text: "Om Shanti Om".to_string(),
            url: None,
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_launcher_runs_off_the_runtime_thread() {
        let launcher_thread: Arc<Mutex<Option<ThreadId>>> = Arc::default();
        let seen = Arc::clone(&launcher_thread);

        let outcome = share_with(payload(), move |url| {
            assert!(url.starts_with("mailto:"));
            *seen.lock().unwrap() = Some(std::thread::current().id());
            Ok(())
        })
        .await;

        assert_eq!(outcome, ShareOutcome::Opened);
        let launcher = launcher_thread.lock().unwrap().unwrap();
        assert_ne!(launcher, std::thread::current().id());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_missing_mail_handler_falls_back_to_clipboard() {
        let outcome = share_with(payload(), |_| {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "xdg-open"))
        })
        .await;

        assert_eq!(outcome, ShareOutcome::CopyToClipboard(payload().clipboard_text()));
    }
}
