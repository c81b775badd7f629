//! Share payloads and exported file names.

/// Text handed to a share adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: Option<String>,
}

impl SharePayload {
    /// `mailto:` link carrying the payload as subject and body.
    pub fn mailto_url(&self) -> String {
        let body = match &self.url {
            Some(url) => format!("{}\n\n{}", self.text, url),
            None => self.text.clone(),
        };
        format!(
            "mailto:?subject={}&body={}",
            urlencoding::encode(&self.title),
            urlencoding::encode(&body)
        )
    }

    /// Plain text used when the payload goes to the clipboard.
    pub fn clipboard_text(&self) -> String {
        match &self.url {
            Some(url) => format!("{}\n\n{}", self.text, url),
            None => self.text.clone(),
        }
    }
}

/// Payload for sharing emotional guidance.
pub fn guidance_share(emotion: &str, guidance: &str) -> SharePayload {
    SharePayload {
        title: "A Moment of Cosmic Guidance".to_string(),
        text: format!(
            "Feeling {emotion}, I received this guidance:\n\n\"{guidance}\"\n\nFrom The Universe Guidance App"
        ),
        url: None,
    }
}

/// Payload for recommending the app to a friend.
pub fn app_share() -> SharePayload {
    SharePayload {
        title: "The Universe Guidance".to_string(),
        text: "I have been finding daily guidance with The Universe Guidance app. Take a look!"
            .to_string(),
        url: None,
    }
}

/// File name for an exported guidance card.
pub fn guidance_export_file_name(emotion: &str) -> String {
    format!("cosmic-guidance-{}.png", emotion.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guidance_share_text() {
        let payload = guidance_share("Anxious", "Breathe slowly.");
        assert_eq!(payload.title, "A Moment of Cosmic Guidance");
        assert_eq!(
            payload.text,
            "Feeling Anxious, I received this guidance:\n\n\"Breathe slowly.\"\n\nFrom The Universe Guidance App"
        );
    }

    #[test]
    fn test_mailto_is_encoded() {
        let payload = SharePayload {
            title: "A & B".to_string(),
            text: "line one\nline two".to_string(),
            url: None,
        };
        assert_eq!(
            payload.mailto_url(),
            "mailto:?subject=A%20%26%20B&body=line%20one%0Aline%20two"
        );
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(guidance_export_file_name("Grateful"), "cosmic-guidance-grateful.png");
    }
}
