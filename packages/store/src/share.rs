//! Share links and social compose intents.

use crate::models::NoteId;

/// Public link for a note: `<origin>/shared/<id>`.
pub fn share_url(origin: &str, id: &NoteId) -> String {
    format!(
        "{}/shared/{}",
        origin.trim_end_matches('/'),
        urlencoding::encode(id.as_str())
    )
}

/// Text pre-filled in social compose windows.
pub fn share_text(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        "Check out this note: Untitled Note".to_string()
    } else {
        format!("Check out this note: {title}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SharePlatform {
    Twitter,
    Facebook,
    LinkedIn,
}

impl SharePlatform {
    pub const ALL: [SharePlatform; 3] = [SharePlatform::Twitter, SharePlatform::Facebook, SharePlatform::LinkedIn];

    pub fn name(self) -> &'static str {
        match self {
            SharePlatform::Twitter => "Twitter",
            SharePlatform::Facebook => "Facebook",
            SharePlatform::LinkedIn => "LinkedIn",
        }
    }

    /// Compose URL to open in a new browser window.
    pub fn intent_url(self, url: &str, text: &str) -> String {
        let url = urlencoding::encode(url);
        match self {
            SharePlatform::Twitter => format!(
                "https://twitter.com/intent/tweet?text={}&url={url}",
                urlencoding::encode(text)
            ),
            SharePlatform::Facebook => format!("https://www.facebook.com/sharer/sharer.php?u={url}"),
            SharePlatform::LinkedIn => format!("https://www.linkedin.com/sharing/share-offsite/?url={url}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_origin_and_id() {
        let id = NoteId::new("k57abc");
        assert_eq!(share_url("https://notes.example", &id), "https://notes.example/shared/k57abc");
        assert_eq!(share_url("https://notes.example/", &id), "https://notes.example/shared/k57abc");
    }

    #[test]
    fn text_falls_back_for_untitled() {
        assert_eq!(share_text("Plan"), "Check out this note: Plan");
        assert_eq!(share_text("  "), "Check out this note: Untitled Note");
    }

    #[test]
    fn intents_encode_components() {
        let url = "https://notes.example/shared/n1";
        let text = share_text("Q3 & Q4");
        assert_eq!(
            SharePlatform::Twitter.intent_url(url, &text),
            "https://twitter.com/intent/tweet?text=Check%20out%20this%20note%3A%20Q3%20%26%20Q4&url=https%3A%2F%2Fnotes.example%2Fshared%2Fn1"
        );
        assert_eq!(
            SharePlatform::Facebook.intent_url(url, &text),
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fnotes.example%2Fshared%2Fn1"
        );
        assert!(SharePlatform::LinkedIn
            .intent_url(url, &text)
            .starts_with("https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2F"));
    }
}
