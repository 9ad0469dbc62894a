//! Static per-platform posting guidelines.
//!
//! The table order is the order posts are generated, displayed and exported in.
//! Adding a platform means adding a row here; nothing else branches on platform names.

use serde::Serialize;

/// Posting guidelines for one target network.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct PlatformProfile {
    /// Display name, also used verbatim in prompts.
    pub name: &'static str,
    /// Lowercase identifier used for file names and URLs.
    pub slug: &'static str,
    pub character_limit: &'static str,
    pub style: &'static str,
    pub format: &'static str,
    /// Hard character limit checked after generation, if the network enforces one.
    pub hard_limit: Option<usize>,
}

impl PlatformProfile {
    /// Header line used in the all-platform export, e.g. `LINKEDIN POST:`.
    pub fn export_header(&self) -> String {
        format!("{} POST:", self.name.to_uppercase())
    }

    /// File name for the standalone export of this platform's post.
    pub fn file_name(&self) -> String {
        format!("{}_post.txt", self.slug)
    }
}

pub static PLATFORMS: [PlatformProfile; 3] = [
    PlatformProfile {
        name: "LinkedIn",
        slug: "linkedin",
        character_limit: "1300 characters (recommended: 150-300)",
        style: "Professional networking focus, industry insights, career-related content",
        format: "Can include line breaks, bullet points, and longer explanations",
        hard_limit: None,
    },
    PlatformProfile {
        name: "Twitter",
        slug: "twitter",
        character_limit: "280 characters maximum",
        style: "Concise, punchy, trending topics, conversational",
        format: "Short and sweet, thread-style if needed",
        hard_limit: Some(280),
    },
    PlatformProfile {
        name: "WhatsApp",
        slug: "whatsapp",
        character_limit: "No strict limit but keep it readable",
        style: "Personal, direct, emoji-friendly, casual conversation",
        format: "Like a message to friends/family, can be informal",
        hard_limit: None,
    },
];

/// Looks up a platform by display name or slug, ignoring case.
pub fn find_platform(name: &str) -> Option<&'static PlatformProfile> {
    PLATFORMS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name) || p.slug.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_order() {
        let names: Vec<&str> = PLATFORMS.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["LinkedIn", "Twitter", "WhatsApp"]);
    }

    #[test]
    fn test_only_twitter_has_hard_limit() {
        assert_eq!(find_platform("Twitter").unwrap().hard_limit, Some(280));
        assert_eq!(find_platform("linkedin").unwrap().hard_limit, None);
        assert_eq!(find_platform("WHATSAPP").unwrap().hard_limit, None);
        assert!(find_platform("mastodon").is_none());
    }

    #[test]
    fn test_export_names() {
        let linkedin = &PLATFORMS[0];
        assert_eq!(linkedin.export_header(), "LINKEDIN POST:");
        assert_eq!(linkedin.file_name(), "linkedin_post.txt");
        assert_eq!(PLATFORMS[2].export_header(), "WHATSAPP POST:");
    }
}
