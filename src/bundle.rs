//! Generated posts, character-limit advisories and text exports.
//!
//! Everything here is a pure function of the bundle; exporting never goes back to the network.

use serde::Serialize;
use uuid::Uuid;

use crate::error::GenerationError;
use crate::platform::{PlatformProfile, PLATFORMS};

pub const ERROR_PREFIX: &str = "Error generating post: ";
pub const ALL_POSTS_FILE_NAME: &str = "all_social_media_posts.txt";

/// The result for one platform of one generation request.
#[derive(Debug, Clone)]
pub struct GeneratedPost {
    pub platform: &'static PlatformProfile,
    pub outcome: Result<String, GenerationError>,
}

/// Character count of a post measured against its platform's hard limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LimitAdvisory {
    pub count: usize,
    pub limit: usize,
}

impl LimitAdvisory {
    /// Inclusive: a post of exactly `limit` characters is within the limit.
    pub fn within_limit(&self) -> bool {
        self.count <= self.limit
    }
}

/// A standalone text artifact offered for download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportFile {
    pub file_name: String,
    pub content: String,
}

impl GeneratedPost {
    pub fn new(platform: &'static PlatformProfile, outcome: Result<String, GenerationError>) -> Self {
        Self { platform, outcome }
    }

    pub fn is_error(&self) -> bool {
        self.outcome.is_err()
    }

    /// The generated text, or the failure rendered with [`ERROR_PREFIX`].
    pub fn display_text(&self) -> String {
        match &self.outcome {
            Ok(content) => content.clone(),
            Err(e) => format!("{}{}", ERROR_PREFIX, e),
        }
    }

    /// Only present for platforms with a hard limit. Counts characters, not bytes.
    pub fn limit_advisory(&self) -> Option<LimitAdvisory> {
        self.platform.hard_limit.map(|limit| LimitAdvisory {
            count: self.display_text().chars().count(),
            limit,
        })
    }

    pub fn export(&self) -> ExportFile {
        ExportFile {
            file_name: self.platform.file_name(),
            content: self.display_text(),
        }
    }
}

/// All posts of one generation request, in platform table order.
#[derive(Debug, Clone)]
pub struct PostBundle {
    pub request_id: Uuid,
    posts: Vec<GeneratedPost>,
}

impl PostBundle {
    /// Orders the posts by the platform table regardless of the order they arrive in.
    pub fn new(request_id: Uuid, mut posts: Vec<GeneratedPost>) -> Self {
        posts.sort_by_key(|post| {
            PLATFORMS
                .iter()
                .position(|p| std::ptr::eq(p, post.platform))
                .unwrap_or(usize::MAX)
        });
        Self { request_id, posts }
    }

    pub fn posts(&self) -> &[GeneratedPost] {
        &self.posts
    }

    /// Looks up a post by platform name or slug.
    pub fn get(&self, platform: &str) -> Option<&GeneratedPost> {
        self.posts.iter().find(|post| {
            post.platform.name.eq_ignore_ascii_case(platform)
                || post.platform.slug.eq_ignore_ascii_case(platform)
        })
    }

    pub fn failed_count(&self) -> usize {
        self.posts.iter().filter(|post| post.is_error()).count()
    }

    /// All posts under uppercase platform headers, separated by blank lines.
    pub fn all_posts_text(&self) -> String {
        let sections: Vec<String> = self
            .posts
            .iter()
            .map(|post| format!("{}\n{}", post.platform.export_header(), post.display_text()))
            .collect();
        format!("{}\n", sections.join("\n\n"))
    }

    pub fn all_posts_export(&self) -> ExportFile {
        ExportFile {
            file_name: ALL_POSTS_FILE_NAME.to_string(),
            content: self.all_posts_text(),
        }
    }

    /// Every per-platform export followed by the combined one.
    pub fn exports(&self) -> Vec<ExportFile> {
        let mut files: Vec<ExportFile> = self.posts.iter().map(GeneratedPost::export).collect();
        files.push(self.all_posts_export());
        files
    }

    pub fn to_view(&self) -> BundleView {
        BundleView {
            request_id: self.request_id,
            posts: self.posts.iter().map(PostView::from).collect(),
            all_posts: self.all_posts_export(),
        }
    }
}

/// JSON shape of a bundle handed to renderers.
#[derive(Debug, Serialize)]
pub struct BundleView {
    pub request_id: Uuid,
    pub posts: Vec<PostView>,
    pub all_posts: ExportFile,
}

#[derive(Debug, Serialize)]
pub struct PostView {
    pub platform: &'static str,
    pub slug: &'static str,
    pub content: String,
    pub is_error: bool,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub within_limit: Option<bool>,
}

impl From<&GeneratedPost> for PostView {
    fn from(post: &GeneratedPost) -> Self {
        let advisory = post.limit_advisory();
        PostView {
            platform: post.platform.name,
            slug: post.platform.slug,
            content: post.display_text(),
            is_error: post.is_error(),
            file_name: post.platform.file_name(),
            character_count: advisory.map(|a| a.count),
            character_limit: advisory.map(|a| a.limit),
            within_limit: advisory.map(|a| a.within_limit()),
        }
    }
}
