// Common text blocks for all post prompts
pub const SYSTEM_PROMPT: &str = "You are an expert social media content creator who understands platform-specific best practices and audience engagement.";

pub const INCLUDE_HASHTAGS: &str = "- Include relevant hashtags";
pub const EXCLUDE_HASHTAGS: &str = "- Do not include hashtags";
pub const INCLUDE_CTA: &str = "- Include a call-to-action";
pub const EXCLUDE_CTA: &str = "- Do not include call-to-action";

pub const ONLY_THE_POST: &str = "Generate only the post content, nothing else.";

pub fn hashtag_directive(include: bool) -> &'static str {
    if include {
        INCLUDE_HASHTAGS
    } else {
        EXCLUDE_HASHTAGS
    }
}

pub fn cta_directive(include: bool) -> &'static str {
    if include {
        INCLUDE_CTA
    } else {
        EXCLUDE_CTA
    }
}
