use super::common::{cta_directive, hashtag_directive, ONLY_THE_POST};
use crate::platform::{PlatformProfile, PLATFORMS};
use crate::request::GenerationRequest;

/// Renders the instruction for one platform.
///
/// Pure: the same request and profile always produce the same text. The event
/// description is interpolated as-is, empty or not; callers check it first.
pub fn build_post_prompt(request: &GenerationRequest, platform: &PlatformProfile) -> String {
    let tone = request.tone.as_str().to_lowercase();
    let audience = request.target_audience.as_str();

    format!(
        "Create a {tone} {name} post about the following event:

Event: {event}

Platform Guidelines:
- Character limit: {limit}
- Style: {style}
- Format: {format}

Target Audience: {audience}

Requirements:
- Match the {tone} tone perfectly
- Follow {name}'s best practices
- Make it engaging and relevant to {audience_lower}
{hashtags}
{cta}

{only}",
        tone = tone,
        name = platform.name,
        event = request.event_description,
        limit = platform.character_limit,
        style = platform.style,
        format = platform.format,
        audience = audience,
        audience_lower = audience.to_lowercase(),
        hashtags = hashtag_directive(request.include_hashtags),
        cta = cta_directive(request.include_cta),
        only = ONLY_THE_POST,
    )
}

/// One prompt per platform, in table order.
pub fn build_prompts(request: &GenerationRequest) -> Vec<(&'static PlatformProfile, String)> {
    PLATFORMS
        .iter()
        .map(|platform| (platform, build_post_prompt(request, platform)))
        .collect()
}
