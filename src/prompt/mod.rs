// Declare submodules
mod common;
mod post;

pub use common::*;
pub use post::{build_post_prompt, build_prompts};
