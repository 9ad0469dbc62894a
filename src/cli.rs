//! Terminal rendering of a bundle and writing its export files.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::bundle::{GeneratedPost, LimitAdvisory, PostBundle};

/// Human-readable advisory line for a platform with a hard limit.
pub fn advisory_line(advisory: &LimitAdvisory) -> String {
    if advisory.within_limit() {
        format!("✅ {}/{} characters", advisory.count, advisory.limit)
    } else {
        format!(
            "⚠️ Post is {} characters (exceeds {} limit)",
            advisory.count, advisory.limit
        )
    }
}

fn render_post(post: &GeneratedPost) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "═".repeat(80).bright_blue()));
    out.push_str(&format!("{}\n", format!("{} Post", post.platform.name).bright_blue().bold()));
    out.push_str(&format!("{}\n", "═".repeat(80).bright_blue()));

    let text = post.display_text();
    if post.is_error() {
        out.push_str(&format!("{}\n", text.bright_red()));
    } else {
        out.push_str(&format!("{}\n", text));
    }

    if let Some(advisory) = post.limit_advisory() {
        let line = advisory_line(&advisory);
        if advisory.within_limit() {
            out.push_str(&format!("\n{}\n", line.bright_green()));
        } else {
            out.push_str(&format!("\n{}\n", line.bright_yellow()));
        }
    }
    out
}

/// One section per platform, in bundle order.
pub fn render_bundle(bundle: &PostBundle) -> String {
    bundle
        .posts()
        .iter()
        .map(render_post)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes every export file into `dir`, creating it if needed. Returns the written paths.
pub fn write_exports(bundle: &PostBundle, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let mut written = Vec::new();
    for file in bundle.exports() {
        let path = dir.join(&file.file_name);
        fs::write(&path, &file.content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// `-` reads the event description from stdin.
pub fn read_event_description(arg: &str) -> Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read event description from stdin")?;
    Ok(buffer)
}
