use std::path::{Path, PathBuf};

use anyhow::Context as _;
use log::{debug, warn};

use crate::{
    context::Context,
    metadata::{self, Metadata},
};

mod data;
mod utils;

use data::{Manifest, PostRecord};
use utils::{file_name, file_stem, is_sortable_date, is_template, sort_post};

const EXTENSION: &str = ".md";

/// Markdown files directly under `dir`, sorted by path. Template files and
/// hidden files are left out.
pub(crate) fn discover(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = vec![];

    for entry in std::fs::read_dir(dir).with_context(|| format!("while reading {dir:?}"))? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();

        if !name.ends_with(EXTENSION) || name.starts_with('.') {
            continue;
        }
        if is_template(&name) {
            debug!("Skipping template {name}");
            continue;
        }
        if !entry.path().is_file() {
            debug!("Skipping {name}: not a file");
            continue;
        }

        paths.push(entry.path());
    }

    paths.sort();
    debug!("Discovered {} document(s) in {dir:?}", paths.len());
    Ok(paths)
}

fn build_record(path: &Path, link_prefix: &str, meta: &Metadata) -> PostRecord {
    let name = file_name(path);
    let markdown_file = if link_prefix.is_empty() {
        name
    } else {
        format!("{link_prefix}/{name}")
    };

    PostRecord {
        id: file_stem(path),
        title: meta.scalar("title"),
        subtitle: meta.scalar("subtitle"),
        category: meta.scalar("category"),
        date: meta.scalar("date"),
        read_time: meta.scalar("readTime"),
        excerpt: meta.scalar("excerpt"),
        markdown_file,
        tags: meta.list("tags"),
    }
}

fn preprocess_file(path: &Path, link_prefix: &str) -> anyhow::Result<Option<PostRecord>> {
    let content = std::fs::read_to_string(path)?;

    let Some(meta) = metadata::extract(&content) else {
        return Ok(None);
    };
    let post = build_record(path, link_prefix, &meta);

    if !post.date.is_empty() && !is_sortable_date(&post.date) {
        warn!(
            "{:?} has date {:?}, which is not YYYY-MM-DD and may sort out of order",
            path, post.date
        );
    }

    Ok(Some(post))
}

/// Collects every post under `ctx.posts_dir`, newest first.
pub(crate) fn collect_posts(ctx: &Context) -> anyhow::Result<Manifest> {
    let link_prefix = ctx.link_prefix();
    let mut posts = vec![];

    for path in discover(&ctx.posts_dir)? {
        let post = preprocess_file(&path, &link_prefix)
            .with_context(|| format!("while preprocessing {path:?}"))?;

        match post {
            Some(post) => {
                println!("  Found: {} ({})", post.title, post.date);
                posts.push(post);
            }
            None => println!("  Skipping {} (no front matter found)", file_name(&path)),
        }
    }

    // stable, so equal dates stay in discovery order
    posts.sort_by(sort_post);

    Ok(Manifest { posts })
}

/// Pretty JSON with a trailing newline.
pub(crate) fn render(manifest: &Manifest) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(manifest)?;
    json.push('\n');
    Ok(json)
}

/// Builds the manifest and overwrites `ctx.output_file` with it.
pub(crate) fn generate(ctx: &Context) -> anyhow::Result<Manifest> {
    let manifest = collect_posts(ctx)?;

    std::fs::write(&ctx.output_file, render(&manifest)?)
        .with_context(|| format!("while writing {:?}", ctx.output_file))?;

    println!(
        "\nGenerated {} with {} post(s)",
        ctx.output_name(),
        manifest.posts.len()
    );

    Ok(manifest)
}
