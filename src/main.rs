use std::path::{Path, PathBuf};

use anyhow::bail;
use clap::{command, Arg};
use context::Context;
use generator::generate;
use log::info;

mod context;
mod generator;
mod metadata;

/// Relative locations are resolved against the directory holding this tool.
const PROJECT_ROOT: &str = env!("CARGO_MANIFEST_DIR");

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .args(&[
            Arg::new("posts_dir")
                .help("Directory of markdown posts, relative to the project root. Subdirectories are not scanned.")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("posts"),
            Arg::new("output")
                .help("Path of the JSON manifest, relative to the project root. Existing content will be overwritten.")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("blog-posts.json"),
        ])
        .get_matches();

    let Some(posts_dir) = matches.get_one::<PathBuf>("posts_dir") else {
        bail!("posts_dir is required.");
    };
    let Some(output) = matches.get_one::<PathBuf>("output") else {
        bail!("output is required.");
    };

    let ctx = Context::resolve(Path::new(PROJECT_ROOT), posts_dir, output);
    info!(
        "Reading posts from {:?}, writing manifest to {:?}",
        ctx.posts_dir, ctx.output_file
    );
    generate(&ctx)?;

    Ok(())
}
