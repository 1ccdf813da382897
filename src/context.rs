use std::path::{Path, PathBuf};

/// Where to read posts from and where to write the manifest.
#[derive(Debug)]
pub(crate) struct Context {
    pub posts_dir: PathBuf,
    pub output_file: PathBuf,
}

impl Context {
    pub fn new(posts_dir: PathBuf, output_file: PathBuf) -> Self {
        Self {
            posts_dir,
            output_file,
        }
    }

    /// Relative paths are taken from `root`, not the working directory.
    pub fn resolve(root: &Path, posts_dir: &Path, output_file: &Path) -> Self {
        Self::new(root.join(posts_dir), root.join(output_file))
    }

    /// Directory name used as the prefix of `markdownFile` links.
    pub fn link_prefix(&self) -> String {
        self.posts_dir
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// File name of the manifest, for progress output.
    pub fn output_name(&self) -> String {
        self.output_file
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.output_file.to_string_lossy().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(posts_dir: &str) -> Context {
        Context::new(PathBuf::from(posts_dir), PathBuf::from("blog-posts.json"))
    }

    #[test]
    fn link_prefix_is_last_directory_component() {
        assert_eq!(context("posts").link_prefix(), "posts");
        assert_eq!(context("site/content/posts/").link_prefix(), "posts");
        assert_eq!(context("/srv/blog/articles").link_prefix(), "articles");
    }

    #[test]
    fn resolves_relative_paths_against_root() {
        let ctx = Context::resolve(
            Path::new("/srv/blog"),
            Path::new("posts"),
            Path::new("blog-posts.json"),
        );

        assert_eq!(ctx.posts_dir, PathBuf::from("/srv/blog/posts"));
        assert_eq!(ctx.output_file, PathBuf::from("/srv/blog/blog-posts.json"));
        assert_eq!(ctx.link_prefix(), "posts");
    }

    #[test]
    fn keeps_absolute_paths() {
        let ctx = Context::resolve(
            Path::new("/srv/blog"),
            Path::new("/data/articles"),
            Path::new("/tmp/out.json"),
        );

        assert_eq!(ctx.posts_dir, PathBuf::from("/data/articles"));
        assert_eq!(ctx.output_file, PathBuf::from("/tmp/out.json"));
    }

    #[test]
    fn output_name_strips_directories() {
        let ctx = Context::new(PathBuf::from("posts"), PathBuf::from("out/blog-posts.json"));
        assert_eq!(ctx.output_name(), "blog-posts.json");
    }
}
