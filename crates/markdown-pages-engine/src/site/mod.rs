//! Page generation: markdown files rendered into an HTML template.
//!
//! Templates carry two placeholders, `{{ Title }}` and `{{ Content }}`.
//! Root-relative `href="/` and `src="/` references are rewritten to the
//! configured base path so a site can be served from a sub-path.

use relative_path::RelativePathBuf;
use std::path::{Path, PathBuf};

use crate::error::RenderError;
use crate::io::{self, IoError};
use crate::parsing::{extract_title, markdown_to_html};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

const PAGE_EXTENSION: &str = "html";

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Failed to render {}: {source}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: RenderError,
    },
    #[error("Path {} is not inside {}", path.display(), root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Substitutes every title and content placeholder in `template`.
pub fn render_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Rewrites root-relative `href` and `src` attribute values to start at `base_path`.
pub fn apply_base_path(html: &str, base_path: &str) -> String {
    html.replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"))
}

/// Renders one markdown file into `dest` through the template at `template_path`.
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    log::info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );

    let markdown = io::read_path(from)?;
    let template = io::read_path(template_path)?;

    let render_err = |source: RenderError| SiteError::Render {
        path: from.to_path_buf(),
        source,
    };
    let content = markdown_to_html(&markdown).map_err(render_err)?;
    let title = extract_title(&markdown).map_err(|e| render_err(e.into()))?;

    let page = apply_base_path(&render_template(&template, &title, &content), base_path);
    io::write_path(dest, &page)?;
    Ok(())
}

/// Renders every markdown file below `content_dir` into `dest_dir`.
///
/// `content_dir/a/b.md` is written to `dest_dir/a/b.html`. Returns the
/// written paths in source order. The first failing page aborts the run.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<Vec<PathBuf>, SiteError> {
    let sources = io::scan_markdown_files(content_dir)?;
    log::debug!("Found {} markdown files in {}", sources.len(), content_dir.display());

    let mut written = Vec::with_capacity(sources.len());
    for source in sources {
        let dest = page_destination(&source, content_dir, dest_dir)?;
        generate_page(&source, template_path, &dest, base_path)?;
        written.push(dest);
    }
    Ok(written)
}

/// Maps a source file under `content_dir` to its `.html` path under `dest_dir`.
pub fn page_destination(
    source: &Path,
    content_dir: &Path,
    dest_dir: &Path,
) -> Result<PathBuf, SiteError> {
    let outside = || SiteError::OutsideRoot {
        path: source.to_path_buf(),
        root: content_dir.to_path_buf(),
    };
    let relative = source.strip_prefix(content_dir).map_err(|_| outside())?;
    let relative = RelativePathBuf::from_path(relative).map_err(|_| outside())?;
    Ok(relative.with_extension(PAGE_EXTENSION).to_path(dest_dir))
}
