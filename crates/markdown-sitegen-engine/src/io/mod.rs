use crate::page::{PageError, render_page};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of the pages written for each markdown source.
const PAGE_EXTENSION: &str = "html";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
    #[error("{} is not inside {}", path.display(), root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },
    #[error("Failed to render {}: {source}", path.display())]
    Page { path: PathBuf, source: PageError },
}

/// Read a file relative to `root` and return its content
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a file relative to `root`
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for markdown files in the content directory
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_content_dir(content_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(format!(
            "content directory not found: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Empties a directory, creating it if it does not exist yet.
pub fn clear_dir(path: &Path) -> Result<(), IoError> {
    if path.exists() {
        log::info!("Deleting content of {}", path.display());
        fs::remove_dir_all(path)?;
    }
    fs::create_dir_all(path)?;
    Ok(())
}

/// Copies a directory tree, returning the number of files copied.
pub fn copy_dir_recursive(from: &Path, to: &Path) -> Result<usize, IoError> {
    if !from.is_dir() {
        return Err(IoError::NotFound(from.to_path_buf()));
    }
    fs::create_dir_all(to)?;

    let mut copied = 0;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let source = entry.path();
        let target = to.join(entry.file_name());

        if source.is_dir() {
            copied += copy_dir_recursive(&source, &target)?;
        } else {
            log::debug!("Copying {} to {}", source.display(), target.display());
            fs::copy(&source, &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Renders one markdown file into an HTML page.
pub fn generate_page(
    from_path: &Path,
    template_path: &Path,
    dest_path: &Path,
    base_path: &str,
) -> Result<(), IoError> {
    if !from_path.is_file() {
        return Err(IoError::NotFound(from_path.to_path_buf()));
    }
    let template = read_template(template_path)?;
    log::info!(
        "Generating page from {} to {}",
        from_path.display(),
        dest_path.display()
    );

    let markdown = fs::read_to_string(from_path)?;
    let html = render_source(from_path, &markdown, &template, base_path)?;

    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest_path, html)?;
    Ok(())
}

/// Renders every markdown file under `content_root` into `dest_root`,
/// mirroring the directory layout and swapping `.md` for `.html`.
///
/// Stops at the first page that fails. Returns the written paths in
/// source order.
pub fn generate_pages_recursive(
    content_root: &Path,
    template_path: &Path,
    dest_root: &Path,
    base_path: &str,
) -> Result<Vec<PathBuf>, IoError> {
    let template = read_template(template_path)?;

    let mut written = Vec::new();
    for source in scan_markdown_files(content_root)? {
        let relative = relative_to(&source, content_root)?;
        let target = relative.with_extension(PAGE_EXTENSION);
        log::info!("Generating page {relative} -> {target}");

        let markdown = read_file(&relative, content_root)?;
        let html = render_source(&source, &markdown, &template, base_path)?;
        write_file(&target, dest_root, &html)?;

        written.push(target.to_path(dest_root));
    }

    Ok(written)
}

fn read_template(template_path: &Path) -> Result<String, IoError> {
    if !template_path.is_file() {
        return Err(IoError::NotFound(template_path.to_path_buf()));
    }
    Ok(fs::read_to_string(template_path)?)
}

fn render_source(
    source: &Path,
    markdown: &str,
    template: &str,
    base_path: &str,
) -> Result<String, IoError> {
    render_page(markdown, template, base_path).map_err(|page_error| IoError::Page {
        path: source.to_path_buf(),
        source: page_error,
    })
}

fn relative_to(path: &Path, root: &Path) -> Result<RelativePathBuf, IoError> {
    let outside = || IoError::OutsideRoot {
        path: path.to_path_buf(),
        root: root.to_path_buf(),
    };
    let stripped = path.strip_prefix(root).map_err(|_| outside())?;
    RelativePathBuf::from_path(stripped).map_err(|_| outside())
}
