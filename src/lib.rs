mod error;
mod fonts;
mod markdown;
mod model;
mod pdf;
mod toc;

pub use error::Error;
pub use markdown::{Pagination, paginate};
pub use model::{
    A4_HEIGHT, A4_WIDTH, DEFAULT_LINES_PER_PAGE, DEFAULT_TOC_TITLE, DEFAULT_TOC_WIDTH, Document,
    HeadingEntry, Page, PageStyle, RenderOptions, StyledLine,
};
pub use toc::{assemble, render_toc};

use std::path::Path;
use std::time::Instant;

/// Lay out `md` (TOC pages first) and emit the PDF bytes.
pub fn render_markdown(md: &str, options: &RenderOptions) -> Result<Vec<u8>, Error> {
    options.validate()?;
    let doc = assemble(md, options);
    pdf::render(&doc, &options.style, options.compress)
}

pub fn convert_markdown_to_pdf(input: &Path, output: &Path) -> Result<(), Error> {
    convert_markdown_to_pdf_with_options(input, output, &RenderOptions::default())
}

/// Read `input` as UTF-8 (invalid sequences replaced) and write the PDF to
/// `output`, creating parent directories.
pub fn convert_markdown_to_pdf_with_options(
    input: &Path,
    output: &Path,
    options: &RenderOptions,
) -> Result<(), Error> {
    let raw = std::fs::read(input)?;
    let md = String::from_utf8_lossy(&raw);
    convert_markdown_str_to_pdf(&md, output, options)
}

pub fn convert_markdown_str_to_pdf(
    md: &str,
    output: &Path,
    options: &RenderOptions,
) -> Result<(), Error> {
    let t0 = Instant::now();

    options.validate()?;
    let doc = assemble(md, options);
    let t_layout = t0.elapsed();

    let bytes = pdf::render(&doc, &options.style, options.compress)?;
    let t_render = t0.elapsed();

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, &bytes)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: layout={:.1}ms, render={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes, {} pages, {} TOC)",
        t_layout.as_secs_f64() * 1000.0,
        (t_render - t_layout).as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
        doc.pages.len(),
        doc.toc_page_count,
    );

    Ok(())
}
