use crate::error::Error;

/// ISO A4 in points.
pub const A4_WIDTH: f32 = 595.28;
pub const A4_HEIGHT: f32 = 841.89;

pub const DEFAULT_LINES_PER_PAGE: usize = 46;
pub const DEFAULT_TOC_TITLE: &str = "Table of Contents";
pub const DEFAULT_TOC_WIDTH: usize = 60;

/// One rendered line: font size in points plus literal text.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledLine {
    pub font_size: f32,
    pub text: String,
}

impl StyledLine {
    pub fn new(font_size: f32, text: impl Into<String>) -> Self {
        Self {
            font_size,
            text: text.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<StyledLine>,
}

impl Page {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// True when the page has no visible text (empty, or only spacer lines).
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(StyledLine::is_blank)
    }
}

/// A heading occurrence. `page` is 1-based.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadingEntry {
    pub level: usize,
    pub title: String,
    pub page: usize,
}

/// Final page list: the first `toc_page_count` pages are the table of contents.
#[derive(Clone, Debug, Default)]
pub struct Document {
    pub pages: Vec<Page>,
    pub toc_page_count: usize,
    /// Heading index with page numbers relative to `pages`.
    pub headings: Vec<HeadingEntry>,
}

impl Document {
    pub fn content_pages(&self) -> &[Page] {
        &self.pages[self.toc_page_count..]
    }
}

/// Text and page geometry shared by every page of the document.
#[derive(Clone, Debug, PartialEq)]
pub struct PageStyle {
    /// Standard Type1 font name written as `/BaseFont`.
    pub base_font: String,
    /// Resource name the content streams select the font by.
    pub font_resource: String,
    pub font_size: f32,
    pub leading: f32,
    pub margin_left: f32,
    pub margin_top: f32,
    pub page_width: f32,
    pub page_height: f32,
}

impl Default for PageStyle {
    fn default() -> Self {
        Self {
            base_font: "Helvetica".to_string(),
            font_resource: "F1".to_string(),
            font_size: 11.0,
            leading: 14.0,
            margin_left: 50.0,
            margin_top: 50.0,
            page_width: A4_WIDTH,
            page_height: A4_HEIGHT,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub lines_per_page: usize,
    pub toc_title: String,
    /// Target width (in characters) the TOC dot leaders fill up to.
    pub toc_width: usize,
    pub include_toc: bool,
    /// FlateDecode the page content streams.
    pub compress: bool,
    pub style: PageStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            lines_per_page: DEFAULT_LINES_PER_PAGE,
            toc_title: DEFAULT_TOC_TITLE.to_string(),
            toc_width: DEFAULT_TOC_WIDTH,
            include_toc: true,
            compress: false,
            style: PageStyle::default(),
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> Result<(), Error> {
        if self.lines_per_page == 0 {
            return Err(Error::InvalidOptions(
                "lines per page must be at least 1".to_string(),
            ));
        }
        if self.toc_title.trim().is_empty() && self.include_toc {
            return Err(Error::InvalidOptions("TOC title is empty".to_string()));
        }
        let s = &self.style;
        let positive = [s.font_size, s.leading, s.page_width, s.page_height];
        if !positive.iter().all(|v| v.is_finite() && *v > 0.0) {
            return Err(Error::InvalidOptions(format!(
                "font size, leading and page size must be positive (got {}pt/{}pt, {}x{})",
                s.font_size, s.leading, s.page_width, s.page_height
            )));
        }
        if !(s.margin_left.is_finite() && s.margin_top.is_finite()) {
            return Err(Error::InvalidOptions(format!(
                "margins must be finite (got {}/{})",
                s.margin_left, s.margin_top
            )));
        }
        if s.font_resource.is_empty()
            || s.base_font.is_empty()
            || !s.font_resource.chars().all(|c| c.is_ascii_alphanumeric())
            || !s.base_font.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(Error::InvalidOptions(format!(
                "font names must be plain PDF names (got /{} /{})",
                s.font_resource, s.base_font
            )));
        }
        Ok(())
    }
}
