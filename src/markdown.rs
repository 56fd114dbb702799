//! Markdown subset → fixed-capacity pages of styled lines.
//!
//! Only ATX headings are interpreted. Everything else (emphasis, lists,
//! tables, links) is kept as literal text.

use crate::model::{HeadingEntry, Page, StyledLine};

pub const BODY_SIZE: f32 = 11.0;
pub const H1_SIZE: f32 = 18.0;
pub const H2_SIZE: f32 = 14.0;
pub const H3_SIZE: f32 = 12.0;

pub struct Pagination {
    pub pages: Vec<Page>,
    pub headings: Vec<HeadingEntry>,
}

/// Split a `#` line into (level, title). `None` when there is no title text.
pub(crate) fn parse_heading(line: &str) -> Option<(usize, &str)> {
    if !line.starts_with('#') {
        return None;
    }
    let rest = line.trim_start_matches('#');
    let level = line.len() - rest.len();
    let title = rest.trim();
    if title.is_empty() {
        None
    } else {
        Some((level, title))
    }
}

fn heading_size(level: usize) -> f32 {
    match level {
        1 => H1_SIZE,
        2 => H2_SIZE,
        _ => H3_SIZE,
    }
}

struct Paginator {
    capacity: usize,
    pages: Vec<Page>,
}

impl Paginator {
    fn current(&mut self) -> &mut Page {
        if self.pages.is_empty() {
            self.pages.push(Page::default());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn break_page(&mut self) {
        self.pages.push(Page::default());
    }

    fn push(&mut self, font_size: f32, text: &str) {
        if self.current().len() >= self.capacity {
            self.break_page();
        }
        self.current().lines.push(StyledLine::new(font_size, text));
    }

    /// 1-based number of the page currently being filled.
    fn page_number(&self) -> usize {
        self.pages.len().max(1)
    }
}

/// Split into logical lines on `\n`, `\r\n`, a lone `\r`, and the other
/// Unicode line boundaries (VT, FF, FS, GS, RS, NEL, LS, PS). A trailing
/// terminator does not produce an extra empty line.
pub(crate) fn split_lines(md: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = md.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let end = match c {
            '\r' => match chars.peek() {
                Some((_, '\n')) => {
                    chars.next();
                    i + 2
                }
                _ => i + 1,
            },
            '\n' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}'
            | '\u{2028}' | '\u{2029}' => i + c.len_utf8(),
            _ => continue,
        };
        lines.push(&md[start..i]);
        start = end;
    }
    if start < md.len() {
        lines.push(&md[start..]);
    }
    lines
}

/// Lay out `md` into pages of at most `capacity` lines and collect headings.
pub fn paginate(md: &str, capacity: usize) -> Pagination {
    let mut p = Paginator {
        capacity,
        pages: vec![Page::default()],
    };
    let mut headings = Vec::new();

    for raw in split_lines(md) {
        let line = raw.trim_end();

        if let Some((level, title)) = parse_heading(line) {
            // keep headings off the last two lines of a page
            let filled = p.current().len();
            if filled > 0 && filled >= capacity.saturating_sub(2) {
                p.break_page();
            }
            p.push(heading_size(level), title);
            headings.push(HeadingEntry {
                level,
                title: title.to_string(),
                page: p.page_number(),
            });
            if level == 1 {
                p.push(BODY_SIZE, "");
            }
            continue;
        }

        if line.trim().is_empty() {
            p.push(BODY_SIZE, "");
        } else {
            p.push(BODY_SIZE, line);
        }
    }

    let mut pages = p.pages;
    if pages.last().is_some_and(Page::is_blank) {
        pages.pop();
    }

    log::debug!(
        "Paginated {} lines into {} pages ({} headings)",
        pages.iter().map(Page::len).sum::<usize>(),
        pages.len(),
        headings.len()
    );

    Pagination { pages, headings }
}
