use crate::markdown::paginate;
use crate::model::{Document, HeadingEntry, RenderOptions};

const MIN_DOTS: usize = 4;

fn indent_for(level: usize) -> &'static str {
    match level {
        1 => "",
        2 => "  ",
        _ => "    ",
    }
}

/// Render the heading index as a Markdown document: a level-1 title followed
/// by one dot-leader line per heading.
pub fn render_toc(headings: &[HeadingEntry], title: &str, width: usize) -> String {
    let mut lines: Vec<String> = vec![format!("# {title}"), String::new()];
    for h in headings {
        let indent = indent_for(h.level);
        let used = h.title.chars().count() + indent.len();
        let dots = ".".repeat(width.saturating_sub(used).max(MIN_DOTS));
        lines.push(format!("{indent}{} {dots} {}", h.title, h.page));
    }
    lines.push(String::new());
    lines.join("\n")
}

/// Paginate the body and prepend a table of contents whose page numbers
/// account for the TOC's own pages.
///
/// The TOC length is measured once from a draft rendered with unshifted
/// numbers. If the corrected numbers change the TOC's page count the result
/// is kept as is and a warning is logged.
pub fn assemble(md: &str, opts: &RenderOptions) -> Document {
    let capacity = opts.lines_per_page;
    let body = paginate(md, capacity);

    if !opts.include_toc {
        return Document {
            pages: body.pages,
            toc_page_count: 0,
            headings: body.headings,
        };
    }

    let draft = render_toc(&body.headings, &opts.toc_title, opts.toc_width);
    let toc_pages = paginate(&draft, capacity).pages.len();

    let headings: Vec<HeadingEntry> = body
        .headings
        .into_iter()
        .map(|h| HeadingEntry {
            page: h.page + toc_pages,
            ..h
        })
        .collect();

    let toc = paginate(
        &render_toc(&headings, &opts.toc_title, opts.toc_width),
        capacity,
    )
    .pages;
    if toc.len() != toc_pages {
        log::warn!(
            "TOC grew from {} to {} pages after renumbering; heading page numbers may be off by {}",
            toc_pages,
            toc.len(),
            toc.len().abs_diff(toc_pages)
        );
    }

    let toc_page_count = toc.len();
    let mut pages = toc;
    pages.extend(body.pages);

    Document {
        pages,
        toc_page_count,
        headings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::{BODY_SIZE, H1_SIZE};

    fn entry(level: usize, title: &str, page: usize) -> HeadingEntry {
        HeadingEntry {
            level,
            title: title.to_string(),
            page,
        }
    }

    #[test]
    fn toc_lines_indent_and_fill() {
        let md = render_toc(
            &[entry(1, "Intro", 2), entry(2, "Scope", 2), entry(3, "Detail", 3)],
            "Contents",
            20,
        );
        let lines: Vec<&str> = md.split('\n').collect();
        assert_eq!(lines[0], "# Contents");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Intro ............... 2");
        assert_eq!(lines[3], "  Scope ............. 2");
        assert_eq!(lines[4], "    Detail .......... 3");
        assert_eq!(lines[5], "");
    }

    #[test]
    fn long_title_gets_minimum_dots() {
        let title = "A very long heading that is wider than the target";
        let md = render_toc(&[entry(1, title, 7)], "Contents", 10);
        assert!(md.contains(&format!("{title} .... 7")));
    }

    #[test]
    fn dot_count_uses_characters_not_bytes() {
        let md = render_toc(&[entry(1, "Résumé", 2)], "Contents", 12);
        assert!(md.contains("Résumé ...... 2"));
    }

    #[test]
    fn title_and_section_point_at_content_page() {
        let md = "# Title\n\nBody line one.\n\n## Section\n\nBody line two.\n";
        let doc = assemble(md, &RenderOptions::default());

        assert_eq!(doc.pages.len(), 2);
        assert_eq!(doc.toc_page_count, 1);
        assert_eq!(
            doc.headings,
            vec![entry(1, "Title", 2), entry(2, "Section", 2)]
        );

        let toc = &doc.pages[0].lines;
        assert_eq!(toc[0].font_size, H1_SIZE);
        assert_eq!(toc[0].text, "Table of Contents");
        assert!(toc[2].is_blank());
        assert!(toc[3].text.starts_with("Title ") && toc[3].text.ends_with(" 2"));
        assert!(toc[4].text.starts_with("  Section ") && toc[4].text.ends_with(" 2"));
        assert_eq!(toc[4].font_size, BODY_SIZE);

        assert_eq!(doc.content_pages()[0].lines[0].text, "Title");
    }

    #[test]
    fn multi_page_toc_shifts_every_heading() {
        // 60 sections, each filling most of a page, force a 2-page TOC.
        let filler: String = (0..40).map(|i| format!("text {i}\n")).collect();
        let md: String = (1..=60).map(|i| format!("## Section {i}\n{filler}")).collect();
        let doc = assemble(&md, &RenderOptions::default());

        assert_eq!(doc.toc_page_count, 2);
        for h in &doc.headings {
            let page = &doc.pages[h.page - 1];
            assert!(
                page.lines.iter().any(|l| l.text == h.title),
                "{} not found on page {}",
                h.title,
                h.page
            );
        }

        let toc_numbers: Vec<usize> = doc.pages[..doc.toc_page_count]
            .iter()
            .flat_map(|p| p.lines.iter())
            .filter(|l| l.text.contains(" ...."))
            .filter_map(|l| l.text.rsplit(' ').next()?.parse().ok())
            .collect();
        let expected: Vec<usize> = doc.headings.iter().map(|h| h.page).collect();
        assert_eq!(toc_numbers, expected);
    }

    #[test]
    fn toc_disabled_keeps_raw_numbers() {
        let opts = RenderOptions {
            include_toc: false,
            ..RenderOptions::default()
        };
        let doc = assemble("# Only\ntext\n", &opts);
        assert_eq!(doc.toc_page_count, 0);
        assert_eq!(doc.pages.len(), 1);
        assert_eq!(doc.headings, vec![entry(1, "Only", 1)]);
    }

    #[test]
    fn empty_body_still_gets_toc_page() {
        let doc = assemble("", &RenderOptions::default());
        assert_eq!(doc.toc_page_count, 1);
        assert_eq!(doc.pages.len(), 1);
        assert!(doc.headings.is_empty());
    }
}
