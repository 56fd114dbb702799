use std::sync::Once;

use report_pdf::RenderOptions;

static LOGGER: Once = Once::new();

pub fn init_logging() {
    LOGGER.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

pub fn render(md: &str) -> Vec<u8> {
    render_with(md, &RenderOptions::default())
}

pub fn render_with(md: &str, options: &RenderOptions) -> Vec<u8> {
    init_logging();
    report_pdf::render_markdown(md, options).expect("render markdown")
}

pub fn load(pdf: &[u8]) -> lopdf::Document {
    lopdf::Document::load_mem(pdf).expect("lopdf parses generated PDF")
}

pub fn find(hay: &[u8], needle: &[u8]) -> Option<usize> {
    hay.windows(needle.len()).position(|w| w == needle)
}

/// Decoded content stream of 1-based page `n`.
pub fn page_content(doc: &lopdf::Document, n: u32) -> Vec<u8> {
    let pages = doc.get_pages();
    let id = pages[&n];
    doc.get_page_content(id).expect("page content")
}

/// Byte offsets listed in the xref table, object 1 first.
pub fn xref_offsets(pdf: &[u8]) -> Vec<usize> {
    let at = pdf
        .windows(b"startxref\n".len())
        .rposition(|w| w == b"startxref\n")
        .expect("startxref")
        + "startxref\n".len();
    let tail = String::from_utf8_lossy(&pdf[at..]);
    let xref: usize = tail.lines().next().unwrap().parse().unwrap();

    let table = String::from_utf8_lossy(&pdf[xref..]);
    let mut lines = table.lines();
    assert_eq!(lines.next(), Some("xref"));
    let count: usize = lines
        .next()
        .unwrap()
        .split_whitespace()
        .nth(1)
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(lines.next(), Some("0000000000 65535 f "));
    lines
        .take(count - 1)
        .map(|l| l[..10].parse().unwrap())
        .collect()
}

/// `n` sections of `body_lines` plain lines each, one `##` heading per section.
pub fn sectioned_report(n: usize, body_lines: usize) -> String {
    let mut md = String::from("# Report\n\n");
    for i in 1..=n {
        md.push_str(&format!("## Section {i}\n"));
        for j in 0..body_lines {
            md.push_str(&format!("Finding {i}.{j}\n"));
        }
    }
    md
}
