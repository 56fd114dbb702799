use crate::fonts::to_winansi_bytes;
use crate::model::{Page, PageStyle};

/// Format a PDF number: integers without a fraction, otherwise two decimals
/// with trailing zeros dropped.
pub(crate) fn fmt_num(v: f32) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Escape text for a literal string: backslash and parentheses get a
/// backslash, carriage returns are dropped.
pub(crate) fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

fn op(out: &mut Vec<u8>, s: &str) {
    if !out.is_empty() {
        out.push(b'\n');
    }
    out.extend_from_slice(s.as_bytes());
}

/// Text operators for one page, one operator per line.
///
/// Lines advance with `T*` at the style's leading; the first line is drawn at
/// the initial `Td` position (left margin, page height minus top margin).
pub(crate) fn page_stream(page: &Page, style: &PageStyle) -> Vec<u8> {
    let font = &style.font_resource;
    let x = style.margin_left;
    let y = style.page_height - style.margin_top;

    let mut out: Vec<u8> = Vec::new();
    op(&mut out, "BT");
    op(&mut out, &format!("/{font} {} Tf", fmt_num(style.font_size)));
    op(&mut out, &format!("{x:.2} {y:.2} Td"));
    op(&mut out, &format!("{} TL", fmt_num(style.leading)));

    let mut current_size = style.font_size;
    let mut substituted = 0;
    for (i, line) in page.lines.iter().enumerate() {
        if line.font_size != current_size {
            current_size = line.font_size;
            op(&mut out, &format!("/{font} {} Tf", fmt_num(current_size)));
        }
        if i > 0 {
            op(&mut out, "T*");
        }
        let (text, subs) = to_winansi_bytes(&escape_literal(&line.text));
        substituted += subs;
        out.push(b'\n');
        out.push(b'(');
        out.extend_from_slice(&text);
        out.extend_from_slice(b") Tj");
    }

    op(&mut out, "ET");

    if substituted > 0 {
        log::debug!("Substituted {substituted} characters outside WinAnsi with '?'");
    }
    out
}
