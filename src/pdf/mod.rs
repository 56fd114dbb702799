mod content;

use std::fmt;

use crate::error::Error;
use crate::fonts::type1_font_dict;
use crate::model::{Document, PageStyle};

use content::{fmt_num, page_stream};

const HEADER: &[u8] = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n";

/// Indirect object number (generation is always 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ObjRef(usize);

impl ObjRef {
    pub(crate) fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for ObjRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} 0 R", self.0)
    }
}

/// Object bodies indexed by object number - 1. Numbers are handed out in one
/// forward pass; a reserved slot is filled once its body can be built.
#[derive(Default)]
struct ObjectArena {
    bodies: Vec<Option<Vec<u8>>>,
}

impl ObjectArena {
    fn reserve(&mut self) -> ObjRef {
        self.bodies.push(None);
        ObjRef(self.bodies.len())
    }

    fn add(&mut self, body: impl Into<Vec<u8>>) -> ObjRef {
        self.bodies.push(Some(body.into()));
        ObjRef(self.bodies.len())
    }

    fn fill(&mut self, id: ObjRef, body: impl Into<Vec<u8>>) {
        self.bodies[id.0 - 1] = Some(body.into());
    }

    /// Serialize header, objects, xref table and trailer.
    fn finish(self, root: ObjRef) -> Result<Vec<u8>, Error> {
        let count = self.bodies.len();
        let mut out: Vec<u8> = Vec::from(HEADER);
        let mut offsets = Vec::with_capacity(count);

        for (i, body) in self.bodies.into_iter().enumerate() {
            let body = body.ok_or_else(|| {
                Error::Render(format!("object {} was reserved but never filled", i + 1))
            })?;
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n", i + 1).as_bytes());
            out.extend_from_slice(&body);
            out.extend_from_slice(b"\nendobj\n");
        }

        let xref_start = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n", count + 1).as_bytes());
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }

        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF\n",
                count + 1,
                root.get(),
                xref_start
            )
            .as_bytes(),
        );
        Ok(out)
    }
}

/// Stream object body. With `compress`, the data is deflated unless that
/// does not make it smaller (tiny pages come out as stored blocks).
fn stream_object(data: &[u8], compress: bool) -> Vec<u8> {
    let deflated = compress.then(|| miniz_oxide::deflate::compress_to_vec_zlib(data, 6));
    let (data, filter) = match deflated {
        Some(z) if z.len() < data.len() => (z, " /Filter /FlateDecode"),
        _ => (data.to_vec(), ""),
    };
    let mut obj = format!("<< /Length {}{filter} >>\nstream\n", data.len()).into_bytes();
    obj.extend_from_slice(&data);
    obj.extend_from_slice(b"\nendstream");
    obj
}

/// Emit the complete PDF file for `doc`.
///
/// Object layout: 1 Catalog, 2 Pages, 3 Font, then a Contents/Page pair per
/// page in document order.
pub fn render(doc: &Document, style: &PageStyle, compress: bool) -> Result<Vec<u8>, Error> {
    let mut arena = ObjectArena::default();

    let pages_id = ObjRef(2);
    let catalog_id = arena.add(format!("<< /Type /Catalog /Pages {pages_id} >>"));
    if arena.reserve() != pages_id {
        return Err(Error::Render("page tree must be object 2".to_string()));
    }
    let font_id = arena.add(type1_font_dict(&style.base_font));

    let media_box = format!(
        "[0 0 {} {}]",
        fmt_num(style.page_width),
        fmt_num(style.page_height)
    );

    let mut page_ids = Vec::with_capacity(doc.pages.len());
    for page in &doc.pages {
        let stream = page_stream(page, style);
        let contents_id = arena.add(stream_object(&stream, compress));
        let page_id = arena.add(format!(
            "<< /Type /Page /Parent {pages_id} /MediaBox {media_box} \
             /Resources << /Font << /{} {font_id} >> >> /Contents {contents_id} >>",
            style.font_resource
        ));
        page_ids.push(page_id);
    }

    let kids: Vec<String> = page_ids.iter().map(ObjRef::to_string).collect();
    arena.fill(
        pages_id,
        format!(
            "<< /Type /Pages /Kids [ {} ] /Count {} >>",
            kids.join(" "),
            page_ids.len()
        ),
    );

    log::debug!(
        "Assembled {} objects for {} pages ({} TOC)",
        arena.bodies.len(),
        doc.pages.len(),
        doc.toc_page_count
    );

    arena.finish(catalog_id)
}
