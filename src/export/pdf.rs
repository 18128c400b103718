//! Printable day sheet: a title line followed by one boxed section per part of
//! the sheet, flowing onto new pages as needed.

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    next_id: i32,
    page_refs: Vec<Ref>,

    // page being drawn: content stream, its object id, and the cursor
    content: Option<(Content, Ref)>,
    y: f32,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
    font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            next_id: 4,
            page_refs: Vec::new(),
            content: None,
            y: 0.0,
            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 20.0,
            font_size: 10.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn finish_page(&mut self) {
        if let Some((content, id)) = self.content.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn start_page(&mut self) {
        self.finish_page();

        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font_id);
        drop(page);

        self.content = Some((Content::new(), content_id));
        self.y = self.page_h - self.margin;
    }

    /// Make room for `h` points, starting a new page if the current one is full.
    fn reserve(&mut self, h: f32) {
        if self.content.is_none() || self.y - h < self.margin {
            self.start_page();
        }
        self.y -= h;
    }

    fn text(&mut self, x: f32, size: f32, text: &str) {
        let y = self.y;
        if let Some((content, _)) = self.content.as_mut() {
            content.begin_text();
            content.set_font(Name(b"F1"), size);
            content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y + 6.0]);
            content.show(Str(text.as_bytes()));
            content.end_text();
        }
    }

    fn line_box(&mut self, shade: Option<f32>) {
        let (x, y, w, h) = (
            self.margin,
            self.y,
            self.page_w - 2.0 * self.margin,
            self.row_h,
        );
        if let Some((content, _)) = self.content.as_mut() {
            content.save_state();
            if let Some(g) = shade {
                content.set_fill_rgb(g, g, g);
                content.rect(x, y, w, h);
                content.fill_nonzero();
            }
            content.set_stroke_rgb(0.65, 0.65, 0.65);
            content.rect(x, y, w, h);
            content.stroke();
            content.restore_state();
        }
    }

    pub fn title(&mut self, title: &str) {
        self.reserve(self.row_h * 1.5);
        self.text(self.margin, self.title_font_size, title);
    }

    /// A shaded heading row followed by one bordered row per entry.
    /// Each entry is `(label, text)`; an empty label gives a full-width row.
    pub fn section(&mut self, heading: &str, entries: &[(String, String)]) {
        self.reserve(self.row_h * 0.5);

        self.reserve(self.row_h);
        self.line_box(Some(0.85));
        self.text(self.margin + 4.0, self.font_size + 1.0, heading);

        for (label, text) in entries {
            self.reserve(self.row_h);
            self.line_box(None);
            if label.is_empty() {
                self.text(self.margin + 4.0, self.font_size, text);
            } else {
                self.text(self.margin + 4.0, self.font_size, label);
                self.text(self.margin + 70.0, self.font_size, text);
            }
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        if self.content.is_none() && self.page_refs.is_empty() {
            self.start_page();
        }
        self.finish_page();

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
        drop(pages);

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_sections_flow_onto_new_pages() {
        let mut pdf = PdfManager::new();
        pdf.title("Day Sheet");
        let rows: Vec<(String, String)> = (0..80)
            .map(|i| (format!("{i}"), "activity".to_string()))
            .collect();
        pdf.section("Schedule", &rows);
        assert!(pdf.page_count() >= 2);
    }

    #[test]
    fn writes_a_pdf_file() {
        let path = std::env::temp_dir().join("daysheet_pdf_unit.pdf");
        let mut pdf = PdfManager::new();
        pdf.title("Day Sheet");
        pdf.section("Notes", &[(String::new(), "hello".into())]);
        pdf.save(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
