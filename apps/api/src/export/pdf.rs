//! Minimal PDF 1.4 assembly for the paged export.
//!
//! The document embeds the flattened raster once as a Flate-compressed RGB
//! XObject and draws it on every page at that page's planned offset; content
//! outside a page's media box is clipped by the viewer, which is what turns
//! the shared image into per-page slices. Objects are written straight into a
//! byte buffer with a tracked cross-reference table — no platform
//! dependencies, plain `Write`-style rendering.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::errors::AppError;
use crate::export::pagination::{PagePlan, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use crate::export::raster::RasterImage;

const MM_TO_PT: f64 = 72.0 / 25.4;

/// Builds the complete PDF for the given raster and page plan.
pub fn assemble_pdf(raster: &RasterImage, plan: &PagePlan) -> Result<Vec<u8>, AppError> {
    let page_w_pt = PAGE_WIDTH_MM * MM_TO_PT;
    let page_h_pt = PAGE_HEIGHT_MM * MM_TO_PT;
    let img_w_pt = plan.image_width_mm * MM_TO_PT;
    let img_h_pt = plan.image_height_mm * MM_TO_PT;

    let image_stream = compress(&raster.rgb)?;

    let page_count = plan.pages.len();
    // 1 catalog + 1 pages node + 1 image + (page + content) per page
    let mut writer = PdfWriter::new(3 + 2 * page_count);

    writer.begin_obj(1);
    writer.push_str("<< /Type /Catalog /Pages 2 0 R >>\n");
    writer.end_obj();

    let kids: Vec<String> = (0..page_count)
        .map(|index| format!("{} 0 R", 4 + 2 * index))
        .collect();
    writer.begin_obj(2);
    writer.push_str(&format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>\n",
        kids.join(" "),
        page_count
    ));
    writer.end_obj();

    writer.begin_obj(3);
    writer.push_str(&format!(
        "<< /Type /XObject /Subtype /Image /Width {} /Height {} /ColorSpace /DeviceRGB \
         /BitsPerComponent 8 /Filter /FlateDecode /Length {} >>\nstream\n",
        raster.width,
        raster.height,
        image_stream.len()
    ));
    writer.push_bytes(&image_stream);
    writer.push_str("\nendstream\n");
    writer.end_obj();

    for slice in &plan.pages {
        let page_id = 4 + 2 * slice.index as usize;
        let content_id = page_id + 1;

        writer.begin_obj(page_id);
        writer.push_str(&format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {page_w_pt:.4} {page_h_pt:.4}] \
             /Resources << /XObject << /Im0 3 0 R >> >> /Contents {content_id} 0 R >>\n"
        ));
        writer.end_obj();

        // PDF y grows upward: place the image bottom so its top lands at the
        // planned (top-down) offset for this page
        let y_pt = page_h_pt - img_h_pt - slice.offset_mm * MM_TO_PT;
        let content =
            format!("q\n{img_w_pt:.4} 0 0 {img_h_pt:.4} 0 {y_pt:.4} cm\n/Im0 Do\nQ\n");

        writer.begin_obj(content_id);
        writer.push_str(&format!("<< /Length {} >>\nstream\n", content.len()));
        writer.push_str(&content);
        writer.push_str("endstream\n");
        writer.end_obj();
    }

    Ok(writer.finish())
}

fn compress(data: &[u8]) -> Result<Vec<u8>, AppError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| AppError::Export(format!("Failed to compress image stream: {e}")))?;
    encoder
        .finish()
        .map_err(|e| AppError::Export(format!("Failed to compress image stream: {e}")))
}

/// Byte-buffer object writer with a tracked xref table.
struct PdfWriter {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl PdfWriter {
    fn new(object_count: usize) -> Self {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"%PDF-1.4\n");
        // binary marker comment so transports treat the file as binary
        buf.extend_from_slice(&[0x25, 0xE2, 0xE3, 0xCF, 0xD3, 0x0A]);
        PdfWriter {
            buf,
            offsets: vec![0; object_count],
        }
    }

    fn begin_obj(&mut self, id: usize) {
        self.offsets[id - 1] = self.buf.len();
        self.push_str(&format!("{id} 0 obj\n"));
    }

    fn end_obj(&mut self) {
        self.push_str("endobj\n");
    }

    fn push_str(&mut self, text: &str) {
        self.buf.extend_from_slice(text.as_bytes());
    }

    fn push_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    fn finish(mut self) -> Vec<u8> {
        let xref_at = self.buf.len();
        let size = self.offsets.len() + 1;
        let offsets = std::mem::take(&mut self.offsets);

        self.push_str(&format!("xref\n0 {size}\n"));
        self.push_str("0000000000 65535 f \n");
        for offset in offsets {
            self.push_str(&format!("{offset:010} 00000 n \n"));
        }
        self.push_str(&format!(
            "trailer\n<< /Size {size} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n"
        ));
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::pagination::plan_pages;

    fn white_raster(width: u32, height: u32) -> RasterImage {
        RasterImage {
            width,
            height,
            rgb: vec![255; (width * height * 3) as usize],
        }
    }

    fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    #[test]
    fn test_output_is_a_pdf_with_trailer() {
        let raster = white_raster(4, 4);
        let plan = plan_pages(raster.width, raster.height).unwrap();
        let pdf = assemble_pdf(&raster, &plan).unwrap();

        assert!(pdf.starts_with(b"%PDF-1.4"));
        assert!(pdf.ends_with(b"%%EOF\n"));
        assert_eq!(count_occurrences(&pdf, b"xref"), 2); // table + startxref
    }

    #[test]
    fn test_one_page_object_per_planned_slice() {
        // tall raster: 100 px wide → 210 mm, 2000 px → 4200 mm → 15 pages
        let raster = white_raster(100, 2000);
        let plan = plan_pages(raster.width, raster.height).unwrap();
        let pdf = assemble_pdf(&raster, &plan).unwrap();

        let expected = plan.page_count() as usize;
        assert_eq!(count_occurrences(&pdf, b"/Type /Page "), expected);
        assert_eq!(count_occurrences(&pdf, b"/Im0 Do"), expected);
        assert_eq!(
            count_occurrences(&pdf, format!("/Count {expected} ").as_bytes()),
            1
        );
    }

    #[test]
    fn test_image_object_declares_raster_dimensions() {
        let raster = white_raster(17, 23);
        let plan = plan_pages(raster.width, raster.height).unwrap();
        let pdf = assemble_pdf(&raster, &plan).unwrap();

        assert_eq!(count_occurrences(&pdf, b"/Width 17 /Height 23"), 1);
        assert_eq!(count_occurrences(&pdf, b"/Filter /FlateDecode"), 1);
    }

    #[test]
    fn test_first_page_draws_image_flush_with_page_top() {
        let raster = white_raster(210, 297); // exactly one page at 1 px/mm
        let plan = plan_pages(raster.width, raster.height).unwrap();
        let pdf = assemble_pdf(&raster, &plan).unwrap();

        // image height equals page height, so the bottom-left lands at y=0
        assert!(count_occurrences(&pdf, b" 0 0.0000 cm") >= 1);
    }
}
