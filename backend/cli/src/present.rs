//! Paragraph listing of an annotated page.
//!
//! Output per block:
//!
//! ```text
//! >>>> block 0
//!     >>>> paragraph 0
//!          HELLO WORLD (10, 20) (90, 20) (90, 40) (10, 40)
//! ```

use std::fmt;
use std::io::Write;

use textlens_core::{BoundingPoly, Page, Result, TextLensError};

const TEXT_INDENT: &str = "         ";

/// The four corners of a paragraph's bounding polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corners {
    pub left_top: Point,
    pub right_top: Point,
    pub right_bottom: Point,
    pub left_bottom: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point(pub i32, pub i32);

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl Corners {
    /// Vertices 0..3 map to left-top, right-top, right-bottom, left-bottom.
    pub fn from_poly(poly: &BoundingPoly) -> Result<Self> {
        match poly.vertices.as_slice() {
            [lt, rt, rb, lb] => Ok(Self {
                left_top: Point(lt.x, lt.y),
                right_top: Point(rt.x, rt.y),
                right_bottom: Point(rb.x, rb.y),
                left_bottom: Point(lb.x, lb.y),
            }),
            other => Err(TextLensError::MalformedResponse(format!(
                "bounding polygon has {} vertices, expected 4",
                other.len()
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphReport {
    pub text: String,
    pub corners: Corners,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockReport {
    pub paragraphs: Vec<ParagraphReport>,
}

/// Reconstruct every paragraph of the page, validating all polygons.
pub fn layout_page(page: &Page) -> Result<Vec<BlockReport>> {
    page.blocks
        .iter()
        .enumerate()
        .map(|(block_index, block)| -> Result<BlockReport> {
            let paragraphs = block
                .paragraphs
                .iter()
                .enumerate()
                .map(|(paragraph_index, paragraph)| -> Result<ParagraphReport> {
                    let corners = Corners::from_poly(&paragraph.bounding_box).map_err(|e| match e {
                        TextLensError::MalformedResponse(msg) => TextLensError::MalformedResponse(
                            format!("block {block_index} paragraph {paragraph_index}: {msg}"),
                        ),
                        other => other,
                    })?;
                    Ok(ParagraphReport {
                        text: paragraph.text(),
                        corners,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(BlockReport { paragraphs })
        })
        .collect()
}

/// Print the page's paragraphs. Nothing is written if any polygon is malformed.
pub fn write_page<W: Write>(out: &mut W, page: &Page) -> Result<()> {
    let blocks = layout_page(page)?;
    for (block_index, block) in blocks.iter().enumerate() {
        writeln!(out, ">>>> block {block_index}")?;
        for (paragraph_index, paragraph) in block.paragraphs.iter().enumerate() {
            writeln!(out, "    >>>> paragraph {paragraph_index}")?;
            let c = &paragraph.corners;
            writeln!(
                out,
                "{TEXT_INDENT}{} {} {} {} {}",
                paragraph.text, c.left_top, c.right_top, c.right_bottom, c.left_bottom
            )?;
        }
    }
    Ok(())
}
