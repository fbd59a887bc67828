//! Page geometry for storybook sheets.
//!
//! All lengths are millimetres measured from the top-left corner of the
//! sheet; conversion to PDF user space happens at render time.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Where generated images live while a document is being assembled.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StagingMode {
    /// Decode straight from the generated bytes
    #[default]
    Memory,
    /// Round-trip each image through a scratch directory
    Scratch,
}

/// Fixed sheet layout: one image box above a wrapped caption.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Serialize, Deserialize, derive_builder::Builder)]
#[builder(default)]
#[serde(default)]
pub struct PageLayout {
    /// Sheet width (A4)
    page_width: f32,
    /// Sheet height (A4)
    page_height: f32,
    /// Left, top and right margin
    margin: f32,
    /// Image box left edge
    image_x: f32,
    /// Image box top edge
    image_y: f32,
    /// Image box width
    image_width: f32,
    /// Image box height
    image_height: f32,
    /// Vertical distance from the top margin to the first caption line
    caption_offset: f32,
    /// Caption line height
    line_height: f32,
    /// Caption font size in points
    font_size: f32,
    /// Horizontal padding inside the caption cell
    cell_padding: f32,
    /// Distance from the bottom edge that triggers a new sheet
    break_margin: f32,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 10.0,
            image_x: 10.0,
            image_y: 10.0,
            image_width: 180.0,
            image_height: 100.0,
            caption_offset: 95.0,
            line_height: 10.0,
            font_size: 12.0,
            cell_padding: 1.0,
            break_margin: 15.0,
        }
    }
}

impl PageLayout {
    /// Builder starting from the A4 defaults.
    pub fn builder() -> PageLayoutBuilder {
        PageLayoutBuilder::default()
    }

    /// Top of the first caption line.
    pub fn caption_top(&self) -> f32 {
        self.margin + self.caption_offset
    }

    /// Width of the caption cell.
    pub fn caption_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// Usable text width inside the caption cell, in points.
    pub fn wrap_width_pt(&self) -> f32 {
        (self.caption_width() - 2.0 * self.cell_padding) * PT_PER_MM
    }

    /// Lowest y a caption line may reach before moving to a new sheet.
    pub fn break_trigger(&self) -> f32 {
        self.page_height - self.break_margin
    }

    /// Baseline of a line whose cell top is at `y`, in millimetres.
    pub fn baseline(&self, y: f32) -> f32 {
        y + 0.5 * self.line_height + 0.3 * (self.font_size / PT_PER_MM)
    }

    /// Sheet size in points.
    pub fn media_box_pt(&self) -> (f32, f32) {
        (self.page_width * PT_PER_MM, self.page_height * PT_PER_MM)
    }

    /// Convert a top-down millimetre y to bottom-up PDF points.
    pub fn to_pdf_y(&self, y: f32) -> f32 {
        (self.page_height - y) * PT_PER_MM
    }
}
