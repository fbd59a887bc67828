//! Turns illustrated pages into a PDF object graph.

use crate::font::{CAPTION_FONT, encode_win_ansi, wrap_justified};
use crate::layout::{PT_PER_MM, PageLayout, StagingMode};
use crate::Storybook;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, StringFormat, dictionary};
use storybook_core::Page;
use storybook_error::{AssemblyError, AssemblyErrorKind, StorybookResult};
use storybook_storage::{ArtifactKey, ScratchStore};
use tracing::{debug, instrument};
use uuid::Uuid;

const FONT_RESOURCE: &str = "F1";

/// How image bytes reach the decoder.
#[derive(Debug, Clone, Default)]
pub enum ImageStaging {
    /// Decode the generated bytes directly
    #[default]
    Memory,
    /// Write each image to the scratch store and read it back
    Scratch(ScratchStore),
}

impl ImageStaging {
    /// Staging for a configured mode.
    ///
    /// `Scratch` uses `scratch_dir` when given, the OS temp directory
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if the scratch directory cannot be created.
    pub fn from_mode(
        mode: StagingMode,
        scratch_dir: Option<&std::path::Path>,
    ) -> StorybookResult<Self> {
        match mode {
            StagingMode::Memory => Ok(Self::Memory),
            StagingMode::Scratch => {
                let store = match scratch_dir {
                    Some(dir) => ScratchStore::new(dir)?,
                    None => ScratchStore::in_temp_dir()?,
                };
                Ok(Self::Scratch(store))
            }
        }
    }

    /// The configured mode.
    pub fn mode(&self) -> StagingMode {
        match self {
            Self::Memory => StagingMode::Memory,
            Self::Scratch(_) => StagingMode::Scratch,
        }
    }
}

/// Lays out one image and caption per page.
///
/// # Examples
///
/// ```
/// use storybook_pdf::StorybookAssembler;
///
/// let assembler = StorybookAssembler::default();
/// assert_eq!(*assembler.layout().font_size(), 12.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StorybookAssembler {
    layout: PageLayout,
    staging: ImageStaging,
}

impl StorybookAssembler {
    /// Assembler with a custom layout and staging.
    pub fn new(layout: PageLayout, staging: ImageStaging) -> Self {
        Self { layout, staging }
    }

    /// Page geometry in use.
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Build a storybook from ordered pages.
    ///
    /// Each page starts on a fresh sheet. Captions that run past the
    /// bottom break margin continue on a sheet of their own. With no pages
    /// the document still contains one blank sheet.
    ///
    /// # Errors
    ///
    /// Returns error if an image cannot be decoded, a content stream cannot
    /// be encoded, or scratch staging fails.
    #[instrument(skip(self, pages), fields(pages = pages.len(), staging = %self.staging.mode()))]
    pub async fn assemble(&self, request_id: Uuid, pages: &[Page]) -> StorybookResult<Storybook> {
        let mut writer = SheetWriter::new(self.layout);

        for (position, page) in pages.iter().enumerate() {
            let image_id = match &self.staging {
                ImageStaging::Memory => writer.embed_image(page.index(), page.image().data())?,
                ImageStaging::Scratch(store) => {
                    let key = ArtifactKey::new(request_id, page.index(), page.image().extension());
                    let staged = store.stage(&key, page.image().data()).await?;
                    let bytes = staged.read().await?;
                    writer.embed_image(page.index(), &bytes)?
                }
            };
            writer.write_page(position, image_id, page.text())?;
        }

        if pages.is_empty() {
            debug!("No illustrated pages, emitting a blank sheet");
            writer.blank_sheet()?;
        }

        let sheet_count = writer.sheet_count();
        let document = writer.finish();

        debug!(sheets = sheet_count, "Assembled storybook");
        Ok(Storybook::new(
            request_id,
            pages.iter().map(Page::index).collect(),
            pages.iter().map(|p| p.text().to_string()).collect(),
            sheet_count,
            document,
        ))
    }
}

/// Accumulates sheets into a document.
struct SheetWriter {
    layout: PageLayout,
    doc: Document,
    pages_id: ObjectId,
    font_id: ObjectId,
    kids: Vec<ObjectId>,
}

impl SheetWriter {
    fn new(layout: PageLayout) -> Self {
        let mut doc = Document::with_version("1.4");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => CAPTION_FONT,
            "Encoding" => "WinAnsiEncoding",
        });
        Self {
            layout,
            doc,
            pages_id,
            font_id,
            kids: Vec::new(),
        }
    }

    fn sheet_count(&self) -> usize {
        self.kids.len()
    }

    /// Decode an image and store it as an RGB XObject.
    fn embed_image(&mut self, page: usize, bytes: &[u8]) -> StorybookResult<ObjectId> {
        let decoded = image::load_from_memory(bytes).map_err(|e| {
            tracing::error!(page, error = %e, "Failed to decode image");
            AssemblyError::new(AssemblyErrorKind::ImageDecode {
                page,
                message: e.to_string(),
            })
        })?;

        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        let rgb = flatten_on_white(rgba.as_raw());

        let dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width as i64,
            "Height" => height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        };
        debug!(page, width, height, "Embedded image");
        Ok(self.doc.add_object(Stream::new(dict, rgb)))
    }

    /// One logical page: image box, then the caption from its fixed offset.
    fn write_page(&mut self, position: usize, image_id: ObjectId, text: &str) -> StorybookResult<()> {
        let layout = self.layout;
        let image_name = format!("Im{}", position);

        let mut operations = vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    (layout.image_width() * PT_PER_MM).into(),
                    0.into(),
                    0.into(),
                    (layout.image_height() * PT_PER_MM).into(),
                    (layout.image_x() * PT_PER_MM).into(),
                    layout
                        .to_pdf_y(layout.image_y() + layout.image_height())
                        .into(),
                ],
            ),
            Operation::new("Do", vec![Object::Name(image_name.clone().into_bytes())]),
            Operation::new("Q", vec![]),
        ];
        let mut xobject = Some((image_name, image_id));

        let lines = wrap_justified(&encode_win_ansi(text), *layout.font_size(), layout.wrap_width_pt());
        let mut y = layout.caption_top();

        for line in lines {
            if y + layout.line_height() > layout.break_trigger() {
                self.push_sheet(std::mem::take(&mut operations), xobject.take())?;
                y = *layout.margin();
            }
            if !line.bytes.is_empty() {
                operations.extend(text_line(&layout, y, line.bytes, line.word_spacing));
            }
            y += layout.line_height();
        }

        self.push_sheet(operations, xobject)
    }

    fn blank_sheet(&mut self) -> StorybookResult<()> {
        self.push_sheet(Vec::new(), None)
    }

    fn push_sheet(
        &mut self,
        operations: Vec<Operation>,
        xobject: Option<(String, ObjectId)>,
    ) -> StorybookResult<()> {
        let content = Content { operations }.encode().map_err(|e| {
            tracing::error!(error = %e, "Failed to encode page content");
            AssemblyError::new(AssemblyErrorKind::ContentEncode(e.to_string()))
        })?;
        let content_id = self.doc.add_object(Stream::new(dictionary! {}, content));

        let mut resources = dictionary! {
            "Font" => dictionary! { FONT_RESOURCE => self.font_id },
        };
        if let Some((name, id)) = xobject {
            resources.set("XObject", dictionary! { name => id });
        }

        let (width, height) = self.layout.media_box_pt();
        let media_box: Vec<Object> = vec![0.into(), 0.into(), width.into(), height.into()];
        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => media_box,
            "Resources" => resources,
            "Contents" => content_id,
        });
        self.kids.push(page_id);
        Ok(())
    }

    fn finish(mut self) -> Document {
        let kids: Vec<Object> = self.kids.iter().map(|id| (*id).into()).collect();
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.kids.len() as i64,
        };
        self.doc.objects.insert(self.pages_id, Object::Dictionary(pages));

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        let info_id = self.doc.add_object(dictionary! {
            "Title" => Object::string_literal("Storybook"),
            "Producer" => Object::string_literal(concat!("storybook ", env!("CARGO_PKG_VERSION"))),
        });
        self.doc.trailer.set("Root", catalog_id);
        self.doc.trailer.set("Info", info_id);
        self.doc.compress();
        self.doc
    }
}

/// Operators for one caption line whose cell top sits at `y` millimetres.
fn text_line(layout: &PageLayout, y: f32, bytes: Vec<u8>, word_spacing: f32) -> Vec<Operation> {
    let x = (layout.margin() + layout.cell_padding()) * PT_PER_MM;
    let baseline = layout.to_pdf_y(layout.baseline(y));
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![
                Object::Name(FONT_RESOURCE.as_bytes().to_vec()),
                (*layout.font_size()).into(),
            ],
        ),
        Operation::new("Tw", vec![word_spacing.into()]),
        Operation::new("Td", vec![x.into(), baseline.into()]),
        Operation::new("Tj", vec![Object::String(bytes, StringFormat::Literal)]),
        Operation::new("ET", vec![]),
    ]
}

/// Composite RGBA pixels over a white background.
fn flatten_on_white(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for pixel in rgba.chunks_exact(4) {
        let alpha = pixel[3] as u16;
        for channel in &pixel[..3] {
            let blended = (*channel as u16 * alpha + 255 * (255 - alpha)) / 255;
            rgb.push(blended as u8);
        }
    }
    rgb
}
