//! Texture atlas: many small images packed into one composite texture.
//!
//! Built once from an ordered sequence of source images; immutable after
//! that. Each source index maps to the sub-region it was packed into, so
//! callers draw by index instead of switching textures.

mod pack;

use std::rc::Rc;

use pack::ShelfPacker;

use crate::context::SharedContext;
use crate::coords::{Rect, TexCoords};
use crate::data::Image;
use crate::error::{Error, ResourceKind, Result};
use crate::texture::Texture;

const ATLAS_WIDTH: u32 = 2048;
const ATLAS_HEIGHT: u32 = 1024;

/// Composite texture plus the per-index coordinate map.
///
/// Invariant: the map holds exactly one region per source image, in input
/// order, and the regions are pairwise disjoint.
pub struct TextureAtlas {
    ctx: SharedContext,
    coords: Vec<TexCoords>,
    texture: Texture,
}

impl TextureAtlas {
    /// Packs `images` into a single composite texture and uploads it.
    ///
    /// Fails with a resource-creation error if the images do not fit the
    /// atlas extent or the GPU upload fails. Building an atlas is a load-time
    /// operation, not a per-frame one.
    pub fn new(ctx: &SharedContext, images: &[Image]) -> Result<Self> {
        let mut packer = ShelfPacker::new(ATLAS_WIDTH, ATLAS_HEIGHT);
        let mut composite = Image::new(ATLAS_WIDTH, ATLAS_HEIGHT);
        let mut regions = Vec::with_capacity(images.len());

        for (index, image) in images.iter().enumerate() {
            let (x, y) = packer.place(image.width(), image.height()).ok_or_else(|| {
                Error::ResourceCreation {
                    kind: ResourceKind::Atlas,
                    reason: format!(
                        "image {index} ({}x{}) does not fit into the \
                         {ATLAS_WIDTH}x{ATLAS_HEIGHT} atlas",
                        image.width(),
                        image.height()
                    ),
                }
            })?;
            composite.insert_image(x, y, image);
            regions.push(Rect::new(x as i32, y as i32, image.width(), image.height()));
        }

        let texture = Texture::new(ctx, &composite)?;
        let coords = regions
            .into_iter()
            .map(|region| TexCoords::from_rect(region, ATLAS_WIDTH, ATLAS_HEIGHT))
            .collect();

        log::debug!(
            "packed {} images into a {ATLAS_WIDTH}x{ATLAS_HEIGHT} atlas",
            images.len()
        );

        Ok(Self {
            ctx: Rc::clone(ctx),
            coords,
            texture,
        })
    }

    /// Number of packed source images.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The region source image `index` occupies, if the index is valid.
    #[inline]
    pub fn region(&self, index: usize) -> Option<TexCoords> {
        self.coords.get(index).copied()
    }

    /// Draws source image `index` scaled into `dest`.
    pub fn draw(&self, index: usize, dest: Rect) -> Result<()> {
        let source = self.region(index).ok_or(Error::IndexOutOfRange {
            index,
            count: self.coords.len(),
        })?;
        self.ctx.draw_quad(self.texture.id(), source, dest);
        Ok(())
    }
}
