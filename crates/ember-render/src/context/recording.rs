//! Journaling fake backend for unit tests.
//!
//! Records every call made through [`GraphicsContext`] so tests can assert
//! on resource lifetimes, draw submissions, and target/state transitions.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::{
    DrawState, FramebufferId, GraphicsContext, RenderTargetParts, TargetHandle, TextureId,
};
use crate::coords::{Rect, TexCoords};
use crate::error::{Error, ResourceKind, Result};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedDraw {
    pub texture: TextureId,
    pub source: TexCoords,
    pub dest: Rect,
}

#[derive(Debug, Clone)]
pub(crate) struct RecordedTexture {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

#[derive(Default)]
struct Journal {
    next_id: u32,
    textures: BTreeMap<TextureId, RecordedTexture>,
    destroyed_textures: Vec<TextureId>,
    framebuffers: Vec<FramebufferId>,
    draws: Vec<RecordedDraw>,
    target: TargetHandle,
    state: DrawState,
    fail_texture_creation: bool,
    fail_framebuffer_creation: bool,
}

pub(crate) struct RecordingContext {
    journal: RefCell<Journal>,
}

impl RecordingContext {
    pub(crate) fn new() -> Self {
        let journal = Journal {
            // 0 is TextureId::NONE; never mint it.
            next_id: 1,
            ..Journal::default()
        };
        Self {
            journal: RefCell::new(journal),
        }
    }

    pub(crate) fn fail_next_texture_creation(&self) {
        self.journal.borrow_mut().fail_texture_creation = true;
    }

    pub(crate) fn fail_next_framebuffer_creation(&self) {
        self.journal.borrow_mut().fail_framebuffer_creation = true;
    }

    // ── journal accessors ─────────────────────────────────────────────────

    pub(crate) fn destroy_count(&self, texture: TextureId) -> usize {
        self.journal
            .borrow()
            .destroyed_textures
            .iter()
            .filter(|id| **id == texture)
            .count()
    }

    pub(crate) fn live_texture_count(&self) -> usize {
        self.journal.borrow().textures.len()
    }

    pub(crate) fn live_framebuffer_count(&self) -> usize {
        self.journal.borrow().framebuffers.len()
    }

    pub(crate) fn uploaded_texture(&self, texture: TextureId) -> Option<RecordedTexture> {
        self.journal.borrow().textures.get(&texture).cloned()
    }

    pub(crate) fn draws(&self) -> Vec<RecordedDraw> {
        self.journal.borrow().draws.clone()
    }

    pub(crate) fn current_target(&self) -> TargetHandle {
        self.journal.borrow().target
    }

    pub(crate) fn state(&self) -> DrawState {
        self.journal.borrow().state
    }

    pub(crate) fn set_state(&self, state: DrawState) {
        self.journal.borrow_mut().state = state;
    }

    fn mint_id(journal: &mut Journal) -> u32 {
        let id = journal.next_id;
        journal.next_id += 1;
        id
    }
}

impl GraphicsContext for RecordingContext {
    fn create_texture(&self, pixels: &[u8], width: u32, height: u32) -> Result<TextureId> {
        let mut journal = self.journal.borrow_mut();
        if journal.fail_texture_creation {
            journal.fail_texture_creation = false;
            return Err(Error::ResourceCreation {
                kind: ResourceKind::Texture,
                reason: "injected failure".into(),
            });
        }
        assert_eq!(pixels.len(), (width * height * 4) as usize);

        let id = TextureId(Self::mint_id(&mut journal));
        journal.textures.insert(
            id,
            RecordedTexture {
                width,
                height,
                pixels: pixels.to_vec(),
            },
        );
        Ok(id)
    }

    fn destroy_texture(&self, texture: TextureId) {
        let mut journal = self.journal.borrow_mut();
        journal.textures.remove(&texture);
        journal.destroyed_textures.push(texture);
    }

    fn create_framebuffer(&self, width: u32, height: u32) -> Result<RenderTargetParts> {
        let mut journal = self.journal.borrow_mut();
        if journal.fail_framebuffer_creation {
            journal.fail_framebuffer_creation = false;
            return Err(Error::ResourceCreation {
                kind: ResourceKind::RenderTarget,
                reason: "framebuffer incomplete (injected)".into(),
            });
        }

        let texture = TextureId(Self::mint_id(&mut journal));
        journal.textures.insert(
            texture,
            RecordedTexture {
                width,
                height,
                pixels: vec![0; (width * height * 4) as usize],
            },
        );
        let framebuffer = FramebufferId(Self::mint_id(&mut journal));
        journal.framebuffers.push(framebuffer);
        Ok(RenderTargetParts {
            texture,
            framebuffer,
        })
    }

    fn destroy_framebuffer(&self, framebuffer: FramebufferId) {
        self.journal
            .borrow_mut()
            .framebuffers
            .retain(|fb| *fb != framebuffer);
    }

    fn draw_quad(&self, texture: TextureId, source: TexCoords, dest: Rect) {
        self.journal.borrow_mut().draws.push(RecordedDraw {
            texture,
            source,
            dest,
        });
    }

    fn current_render_target(&self) -> TargetHandle {
        self.journal.borrow().target
    }

    fn bind_render_target(&self, target: TargetHandle) -> TargetHandle {
        let mut journal = self.journal.borrow_mut();
        std::mem::replace(&mut journal.target, target)
    }

    fn draw_state(&self) -> DrawState {
        self.journal.borrow().state
    }

    fn set_draw_state(&self, state: DrawState) {
        self.journal.borrow_mut().state = state;
    }
}
