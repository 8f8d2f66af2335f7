// SPDX-License-Identifier: MPL-2.0
//! The view hierarchy a banner attaches itself to.

/// Root presentation surface of the host application.
///
/// A banner attaches to the root surface when it starts sliding in and
/// detaches once it has slid out. When the host has no root surface the
/// attachment is skipped without error.
pub trait Host {
    /// Returns whether a root surface exists to attach to.
    fn has_root_surface(&self) -> bool;

    /// Adds the banner identified by `tag` to the root surface.
    /// Attaching an already attached banner is a no-op.
    fn attach(&mut self, tag: u32);

    /// Removes the banner identified by `tag` from the root surface.
    fn detach(&mut self, tag: u32);
}

/// Host that records which banners are attached.
///
/// Backs the demo application's overlay layer.
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    attached: Vec<u32>,
    detached_root: bool,
}

impl Overlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An overlay with no root surface; nothing can be attached.
    #[must_use]
    pub fn without_root() -> Self {
        Self {
            attached: Vec::new(),
            detached_root: true,
        }
    }

    #[must_use]
    pub fn is_attached(&self, tag: u32) -> bool {
        self.attached.contains(&tag)
    }

    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }
}

impl Host for Overlay {
    fn has_root_surface(&self) -> bool {
        !self.detached_root
    }

    fn attach(&mut self, tag: u32) {
        if !self.is_attached(tag) {
            self.attached.push(tag);
        }
    }

    fn detach(&mut self, tag: u32) {
        self.attached.retain(|attached| *attached != tag);
    }
}
