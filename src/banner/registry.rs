// SPDX-License-Identifier: MPL-2.0
//! Owner of the banners of an application.
//!
//! Creating a banner hands back a [`BannerHandle`]; later calls go through
//! the handle instead of searching the view hierarchy. Tags stay available
//! as a lookup key, and at most one banner exists per tag.

use super::state::Banner;
use std::collections::HashMap;

/// Handle to a banner owned by a [`Registry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BannerHandle(u64);

/// Banners keyed by handle.
#[derive(Debug, Default)]
pub struct Registry {
    banners: HashMap<BannerHandle, Banner>,
    next: u64,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handle of the banner with `tag`, creating it with `make`
    /// when there is none yet.
    pub fn create_or_find(&mut self, tag: u32, make: impl FnOnce() -> Banner) -> BannerHandle {
        if let Some(handle) = self.find_by_tag(tag) {
            return handle;
        }
        let handle = BannerHandle(self.next);
        self.next += 1;
        let banner = make().with_tag(tag);
        log::debug!("registered banner {tag} as {handle:?}");
        self.banners.insert(handle, banner);
        handle
    }

    /// Finds the banner registered under `tag`.
    #[must_use]
    pub fn find_by_tag(&self, tag: u32) -> Option<BannerHandle> {
        self.banners
            .iter()
            .find(|(_, banner)| banner.tag() == tag)
            .map(|(handle, _)| *handle)
    }

    #[must_use]
    pub fn get(&self, handle: BannerHandle) -> Option<&Banner> {
        self.banners.get(&handle)
    }

    pub fn get_mut(&mut self, handle: BannerHandle) -> Option<&mut Banner> {
        self.banners.get_mut(&handle)
    }

    /// Removes a banner. Returns it if the handle was valid.
    pub fn remove(&mut self, handle: BannerHandle) -> Option<Banner> {
        self.banners.remove(&handle)
    }

    /// Iterates over all banners.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BannerHandle, &mut Banner)> {
        self.banners.iter_mut().map(|(handle, banner)| (*handle, banner))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.banners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }
}
