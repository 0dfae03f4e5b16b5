//! Filtered, shuffled content deck with draw-without-replacement.
//!
//! A pool serves its items in passes. Within one pass no item repeats; when
//! the pass is used up the next draw starts a fresh pass. Under
//! [`DrawPolicy::Shuffled`] each pass is reshuffled; under
//! [`DrawPolicy::Indexed`] the order is fixed at creation and cycles.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::item::{ContentId, ContentItem};
use crate::core::{EngineError, SessionRng};

/// Order in which a pool serves its items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawPolicy {
    /// Reshuffle at the start of every pass.
    #[default]
    Shuffled,
    /// Shuffle once, then cycle through the same order.
    Indexed,
}

/// Working deck for one game session.
#[derive(Clone, Debug)]
pub struct ContentPool {
    items: Vec<ContentItem>,
    /// Serving order, as indices into `items`.
    order: Vec<usize>,
    /// Draws served in the current pass.
    served: usize,
    passes: u32,
    policy: DrawPolicy,
    rng: SessionRng,
    fell_back: bool,
}

impl ContentPool {
    /// Build the working deck from a catalog and a pack filter.
    ///
    /// An empty filter keeps the whole catalog. A filter matching nothing
    /// falls back to the whole catalog (see [`ContentPool::fell_back`]).
    /// Only an empty catalog is an error.
    pub fn initialize(
        catalog: &[ContentItem],
        filter: &[String],
        policy: DrawPolicy,
        rng: SessionRng,
    ) -> Result<Self, EngineError> {
        if catalog.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }

        let mut seen = FxHashSet::default();
        for item in catalog {
            if !seen.insert(item.id) {
                return Err(EngineError::DuplicateContentId(item.id));
            }
        }

        let mut fell_back = false;
        let mut items: Vec<ContentItem> = if filter.is_empty() {
            catalog.to_vec()
        } else {
            catalog.iter().filter(|i| i.has_any_tag(filter)).cloned().collect()
        };
        if items.is_empty() {
            tracing::warn!(?filter, catalog = catalog.len(), "pack filter matched nothing, using full catalog");
            items = catalog.to_vec();
            fell_back = true;
        }

        let mut pool = Self {
            order: (0..items.len()).collect(),
            items,
            served: 0,
            passes: 0,
            policy,
            rng,
            fell_back,
        };
        pool.rng.shuffle(&mut pool.order);
        Ok(pool)
    }

    /// Serve the next unseen item, starting a new pass if needed.
    pub fn draw(&mut self) -> &ContentItem {
        if self.served == self.order.len() {
            self.start_pass();
        }
        let index = self.order[self.served];
        self.served += 1;
        &self.items[index]
    }

    /// The item at a position in serving order, without consuming it.
    #[must_use]
    pub fn peek(&self, position: usize) -> &ContentItem {
        &self.items[self.order[position % self.order.len()]]
    }

    fn start_pass(&mut self) {
        let last = self.served.checked_sub(1).map(|i| self.order[i]);
        self.served = 0;
        self.passes += 1;

        if self.policy == DrawPolicy::Shuffled {
            self.rng.shuffle(&mut self.order);
            // Keep the pass boundary from showing the same item twice in a row
            if self.order.len() > 1 && last == Some(self.order[0]) {
                let swap = 1 + self.rng.index(self.order.len() - 1);
                self.order.swap(0, swap);
            }
        }
        tracing::debug!(pass = self.passes, items = self.order.len(), "content pool reshuffled");
    }

    /// Items in the filtered working set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items left before the current pass is used up.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.order.len() - self.served
    }

    /// Check if every item has been served in the current pass.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.served == self.order.len()
    }

    /// Ids served so far in the current pass.
    pub fn drawn(&self) -> impl Iterator<Item = ContentId> + '_ {
        self.order[..self.served].iter().map(|&i| self.items[i].id)
    }

    /// Completed reshuffles.
    #[must_use]
    pub fn passes(&self) -> u32 {
        self.passes
    }

    /// Check if the filter matched nothing and the full catalog is in use.
    #[must_use]
    pub fn fell_back(&self) -> bool {
        self.fell_back
    }

    #[must_use]
    pub fn policy(&self) -> DrawPolicy {
        self.policy
    }
}
