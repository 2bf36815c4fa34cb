//! Dock geometry cache
//!
//! Item centers are viewport-relative, so the cache must be recomputed on
//! scroll as well as resize. Recomputing reads the container's bounding
//! box once and each item's bounding box once.

use crate::host::DockSurface;
use folio_core::Rect;
use smallvec::SmallVec;

/// Cached horizontal centers of the dock items
#[derive(Clone, Debug, Default)]
pub struct GeometryCache {
    container: Option<Rect>,
    centers: SmallVec<[f32; 8]>,
    computed: bool,
    generation: u64,
}

impl GeometryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-read the container and item geometry
    ///
    /// Without a container the cache is left empty. An item whose bounding
    /// box cannot be read keeps a center of `0.0` so that the cache always
    /// holds one entry per item.
    pub fn recompute<S: DockSurface + ?Sized>(&mut self, surface: &S) {
        self.centers.clear();
        self.container = surface.container_rect();
        self.computed = true;
        self.generation += 1;

        let Some(container) = self.container else {
            tracing::trace!("GeometryCache: no dock container");
            return;
        };

        let count = surface.item_count();
        self.centers.extend((0..count).map(|index| {
            surface
                .item_rect_in(container, index)
                .map_or(0.0, |rect| rect.center_x())
        }));
        tracing::trace!(
            "GeometryCache: recomputed {} items (generation {})",
            count,
            self.generation
        );
    }

    /// Drop the cached geometry; the next use recomputes it
    pub fn invalidate(&mut self) {
        self.container = None;
        self.centers.clear();
        self.computed = false;
    }

    /// Whether the cache reflects a recompute since the last invalidation
    pub fn is_computed(&self) -> bool {
        self.computed
    }

    /// Number of recomputes so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn container(&self) -> Option<Rect> {
        self.container
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    pub fn centers(&self) -> &[f32] {
        &self.centers
    }

    pub fn center(&self, index: usize) -> Option<f32> {
        self.centers.get(index).copied()
    }

    /// Y coordinate of the dock's effective center line
    pub fn center_line(&self, ratio: f32) -> Option<f32> {
        self.container.map(|rect| rect.line_at(ratio))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessDock;
    use std::cell::Cell;

    /// Items laid out by offset inside a container that counts its reads
    struct OffsetSurface {
        container: Rect,
        offsets: Vec<f32>,
        container_reads: Cell<usize>,
    }

    impl DockSurface for OffsetSurface {
        fn container_rect(&self) -> Option<Rect> {
            self.container_reads.set(self.container_reads.get() + 1);
            Some(self.container)
        }

        fn item_count(&self) -> usize {
            self.offsets.len()
        }

        fn item_rect(&self, index: usize) -> Option<Rect> {
            self.item_rect_in(self.container_rect()?, index)
        }

        fn item_rect_in(&self, container: Rect, index: usize) -> Option<Rect> {
            let offset = *self.offsets.get(index)?;
            Some(Rect::new(container.left() + offset, container.top(), 48.0, 48.0))
        }

        fn item_label(&self, _index: usize) -> Option<String> {
            None
        }

        fn focus_within(&self) -> bool {
            false
        }

        fn prefers_reduced_motion(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_recompute_reads_container_once() {
        let surface = OffsetSurface {
            container: Rect::new(100.0, 700.0, 400.0, 100.0),
            offsets: vec![16.0, 96.0, 176.0, 256.0, 336.0],
            container_reads: Cell::new(0),
        };
        let mut cache = GeometryCache::new();
        cache.recompute(&surface);

        assert_eq!(surface.container_reads.get(), 1);
        assert_eq!(cache.centers(), &[140.0, 220.0, 300.0, 380.0, 460.0]);
    }

    #[test]
    fn test_recompute_reads_item_centers() {
        let host = HeadlessDock::with_centers(&[40.0, 120.0, 200.0]);
        let mut cache = GeometryCache::new();
        cache.recompute(&host);

        assert!(cache.is_computed());
        assert_eq!(cache.centers(), &[40.0, 120.0, 200.0]);
        assert_eq!(cache.len(), host.item_count());
    }

    #[test]
    fn test_missing_container_yields_empty_cache() {
        let host = HeadlessDock::without_container();
        let mut cache = GeometryCache::new();
        cache.recompute(&host);

        assert!(cache.is_computed());
        assert!(cache.is_empty());
        assert_eq!(cache.container(), None);
        assert_eq!(cache.center_line(0.52), None);
    }

    #[test]
    fn test_scroll_moves_centers() {
        let mut host = HeadlessDock::with_centers(&[40.0, 120.0]);
        let mut cache = GeometryCache::new();
        cache.recompute(&host);

        host.move_layout(15.0, -30.0);
        cache.recompute(&host);

        assert_eq!(cache.centers(), &[55.0, 135.0]);
        assert_eq!(cache.generation(), 2);
    }

    #[test]
    fn test_invalidate_clears_entries() {
        let host = HeadlessDock::with_centers(&[40.0]);
        let mut cache = GeometryCache::new();
        cache.recompute(&host);
        cache.invalidate();

        assert!(!cache.is_computed());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_center_line_uses_ratio() {
        let host = HeadlessDock::with_centers(&[40.0]);
        let mut cache = GeometryCache::new();
        cache.recompute(&host);

        let container = host.container_rect().unwrap();
        let line = cache.center_line(0.52).unwrap();
        assert!((line - (container.top() + container.height() * 0.52)).abs() < 1e-4);
    }
}
