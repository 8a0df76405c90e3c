//! Canvas surface holding draft and committed primitives.

use super::primitive::Primitive;
use crate::util::Point;
use std::fmt;
use thiserror::Error;

/// Opaque handle to a primitive registered on a [`CanvasSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimitiveHandle(u64);

impl fmt::Display for PrimitiveHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors from handle-based canvas mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanvasError {
    #[error("no primitive registered under handle {0}")]
    UnknownHandle(PrimitiveHandle),
}

#[derive(Debug)]
struct Entry {
    handle: PrimitiveHandle,
    primitive: Primitive,
    committed: bool,
}

/// Rendering target for all primitives.
///
/// Primitives are kept in draw order (first = bottom layer, last = top layer).
/// A primitive starts life as a draft when added and becomes permanent content
/// once [`commit`](Self::commit) is called for it. Only the session and the
/// operation it is currently driving ever mutate the surface.
#[derive(Debug)]
pub struct CanvasSurface {
    entries: Vec<Entry>,
    next_handle: u64,
    width: f64,
    height: f64,
    needs_redraw: bool,
}

impl CanvasSurface {
    /// Creates an empty surface of the given size in canvas-local units.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            entries: Vec::new(),
            next_handle: 0,
            width,
            height,
            needs_redraw: true,
        }
    }

    /// Updates the surface size after a host layout pass.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.needs_redraw = true;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Whether a canvas-local point lies inside the surface bounds.
    pub fn contains(&self, point: Point) -> bool {
        (0.0..self.width).contains(&point.x) && (0.0..self.height).contains(&point.y)
    }

    /// Registers a draft primitive so it renders immediately.
    pub fn add(&mut self, primitive: Primitive) -> PrimitiveHandle {
        let handle = PrimitiveHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(Entry {
            handle,
            primitive,
            committed: false,
        });
        self.needs_redraw = true;
        handle
    }

    /// Replaces the state of a registered primitive.
    pub fn update(
        &mut self,
        handle: PrimitiveHandle,
        primitive: Primitive,
    ) -> Result<(), CanvasError> {
        let entry = self.entry_mut(handle)?;
        entry.primitive = primitive;
        self.needs_redraw = true;
        Ok(())
    }

    /// Removes a primitive, draft or committed, returning it.
    pub fn remove(&mut self, handle: PrimitiveHandle) -> Result<Primitive, CanvasError> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.handle == handle)
            .ok_or(CanvasError::UnknownHandle(handle))?;
        self.needs_redraw = true;
        Ok(self.entries.remove(index).primitive)
    }

    /// Moves a draft into the permanent content.
    pub fn commit(&mut self, handle: PrimitiveHandle) -> Result<(), CanvasError> {
        self.entry_mut(handle)?.committed = true;
        Ok(())
    }

    /// Drops every primitive on the surface.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            log::debug!("Clearing {} primitive(s) from canvas", self.entries.len());
        }
        self.entries.clear();
        self.needs_redraw = true;
    }

    /// Returns the primitive registered under `handle`, if any.
    pub fn get(&self, handle: PrimitiveHandle) -> Option<&Primitive> {
        self.entries
            .iter()
            .find(|entry| entry.handle == handle)
            .map(|entry| &entry.primitive)
    }

    /// Whether `handle` refers to committed content.
    pub fn is_committed(&self, handle: PrimitiveHandle) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.handle == handle && entry.committed)
    }

    /// All primitives in draw order, drafts included.
    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.entries.iter().map(|entry| &entry.primitive)
    }

    /// Committed primitives in draw order.
    pub fn committed(&self) -> impl Iterator<Item = &Primitive> {
        self.entries
            .iter()
            .filter(|entry| entry.committed)
            .map(|entry| &entry.primitive)
    }

    /// In-progress primitives, rendered but not yet permanent.
    pub fn drafts(&self) -> impl Iterator<Item = &Primitive> {
        self.entries
            .iter()
            .filter(|entry| !entry.committed)
            .map(|entry| &entry.primitive)
    }

    pub fn committed_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.committed).count()
    }

    pub fn draft_count(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.committed).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns and resets the "content changed since last render" flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn entry_mut(&mut self, handle: PrimitiveHandle) -> Result<&mut Entry, CanvasError> {
        self.entries
            .iter_mut()
            .find(|entry| entry.handle == handle)
            .ok_or(CanvasError::UnknownHandle(handle))
    }
}

impl Default for CanvasSurface {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;

    fn fill(x: f64) -> Primitive {
        Primitive::RectFill {
            min: Point::new(0.0, 0.0),
            max: Point::new(x, x),
            color: RED,
        }
    }

    #[test]
    fn drafts_are_not_committed_until_asked() {
        let mut canvas = CanvasSurface::new(100.0, 100.0);
        let handle = canvas.add(fill(1.0));
        assert_eq!(canvas.len(), 1);
        assert_eq!(canvas.committed_count(), 0);
        assert_eq!(canvas.draft_count(), 1);
        assert_eq!(canvas.drafts().next(), Some(&fill(1.0)));

        canvas.commit(handle).unwrap();
        assert_eq!(canvas.drafts().count(), 0);
        assert!(canvas.is_committed(handle));
        assert_eq!(canvas.committed().count(), 1);
    }

    #[test]
    fn update_and_remove_reject_unknown_handles() {
        let mut canvas = CanvasSurface::new(100.0, 100.0);
        let handle = canvas.add(fill(1.0));
        canvas.update(handle, fill(5.0)).unwrap();
        assert_eq!(canvas.get(handle), Some(&fill(5.0)));

        assert_eq!(canvas.remove(handle).unwrap(), fill(5.0));
        assert_eq!(
            canvas.update(handle, fill(2.0)),
            Err(CanvasError::UnknownHandle(handle))
        );
        assert!(canvas.remove(handle).is_err());
    }

    #[test]
    fn handles_are_never_reused_after_clear() {
        let mut canvas = CanvasSurface::new(100.0, 100.0);
        let first = canvas.add(fill(1.0));
        canvas.clear();
        let second = canvas.add(fill(1.0));
        assert_ne!(first, second);
        assert!(canvas.get(first).is_none());
    }

    #[test]
    fn contains_uses_half_open_bounds() {
        let canvas = CanvasSurface::new(10.0, 20.0);
        assert!(canvas.contains(Point::new(0.0, 0.0)));
        assert!(canvas.contains(Point::new(9.5, 19.5)));
        assert!(!canvas.contains(Point::new(10.0, 5.0)));
        assert!(!canvas.contains(Point::new(-0.1, 5.0)));
    }

    #[test]
    fn resize_moves_the_bounds() {
        let mut canvas = CanvasSurface::new(10.0, 10.0);
        canvas.take_redraw();
        canvas.resize(40.0, 30.0);
        assert_eq!((canvas.width(), canvas.height()), (40.0, 30.0));
        assert!(canvas.contains(Point::new(35.0, 25.0)));
        assert!(canvas.take_redraw());
    }

    #[test]
    fn redraw_flag_resets_after_take() {
        let mut canvas = CanvasSurface::new(10.0, 10.0);
        assert!(canvas.take_redraw());
        assert!(!canvas.take_redraw());
        canvas.add(fill(1.0));
        assert!(canvas.take_redraw());
    }
}
