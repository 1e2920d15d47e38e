//! Scoped outside-interaction listeners.
//!
//! Every pointer-down the host sees goes through one [`PointerBus`]. Widgets hold a
//! [`PointerSubscription`] that records their rendered boundary (one or more
//! rectangles) and whether they
//! currently care (armed while their dropdown is open). [`PointerBus::dispatch`]
//! reports which armed listeners the pointer landed outside of, and the host
//! forwards an outside-interaction event to exactly those widgets.
//!
//! A subscription unregisters itself when dropped, so a torn-down widget never
//! leaves a listener behind, whatever path dropped it. The bus is an ordinary
//! value owned by the host; there is no process-global registry.
//!
//! # Example
//!
//! ```rust
//! use flagdial::infrastructure::pointer::{Point, PointerBus, Rect};
//!
//! let bus = PointerBus::new();
//! let subscription = bus.subscribe();
//! subscription.set_bounds([Rect::new(4, 1, 1, 14), Rect::new(5, 1, 2, 40)]);
//! subscription.set_armed(true);
//!
//! assert!(bus.dispatch(Point::new(5, 30)).is_empty());
//! assert_eq!(bus.dispatch(Point::new(4, 30)), vec![subscription.id()]);
//!
//! drop(subscription);
//! assert_eq!(bus.listener_count(), 0);
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

/// A terminal cell, 1-indexed like ANSI cursor positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    /// Row, starting at 1.
    pub row: usize,
    /// Column, starting at 1.
    pub col: usize,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Rectangle of terminal cells: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Top row, starting at 1.
    pub row: usize,
    /// Left column, starting at 1.
    pub col: usize,
    /// Number of rows.
    pub height: usize,
    /// Number of columns.
    pub width: usize,
}

impl Rect {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(row: usize, col: usize, height: usize, width: usize) -> Self {
        Self { row, col, height, width }
    }

    /// Returns `true` when `point` lies inside the rectangle.
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        point.row >= self.row
            && point.row < self.row + self.height
            && point.col >= self.col
            && point.col < self.col + self.width
    }
}

/// Identity of one subscription on a bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
struct Listener {
    bounds: Vec<Rect>,
    armed: bool,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<ListenerId, Listener>,
}

/// Pointer-down dispatcher owned by the host.
///
/// Cloning yields another handle to the same registry.
#[derive(Debug, Clone, Default)]
pub struct PointerBus {
    registry: Rc<RefCell<Registry>>,
}

impl PointerBus {
    /// Creates an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new, disarmed listener with no known boundary.
    #[must_use]
    pub fn subscribe(&self) -> PointerSubscription {
        let mut registry = self.registry.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.insert(id, Listener::default());
        tracing::debug!(listener = id.0, "pointer listener registered");

        PointerSubscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Returns the armed listeners whose boundary does not contain `point`.
    ///
    /// A listener with no boundary yet treats every point as outside.
    #[must_use]
    pub fn dispatch(&self, point: Point) -> Vec<ListenerId> {
        let outside: Vec<ListenerId> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .filter(|(_, listener)| listener.armed)
            .filter(|(_, listener)| !listener.bounds.iter().any(|b| b.contains(point)))
            .map(|(&id, _)| id)
            .collect();

        tracing::trace!(row = point.row, col = point.col, outside = outside.len(), "pointer dispatched");
        outside
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// A widget's registration on a [`PointerBus`]. Unregisters on drop.
#[derive(Debug)]
pub struct PointerSubscription {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl PointerSubscription {
    /// This subscription's identity, as reported by [`PointerBus::dispatch`].
    #[must_use]
    pub const fn id(&self) -> ListenerId {
        self.id
    }

    /// Records the widget's current rendered boundary as a union of rectangles.
    pub fn set_bounds(&self, bounds: impl IntoIterator<Item = Rect>) {
        let bounds: Vec<Rect> = bounds.into_iter().collect();
        self.with_listener(|listener| listener.bounds = bounds);
    }

    /// Arms or disarms the listener.
    pub fn set_armed(&self, armed: bool) {
        self.with_listener(|listener| listener.armed = armed);
    }

    fn with_listener(&self, f: impl FnOnce(&mut Listener)) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut registry = registry.borrow_mut();
        if let Some(listener) = registry.listeners.get_mut(&self.id) {
            f(listener);
        }
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.remove(&self.id);
            tracing::debug!(listener = self.id.0, "pointer listener released");
        }
    }
}
