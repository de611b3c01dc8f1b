use core::mem;
use core::ops::Range;

use recycler::{Direction, IndexedPool, ObjectPool, Window};

use crate::{PassStats, Slot, dispose_and_clear, retire_and_flip};

type SlotPool<E> = ObjectPool<Slot<E>>;

/// A framework-neutral render-pass driver around [`recycler::IndexedPool`].
///
/// This type does not hold any UI objects of its own. Adapters drive it once per frame:
/// - `obtain(index, configure)` for every index in the visible range, as one ascending or
///   descending sweep (or use [`render`](Self::render) for a plain range)
/// - `finish(retire)` to hide leftovers and commit the pass
///
/// `configure` runs only when the element handed out is not already bound to the requested
/// index, so an unchanged or reversed window costs nothing.
#[derive(Debug)]
pub struct Recycler<E> {
    cache: IndexedPool<Slot<E>, SlotPool<E>>,
    pass: PassStats,
}

impl<E: 'static> Recycler<E> {
    pub fn new(factory: impl FnMut() -> E + 'static) -> Self {
        Self::with_pool(slot_pool(factory))
    }

    /// Like [`new`](Self::new), but retains at most `max_free` pooled elements between passes.
    pub fn with_max_free(factory: impl FnMut() -> E + 'static, max_free: usize) -> Self {
        Self::with_pool(slot_pool(factory).with_max_free(max_free))
    }
}

fn slot_pool<E: 'static>(mut factory: impl FnMut() -> E + 'static) -> SlotPool<E> {
    ObjectPool::with_reset(move || Slot::new(factory()), Slot::unbind)
}

impl<E> Recycler<E> {
    /// Wraps a custom slot pool. The pool's reset hook should unbind freed slots (see
    /// [`Slot`]); otherwise a pooled slot may skip `configure` for its old index.
    pub fn with_pool(pool: SlotPool<E>) -> Self {
        Self {
            cache: IndexedPool::new(pool),
            pass: PassStats::default(),
        }
    }

    /// Returns the element for `index`, calling `configure` first if it is bound elsewhere.
    pub fn obtain(&mut self, index: usize, configure: impl FnOnce(usize, &mut E)) -> &mut E {
        self.pass.obtained += 1;
        if !self.cache.is_empty() {
            self.pass.recycled += 1;
        } else if self.cache.pool().free_len() > 0 {
            self.pass.pooled += 1;
        } else {
            self.pass.created += 1;
        }

        let slot = self.cache.obtain(index);
        if !slot.is_bound_to(index) {
            configure(index, slot.value_mut());
            slot.bind(index);
            self.pass.reconfigured += 1;
        }
        slot.value_mut()
    }

    /// Retires every element not obtained in this pass, commits the pass, and returns its
    /// counters.
    pub fn finish(&mut self, mut retire: impl FnMut(usize, &mut E)) -> PassStats {
        self.pass.retired = retire_and_flip(&mut self.cache, |index, slot| {
            retire(index, slot.value_mut());
        });
        let stats = mem::take(&mut self.pass);
        rtrace!(?stats, "Recycler::finish");
        stats
    }

    /// Runs a complete pass over `range` in the given direction.
    pub fn render(
        &mut self,
        range: Range<usize>,
        direction: Direction,
        mut configure: impl FnMut(usize, &mut E),
        retire: impl FnMut(usize, &mut E),
    ) -> PassStats {
        match direction {
            Direction::Forward => {
                for index in range {
                    self.obtain(index, &mut configure);
                }
            }
            Direction::Backward => {
                for index in range.rev() {
                    self.obtain(index, &mut configure);
                }
            }
        }
        self.finish(retire)
    }

    /// Returns the committed element for `index`, if it is inside the committed window.
    pub fn get(&self, index: usize) -> Option<&E> {
        self.cache.try_get_cached(index).map(Slot::value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut E> {
        self.cache.try_get_cached_mut(index).map(Slot::value_mut)
    }

    /// Iterates committed `(index, element)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &E)> {
        self.cache.iter().map(|(index, slot)| (index, slot.value()))
    }

    pub fn window(&self) -> Window {
        self.cache.window()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Counters accumulated by the pass in progress.
    pub fn pending_stats(&self) -> PassStats {
        self.pass
    }

    /// Number of elements built by the factory over the recycler's lifetime.
    pub fn created(&self) -> usize {
        self.cache.pool().created()
    }

    /// Number of elements waiting in the pool.
    pub fn pooled(&self) -> usize {
        self.cache.pool().free_len()
    }

    /// Disposes and drops every committed element (not pooled ones), e.g. when the list is torn
    /// down or its data source is replaced.
    pub fn dispose_and_clear(&mut self, mut dispose: impl FnMut(usize, &mut E)) {
        dispose_and_clear(&mut self.cache, |index, slot| {
            dispose(index, slot.value_mut());
        });
    }

    /// Drops every pooled element.
    pub fn clear_pool(&mut self) {
        self.cache.pool_mut().clear();
    }

    pub fn indexed_pool(&self) -> &IndexedPool<Slot<E>, SlotPool<E>> {
        &self.cache
    }
}
