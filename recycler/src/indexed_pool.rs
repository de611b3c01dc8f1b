use core::mem;

use crate::pool::{ObjectPool, Pool};
use crate::ring_buffer::RingBuffer;
use crate::{Direction, PoolState, Window};

/// Recycles elements by logical index across successive render passes.
///
/// A pass (a *cycle*) is a monotonic sweep of [`obtain`](Self::obtain) calls, optionally
/// followed by [`for_each_unused`](Self::for_each_unused) to retire leftovers, and always ended
/// by [`flip`](Self::flip):
///
/// ```
/// use recycler::{IndexedPool, ObjectPool};
///
/// let mut cache: IndexedPool<String> = IndexedPool::new(ObjectPool::new(String::new));
/// for i in 5..9 {
///     let item = cache.obtain(i);
///     item.clear();
///     item.push_str(&i.to_string());
/// }
/// cache.flip();
/// assert_eq!(cache.get_cached(7), "7");
/// ```
///
/// Within a cycle, an index at or after the cycle's first obtained index consumes the committed
/// window from the front; an index before it consumes from the back. On the first obtain of a
/// cycle the committed window is rotated so that the element previously bound to that index (or
/// the first one after it) is consumed first. Together these make an unchanged window, a
/// shifted window, and a reversed sweep reuse every element that is still in range, falling
/// back to the [`Pool`] only when the committed window runs dry.
///
/// The caller owns reconfiguring each returned element for its index. This type never touches
/// element contents.
#[derive(Debug)]
pub struct IndexedPool<E, P = ObjectPool<E>> {
    pool: P,
    current: RingBuffer<E>,
    current_indices: RingBuffer<usize>,
    obtained: RingBuffer<E>,
    obtained_indices: RingBuffer<usize>,
    last_direction: Option<Direction>,
}

impl<E, P: Pool<E>> IndexedPool<E, P> {
    pub fn new(pool: P) -> Self {
        Self {
            pool,
            current: RingBuffer::new(),
            current_indices: RingBuffer::new(),
            obtained: RingBuffer::new(),
            obtained_indices: RingBuffer::new(),
            last_direction: None,
        }
    }

    /// Like [`new`](Self::new), but pre-sizes the internal buffers for windows of up to
    /// `capacity` elements.
    pub fn with_capacity(pool: P, capacity: usize) -> Self {
        Self {
            pool,
            current: RingBuffer::with_capacity(capacity),
            current_indices: RingBuffer::with_capacity(capacity),
            obtained: RingBuffer::with_capacity(capacity),
            obtained_indices: RingBuffer::with_capacity(capacity),
            last_direction: None,
        }
    }

    /// Returns the element for `index` in the cycle under construction.
    ///
    /// Indexes must be requested as one ascending or descending sweep (a descending run may
    /// follow an ascending one as long as it stays below the first obtained index). Requesting
    /// the same index twice in a cycle, or going back inside a forward run, is a contract
    /// violation: it is logged and the call still succeeds, but elements may come back bound to
    /// other indexes. No element is lost or duplicated either way.
    pub fn obtain(&mut self, index: usize) -> &mut E {
        if self.obtained.is_empty() {
            self.realign(index);
        }

        let direction = match self.obtained_indices.first() {
            Some(&first) if index < first => Direction::Backward,
            _ => Direction::Forward,
        };
        self.check_sweep_order(index, direction);
        self.last_direction = Some(direction);

        let recycled = match direction {
            Direction::Forward => self.current.pop_front(),
            Direction::Backward => self.current.pop_back(),
        };
        let element = match recycled {
            Some(element) => {
                match direction {
                    Direction::Forward => self.current_indices.pop_front(),
                    Direction::Backward => self.current_indices.pop_back(),
                };
                element
            }
            None => self.pool.obtain(),
        };

        match direction {
            Direction::Forward => {
                self.obtained.push_back(element);
                self.obtained_indices.push_back(index);
                let last = self.obtained.len() - 1;
                &mut self.obtained[last]
            }
            Direction::Backward => {
                self.obtained.push_front(element);
                self.obtained_indices.push_front(index);
                &mut self.obtained[0]
            }
        }
    }

    /// Returns the committed element for `index`.
    ///
    /// Panics if `index` is outside the committed window. Meant for use between cycles; the
    /// committed window is reordered and consumed while a cycle is in progress.
    pub fn get_cached(&self, index: usize) -> &E {
        match self.cached_position(index) {
            Some(pos) => &self.current[pos],
            None => panic!(
                "IndexedPool::get_cached: index {index} is outside the committed window {:?}",
                self.window()
            ),
        }
    }

    /// Mutable counterpart of [`get_cached`](Self::get_cached). Panics under the same conditions.
    pub fn get_cached_mut(&mut self, index: usize) -> &mut E {
        match self.cached_position(index) {
            Some(pos) => &mut self.current[pos],
            None => panic!(
                "IndexedPool::get_cached_mut: index {index} is outside the committed window {:?}",
                self.window()
            ),
        }
    }

    pub fn try_get_cached(&self, index: usize) -> Option<&E> {
        let pos = self.cached_position(index)?;
        self.current.get(pos)
    }

    pub fn try_get_cached_mut(&mut self, index: usize) -> Option<&mut E> {
        let pos = self.cached_position(index)?;
        self.current.get_mut(pos)
    }

    /// Visits every committed element not re-obtained in this cycle, in ascending index order.
    ///
    /// Typically used to hide or detach stale elements right before [`flip`](Self::flip).
    pub fn for_each_unused(&mut self, mut f: impl FnMut(usize, &mut E)) {
        let len = self.current.len();
        // The first-obtain rotation leaves at most one descent in the remaining indices.
        let wrap = (1..len)
            .find(|&i| self.current_indices[i] < self.current_indices[i - 1])
            .unwrap_or(0);
        for pos in (wrap..len).chain(0..wrap) {
            f(self.current_indices[pos], &mut self.current[pos]);
        }
    }

    /// Drops the committed elements without returning them to the pool.
    ///
    /// Use this after the elements have been disposed of. Elements obtained in the current
    /// cycle are not affected.
    pub fn clear(&mut self) {
        self.current.clear();
        self.current_indices.clear();
    }

    /// Ends the cycle: unconsumed committed elements go back to the pool and the obtained
    /// elements become the committed window.
    pub fn flip(&mut self) {
        rtrace!(
            committed = self.obtained.len(),
            freed = self.current.len(),
            "IndexedPool::flip"
        );
        self.current_indices.clear();
        self.pool.free_all(self.current.drain());

        mem::swap(&mut self.current, &mut self.obtained);
        mem::swap(&mut self.current_indices, &mut self.obtained_indices);
        debug_assert!(self.obtained.is_empty() && self.obtained_indices.is_empty());
    }

    /// Number of committed elements still available for reuse.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Number of elements obtained so far in the current cycle.
    pub fn obtained_len(&self) -> usize {
        self.obtained.len()
    }

    /// First committed index, or 0 when nothing is committed.
    pub fn offset(&self) -> usize {
        self.current_indices.first().copied().unwrap_or(0)
    }

    pub fn window(&self) -> Window {
        Window {
            offset: self.offset(),
            len: self.current.len(),
        }
    }

    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    pub fn state(&self) -> PoolState {
        PoolState {
            window: self.window(),
            obtained: self.obtained.len(),
            last_direction: self.last_direction,
        }
    }

    /// Iterates committed `(index, element)` pairs in storage order, which is ascending by index
    /// between cycles.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &E)> {
        self.current_indices.iter().copied().zip(self.current.iter())
    }

    pub fn pool(&self) -> &P {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut P {
        &mut self.pool
    }

    /// Returns every held element (committed and in-flight) to the pool and yields the pool.
    pub fn into_pool(mut self) -> P {
        self.pool.free_all(self.current.drain());
        self.pool.free_all(self.obtained.drain());
        self.pool
    }

    fn realign(&mut self, index: usize) {
        let k = self.current_indices.partition_point(|&i| i < index);
        if k == 0 || k == self.current_indices.len() {
            return;
        }
        rtrace!(index, rotate = k, "IndexedPool realign");
        self.current.rotate(k as isize);
        self.current_indices.rotate(k as isize);
    }

    fn check_sweep_order(&self, index: usize, direction: Direction) {
        if direction == Direction::Backward {
            return;
        }
        let Some(&last) = self.obtained_indices.last() else {
            return;
        };
        if index <= last {
            rwarn!(
                last,
                next = index,
                "IndexedPool: forward sweep indexes must be strictly ascending"
            );
        }
    }

    fn cached_position(&self, index: usize) -> Option<usize> {
        let pos = index.checked_sub(self.offset())?;
        match self.current_indices.get(pos) {
            Some(&at) if at == index => Some(pos),
            _ => None,
        }
    }
}
