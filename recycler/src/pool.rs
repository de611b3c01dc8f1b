use alloc::boxed::Box;
use alloc::vec::Vec;

/// A source of reusable elements.
///
/// [`crate::IndexedPool`] calls `obtain` when it has nothing left to recycle for a new index and
/// hands back unconsumed elements through `free_all` on every flip. Implementations decide what
/// "free" means: keep the element for later, reset it, or simply drop it.
pub trait Pool<E> {
    fn obtain(&mut self) -> E;

    fn free(&mut self, element: E);

    /// Returns a batch of elements. The order in which they are freed is unspecified.
    fn free_all<I: IntoIterator<Item = E>>(&mut self, elements: I)
    where
        Self: Sized,
    {
        for element in elements {
            self.free(element);
        }
    }
}

impl<E, P: Pool<E>> Pool<E> for &mut P {
    fn obtain(&mut self) -> E {
        (**self).obtain()
    }

    fn free(&mut self, element: E) {
        (**self).free(element);
    }
}

type Factory<E> = Box<dyn FnMut() -> E>;
type Reset<E> = Box<dyn FnMut(&mut E)>;

/// A factory-backed pool with a LIFO free list.
///
/// `obtain` hands out the most recently freed element, or calls the factory when the free list
/// is empty. An optional reset hook runs on every freed element before it is stored, and an
/// optional cap bounds how many free elements are retained (the rest are dropped).
pub struct ObjectPool<E> {
    factory: Factory<E>,
    reset: Option<Reset<E>>,
    free: Vec<E>,
    max_free: Option<usize>,
    created: usize,
}

impl<E> ObjectPool<E> {
    pub fn new(factory: impl FnMut() -> E + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            reset: None,
            free: Vec::new(),
            max_free: None,
            created: 0,
        }
    }

    /// Creates a pool whose `reset` hook runs on each element as it is freed.
    pub fn with_reset(
        factory: impl FnMut() -> E + 'static,
        reset: impl FnMut(&mut E) + 'static,
    ) -> Self {
        Self {
            reset: Some(Box::new(reset)),
            ..Self::new(factory)
        }
    }

    /// Caps the number of retained free elements.
    pub fn with_max_free(mut self, max_free: usize) -> Self {
        self.max_free = Some(max_free);
        self.free.truncate(max_free);
        self
    }

    /// Number of elements produced by the factory so far.
    pub fn created(&self) -> usize {
        self.created
    }

    /// Number of elements currently waiting in the free list.
    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    /// Drops every pooled element.
    pub fn clear(&mut self) {
        self.free.clear();
    }
}

impl<E> Pool<E> for ObjectPool<E> {
    fn obtain(&mut self) -> E {
        if let Some(element) = self.free.pop() {
            return element;
        }
        self.created += 1;
        (self.factory)()
    }

    fn free(&mut self, mut element: E) {
        if let Some(reset) = &mut self.reset {
            reset(&mut element);
        }
        if self.max_free.is_some_and(|max| self.free.len() >= max) {
            return;
        }
        self.free.push(element);
    }

    fn free_all<I: IntoIterator<Item = E>>(&mut self, elements: I)
    where
        Self: Sized,
    {
        let elements = elements.into_iter();
        let (lower, _) = elements.size_hint();
        let room = self.max_free.map_or(lower, |max| {
            lower.min(max.saturating_sub(self.free.len()))
        });
        self.free.reserve(room);
        for element in elements {
            self.free(element);
        }
    }
}

impl<E> core::fmt::Debug for ObjectPool<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ObjectPool")
            .field("free_len", &self.free.len())
            .field("max_free", &self.max_free)
            .field("created", &self.created)
            .field("has_reset", &self.reset.is_some())
            .finish()
    }
}
