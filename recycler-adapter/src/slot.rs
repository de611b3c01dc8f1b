use core::fmt;

/// An element plus the index it is currently configured for.
///
/// [`crate::Recycler`] uses the binding to skip reconfiguring an element that is handed back
/// for the index it already shows. Slots returned to the pool are unbound.
#[derive(Clone, PartialEq, Eq)]
pub struct Slot<E> {
    bound: Option<usize>,
    value: E,
}

impl<E> Slot<E> {
    pub fn new(value: E) -> Self {
        Self { bound: None, value }
    }

    pub fn bound(&self) -> Option<usize> {
        self.bound
    }

    pub fn is_bound_to(&self, index: usize) -> bool {
        self.bound == Some(index)
    }

    pub fn value(&self) -> &E {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut E {
        &mut self.value
    }

    pub fn into_inner(self) -> E {
        self.value
    }

    pub(crate) fn bind(&mut self, index: usize) {
        self.bound = Some(index);
    }

    pub(crate) fn unbind(&mut self) {
        self.bound = None;
    }
}

impl<E: fmt::Debug> fmt::Debug for Slot<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("bound", &self.bound)
            .field("value", &self.value)
            .finish()
    }
}
