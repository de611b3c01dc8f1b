/// Counters for one render pass of a [`crate::Recycler`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassStats {
    /// Elements handed out.
    pub obtained: usize,
    /// Elements taken over from the previously committed window.
    pub recycled: usize,
    /// Elements taken from the pool's free list.
    pub pooled: usize,
    /// Elements built by the factory.
    pub created: usize,
    /// Elements whose `configure` callback ran (bound to a different index, or unbound).
    pub reconfigured: usize,
    /// Committed elements that were not obtained and went back to the pool.
    pub retired: usize,
}

impl PassStats {
    /// Elements handed out without any reconfiguration.
    pub fn untouched(&self) -> usize {
        self.obtained - self.reconfigured
    }

    /// `true` when the pass neither built nor reconfigured anything.
    pub fn is_free(&self) -> bool {
        self.created == 0 && self.reconfigured == 0
    }
}
