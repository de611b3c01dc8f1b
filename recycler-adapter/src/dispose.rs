use recycler::{IndexedPool, Pool};

/// Runs `dispose` on every committed element not obtained in the current cycle, then drops
/// them without returning them to the pool.
///
/// Called between cycles, this disposes the whole committed window.
pub fn dispose_and_clear<E, P: Pool<E>>(
    cache: &mut IndexedPool<E, P>,
    mut dispose: impl FnMut(usize, &mut E),
) {
    cache.for_each_unused(&mut dispose);
    cache.clear();
}

/// Runs `retire` on every committed element not obtained in the current cycle, then flips.
///
/// Returns the number of retired elements.
pub fn retire_and_flip<E, P: Pool<E>>(
    cache: &mut IndexedPool<E, P>,
    mut retire: impl FnMut(usize, &mut E),
) -> usize {
    let mut retired = 0usize;
    cache.for_each_unused(|index, element| {
        retired += 1;
        retire(index, element);
    });
    cache.flip();
    retired
}
