// Example: one renderer per visible row, recycled as the window scrolls.
use recycler::{IndexedPool, ObjectPool};

#[derive(Debug)]
struct Row {
    id: usize,
    text: String,
}

fn main() {
    let mut next_id = 0;
    let mut cache: IndexedPool<Row> = IndexedPool::new(ObjectPool::new(move || {
        next_id += 1;
        Row {
            id: next_id,
            text: String::new(),
        }
    }));

    for (frame, start) in [0usize, 0, 3, 1].into_iter().enumerate() {
        let mut configured = 0;
        for i in start..start + 5 {
            let row = cache.obtain(i);
            let text = format!("row {i}");
            if row.text != text {
                row.text = text;
                configured += 1;
            }
        }
        cache.for_each_unused(|i, row| println!("  hide index={i} renderer={}", row.id));
        cache.flip();

        println!(
            "frame={frame} window={:?} configured={configured} created={}",
            cache.window(),
            cache.pool().created()
        );
    }

    println!("renderer for row 2: {:?}", cache.get_cached(2));
}
