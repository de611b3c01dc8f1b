// Example: drive a recycler from a simulated scroll, down and back up.
use recycler_adapter::{Direction, Recycler};

#[derive(Debug, Default)]
struct Cell {
    text: String,
    visible: bool,
}

fn main() {
    let mut list = Recycler::new(Cell::default);
    let rows = 6usize;

    let offsets = [0usize, 1, 2, 5, 4, 3, 3];
    let mut prev = 0usize;
    for (frame, &first) in offsets.iter().enumerate() {
        let direction = if first < prev {
            Direction::Backward
        } else {
            Direction::Forward
        };
        prev = first;

        let stats = list.render(
            first..first + rows,
            direction,
            |i, cell| {
                cell.text = format!("row {i}");
                cell.visible = true;
            },
            |_, cell| cell.visible = false,
        );
        println!("frame={frame} first={first} {direction:?} {stats:?}");
    }

    let shown: Vec<&str> = list.iter().map(|(_, c)| c.text.as_str()).collect();
    println!("window={:?} shown={shown:?}", list.window());

    list.dispose_and_clear(|i, cell| println!("dispose index={i} text={}", cell.text));
    println!("created={} pooled={}", list.created(), list.pooled());
}
