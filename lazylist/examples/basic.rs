// Example: minimal usage — scrollbar drags against a 20k-row dataset.
use lazylist::{LazyList, LazyListOptions, LoadRange, rows};

fn main() {
    let mut list = LazyList::new(
        LazyListOptions::new(20_000)
            .with_initial_page_size_fraction(0.002)
            .with_on_materialize(Some(|range: LoadRange| {
                println!("materialize [{}, {})", range.start, range.end);
            })),
    )
    .expect("chunk_size >= 1");

    for fraction in [0.0, 0.01, 0.5, 0.25, 1.0] {
        let mv = list.move_viewport_to(fraction);
        println!(
            "moveto {fraction}: loaded={} thumb=({:.3}, {:.3}) loaded_space={:.4}",
            list.loaded_count(),
            mv.thumb.start,
            mv.thumb.end,
            mv.loaded_space_fraction
        );
    }

    let first = rows(lazylist::LoadRange::new(0, 3))
        .map(|row| row.label())
        .collect::<Vec<_>>();
    println!("first rows: {first:?}");
}
