// Example: the eager catch-up loop, step by step.
//
// A jump to the middle of a cold dataset has to materialize every chunk up to the target
// before the position can be honestly displayed; jumping backward afterwards loads nothing.
use lazylist::{LazyList, LazyListOptions, LoadRange};

fn main() {
    let mut list = LazyList::new(
        LazyListOptions::new(250)
            .with_chunk_size(100)
            .with_on_materialize(Some(|range: LoadRange| {
                println!("  chunk [{}, {})", range.start, range.end);
            })),
    )
    .expect("chunk_size >= 1");

    println!("after construction: loaded={}", list.loaded_count());

    println!("moveto 0.5:");
    let mv = list.move_viewport_to(0.5);
    println!(
        "  loaded={} loaded_fraction={:.2} loaded_space={:.3}",
        list.loaded_count(),
        list.loaded_fraction(),
        mv.loaded_space_fraction
    );

    println!("moveto 1.0:");
    list.move_viewport_to(1.0);
    println!(
        "  loaded={} fully_loaded={}",
        list.loaded_count(),
        list.is_fully_loaded()
    );

    println!("moveto 0.1:");
    list.move_viewport_to(0.1);
    println!("  loaded={} (backward moves never re-fetch)", list.loaded_count());
}
