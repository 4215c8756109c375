// Example: a simulated lazy treeview host.
//
// A real host would bind these effects to a scrollbar and a tree/list widget. Here the
// "widget" is a Vec of labels and the effects are applied directly, which is exactly what a
// tk/ratatui/egui adapter does with real widgets.
use lazylist::{LazyListOptions, rows};
use lazylist_adapter::{Controller, Effect, Event};

fn main() {
    let total = 20_000;
    let mut c = Controller::new(
        LazyListOptions::new(total)
            .with_chunk_size(100)
            .with_initial_page_size_fraction(30.0 / total as f64),
    )
    .expect("chunk_size >= 1");

    let mut widget_rows: Vec<String> = Vec::new();
    let mut thumb = None;
    let mut view_position = 0.0;

    let events = [
        Event::Resize,
        Event::WheelScroll { raw_delta: -120 },
        Event::ViewportMoveTo(0.05),
        Event::ViewportMoveTo(0.02),
        Event::ViewportMoveTo(0.5),
    ];

    for event in events {
        c.dispatch(event, &mut |effect| match effect {
            Effect::MaterializeRows(range) => {
                widget_rows
                    .extend(rows(range).map(|row| format!("{} | {}", row.label(), row.value())));
            }
            Effect::SetScrollThumb(t) => thumb = Some(t),
            Effect::ScrollViewTo(fraction) => view_position = fraction,
            Effect::ScrollViewBy(rows) => {
                println!("  scroll view by {rows} rows");
            }
        });
        println!(
            "{event:?}: widget_rows={} loaded={} view_position={view_position:.3} thumb={thumb:?}",
            widget_rows.len(),
            c.list().loaded_count()
        );
    }

    println!("first row: {:?}", widget_rows.first());
    println!("last row:  {:?}", widget_rows.last());
}
