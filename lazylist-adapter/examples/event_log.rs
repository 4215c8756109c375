// Example: bind a batch of events and print everything that comes back.
//
// Handy for eyeballing the contract: which events load chunks, what the thumb does at the
// edges, and how raw wheel deltas map to row scrolls.
use lazylist::LazyListOptions;
use lazylist_adapter::{Controller, Event};

fn main() {
    let mut c = Controller::new(LazyListOptions::new(500).with_chunk_size(100))
        .expect("chunk_size >= 1");

    let events = [
        Event::Resize,
        Event::WheelScroll { raw_delta: -120 },
        Event::WheelScroll { raw_delta: 120 },
        Event::ViewportMoveTo(0.3),
        Event::ViewportMoveTo(1.2),
        Event::ViewportMoveTo(-0.1),
        Event::ViewportMoveTo(1.0),
    ];

    for event in events {
        println!("{event:?}");
        c.dispatch(event, &mut |effect| println!("  -> {effect:?}"));
    }
}
