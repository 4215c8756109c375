use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_fraction(&mut self) -> f64 {
        self.gen_range_u64(0, 1_000_001) as f64 / 1_000_000.0
    }
}

fn list(total_count: usize, chunk_size: usize) -> LazyList {
    LazyList::new(LazyListOptions::new(total_count).with_chunk_size(chunk_size)).unwrap()
}

fn recording_list(total_count: usize, chunk_size: usize) -> (LazyList, Arc<Mutex<Vec<LoadRange>>>) {
    let ranges: Arc<Mutex<Vec<LoadRange>>> = Arc::new(Mutex::new(Vec::new()));
    let list = LazyList::new(
        LazyListOptions::new(total_count)
            .with_chunk_size(chunk_size)
            .with_on_materialize(Some({
                let ranges = Arc::clone(&ranges);
                move |range: LoadRange| ranges.lock().unwrap().push(range)
            })),
    )
    .unwrap();
    (list, ranges)
}

#[test]
fn zero_chunk_size_is_rejected() {
    let err = LazyList::new(LazyListOptions::new(10).with_chunk_size(0)).unwrap_err();
    assert_eq!(err, ConfigError::InvalidConfiguration { chunk_size: 0 });
}

#[test]
fn construction_loads_one_chunk() {
    let l = list(250, 100);
    assert_eq!(l.loaded_count(), 100);
    assert!(!l.is_fully_loaded());

    let l = list(30, 100);
    assert_eq!(l.loaded_count(), 30);
    assert!(l.is_fully_loaded());
}

#[test]
fn single_chunk_dataset_is_immediately_terminal() {
    let (l, ranges) = recording_list(100, 100);
    assert!(l.is_fully_loaded());
    assert_eq!(l.loaded_fraction(), 1.0);
    assert_eq!(&*ranges.lock().unwrap(), &[LoadRange::new(0, 100)]);
}

#[test]
fn empty_dataset_is_terminal_and_inert() {
    let (mut l, ranges) = recording_list(0, 100);
    assert!(l.is_fully_loaded());
    assert_eq!(l.loaded_fraction(), 1.0);
    assert!(ranges.lock().unwrap().is_empty());

    let mv = l.move_viewport_to(0.7);
    assert_eq!(mv.thumb, ScrollThumb::zero());
    assert_eq!(mv.loaded_space_fraction, 0.0);

    let wheel = l.wheel_scroll(-3);
    assert_eq!(wheel.thumb, ScrollThumb::zero());
    assert_eq!(wheel.view_rows, 0);

    assert_eq!(l.resize(), ScrollThumb::zero());
    assert_eq!(l.loaded_count(), 0);
    assert!(ranges.lock().unwrap().is_empty());
}

#[test]
fn load_chunk_is_a_noop_once_terminal() {
    let mut l = list(150, 100);
    l.load_chunk();
    assert!(l.is_fully_loaded());

    let before = l.load_state();
    let range = l.load_chunk();
    assert!(range.is_empty());
    assert_eq!(range, LoadRange::empty(150));
    assert_eq!(l.load_state(), before);
}

#[test]
fn catch_up_loads_in_chunk_increments() {
    // total=250, chunk=100: construction loads [0,100). Moving to 0.5 runs ahead of the
    // loaded 0.4, so catch-up loads [100,200); 0.8 >= 0.5 stops it there.
    let (mut l, ranges) = recording_list(250, 100);
    let mv = l.move_viewport_to(0.5);
    assert_eq!(l.loaded_count(), 200);
    assert_eq!(
        &*ranges.lock().unwrap(),
        &[
            LoadRange::new(0, 100),
            LoadRange::new(100, 200),
        ]
    );

    // Requested total-space 0.5 lands at loaded-space (0.5 * 250) / 200.
    assert!((mv.loaded_space_fraction - 0.625).abs() < 1e-12);

    // Moving to the end finishes with the short final chunk.
    l.move_viewport_to(1.0);
    assert!(l.is_fully_loaded());
    assert_eq!(ranges.lock().unwrap().last(), Some(&LoadRange::new(200, 250)));
}

#[test]
fn move_to_end_terminates_within_chunk_bound() {
    for (total, chunk) in [(1usize, 1usize), (7, 3), (250, 100), (20_000, 100), (999, 1000)] {
        let (mut l, ranges) = recording_list(total, chunk);
        l.move_viewport_to(1.0);
        assert!(l.is_fully_loaded());

        let ranges = ranges.lock().unwrap();
        assert_eq!(ranges.len(), total.div_ceil(chunk));
        for range in ranges.iter() {
            assert!(range.len() <= chunk);
        }
    }
}

#[test]
fn backward_moves_never_load() {
    let mut l = list(1000, 100);
    l.move_viewport_to(0.5);
    let loaded = l.loaded_count();

    l.move_viewport_to(0.2);
    l.move_viewport_to(0.0);
    l.wheel_scroll(-50);
    assert_eq!(l.loaded_count(), loaded);
}

#[test]
fn loaded_space_translation_roundtrips_when_fully_loaded() {
    let mut l = list(1000, 100);
    l.move_viewport_to(1.0);
    assert!(l.is_fully_loaded());

    let mut rng = Lcg::new(42);
    for _ in 0..100 {
        let f = rng.gen_fraction();
        let mv = l.move_viewport_to(f);
        assert!((mv.loaded_space_fraction - f).abs() < 1e-12);
    }
}

#[test]
fn out_of_range_fractions_are_clamped() {
    let mut l = list(200, 100);
    let mv = l.move_viewport_to(1.5);
    assert!(l.is_fully_loaded());
    assert_eq!(mv.thumb.start, 1.0);

    let mv = l.move_viewport_to(-0.5);
    assert_eq!(mv.thumb.start, 0.0);
    assert_eq!(mv.loaded_space_fraction, 0.0);

    // A broken host handing us NaN must not poison the state.
    let mv = l.move_viewport_to(f64::NAN);
    assert_eq!(mv.thumb.start, 0.0);
    assert_eq!(l.viewport_state().scroll_fraction, 0.0);
}

#[test]
fn thumb_is_clamped_to_unit_range() {
    let mut l = LazyList::new(
        LazyListOptions::new(200)
            .with_chunk_size(100)
            .with_initial_page_size_fraction(0.3),
    )
    .unwrap();

    let mv = l.move_viewport_to(0.9);
    assert_eq!(mv.thumb.start, 0.9);
    assert_eq!(mv.thumb.end, 1.0);

    let mv = l.move_viewport_to(0.2);
    assert_eq!(mv.thumb.start, 0.2);
    assert!((mv.thumb.end - 0.5).abs() < 1e-12);
    assert!((mv.thumb.size() - 0.3).abs() < 1e-12);
}

#[test]
fn wheel_scroll_forward_catches_up() {
    let mut l = list(1000, 100);
    assert_eq!(l.loaded_count(), 100);

    // 150 rows forward from the top: target 0.15 > loaded 0.1.
    let wheel = l.wheel_scroll(150);
    assert_eq!(wheel.view_rows, 150);
    assert_eq!(l.loaded_count(), 200);
    assert!((wheel.thumb.start - 0.15).abs() < 1e-12);

    // Backward wheel passes the delta through without loading.
    let wheel = l.wheel_scroll(-100);
    assert_eq!(wheel.view_rows, -100);
    assert_eq!(l.loaded_count(), 200);
    assert!((wheel.thumb.start - 0.05).abs() < 1e-12);
}

#[test]
fn wheel_overshoot_is_clamped() {
    let mut l = list(100, 100);
    let wheel = l.wheel_scroll(-500);
    assert_eq!(wheel.thumb.start, 0.0);

    let wheel = l.wheel_scroll(500);
    assert_eq!(wheel.thumb.start, 1.0);
}

#[test]
fn resize_rechecks_load_sufficiency_without_moving() {
    let mut l = list(400, 100);
    let before = l.viewport_state();
    let thumb = l.resize();
    assert_eq!(l.viewport_state(), before);
    assert_eq!(thumb, l.thumb());

    // After a restore placed the viewport ahead of the loaded share, resize catches up.
    l.restore_frame_state(FrameState {
        load: l.load_state(),
        viewport: ViewportState {
            scroll_fraction: 0.6,
            page_size_fraction: 0.0,
        },
    });
    assert_eq!(l.loaded_count(), 100);
    l.resize();
    assert_eq!(l.loaded_count(), 300);
}

#[test]
fn loaded_count_is_monotone_across_random_operations() {
    let mut rng = Lcg::new(7);
    for _ in 0..20 {
        let total = rng.gen_range_usize(0, 5000);
        let chunk = rng.gen_range_usize(1, 500);
        let mut l = list(total, chunk);
        let mut max_loaded = l.loaded_count();

        for _ in 0..200 {
            match rng.gen_range_usize(0, 4) {
                0 => {
                    l.move_viewport_to(rng.gen_fraction());
                }
                1 => {
                    let delta = rng.gen_range_u64(0, 400) as i64 - 200;
                    l.wheel_scroll(delta);
                }
                2 => {
                    l.resize();
                }
                _ => {
                    l.load_chunk();
                }
            }
            assert!(l.loaded_count() >= max_loaded);
            assert!(l.loaded_count() <= total);
            max_loaded = l.loaded_count();
        }
    }
}

#[test]
fn on_materialize_covers_every_row_exactly_once() {
    let mut rng = Lcg::new(99);
    let (mut l, ranges) = recording_list(2377, 97);

    for _ in 0..500 {
        l.move_viewport_to(rng.gen_fraction());
    }
    l.move_viewport_to(1.0);

    let ranges = ranges.lock().unwrap();
    let mut next = 0usize;
    for range in ranges.iter() {
        assert_eq!(range.start, next);
        assert!(range.len() <= 97);
        next = range.end;
    }
    assert_eq!(next, 2377);
}

#[test]
fn on_change_fires_at_most_once_per_operation() {
    let calls: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let mut l = LazyList::new(
        LazyListOptions::new(1000)
            .with_chunk_size(100)
            .with_on_change(Some({
                let calls = Arc::clone(&calls);
                move |_: &LazyList| {
                    calls.fetch_add(1, Ordering::Relaxed);
                }
            })),
    )
    .unwrap();
    assert_eq!(calls.load(Ordering::Relaxed), 1); // initial chunk

    // 0.0 -> 0.75 materializes several chunks but notifies once.
    l.move_viewport_to(0.75);
    assert_eq!(calls.load(Ordering::Relaxed), 2);

    // A move that neither loads nor changes the fraction stays silent.
    l.move_viewport_to(0.75);
    assert_eq!(calls.load(Ordering::Relaxed), 2);
}

#[test]
fn batch_update_coalesces_notifications() {
    let calls: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let mut l = LazyList::new(LazyListOptions::new(1000).with_on_change(Some({
        let calls = Arc::clone(&calls);
        move |_: &LazyList| {
            calls.fetch_add(1, Ordering::Relaxed);
        }
    })))
    .unwrap();
    calls.store(0, Ordering::Relaxed);

    l.batch_update(|l| {
        l.set_page_size_fraction(0.1);
        l.move_viewport_to(0.4);
        l.load_chunk();
    });
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

#[test]
fn frame_state_can_roundtrip() {
    let mut l1 = list(500, 100);
    l1.set_page_size_fraction(0.05);
    l1.move_viewport_to(0.5);
    let state = l1.frame_state();

    let (mut l2, ranges) = recording_list(500, 100);
    l2.restore_frame_state(state);
    assert_eq!(l2.loaded_count(), l1.loaded_count());
    assert_eq!(l2.viewport_state(), l1.viewport_state());

    // The replayed restore still honors the materialization contract.
    let ranges = ranges.lock().unwrap();
    let mut next = 0usize;
    for range in ranges.iter() {
        assert_eq!(range.start, next);
        next = range.end;
    }
    assert_eq!(next, l1.loaded_count());
}

#[test]
fn restore_never_shrinks_loaded_count() {
    let mut l = list(500, 100);
    l.move_viewport_to(0.8);
    let loaded = l.loaded_count();

    l.restore_frame_state(FrameState {
        load: LoadState {
            total_count: 500,
            chunk_size: 100,
            loaded_count: 0,
        },
        viewport: ViewportState::default(),
    });
    assert_eq!(l.loaded_count(), loaded);
}

#[test]
fn placeholder_rows_match_the_classic_labels() {
    let collected: Vec<Row> = rows(LoadRange::new(3, 6)).collect();
    assert_eq!(collected.len(), 3);
    assert_eq!(collected[0].label(), "Item 3");
    assert_eq!(collected[0].value(), "Value 3");
    assert_eq!(collected[2].index, 5);

    assert_eq!(rows(LoadRange::empty(7)).count(), 0);
}

#[test]
fn row_emitter_enforces_the_contract() {
    let mut out: Vec<usize> = Vec::new();
    {
        let mut push = |row: Row| out.push(row.index);
        let mut emitter = RowEmitter::new(10, &mut push);

        emitter.emit_range(LoadRange::new(0, 4));
        assert_eq!(emitter.next_index(), 4);

        // Empty ranges (terminal load_chunk results) are no-ops.
        emitter.emit_range(LoadRange::empty(4));
        assert_eq!(emitter.next_index(), 4);

        emitter.emit_range(LoadRange::new(4, 10));
        assert_eq!(emitter.next_index(), 10);
    }
    assert_eq!(out, (0..10).collect::<Vec<_>>());
}

#[test]
fn load_state_reports_terminality() {
    let l = list(100, 100);
    let state = l.load_state();
    assert!(state.is_fully_loaded());
    assert_eq!(
        state,
        LoadState {
            total_count: 100,
            chunk_size: 100,
            loaded_count: 100,
        }
    );
}
