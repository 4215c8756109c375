use alloc::vec::Vec;

use lazylist::{ConfigError, LazyList, LazyListOptions, LoadRange};

use crate::{Effect, Event, WheelConfig};

/// A framework-neutral controller that wraps a [`lazylist::LazyList`] and speaks the host
/// event/effect contract.
///
/// This type does not hold any UI objects. Adapters drive it by calling
/// [`Self::dispatch`] for every inbound event; each call runs to completion and streams the
/// resulting effects, in order, into the provided sink:
///
/// - `MaterializeRows` first, one per chunk the event forced to load
/// - then the thumb/scroll effects of the event itself
///
/// For hosts that prefer buffers over closures, [`Self::dispatch_collect`] pushes into a
/// `Vec<Effect>`.
#[derive(Clone, Debug)]
pub struct Controller {
    list: LazyList,
    wheel: WheelConfig,
    pending_loads: Vec<LoadRange>,
}

impl Controller {
    pub fn new(options: LazyListOptions) -> Result<Self, ConfigError> {
        let mut pending = Vec::new();
        let list = LazyList::new(options)?;
        // The construction-time chunk is replayed to the first dispatch sink.
        let initial = LoadRange::new(0, list.loaded_count());
        if !initial.is_empty() {
            pending.push(initial);
        }
        Ok(Self {
            list,
            wheel: WheelConfig::default(),
            pending_loads: pending,
        })
    }

    pub fn with_wheel_config(mut self, wheel: WheelConfig) -> Self {
        self.wheel = wheel;
        self
    }

    pub fn list(&self) -> &LazyList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut LazyList {
        &mut self.list
    }

    pub fn into_list(self) -> LazyList {
        self.list
    }

    pub fn wheel_config(&self) -> WheelConfig {
        self.wheel
    }

    /// Emits any materialization produced before the host attached (the construction chunk),
    /// without dispatching an event. Called implicitly by `dispatch`.
    pub fn flush_pending(&mut self, emit: &mut dyn FnMut(Effect)) {
        for range in self.pending_loads.drain(..) {
            emit(Effect::MaterializeRows(range));
        }
    }

    /// Dispatches one host event and streams the resulting effects.
    pub fn dispatch(&mut self, event: Event, emit: &mut dyn FnMut(Effect)) {
        self.flush_pending(emit);
        match event {
            Event::ViewportMoveTo(fraction) => {
                let mv = self.collecting(emit, |list| list.move_viewport_to(fraction));
                emit(Effect::ScrollViewTo(mv.loaded_space_fraction));
                emit(Effect::SetScrollThumb(mv.thumb));
            }
            Event::WheelScroll { raw_delta } => {
                let rows = self.wheel.rows_for(raw_delta);
                let wheel = self.collecting(emit, |list| list.wheel_scroll(rows));
                if wheel.view_rows != 0 {
                    emit(Effect::ScrollViewBy(wheel.view_rows));
                }
                emit(Effect::SetScrollThumb(wheel.thumb));
            }
            Event::Resize => {
                let thumb = self.collecting(emit, |list| list.resize());
                emit(Effect::SetScrollThumb(thumb));
            }
        }
    }

    /// Convenience wrapper around [`Self::dispatch`] that pushes effects into `out`.
    ///
    /// This does not clear `out`, so a host can accumulate one frame's worth of effects across
    /// several events.
    pub fn dispatch_collect(&mut self, event: Event, out: &mut Vec<Effect>) {
        self.dispatch(event, &mut |effect| out.push(effect));
    }

    // Runs `f` against the list while forwarding every chunk it materializes to `emit`,
    // ahead of the effects the caller emits afterwards.
    fn collecting<R>(
        &mut self,
        emit: &mut dyn FnMut(Effect),
        f: impl FnOnce(&mut LazyList) -> R,
    ) -> R {
        let loaded_before = self.list.loaded_count();
        let out = f(&mut self.list);
        let loaded_after = self.list.loaded_count();

        // Re-chunk the advance exactly as the controller loaded it: full chunks, short tail.
        let chunk = self.list.chunk_size();
        let mut start = loaded_before;
        while start < loaded_after {
            let end = core::cmp::min(start.saturating_add(chunk), loaded_after);
            emit(Effect::MaterializeRows(LoadRange::new(start, end)));
            start = end;
        }
        out
    }
}
