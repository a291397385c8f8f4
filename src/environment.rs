use std::collections::{BTreeMap, HashMap, HashSet};

use log::debug;

use crate::object::Object;

/// Handle to a frame stored in an [`Environment`]. Handles are handed out in
/// increasing order, so a frame is always newer than its outer frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameId(usize);

/// Anything that can hold on to frames.
pub trait Trace {
    fn trace(&self, tracer: &mut Tracer);
}

/// Frames found reachable and not yet visited.
#[derive(Default)]
pub struct Tracer {
    pending: Vec<FrameId>,
}

impl Tracer {
    pub fn mark(&mut self, frame: FrameId) {
        self.pending.push(frame);
    }
}

#[derive(Debug)]
struct Frame {
    store: HashMap<String, Object>,
    outer: Option<FrameId>,
    captured: bool,
}

impl Frame {
    fn new(outer: Option<FrameId>) -> Self {
        Frame { store: HashMap::new(), outer, captured: false }
    }
}

impl Trace for Frame {
    fn trace(&self, tracer: &mut Tracer) {
        if let Some(outer) = self.outer {
            tracer.mark(outer);
        }
        for value in self.store.values() {
            value.trace(tracer);
        }
    }
}

/// Arena of scope frames. The global frame lives as long as the
/// environment. A call frame is opened for every function application and
/// reclaimed once nothing can reach it, even when it is only kept alive by
/// closures bound inside it.
///
/// Lookups walk outward through a frame's outer chain; writes always land
/// in the frame they are given.
#[derive(Debug)]
pub struct Environment {
    frames: BTreeMap<FrameId, Frame>,
    global: FrameId,
    next_id: usize,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    pub fn new() -> Self {
        let global = FrameId(0);
        let mut frames = BTreeMap::new();
        frames.insert(global, Frame::new(None));
        Environment { frames, global, next_id: 1 }
    }

    pub fn global(&self) -> FrameId {
        self.global
    }

    /// Opens a call frame whose lookups fall back to `outer`.
    pub fn new_enclosed(&mut self, outer: FrameId) -> FrameId {
        let id = FrameId(self.next_id);
        self.next_id += 1;
        self.frames.insert(id, Frame::new(Some(outer)));
        id
    }

    /// Records that a closure now refers to `frame`.
    pub fn capture(&mut self, frame: FrameId) -> FrameId {
        if let Some(f) = self.frames.get_mut(&frame) {
            f.captured = true;
        }
        frame
    }

    pub fn get(&self, frame: FrameId, key: &str) -> Option<Object> {
        let mut current = self.frames.get(&frame);
        while let Some(f) = current {
            if let Some(obj) = f.store.get(key) {
                return Some(obj.clone());
            }
            current = f.outer.and_then(|outer| self.frames.get(&outer));
        }
        None
    }

    pub fn set(&mut self, frame: FrameId, key: impl Into<String>, value: Object) {
        if let Some(f) = self.frames.get_mut(&frame) {
            f.store.insert(key.into(), value);
        }
    }

    /// Number of frames currently held, the global one included.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Reclaims the frames opened at or after `start` that `result` cannot
    /// reach. Meant to run when the call that opened `start` returns: values
    /// leave a call only through its result, and bindings only land in the
    /// innermost frame, so nothing older can refer to a newer frame.
    pub fn release(&mut self, start: FrameId, result: &Object) {
        let mut tracer = Tracer::default();
        result.trace(&mut tracer);
        self.sweep(start, tracer);
    }

    /// Reclaims every call frame that neither the global bindings nor
    /// `result` can reach. Only safe between top-level evaluations.
    pub fn collect(&mut self, result: Option<&Object>) {
        let mut tracer = Tracer::default();
        if let Some(global) = self.frames.get(&self.global) {
            global.trace(&mut tracer);
        }
        if let Some(obj) = result {
            obj.trace(&mut tracer);
        }
        self.sweep(FrameId(self.global.0 + 1), tracer);
    }

    fn sweep(&mut self, start: FrameId, mut tracer: Tracer) {
        let region = self.frames.split_off(&start);
        if region.is_empty() {
            return;
        }
        // only closures point at frames, and each one flagged the frame it captured
        if !region.values().any(|frame| frame.captured) {
            debug!("released {} uncaptured frame(s)", region.len());
            return;
        }

        let mut live = HashSet::new();
        while let Some(id) = tracer.pending.pop() {
            if id < start || !live.insert(id) {
                continue;
            }
            if let Some(frame) = region.get(&id) {
                frame.trace(&mut tracer);
            }
        }

        let swept = region.len() - live.len();
        for (id, frame) in region {
            if live.contains(&id) {
                self.frames.insert(id, frame);
            }
        }
        debug!("released {} frame(s), kept {}", swept, live.len());
    }
}

#[cfg(test)]
mod test {
    use crate::environment::Environment;
    use crate::object::Object;

    #[test]
    fn test_enclosed_lookup_and_shadowing() {
        let mut env = Environment::new();
        let outer = env.global();
        env.set(outer, "a", Object::Integer(1));
        env.set(outer, "b", Object::Integer(2));

        let inner = env.new_enclosed(outer);
        env.set(inner, "b", Object::Integer(20));

        assert!(matches!(env.get(inner, "a"), Some(Object::Integer(1))));
        assert!(matches!(env.get(inner, "b"), Some(Object::Integer(20))));
        assert!(env.get(inner, "c").is_none());
        // writes never reach the outer frame
        assert!(matches!(env.get(outer, "b"), Some(Object::Integer(2))));
    }

    #[test]
    fn test_release_drops_unreachable_frames() {
        let mut env = Environment::new();
        let global = env.global();
        let frame = env.new_enclosed(global);
        let nested = env.new_enclosed(frame);
        env.set(nested, "x", Object::Integer(1));
        assert_eq!(env.frame_count(), 3);

        env.release(frame, &Object::Integer(1));
        assert_eq!(env.frame_count(), 1);
        assert!(env.get(nested, "x").is_none());
    }

    #[test]
    fn test_collect_keeps_global_frame() {
        let mut env = Environment::new();
        let global = env.global();
        env.set(global, "a", Object::Integer(1));
        env.new_enclosed(global);

        env.collect(None);
        assert_eq!(env.frame_count(), 1);
        assert!(matches!(env.get(global, "a"), Some(Object::Integer(1))));
    }
}
