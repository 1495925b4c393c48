//! Scene controller: the integration loop around the resolver.
//!
//! Tracks the scene currently on the bus. The resolver itself is stateless.

use crate::error::InvalidScene;
use crate::frame::Frame;
use crate::log::log;
use crate::mailbox::{SceneReceiver, SceneRequest};
use crate::resolver::SceneResolver;
use crate::scene::BLACKOUT_SCENE;

/// Consumer of resolved frames, typically the DMX transmitter
///
/// Implement this trait to support different output hardware.
pub trait FrameSink<const K: usize> {
    /// Write a resolved frame to the output
    fn write(&mut self, frame: &Frame<K>);
}

/// Result of one [`SceneController::poll`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// No request was pending
    Idle,
    /// The scene with this index was written to the sink
    Applied(usize),
    /// The request named an unknown scene; the output is unchanged
    Rejected(InvalidScene),
}

pub struct SceneController<'a, S: FrameSink<K>, const K: usize, const SIZE: usize> {
    resolver: SceneResolver<'a, K>,
    requests: SceneReceiver<'a, SIZE>,
    sink: S,
    current: Option<usize>,
}

impl<'a, S: FrameSink<K>, const K: usize, const SIZE: usize> SceneController<'a, S, K, SIZE> {
    pub const fn new(
        resolver: SceneResolver<'a, K>,
        requests: SceneReceiver<'a, SIZE>,
        sink: S,
    ) -> Self {
        Self {
            resolver,
            requests,
            sink,
            current: None,
        }
    }

    /// Handle pending requests (non-blocking).
    ///
    /// Only the most recent request is applied; older ones are superseded.
    pub fn poll(&mut self) -> PollOutcome {
        let Some(request) = self.requests.take_latest() else {
            return PollOutcome::Idle;
        };
        self.apply(request)
    }

    /// Resolve a request and write it to the sink
    pub fn apply(&mut self, request: SceneRequest) -> PollOutcome {
        let requested = match request {
            SceneRequest::Select(note) => usize::from(note),
            SceneRequest::Blackout => BLACKOUT_SCENE,
        };
        match self.resolver.resolve_scene(requested) {
            Ok((scene, frame)) => {
                log!("[SceneController.apply] scene {}", scene);
                self.sink.write(&frame);
                self.current = Some(scene);
                PollOutcome::Applied(scene)
            }
            Err(error) => {
                log!("[SceneController.apply] keeping current output: {}", error);
                PollOutcome::Rejected(error)
            }
        }
    }

    /// Index of the scene last written to the sink
    pub const fn current_scene(&self) -> Option<usize> {
        self.current
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }
}
