//! Scene request mailbox for `no_std` environments.
//!
//! The MIDI side posts scene requests from its handler or interrupt, the
//! control loop takes them. Built on `critical-section` and
//! `heapless::Deque`, so it can live in a `static`.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// Request to change the output scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneRequest {
    /// Select a scene by index (the Note On note number)
    Select(u8),
    /// Switch to the blackout scene
    Blackout,
}

/// Bounded queue of scene requests.
///
/// When full, posting drops the oldest request: only the most recent
/// selections matter to the output.
pub struct SceneMailbox<const SIZE: usize> {
    queue: Mutex<RefCell<Deque<SceneRequest, SIZE>>>,
}

impl<const SIZE: usize> SceneMailbox<SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> SceneSender<'_, SIZE> {
        SceneSender { mailbox: self }
    }

    pub const fn receiver(&self) -> SceneReceiver<'_, SIZE> {
        SceneReceiver { mailbox: self }
    }

    /// Post a request.
    ///
    /// Returns the request that was dropped to make room, if any.
    pub fn post(&self, request: SceneRequest) -> Option<SceneRequest> {
        critical_section::with(|cs| {
            let mut queue = self.queue.borrow(cs).borrow_mut();
            let dropped = if queue.is_full() {
                queue.pop_front()
            } else {
                None
            };
            // Cannot fail: a slot was freed above if the queue was full
            let _ = queue.push_back(request);
            dropped
        })
    }

    /// Take the oldest pending request
    pub fn take(&self) -> Option<SceneRequest> {
        critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().pop_front())
    }

    /// Drain the mailbox, returning only the most recent request
    pub fn take_latest(&self) -> Option<SceneRequest> {
        critical_section::with(|cs| {
            let mut queue = self.queue.borrow(cs).borrow_mut();
            let latest = queue.pop_back();
            queue.clear();
            latest
        })
    }

    /// Number of pending requests
    pub fn pending(&self) -> usize {
        critical_section::with(|cs| self.queue.borrow(cs).borrow().len())
    }
}

impl<const SIZE: usize> Default for SceneMailbox<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Posting handle for a [`SceneMailbox`]
#[derive(Clone, Copy)]
pub struct SceneSender<'a, const SIZE: usize> {
    mailbox: &'a SceneMailbox<SIZE>,
}

impl<const SIZE: usize> SceneSender<'_, SIZE> {
    pub fn post(&self, request: SceneRequest) -> Option<SceneRequest> {
        self.mailbox.post(request)
    }

    /// Post a scene selection for a Note On note number
    pub fn select(&self, note: u8) -> Option<SceneRequest> {
        self.post(SceneRequest::Select(note))
    }

    pub fn blackout(&self) -> Option<SceneRequest> {
        self.post(SceneRequest::Blackout)
    }
}

/// Taking handle for a [`SceneMailbox`]
#[derive(Clone, Copy)]
pub struct SceneReceiver<'a, const SIZE: usize> {
    mailbox: &'a SceneMailbox<SIZE>,
}

impl<const SIZE: usize> SceneReceiver<'_, SIZE> {
    pub fn take(&self) -> Option<SceneRequest> {
        self.mailbox.take()
    }

    pub fn take_latest(&self) -> Option<SceneRequest> {
        self.mailbox.take_latest()
    }

    pub fn pending(&self) -> usize {
        self.mailbox.pending()
    }
}
