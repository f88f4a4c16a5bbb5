//! Fullscreen presentation state.
//!
//! The host decides whether fullscreen is actually active. The controller
//! only *requests* transitions and mirrors whatever the host reports through
//! [`FullscreenHost::poll_change`], so a host-initiated exit is never missed.
//!
//! | Trigger                    | Windowed        | Fullscreen     |
//! |----------------------------|-----------------|----------------|
//! | Toggle button / F11        | request enter   | request exit   |
//! | Escape                     | ignored         | request exit   |
//! | Click on statistics area   | ignored         | request exit   |
//! | Host change notification   | adopt new state | adopt new state |

use std::collections::VecDeque;

use log::{debug, info};

/// Host environment capable (or not) of fullscreen presentation.
pub trait FullscreenHost {
    /// Whether fullscreen can be requested at all.
    fn supports_fullscreen(&self) -> bool;

    /// Ask the host to enter fullscreen. Takes effect when the host notifies.
    fn request_fullscreen(&mut self);

    /// Ask the host to leave fullscreen. Takes effect when the host notifies.
    fn exit_fullscreen(&mut self);

    /// Host's current fullscreen state.
    fn is_fullscreen(&self) -> bool;

    /// Next pending change notification, oldest first.
    fn poll_change(&mut self) -> Option<bool>;
}

/// In-window presentation mode: the dashboard hides its chrome and fills the
/// window. Every state change queues one notification.
#[derive(Debug, Default)]
pub struct PresentationHost {
    active: bool,
    pending: VecDeque<bool>,
}

impl PresentationHost {
    pub fn new() -> Self { Self::default() }

    /// Host-side exit that bypasses the controller (window manager, focus loss).
    pub fn force_exit(&mut self) { self.set_active(false); }

    fn set_active(&mut self, active: bool) {
        if self.active != active {
            self.active = active;
            self.pending.push_back(active);
        }
    }
}

impl FullscreenHost for PresentationHost {
    fn supports_fullscreen(&self) -> bool { true }

    fn request_fullscreen(&mut self) { self.set_active(true); }

    fn exit_fullscreen(&mut self) { self.set_active(false); }

    fn is_fullscreen(&self) -> bool { self.active }

    fn poll_change(&mut self) -> Option<bool> { self.pending.pop_front() }
}

/// Host without any fullscreen capability. Every call is a silent no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnsupportedHost;

impl FullscreenHost for UnsupportedHost {
    fn supports_fullscreen(&self) -> bool { false }

    fn request_fullscreen(&mut self) {}

    fn exit_fullscreen(&mut self) {}

    fn is_fullscreen(&self) -> bool { false }

    fn poll_change(&mut self) -> Option<bool> { None }
}

impl<H: FullscreenHost + ?Sized> FullscreenHost for Box<H> {
    fn supports_fullscreen(&self) -> bool { (**self).supports_fullscreen() }

    fn request_fullscreen(&mut self) { (**self).request_fullscreen(); }

    fn exit_fullscreen(&mut self) { (**self).exit_fullscreen(); }

    fn is_fullscreen(&self) -> bool { (**self).is_fullscreen() }

    fn poll_change(&mut self) -> Option<bool> { (**self).poll_change() }
}

/// Keys the controller reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FullscreenKey {
    /// F11: toggle.
    Toggle,
    /// Escape: exit only.
    Exit,
}

/// Mirrors the host's fullscreen state and turns user intent into requests.
#[derive(Debug, Default)]
pub struct FullscreenController {
    fullscreen: bool,
}

impl FullscreenController {
    pub const fn new() -> Self { Self { fullscreen: false } }

    /// Mirrored host state.
    #[inline]
    pub const fn is_fullscreen(&self) -> bool { self.fullscreen }

    /// Toggle control: request the opposite of the mirrored state.
    pub fn toggle<H: FullscreenHost + ?Sized>(&self, host: &mut H) {
        if !host.supports_fullscreen() {
            debug!("fullscreen unsupported, toggle ignored");
            return;
        }
        if self.fullscreen {
            host.exit_fullscreen();
        } else {
            host.request_fullscreen();
        }
    }

    /// Keyboard shortcut. Returns `true` if the key was consumed.
    pub fn on_key<H: FullscreenHost + ?Sized>(&self, key: FullscreenKey, host: &mut H) -> bool {
        match key {
            FullscreenKey::Toggle => {
                self.toggle(host);
                true
            }
            FullscreenKey::Exit if self.fullscreen => {
                if host.supports_fullscreen() {
                    host.exit_fullscreen();
                }
                true
            }
            FullscreenKey::Exit => false,
        }
    }

    /// Click on the statistics area. Exits while fullscreen, else ignored.
    pub fn on_stats_click<H: FullscreenHost + ?Sized>(&self, host: &mut H) -> bool {
        if self.fullscreen && host.supports_fullscreen() {
            host.exit_fullscreen();
            true
        } else {
            false
        }
    }

    /// Adopt a host notification. Returns `true` if the mirrored state changed.
    pub fn on_host_change(&mut self, fullscreen: bool) -> bool {
        let changed = self.fullscreen != fullscreen;
        if changed {
            info!("fullscreen: {}", if fullscreen { "on" } else { "off" });
        }
        self.fullscreen = fullscreen;
        changed
    }

    /// Drain all pending host notifications. Returns `true` if the state changed.
    pub fn sync<H: FullscreenHost + ?Sized>(&mut self, host: &mut H) -> bool {
        let before = self.fullscreen;
        while let Some(state) = host.poll_change() {
            self.on_host_change(state);
        }
        before != self.fullscreen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records requests and lets tests inject notifications.
    #[derive(Default)]
    struct MockHost {
        supported: bool,
        requests: Vec<&'static str>,
        pending: VecDeque<bool>,
    }

    impl MockHost {
        fn supported() -> Self {
            Self {
                supported: true,
                ..Self::default()
            }
        }
    }

    impl FullscreenHost for MockHost {
        fn supports_fullscreen(&self) -> bool { self.supported }

        fn request_fullscreen(&mut self) { self.requests.push("enter"); }

        fn exit_fullscreen(&mut self) { self.requests.push("exit"); }

        fn is_fullscreen(&self) -> bool { false }

        fn poll_change(&mut self) -> Option<bool> { self.pending.pop_front() }
    }

    #[test]
    fn test_toggle_requests_but_does_not_flip_flag() {
        let mut host = MockHost::supported();
        let controller = FullscreenController::new();
        controller.toggle(&mut host);
        assert_eq!(host.requests, ["enter"]);
        assert!(!controller.is_fullscreen(), "only host notifications change the flag");
    }

    #[test]
    fn test_flag_follows_last_notification() {
        let mut host = MockHost::supported();
        let mut controller = FullscreenController::new();
        host.pending.extend([true, false, true]);
        assert!(controller.sync(&mut host));
        assert!(controller.is_fullscreen());
        assert_eq!(host.poll_change(), None, "sync drains the queue");
    }

    #[test]
    fn test_external_exit_is_mirrored() {
        let mut host = PresentationHost::new();
        let mut controller = FullscreenController::new();

        controller.toggle(&mut host);
        controller.sync(&mut host);
        assert!(controller.is_fullscreen());

        host.force_exit();
        assert!(controller.sync(&mut host));
        assert!(!controller.is_fullscreen(), "host-initiated exit must be mirrored");
    }

    #[test]
    fn test_escape_only_exits_while_fullscreen() {
        let mut host = MockHost::supported();
        let mut controller = FullscreenController::new();

        assert!(!controller.on_key(FullscreenKey::Exit, &mut host));
        assert!(host.requests.is_empty(), "Escape while windowed does nothing");

        controller.on_host_change(true);
        assert!(controller.on_key(FullscreenKey::Exit, &mut host));
        assert_eq!(host.requests, ["exit"]);
    }

    #[test]
    fn test_f11_toggles_both_ways() {
        let mut host = MockHost::supported();
        let mut controller = FullscreenController::new();
        controller.on_key(FullscreenKey::Toggle, &mut host);
        controller.on_host_change(true);
        controller.on_key(FullscreenKey::Toggle, &mut host);
        assert_eq!(host.requests, ["enter", "exit"]);
    }

    #[test]
    fn test_stats_click_exits_only_in_fullscreen() {
        let mut host = MockHost::supported();
        let mut controller = FullscreenController::new();
        assert!(!controller.on_stats_click(&mut host));

        controller.on_host_change(true);
        assert!(controller.on_stats_click(&mut host));
        assert_eq!(host.requests, ["exit"]);
    }

    #[test]
    fn test_unsupported_host_is_silent() {
        let mut host = UnsupportedHost;
        let mut controller = FullscreenController::new();
        controller.toggle(&mut host);
        assert!(controller.on_key(FullscreenKey::Toggle, &mut host));
        assert!(!controller.sync(&mut host));
        assert!(!controller.is_fullscreen());
    }

    #[test]
    fn test_unsupported_mock_gets_no_requests() {
        let mut host = MockHost::default();
        let controller = FullscreenController::new();
        controller.toggle(&mut host);
        assert!(host.requests.is_empty());
    }

    #[test]
    fn test_presentation_host_deduplicates() {
        let mut host = PresentationHost::new();
        host.request_fullscreen();
        host.request_fullscreen();
        assert!(host.is_fullscreen());
        assert_eq!(host.poll_change(), Some(true));
        assert_eq!(host.poll_change(), None, "repeated request queues nothing");
    }

    #[test]
    fn test_boxed_host_forwards() {
        let mut host: Box<dyn FullscreenHost> = Box::new(PresentationHost::new());
        let mut controller = FullscreenController::new();
        controller.toggle(&mut host);
        assert!(controller.sync(&mut host));
        assert!(controller.is_fullscreen());
    }
}
