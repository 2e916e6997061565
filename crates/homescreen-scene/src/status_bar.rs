//! Status bar appearance.
//!
//! The homescreen tells the system UI whether the status bar should be
//! opaque or see-through, depending on how far its content has scrolled.
//! This module holds the decision logic; the browser bridge feeds it scroll
//! offsets and supplies the message ports.

use serde::{Deserialize, Serialize};

/// The two appearances the system UI understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Appearance {
    Opaque,
    SemiTransparent,
}

impl Appearance {
    /// Wire value posted to the system UI.
    pub fn as_str(self) -> &'static str {
        match self {
            Appearance::Opaque => "opaque",
            Appearance::SemiTransparent => "semi-transparent",
        }
    }

    /// Opaque once content has scrolled strictly past `threshold`.
    pub fn for_scroll(scroll_top: f32, threshold: f32) -> Self {
        if scroll_top > threshold {
            Appearance::Opaque
        } else {
            Appearance::SemiTransparent
        }
    }
}

/// One end of the message channel to the system UI.
pub trait AppearancePort {
    fn post_message(&self, value: &str);
}

/// Tracks the current appearance and posts only changes.
#[derive(Debug)]
pub struct StatusBar<P: AppearancePort> {
    threshold: f32,
    port: Option<P>,
    appearance: Option<Appearance>,
}

impl<P: AppearancePort> StatusBar<P> {
    /// `threshold` is the scroll offset beyond which the bar turns opaque.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            port: None,
            appearance: None,
        }
    }

    /// The channel connected. The last port offered is kept; the bar then
    /// starts out semi-transparent.
    pub fn on_connected(&mut self, ports: impl IntoIterator<Item = P>) {
        if let Some(port) = ports.into_iter().last() {
            self.port = Some(port);
        }
        self.set_appearance(Appearance::SemiTransparent);
    }

    /// The channel was refused. Reported, not fatal.
    pub fn on_connect_failed(&self, reason: &str) {
        log::error!("Cannot notify changes of appearance: {}", reason);
    }

    pub fn on_scroll(&mut self, scroll_top: f32) {
        self.set_appearance(Appearance::for_scroll(scroll_top, self.threshold));
    }

    /// Record `value` and post it if it differs from the current one.
    pub fn set_appearance(&mut self, value: Appearance) {
        if self.appearance == Some(value) {
            return;
        }
        self.appearance = Some(value);
        match &self.port {
            Some(port) => {
                log::debug!("status bar: {}", value.as_str());
                port.post_message(value.as_str());
            }
            None => log::debug!("status bar: {} (no port connected)", value.as_str()),
        }
    }

    pub fn appearance(&self) -> Option<Appearance> {
        self.appearance
    }

    pub fn is_connected(&self) -> bool {
        self.port.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl AppearancePort for Recorder {
        fn post_message(&self, value: &str) {
            self.0.borrow_mut().push(value.to_string());
        }
    }

    #[test]
    fn connect_starts_semi_transparent() {
        let port = Recorder::default();
        let mut bar = StatusBar::new(40.0);
        bar.on_connected(vec![port.clone()]);
        assert!(bar.is_connected());
        assert_eq!(bar.appearance(), Some(Appearance::SemiTransparent));
        assert_eq!(*port.0.borrow(), vec!["semi-transparent"]);
    }

    #[test]
    fn scroll_posts_only_changes() {
        let port = Recorder::default();
        let mut bar = StatusBar::new(40.0);
        bar.on_connected(vec![port.clone()]);

        bar.on_scroll(10.0);
        bar.on_scroll(40.0);
        bar.on_scroll(41.0);
        bar.on_scroll(300.0);
        bar.on_scroll(0.0);

        assert_eq!(
            *port.0.borrow(),
            vec!["semi-transparent", "opaque", "semi-transparent"]
        );
    }

    #[test]
    fn last_port_wins() {
        let first = Recorder::default();
        let second = Recorder::default();
        let mut bar = StatusBar::new(0.0);
        bar.on_connected(vec![first.clone(), second.clone()]);
        bar.on_scroll(5.0);
        assert!(first.0.borrow().is_empty());
        assert_eq!(second.0.borrow().len(), 2);
    }

    #[test]
    fn without_port_appearance_is_still_tracked() {
        let mut bar: StatusBar<Recorder> = StatusBar::new(10.0);
        bar.on_connected(Vec::new());
        assert!(!bar.is_connected());
        bar.on_scroll(20.0);
        assert_eq!(bar.appearance(), Some(Appearance::Opaque));
        bar.on_connect_failed("denied");
    }

    #[test]
    fn wire_strings() {
        assert_eq!(Appearance::Opaque.as_str(), "opaque");
        assert_eq!(
            serde_json::to_string(&Appearance::SemiTransparent).unwrap(),
            "\"semi-transparent\""
        );
    }
}
