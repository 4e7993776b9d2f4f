//! Viewport subscriptions for the result table.
//!
//! The renderer reports what it measured after each frame; these
//! subscriptions turn those measurements into "sentinel is near the viewport"
//! and "container was resized" signals. Once disconnected, a subscription
//! ignores every signal it receives.

/// Rows of slack around the viewport within which the sentinel counts as
/// intersecting.
pub const SENTINEL_MARGIN_ROWS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionSubscription {
    margin: usize,
    connected: bool,
}

impl IntersectionSubscription {
    pub fn new(margin: usize) -> Self {
        Self {
            margin,
            connected: true,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    /// Whether the row at `sentinel` is inside `[offset, offset + visible)`
    /// widened by the margin on both sides.
    pub fn is_intersecting(&self, sentinel: usize, offset: usize, visible_rows: usize) -> bool {
        if !self.connected {
            return false;
        }
        let top = offset.saturating_sub(self.margin);
        let bottom = offset
            .saturating_add(visible_rows)
            .saturating_add(self.margin);
        (top..bottom).contains(&sentinel)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSubscription {
    last: Option<(u16, u16)>,
    connected: bool,
}

impl ResizeSubscription {
    pub fn new() -> Self {
        Self {
            last: None,
            connected: true,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    /// Records a measured container size. Returns true when it differs from
    /// the previous measurement (the first measurement always counts).
    pub fn observe(&mut self, width: u16, height: u16) -> bool {
        if !self.connected {
            return false;
        }
        let changed = self.last != Some((width, height));
        self.last = Some((width, height));
        changed
    }

    pub fn last(&self) -> Option<(u16, u16)> {
        self.last
    }
}

impl Default for ResizeSubscription {
    fn default() -> Self {
        Self::new()
    }
}

/// The pair of subscriptions a mounted table holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportObservers {
    pub intersection: IntersectionSubscription,
    pub resize: ResizeSubscription,
}

impl ViewportObservers {
    pub fn connect() -> Self {
        Self {
            intersection: IntersectionSubscription::new(SENTINEL_MARGIN_ROWS),
            resize: ResizeSubscription::new(),
        }
    }

    pub fn disconnect(&mut self) {
        self.intersection.disconnect();
        self.resize.disconnect();
    }

    pub fn is_connected(&self) -> bool {
        self.intersection.is_connected() || self.resize.is_connected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod intersection {
        use super::*;
        use rstest::rstest;

        #[rstest]
        #[case(20, 0, 20, true)]
        #[case(22, 0, 20, true)]
        #[case(23, 0, 20, false)]
        #[case(10, 12, 20, true)]
        #[case(5, 12, 20, false)]
        fn margin_widens_viewport(
            #[case] sentinel: usize,
            #[case] offset: usize,
            #[case] visible: usize,
            #[case] expected: bool,
        ) {
            let sub = IntersectionSubscription::new(SENTINEL_MARGIN_ROWS);

            assert_eq!(sub.is_intersecting(sentinel, offset, visible), expected);
        }

        #[test]
        fn disconnected_never_intersects() {
            let mut sub = IntersectionSubscription::new(SENTINEL_MARGIN_ROWS);
            sub.disconnect();

            assert!(!sub.is_intersecting(0, 0, 20));
        }
    }

    mod resize {
        use super::*;

        #[test]
        fn first_measurement_is_a_change() {
            let mut sub = ResizeSubscription::new();

            assert!(sub.observe(80, 24));
            assert!(!sub.observe(80, 24));
            assert!(sub.observe(100, 24));
            assert_eq!(sub.last(), Some((100, 24)));
        }

        #[test]
        fn disconnected_ignores_measurements() {
            let mut sub = ResizeSubscription::new();
            sub.observe(80, 24);
            sub.disconnect();

            assert!(!sub.observe(120, 40));
            assert_eq!(sub.last(), Some((80, 24)));
        }
    }

    #[test]
    fn disconnect_tears_down_both() {
        let mut observers = ViewportObservers::connect();
        assert!(observers.is_connected());

        observers.disconnect();

        assert!(!observers.intersection.is_connected());
        assert!(!observers.resize.is_connected());
        assert!(!observers.is_connected());
    }
}
