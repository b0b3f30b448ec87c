//! Read-only checks of the host platform.

/// What the host reports about its input devices and browser.
pub trait HostEnvironment {
    fn has_touch_events(&self) -> bool;

    fn max_touch_points(&self) -> u32 {
        0
    }

    fn user_agent(&self) -> String;

    /// Old IE Mobile exposed `MSStream` and spoofed an iOS user agent.
    fn has_ms_stream(&self) -> bool {
        false
    }
}

/// Touch events are present or the host reports at least one touch point.
pub fn is_touch_device<E: HostEnvironment + ?Sized>(env: &E) -> bool {
    env.has_touch_events() || env.max_touch_points() > 0
}

pub fn is_ios<E: HostEnvironment + ?Sized>(env: &E) -> bool {
    let agent = env.user_agent();
    ["iPad", "iPhone", "iPod"]
        .iter()
        .any(|device| agent.contains(device))
        && !env.has_ms_stream()
}

/// A [`HostEnvironment`] described by plain values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticEnvironment {
    pub touch_events: bool,
    pub max_touch_points: u32,
    pub user_agent: String,
    pub ms_stream: bool,
}

impl StaticEnvironment {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..Self::default()
        }
    }

    pub fn with_touch_events(mut self) -> Self {
        self.touch_events = true;
        self
    }

    pub fn with_max_touch_points(mut self, points: u32) -> Self {
        self.max_touch_points = points;
        self
    }

    pub fn with_ms_stream(mut self) -> Self {
        self.ms_stream = true;
        self
    }
}

impl HostEnvironment for StaticEnvironment {
    fn has_touch_events(&self) -> bool {
        self.touch_events
    }

    fn max_touch_points(&self) -> u32 {
        self.max_touch_points
    }

    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn has_ms_stream(&self) -> bool {
        self.ms_stream
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE: &str =
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
    const DESKTOP: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36";

    #[test]
    fn desktop_without_touch() {
        let env = StaticEnvironment::new(DESKTOP);
        assert!(!is_touch_device(&env));
        assert!(!is_ios(&env));
    }

    #[test]
    fn touch_events_or_points_mean_touch() {
        assert!(is_touch_device(&StaticEnvironment::new(DESKTOP).with_touch_events()));
        assert!(is_touch_device(
            &StaticEnvironment::new(DESKTOP).with_max_touch_points(5)
        ));
    }

    #[test]
    fn detects_ios_devices() {
        assert!(is_ios(&StaticEnvironment::new(IPHONE)));
        assert!(is_ios(&StaticEnvironment::new("Mozilla/5.0 (iPad; CPU OS 16_0)")));
        assert!(is_ios(&StaticEnvironment::new("Mozilla/5.0 (iPod touch)")));
    }

    #[test]
    fn ms_stream_disqualifies_ios() {
        assert!(!is_ios(&StaticEnvironment::new(IPHONE).with_ms_stream()));
    }

    #[test]
    fn default_trait_methods() {
        struct Bare;
        impl HostEnvironment for Bare {
            fn has_touch_events(&self) -> bool {
                false
            }
            fn user_agent(&self) -> String {
                IPHONE.to_string()
            }
        }
        assert!(!is_touch_device(&Bare));
        assert!(is_ios(&Bare));
    }
}
