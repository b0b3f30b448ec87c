//! Element lookups against an injected document.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::error::{HostError, Result};

const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

/// Selector queries against the host document.
pub trait Document {
    type Element;

    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// Layout metrics of every element matching `selector`.
    fn query_selector_all(&self, selector: &str) -> Vec<ElementMetrics>;
}

/// Computed layout numbers of one element, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementMetrics {
    pub offset_width: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub padding_left: f64,
    pub padding_right: f64,
    pub border_left: f64,
    pub border_right: f64,
}

impl ElementMetrics {
    /// `offset_width + margins - padding + borders`.
    pub fn net_width(&self) -> f64 {
        self.offset_width + self.margin_left + self.margin_right
            - self.padding_left
            - self.padding_right
            + self.border_left
            + self.border_right
    }
}

/// Polling behaviour for [`is_element_loaded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementWaitConfig {
    interval: Duration,
}

impl ElementWaitConfig {
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(HostError::InvalidInterval);
        }
        Ok(Self { interval })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for ElementWaitConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
        }
    }
}

/// Waits until `selector` matches an element and returns it.
///
/// The document is first queried one interval after the call, then once per
/// interval. There is no timeout; drop the future to stop waiting.
pub async fn is_element_loaded<D>(
    document: &D,
    selector: Option<&str>,
    config: &ElementWaitConfig,
) -> Result<D::Element>
where
    D: Document + ?Sized,
{
    let selector = selector
        .filter(|s| !s.is_empty())
        .ok_or(HostError::MissingSelector)?;

    let period = config.interval();
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tracing::debug!(selector, interval_ms = period.as_millis() as u64, "Waiting for element");

    let mut polls: u64 = 0;
    loop {
        ticker.tick().await;
        polls += 1;
        if let Some(element) = document.query_selector(selector) {
            tracing::debug!(selector, polls, "Element found");
            return Ok(element);
        }
    }
}

/// Summed [`ElementMetrics::net_width`] of every match; `None` without a selector.
pub fn net_element_width<D>(document: &D, selector: Option<&str>) -> Option<f64>
where
    D: Document + ?Sized,
{
    let selector = selector.filter(|s| !s.is_empty())?;
    Some(
        document
            .query_selector_all(selector)
            .iter()
            .map(ElementMetrics::net_width)
            .sum(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MemoryDocument;

    fn fast() -> ElementWaitConfig {
        ElementWaitConfig::new(Duration::from_millis(5)).unwrap()
    }

    fn metrics(width: f64) -> ElementMetrics {
        ElementMetrics {
            offset_width: width,
            margin_left: 10.0,
            margin_right: 10.0,
            padding_left: 4.0,
            padding_right: 4.0,
            border_left: 1.0,
            border_right: 1.0,
        }
    }

    #[test]
    fn default_interval_is_half_a_second() {
        assert_eq!(
            ElementWaitConfig::default().interval(),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert_eq!(
            ElementWaitConfig::new(Duration::ZERO),
            Err(HostError::InvalidInterval)
        );
    }

    #[test]
    fn net_width_adds_margins_and_borders() {
        assert_eq!(metrics(100.0).net_width(), 114.0);
    }

    #[test]
    fn metrics_use_camel_case_fields() {
        let json = serde_json::to_value(metrics(1.0)).unwrap();
        assert_eq!(json["offsetWidth"], 1.0);
        assert_eq!(json["marginLeft"], 10.0);
    }

    #[tokio::test]
    async fn missing_selector_fails_immediately() {
        let document = MemoryDocument::default();
        assert_eq!(
            is_element_loaded(&document, None, &fast()).await,
            Err(HostError::MissingSelector)
        );
        assert_eq!(
            is_element_loaded(&document, Some(""), &fast()).await,
            Err(HostError::MissingSelector)
        );
        assert_eq!(document.queries(), 0);
    }

    #[tokio::test]
    async fn resolves_once_element_appears() {
        let document = MemoryDocument::default();
        document.insert_after("#app", metrics(50.0), 3);

        let element = is_element_loaded(&document, Some("#app"), &fast())
            .await
            .unwrap();
        assert_eq!(element, metrics(50.0));
        assert_eq!(document.queries(), 3);
    }

    #[tokio::test]
    async fn present_element_is_found_on_first_tick() {
        let document = MemoryDocument::default();
        document.insert("#ready", metrics(1.0));

        is_element_loaded(&document, Some("#ready"), &fast())
            .await
            .unwrap();
        assert_eq!(document.queries(), 1);
    }

    #[tokio::test]
    async fn never_matching_selector_keeps_waiting() {
        let document = MemoryDocument::default();
        let config = fast();
        let wait = is_element_loaded(&document, Some("#never"), &config);
        let outcome = tokio::time::timeout(Duration::from_millis(40), wait).await;
        assert!(outcome.is_err());
        assert!(document.queries() >= 2);
    }

    #[test]
    fn net_element_width_sums_matches() {
        let document = MemoryDocument::default();
        document.insert(".card", metrics(100.0));
        document.insert(".card", metrics(200.0));

        assert_eq!(net_element_width(&document, Some(".card")), Some(328.0));
        assert_eq!(net_element_width(&document, Some(".none")), Some(0.0));
        assert_eq!(net_element_width(&document, None), None);
    }
}
