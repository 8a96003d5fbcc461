//! Standings display instance
//!
//! One [`HousePoints`] per mount. It owns the latest state of both queries
//! and the entrance animation guard; the query source is injected.

use std::sync::Arc;
use std::time::Duration;

use super::animation::EntranceAnimation;
use super::screen::Screen;
use crate::query::{HistoryQuery, HousePointsSource, QueryState};
use crate::standings::{HouseStanding, PointsHistoryEntry};

/// Lifecycle of a mounted display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Error,
    Ready { animated: bool },
}

/// A mounted standings display
pub struct HousePoints<S: HousePointsSource + ?Sized> {
    source: Arc<S>,
    history_query: HistoryQuery,
    entrance_delay: Duration,
    standings: QueryState<Vec<HouseStanding>>,
    history: QueryState<Vec<PointsHistoryEntry>>,
    animation: Option<EntranceAnimation>,
}

impl<S: HousePointsSource + ?Sized> HousePoints<S> {
    /// Mount a display; both queries start out loading.
    pub fn mount(source: Arc<S>, history_query: HistoryQuery, entrance_delay: Duration) -> Self {
        Self {
            source,
            history_query,
            entrance_delay,
            standings: QueryState::Loading,
            history: QueryState::Loading,
            animation: None,
        }
    }

    /// Run both queries concurrently and settle their states.
    ///
    /// The entrance timer is armed the first time the display becomes ready.
    pub async fn load(&mut self) {
        let (standings, history) = tokio::join!(
            self.source.house_standings(),
            self.source.points_history(&self.history_query),
        );

        if let Err(e) = &standings {
            tracing::error!("House standings query failed: {}", e);
        }
        if let Err(e) = &history {
            tracing::error!("Points history query failed: {}", e);
        }

        self.standings = QueryState::settle(standings);
        self.history = QueryState::settle(history);

        if let Some(houses) = self.standings.data() {
            tracing::info!("Loaded standings for {} houses", houses.len());
        }

        if self.animation.is_none() && self.screen().is_ready() {
            self.animation = Some(EntranceAnimation::start(self.entrance_delay));
        }
    }

    /// Re-run both queries; an already running or finished entrance
    /// animation is left alone.
    pub async fn refetch(&mut self) {
        self.standings = QueryState::Loading;
        self.history = QueryState::Loading;
        self.load().await;
    }

    pub fn is_animated(&self) -> bool {
        self.animation
            .as_ref()
            .map(EntranceAnimation::is_animated)
            .unwrap_or(false)
    }

    /// Wait for the entrance animation to start. Returns `false` when the
    /// display never became ready.
    pub async fn animation_started(&mut self) -> bool {
        match self.animation.as_mut() {
            Some(animation) => animation.wait().await,
            None => false,
        }
    }

    pub fn screen(&self) -> Screen {
        Screen::resolve(&self.standings, &self.history, self.is_animated())
    }

    pub fn phase(&self) -> Phase {
        match self.screen() {
            Screen::Loading => Phase::Loading,
            Screen::Error(_) => Phase::Error,
            Screen::Standings(frame) => Phase::Ready {
                animated: frame.animated,
            },
        }
    }

    /// History as last fetched. Not part of the drawn screen.
    pub fn history(&self) -> &QueryState<Vec<PointsHistoryEntry>> {
        &self.history
    }

    /// Tear the display down, cancelling a pending entrance timer
    pub fn unmount(self) {
        drop(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::animation::ENTRANCE_DELAY;
    use crate::display::DisplayError;
    use crate::query::{QueryError, QueryResult};
    use crate::standings::House;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct FakeSource {
        fail_standings: Option<QueryError>,
        fail_history: Option<QueryError>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl HousePointsSource for FakeSource {
        async fn house_standings(&self) -> QueryResult<Vec<HouseStanding>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.fail_standings {
                Some(e) => Err(e.clone()),
                None => Ok(vec![
                    HouseStanding::new(House::Ravenclaw, 40),
                    HouseStanding::new(House::Gryffindor, 120),
                ]),
            }
        }

        async fn points_history(&self, _query: &HistoryQuery) -> QueryResult<Vec<PointsHistoryEntry>> {
            match &self.fail_history {
                Some(e) => Err(e.clone()),
                None => Ok(Vec::new()),
            }
        }
    }

    fn mount(source: FakeSource) -> HousePoints<FakeSource> {
        HousePoints::mount(Arc::new(source), HistoryQuery::default(), ENTRANCE_DELAY)
    }

    #[tokio::test(start_paused = true)]
    async fn test_lifecycle_to_animated() {
        let mut display = mount(FakeSource::default());
        assert_eq!(display.phase(), Phase::Loading);

        display.load().await;
        assert_eq!(display.phase(), Phase::Ready { animated: false });

        let Screen::Standings(frame) = display.screen() else {
            panic!("expected standings");
        };
        assert!(frame.displayed_heights().iter().all(|h| *h == 0.0));

        assert!(display.animation_started().await);
        assert_eq!(display.phase(), Phase::Ready { animated: true });

        let Screen::Standings(frame) = display.screen() else {
            panic!("expected standings");
        };
        let heights = frame.displayed_heights();
        assert_eq!(heights[0], 100.0);
        assert!((heights[1] - 100.0 / 3.0).abs() < 1e-9);
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_is_terminal_and_never_animates() {
        let mut display = mount(FakeSource {
            fail_standings: Some(QueryError::Timeout),
            fail_history: Some(QueryError::MissingData),
            ..Default::default()
        });
        display.load().await;

        assert_eq!(display.phase(), Phase::Error);
        assert_eq!(
            display.screen(),
            Screen::Error(DisplayError::Standings("Request timeout".to_string()))
        );
        assert!(!display.animation_started().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_history_failure_blocks_chart() {
        let mut display = mount(FakeSource {
            fail_history: Some(QueryError::Network("connection refused".to_string())),
            ..Default::default()
        });
        display.load().await;

        assert_eq!(
            display.screen(),
            Screen::Error(DisplayError::History(
                "Network error: connection refused".to_string()
            ))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_before_timer_fires() {
        let mut display = mount(FakeSource::default());
        display.load().await;

        let mut flag = display
            .animation
            .as_ref()
            .map(EntranceAnimation::subscribe)
            .unwrap();
        display.unmount();

        tokio::time::sleep(ENTRANCE_DELAY * 3).await;
        assert!(!*flag.borrow());
        assert!(flag.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_refetch_keeps_single_animation() {
        let mut display = mount(FakeSource::default());
        display.load().await;
        assert!(display.animation_started().await);

        display.refetch().await;
        assert_eq!(display.source.calls.load(Ordering::SeqCst), 2);
        assert_eq!(display.phase(), Phase::Ready { animated: true });
    }
}
