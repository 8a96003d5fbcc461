//! What the standings display shows
//!
//! Merges the two query states into a single screen. Both rendering
//! surfaces (terminal and page) draw from a [`Screen`].

use thiserror::Error;

use crate::query::QueryState;
use crate::standings::{Bar, HouseStanding, PointsHistoryEntry, StandingsView};

/// Shown while either query is outstanding
pub const LOADING_MESSAGE: &str = "Loading house points...";

/// Delay between the first ready render and the bars growing, in ms
pub const ENTRANCE_DELAY_MS: u64 = 100;

/// The two ways the display can fail, each carrying the data layer's message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    #[error("Error loading house standings: {0}")]
    Standings(String),

    #[error("Error loading points history: {0}")]
    History(String),
}

/// Resolved display state
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Loading,
    Error(DisplayError),
    Standings(StandingsFrame),
}

impl Screen {
    /// Loading wins over everything, then the standings error, then the
    /// history error.
    pub fn resolve(
        standings: &QueryState<Vec<HouseStanding>>,
        history: &QueryState<Vec<PointsHistoryEntry>>,
        animated: bool,
    ) -> Screen {
        if standings.is_loading() || history.is_loading() {
            return Screen::Loading;
        }

        if let Some(message) = standings.error() {
            return Screen::Error(DisplayError::Standings(message.to_string()));
        }

        if let Some(message) = history.error() {
            return Screen::Error(DisplayError::History(message.to_string()));
        }

        match standings.data() {
            Some(houses) => Screen::Standings(StandingsFrame {
                view: StandingsView::derive(houses),
                animated,
            }),
            None => Screen::Loading,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Screen::Standings(_))
    }
}

/// Standings ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct StandingsFrame {
    pub view: StandingsView,
    pub animated: bool,
}

impl StandingsFrame {
    pub fn bars(&self) -> Vec<Bar> {
        self.view.bars()
    }

    /// Heights currently on screen, in percent, in display order
    pub fn displayed_heights(&self) -> Vec<f64> {
        self.bars()
            .iter()
            .map(|bar| bar.height_percent(self.animated))
            .collect()
    }

    pub fn footer(&self) -> String {
        format!("Total points: {}", self.view.total_points_sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standings::House;

    fn standings() -> QueryState<Vec<HouseStanding>> {
        QueryState::Ready(vec![
            HouseStanding::new(House::Gryffindor, 120),
            HouseStanding::new(House::Slytherin, 95),
            HouseStanding::new(House::Hufflepuff, 95),
            HouseStanding::new(House::Ravenclaw, 40),
        ])
    }

    fn history() -> QueryState<Vec<PointsHistoryEntry>> {
        QueryState::Ready(Vec::new())
    }

    fn failed<T>(message: &str) -> QueryState<T> {
        QueryState::Failed(message.to_string())
    }

    #[test]
    fn test_standings_loading_wins() {
        for other in [history(), QueryState::Loading, failed("history down")] {
            assert_eq!(
                Screen::resolve(&QueryState::Loading, &other, true),
                Screen::Loading
            );
        }
    }

    #[test]
    fn test_history_loading_shows_loading() {
        assert_eq!(
            Screen::resolve(&failed("standings down"), &QueryState::Loading, false),
            Screen::Loading
        );
    }

    #[test]
    fn test_standings_error_takes_precedence() {
        let screen = Screen::resolve(&failed("standings down"), &failed("history down"), false);
        assert_eq!(
            screen,
            Screen::Error(DisplayError::Standings("standings down".to_string()))
        );
    }

    #[test]
    fn test_history_error_shown() {
        let screen = Screen::resolve(&standings(), &failed("history down"), false);
        match screen {
            Screen::Error(e) => {
                assert_eq!(e.to_string(), "Error loading points history: history down")
            }
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_ready_heights_follow_animation_flag() {
        let Screen::Standings(before) = Screen::resolve(&standings(), &history(), false) else {
            panic!("expected standings");
        };
        assert!(before.displayed_heights().iter().all(|h| *h == 0.0));

        let Screen::Standings(after) = Screen::resolve(&standings(), &history(), true) else {
            panic!("expected standings");
        };
        let heights = after.displayed_heights();
        assert_eq!(heights[0], 100.0);
        assert!((heights[3] - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(after.footer(), "Total points: 350");
    }
}
