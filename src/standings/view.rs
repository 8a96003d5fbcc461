//! Derived standings view
//!
//! Everything the chart needs is computed here from the latest fetch result:
//! order, leading score, total, and one [`Bar`] per house.

use serde::Serialize;

use super::color::{accent_color, color_for, Rgb};
use super::{House, HouseStanding};

/// Standings ordered for display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsView {
    sorted_houses: Vec<HouseStanding>,
    max_points: i64,
    total_points_sum: i64,
}

impl StandingsView {
    /// Derive the view from raw standings.
    ///
    /// Houses are ordered by total descending; equal totals keep their input
    /// order. A house listed twice keeps its first entry.
    pub fn derive(standings: &[HouseStanding]) -> Self {
        let mut sorted_houses: Vec<HouseStanding> = Vec::with_capacity(standings.len());
        for standing in standings {
            if sorted_houses.iter().any(|s| s.house == standing.house) {
                tracing::warn!("Duplicate standing for {}, keeping the first", standing.house);
                continue;
            }
            sorted_houses.push(standing.clone());
        }

        sorted_houses.sort_by(|a, b| b.total_points.cmp(&a.total_points));

        let max_points = sorted_houses
            .iter()
            .map(|s| s.total_points)
            .max()
            .unwrap_or(0)
            .max(1);

        // Summed wide so the result does not depend on order, then clamped
        let total_points_sum = sorted_houses
            .iter()
            .map(|s| i128::from(s.total_points))
            .sum::<i128>()
            .clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64;

        Self {
            sorted_houses,
            max_points,
            total_points_sum,
        }
    }

    pub fn sorted_houses(&self) -> &[HouseStanding] {
        &self.sorted_houses
    }

    /// Leading score, never below 1
    pub fn max_points(&self) -> i64 {
        self.max_points
    }

    pub fn total_points_sum(&self) -> i64 {
        self.total_points_sum
    }

    pub fn leader(&self) -> Option<&HouseStanding> {
        self.sorted_houses.first()
    }

    /// Share of the leading score, in `[0, 1]`
    pub fn height_fraction(&self, points: i64) -> f64 {
        (points as f64 / self.max_points as f64).clamp(0.0, 1.0)
    }

    /// Points behind the leader; zero for the leader itself
    pub fn deficit(&self, points: i64) -> i64 {
        self.leader()
            .map(|leader| leader.total_points.saturating_sub(points).max(0))
            .unwrap_or(0)
    }

    /// One bar per house, in display order
    pub fn bars(&self) -> Vec<Bar> {
        self.sorted_houses
            .iter()
            .map(|standing| Bar {
                house: standing.house,
                total_points: standing.total_points,
                height_fraction: self.height_fraction(standing.total_points),
                deficit: self.deficit(standing.total_points),
                fill: color_for(standing.house, standing.total_points, self.max_points),
                accent: accent_color(standing.house),
            })
            .collect()
    }
}

/// Render model for a single house column
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bar {
    pub house: House,
    pub total_points: i64,
    pub height_fraction: f64,
    pub deficit: i64,
    pub fill: Rgb,
    pub accent: Rgb,
}

impl Bar {
    /// Height shown on screen; bars stay flat until the entrance animation
    /// has started.
    pub fn height_percent(&self, animated: bool) -> f64 {
        if animated {
            self.height_fraction * 100.0
        } else {
            0.0
        }
    }

    pub fn image_path(&self) -> String {
        self.house.image_path()
    }
}
