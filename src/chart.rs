//! Chart-ready projection of the milestone list.
//!
//! Pure function of the list: grouping, ordering, instants, and colors are
//! all derived here so the rendering collaborator only has to draw.

use crate::date;
use crate::model::Milestone;

/// Fixed series palette; series index wraps modulo its length.
pub const PALETTE: [&str; 5] = ["#ff6384", "#36a2eb", "#4bc0c0", "#9966ff", "#ff9f40"];

/// One bar on the chart: a milestone's date range as plottable instants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Id of the source milestone, for hit-testing back to the list.
    pub id: String,

    /// Row label for this bar. Carries the milestone title; the category
    /// axis already carries the timeline names.
    pub label: String,

    /// Range start as UTC-midnight epoch milliseconds.
    pub start_ms: i64,

    /// Range end as UTC-midnight epoch milliseconds.
    pub end_ms: i64,
}

/// All bars sharing one timeline, drawn in one color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub timeline: String,
    pub color: &'static str,
    pub segments: Vec<Segment>,
}

/// Everything the rendering collaborator needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartData {
    /// Distinct timeline values, first-occurrence order; the category axis.
    pub categories: Vec<String>,

    /// One series per category, in the same order.
    pub series: Vec<Series>,
}

/// Project the milestone list into chart form.
#[must_use]
pub fn project(milestones: &[Milestone]) -> ChartData {
    let mut categories: Vec<String> = Vec::new();
    for m in milestones {
        if !categories.contains(&m.timeline) {
            categories.push(m.timeline.clone());
        }
    }

    let series = categories
        .iter()
        .enumerate()
        .map(|(index, timeline)| Series {
            timeline: timeline.clone(),
            color: PALETTE[index % PALETTE.len()],
            segments: milestones
                .iter()
                .filter(|m| &m.timeline == timeline)
                .map(|m| Segment {
                    id: m.id.clone(),
                    label: m.title.clone(),
                    start_ms: date::epoch_ms(m.start),
                    end_ms: date::epoch_ms(m.end),
                })
                .collect(),
        })
        .collect();

    ChartData { categories, series }
}
