use crate::domain::entities::{Assignment, ShiftSpec, TalentAvailability};
use chrono::{Duration, NaiveDateTime};
use serde::Deserialize;
use std::collections::HashMap;
use uuid::Uuid;

/// Weights of the fitness score. Tunable through settings.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoreWeights {
    /// Penalty per worked day in the prior six days.
    pub streak_weight: f64,
    /// Reward per rested day in the prior six days.
    pub rest_weight: f64,
    /// Flat penalty when yesterday's shift ended inside the rest gap.
    pub rest_penalty: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            streak_weight: 2.0,
            rest_weight: 2.0,
            rest_penalty: 5.0,
        }
    }
}

/// Fitness of each candidate for one shift, judged against the current
/// working assignment set. Higher is better.
pub struct ShiftScorer<'a> {
    shift: &'a ShiftSpec,
    availability: &'a HashMap<Uuid, TalentAvailability>,
    assignments: &'a [Assignment],
    weights: ScoreWeights,
    min_rest_hours: i64,
}

impl<'a> ShiftScorer<'a> {
    pub fn new(
        shift: &'a ShiftSpec,
        availability: &'a HashMap<Uuid, TalentAvailability>,
        assignments: &'a [Assignment],
        weights: ScoreWeights,
        min_rest_hours: i64,
    ) -> Self {
        Self {
            shift,
            availability,
            assignments,
            weights,
            min_rest_hours,
        }
    }

    /// Remaining weekly hours, minus streak pressure, plus banked rest, minus
    /// a flat penalty for a tight turnaround.
    pub fn score(&self, talent_id: Uuid) -> f64 {
        let mut score = 0.0;

        if let Some(avail) = self.availability.get(&talent_id) {
            let assigned_hours: f64 = self
                .assignments
                .iter()
                .filter(|a| a.talent_id == talent_id)
                .map(|a| a.shift.duration_hours())
                .sum();
            score += avail.weekly_hours - assigned_hours;
        }

        let current = self.shift.date();
        let mut work_streak = 0.0;
        let mut rest_days = 0.0;
        for delta in 1..7 {
            let prev = current - Duration::days(delta);
            let worked = self
                .assignments
                .iter()
                .any(|a| a.talent_id == talent_id && a.shift.date() == prev);
            if worked {
                work_streak += 1.0;
            } else {
                rest_days += 1.0;
            }
        }
        score -= work_streak * self.weights.streak_weight;
        score += rest_days * self.weights.rest_weight;

        if let Some(end) = self.yesterday_end_time(talent_id) {
            if self.shift.start_time - end < Duration::hours(self.min_rest_hours) {
                score -= self.weights.rest_penalty;
            }
        }

        score
    }

    /// All candidates tied at the maximum score, in the order given.
    pub fn top_candidates(&self, eligible: &[Uuid]) -> Vec<Uuid> {
        if eligible.is_empty() {
            return Vec::new();
        }
        let scored: Vec<(Uuid, f64)> = eligible.iter().map(|&id| (id, self.score(id))).collect();
        let top = scored
            .iter()
            .map(|(_, score)| *score)
            .fold(f64::NEG_INFINITY, f64::max);
        scored
            .into_iter()
            .filter(|(_, score)| *score == top)
            .map(|(id, _)| id)
            .collect()
    }

    fn yesterday_end_time(&self, talent_id: Uuid) -> Option<NaiveDateTime> {
        let yesterday = self.shift.date() - Duration::days(1);
        self.assignments
            .iter()
            .find(|a| a.talent_id == talent_id && a.shift.date() == yesterday)
            .map(|a| a.shift.end_time)
    }
}
