use crate::domain::eligibility::index_eligibility;
use crate::domain::entities::{Assignment, ShiftSpec, Talent, TalentAvailability, WeekFrame};
use crate::domain::round_robin::RoundRobinPicker;
use crate::domain::rules::{AssignmentContext, AssignmentRule};
use crate::domain::scoring::{ScoreWeights, ShiftScorer};
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// Greedy assignment builder.
///
/// Slots are filled in ascending order of candidate count so shifts with few
/// eligible talents are not starved by easier ones consuming the shared pool.
/// The builder never fails; slots it cannot fill stay short and surface in
/// the understaffed report.
pub struct ScheduleBuilder {
    rules: Vec<Box<dyn AssignmentRule>>,
    weights: ScoreWeights,
    min_rest_hours: i64,
}

impl ScheduleBuilder {
    pub fn new(
        rules: Vec<Box<dyn AssignmentRule>>,
        weights: ScoreWeights,
        min_rest_hours: i64,
    ) -> Self {
        Self {
            rules,
            weights,
            min_rest_hours,
        }
    }

    /// Produce the plan for one week. History is carried as context for the
    /// rules and the scorer but is not part of the returned plan.
    #[tracing::instrument(skip_all, fields(slots = slots.len(), talents = roster.len()))]
    pub fn generate(
        &mut self,
        frame: &WeekFrame,
        slots: &BTreeMap<String, ShiftSpec>,
        roster: &[Talent],
        availability: &HashMap<Uuid, TalentAvailability>,
        history: &[Assignment],
    ) -> Vec<Assignment> {
        let eligibility = index_eligibility(slots, roster, availability);

        // Scarcity-first; the stable sort keeps the map's lexicographic key
        // order as the tie-break.
        let mut order: Vec<&String> = slots.keys().collect();
        order.sort_by_key(|id| eligibility.get(*id).map_or(0, Vec::len));

        let mut working: Vec<Assignment> = history.to_vec();
        let mut plan: Vec<Assignment> = Vec::new();
        let mut round_robin = RoundRobinPicker::new();
        let mut workload: HashMap<Uuid, f64> =
            availability.keys().map(|id| (*id, 0.0)).collect();

        for slot_id in order {
            let shift = &slots[slot_id];
            let Some(candidates) = eligibility.get(slot_id) else {
                continue;
            };
            if candidates.is_empty() {
                tracing::debug!(slot = %slot_id, "no eligible talents");
                continue;
            }

            let assigned_here = self.fill_slot(
                slot_id,
                shift,
                candidates,
                frame,
                availability,
                &mut working,
                &mut plan,
                &mut round_robin,
                &mut workload,
            );
            if assigned_here < shift.required_count {
                tracing::debug!(
                    slot = %slot_id,
                    required = shift.required_count,
                    assigned = assigned_here,
                    "slot left short"
                );
            }
        }

        let scheduled_hours: f64 = workload.values().sum();
        tracing::debug!(
            assignments = plan.len(),
            scheduled_hours,
            "schedule built"
        );
        plan
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_slot(
        &mut self,
        slot_id: &str,
        shift: &ShiftSpec,
        candidates: &[Uuid],
        frame: &WeekFrame,
        availability: &HashMap<Uuid, TalentAvailability>,
        working: &mut Vec<Assignment>,
        plan: &mut Vec<Assignment>,
        round_robin: &mut RoundRobinPicker,
        workload: &mut HashMap<Uuid, f64>,
    ) -> u32 {
        // Scored once per slot against the working set as it stands; the
        // while loop below consumes this map one decision at a time.
        let scorer = ShiftScorer::new(
            shift,
            availability,
            working,
            self.weights,
            self.min_rest_hours,
        );
        let mut scores: Vec<(Uuid, f64)> = candidates
            .iter()
            .map(|&talent_id| (talent_id, scorer.score(talent_id)))
            .collect();

        let mut assigned_here = 0;
        while assigned_here < shift.required_count && !scores.is_empty() {
            let top_score = scores
                .iter()
                .map(|(_, score)| *score)
                .fold(f64::NEG_INFINITY, f64::max);
            let tops: Vec<Uuid> = scores
                .iter()
                .filter(|(_, score)| *score == top_score)
                .map(|(talent_id, _)| *talent_id)
                .collect();

            let Some(pick) = round_robin.pick(shift.role, &tops) else {
                break;
            };
            debug_assert!(candidates.contains(&pick));
            // One decision per candidate per slot, whatever the outcome.
            scores.retain(|(talent_id, _)| *talent_id != pick);

            let Some(avail) = availability.get(&pick) else {
                continue;
            };
            if !avail.allowed_shifts.contains(&shift.shift_name) {
                continue;
            }

            let context = AssignmentContext {
                talent_id: pick,
                shift,
                availability,
                assignments: working,
                frame,
            };
            if !self.rules.iter().all(|rule| rule.can_assign(&context)) {
                continue;
            }
            for rule in self.rules.iter_mut() {
                rule.mark(&context);
            }

            let assignment = Assignment::new(pick, slot_id.to_string(), shift.clone());
            plan.push(assignment.clone());
            working.push(assignment);
            *workload.entry(pick).or_insert(0.0) += shift.duration_hours();
            assigned_here += 1;
        }

        assigned_here
    }
}
