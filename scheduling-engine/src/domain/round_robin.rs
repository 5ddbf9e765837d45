use shared::Role;
use std::collections::HashMap;
use uuid::Uuid;

/// Stateful tie-breaker over equally-scored candidates.
///
/// One pointer per role, persistent across shifts within a single build, so
/// repeated ties rotate through the pool instead of always landing on the
/// first candidate.
#[derive(Debug, Default)]
pub struct RoundRobinPicker {
    pointers: HashMap<Role, usize>,
}

impl RoundRobinPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pick(&mut self, role: Role, candidates: &[Uuid]) -> Option<Uuid> {
        if candidates.is_empty() {
            return None;
        }
        let idx = self.pointers.get(&role).copied().unwrap_or(0) % candidates.len();
        let chosen = candidates[idx];
        self.pointers.insert(role, (idx + 1) % candidates.len());
        Some(chosen)
    }
}
