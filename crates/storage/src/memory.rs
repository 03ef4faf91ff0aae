use std::collections::BTreeSet;

use mission_domain::{self as domain, Exercise, Focus, Gear, GearSet, ReadError};

/// Read-only exercise dataset held in memory.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    exercises: Vec<Exercise>,
}

impl Catalog {
    #[must_use]
    pub fn new(exercises: Vec<Exercise>) -> Self {
        Self { exercises }
    }

    #[must_use]
    pub fn builtin() -> Self {
        Self::new(domain::catalog::EXERCISES.clone())
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

impl domain::ExerciseRepository for Catalog {
    fn find_candidates(&self, focus: Focus, gear: &GearSet) -> Result<Vec<Exercise>, ReadError> {
        Ok(self
            .exercises
            .iter()
            .filter(|e| e.focus == focus && e.is_usable_with(gear))
            .cloned()
            .collect())
    }

    fn read_gear_names(&self) -> Result<Vec<Gear>, ReadError> {
        Ok(self
            .exercises
            .iter()
            .flat_map(|e| e.gear.iter())
            .filter(|g| !g.is_none())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect())
    }
}
