use log::debug;
use rand::{Rng, seq::SliceRandom};

use crate::{
    Exercise, ExerciseRepository, Focus, GearSet, MissionError, Mode, SelectError, Template,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissionOptions {
    pub gear: GearSet,
    pub calisthenics: bool,
}

impl MissionOptions {
    #[must_use]
    pub fn requested_mode(&self) -> Mode {
        if self.calisthenics {
            Mode::Calisthenics
        } else {
            Mode::Standard
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionExercise {
    pub focus: Focus,
    pub exercise: Exercise,
}

/// A fully resolved workout. Its exercises always cover every slot of the resolved template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission {
    requested_mode: Mode,
    resolved_mode: Mode,
    exercises: Vec<MissionExercise>,
}

impl Mission {
    #[must_use]
    pub fn requested_mode(&self) -> Mode {
        self.requested_mode
    }

    #[must_use]
    pub fn resolved_mode(&self) -> Mode {
        self.resolved_mode
    }

    #[must_use]
    pub fn template(&self) -> &'static Template {
        self.resolved_mode.template()
    }

    #[must_use]
    pub fn exercises(&self) -> &[MissionExercise] {
        &self.exercises
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.requested_mode != self.resolved_mode
    }
}

/// Draws one exercise uniformly at random among the candidates for the focus.
pub fn select<R, G>(
    repository: &R,
    focus: Focus,
    gear: &GearSet,
    rng: &mut G,
) -> Result<Exercise, SelectError>
where
    R: ExerciseRepository + ?Sized,
    G: Rng + ?Sized,
{
    let candidates = repository.find_candidates(focus, gear)?;
    candidates
        .choose(rng)
        .cloned()
        .ok_or(SelectError::NoCandidateForFocus(focus))
}

/// Builds a mission, falling back from the standard to the calisthenics template.
///
/// Each template is attempted exactly once. A calisthenics request never falls back.
pub fn build_mission<R, G>(
    repository: &R,
    options: &MissionOptions,
    rng: &mut G,
) -> Result<Mission, MissionError>
where
    R: ExerciseRepository + ?Sized,
    G: Rng + ?Sized,
{
    let requested_mode = options.requested_mode();
    let attempts: &[Mode] = match requested_mode {
        Mode::Standard => &[Mode::Standard, Mode::Calisthenics],
        Mode::Calisthenics => &[Mode::Calisthenics],
    };

    for mode in attempts {
        match attempt(repository, mode.template(), &options.gear, rng) {
            Ok(exercises) => {
                debug!(
                    "built {} mission ({} requested)",
                    mode.tag(),
                    requested_mode.tag()
                );
                return Ok(Mission {
                    requested_mode,
                    resolved_mode: *mode,
                    exercises,
                });
            }
            Err(SelectError::NoCandidateForFocus(focus)) => {
                debug!(
                    "{} template not satisfiable: no candidate for {}",
                    mode.tag(),
                    focus.tag()
                );
            }
            Err(SelectError::Read(err)) => return Err(MissionError::Read(err)),
        }
    }

    Err(MissionError::Unbuildable {
        requested: requested_mode,
    })
}

fn attempt<R, G>(
    repository: &R,
    template: &Template,
    gear: &GearSet,
    rng: &mut G,
) -> Result<Vec<MissionExercise>, SelectError>
where
    R: ExerciseRepository + ?Sized,
    G: Rng + ?Sized,
{
    template
        .resolve(rng)
        .into_iter()
        .map(|focus| {
            select(repository, focus, gear, rng).map(|exercise| MissionExercise { focus, exercise })
        })
        .collect()
}
