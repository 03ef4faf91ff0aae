use std::sync::LazyLock;

use crate::{Exercise, Focus, Gear, Name};

pub const AB_WHEEL: &str = "ab wheel";
pub const BARBELL: &str = "barbell";
pub const BOX: &str = "box";
pub const DUMBBELL: &str = "dumbbell";
pub const GYMNASTIC_RINGS: &str = "gymnastic rings";
pub const KETTLEBELL: &str = "kettlebell";
pub const NECK_HARNESS: &str = "neck harness";
pub const PARALLEL_BARS: &str = "parallel bars";
pub const PULL_UP_BAR: &str = "pull up bar";
pub const RESISTANCE_BAND: &str = "resistance band";
pub const WRIST_ROLLER: &str = "wrist roller";

#[derive(Clone)]
struct BaseExercise {
    pub name: &'static str,
    pub focus: Focus,
    pub gear: &'static [&'static str],
    pub variants: &'static [ExerciseVariant],
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct ExerciseVariant {
    pub name: &'static str,
    pub gear: Option<&'static [&'static str]>,
}

impl ExerciseVariant {
    const fn default() -> Self {
        Self {
            name: "",
            gear: None,
        }
    }
}

fn exercise(name: &'static str, focus: Focus, gear: &'static [&'static str]) -> Exercise {
    Exercise {
        name: Name::from_static(name),
        focus,
        gear: gear.iter().copied().map(Gear::from_static).collect(),
    }
}

/// The built-in exercise dataset, sorted by name.
pub static EXERCISES: LazyLock<Vec<Exercise>> = LazyLock::new(|| {
    let mut exercises = EXERCISE_VARIANTS
        .iter()
        .flat_map(|e| {
            std::iter::once(exercise(e.name, e.focus, e.gear)).chain(e.variants.iter().map(|v| {
                exercise(v.name, e.focus, v.gear.unwrap_or(e.gear))
            }))
        })
        .collect::<Vec<Exercise>>();
    exercises.sort_by(|a, b| a.name.cmp(&b.name));
    exercises
});

const EXERCISE_VARIANTS: [BaseExercise; 24] = [
    BaseExercise {
        name: "Ab Wheel Rollout",
        focus: Focus::Abs,
        gear: &[AB_WHEEL],
        variants: &[ExerciseVariant {
            name: "Kneeling Ab Wheel Rollout",
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        name: "Band Pull Apart",
        focus: Focus::Assist,
        gear: &[RESISTANCE_BAND],
        variants: &[ExerciseVariant {
            name: "Band Face Pull",
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        name: "Bent Over Row",
        focus: Focus::Assist,
        gear: &[BARBELL],
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Row",
                gear: Some(&[DUMBBELL]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Kettlebell Row",
                gear: Some(&[KETTLEBELL]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Resistance Band Row",
                gear: Some(&[RESISTANCE_BAND]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Ring Row",
                gear: Some(&[GYMNASTIC_RINGS]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Chin Up",
        focus: Focus::PullUp,
        gear: &[PULL_UP_BAR],
        variants: &[
            ExerciseVariant {
                name: "Ring Chin Up",
                gear: Some(&[GYMNASTIC_RINGS]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Crunch",
        focus: Focus::Abs,
        gear: &[],
        variants: &[ExerciseVariant {
            name: "Reverse Crunch",
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        name: "Dead Hang",
        focus: Focus::Grip,
        gear: &[PULL_UP_BAR],
        variants: &[
            ExerciseVariant {
                name: "Ring Dead Hang",
                gear: Some(&[GYMNASTIC_RINGS]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Towel Dead Hang",
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Deadlift",
        focus: Focus::WheelHouse,
        gear: &[BARBELL],
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Romanian Deadlift",
                gear: Some(&[DUMBBELL]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Kettlebell Deadlift",
                gear: Some(&[KETTLEBELL]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Romanian Deadlift",
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Dip",
        focus: Focus::PushUp,
        gear: &[PARALLEL_BARS],
        variants: &[
            ExerciseVariant {
                name: "Ring Dip",
                gear: Some(&[GYMNASTIC_RINGS]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Doorframe Row",
        focus: Focus::PullUp,
        gear: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Farmer Carry",
        focus: Focus::Grip,
        gear: &[KETTLEBELL],
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Farmer Carry",
                gear: Some(&[DUMBBELL]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Hanging Leg Raise",
        focus: Focus::Abs,
        gear: &[PULL_UP_BAR],
        variants: &[ExerciseVariant {
            name: "Hanging Knee Raise",
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        name: "Hollow Hold",
        focus: Focus::Abs,
        gear: &[],
        variants: &[ExerciseVariant {
            name: "Hollow Rock",
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        name: "Kettlebell Swing",
        focus: Focus::Assist,
        gear: &[KETTLEBELL],
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Swing",
                gear: Some(&[DUMBBELL]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Lunge",
        focus: Focus::WheelHouse,
        gear: &[],
        variants: &[
            ExerciseVariant {
                name: "Barbell Lunge",
                gear: Some(&[BARBELL]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Lunge",
                gear: Some(&[DUMBBELL]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Neck Bridge",
        focus: Focus::Neck,
        gear: &[],
        variants: &[ExerciseVariant {
            name: "Front Neck Bridge",
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        name: "Neck Curl",
        focus: Focus::Neck,
        gear: &[],
        variants: &[
            ExerciseVariant {
                name: "Neck Harness Extension",
                gear: Some(&[NECK_HARNESS]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Pike Push Up",
        focus: Focus::PushUp,
        gear: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Pistol Squat",
        focus: Focus::WheelHouse,
        gear: &[],
        variants: &[
            ExerciseVariant {
                name: "Box Pistol Squat",
                gear: Some(&[BOX]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Kettlebell Pistol Squat",
                gear: Some(&[KETTLEBELL]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Plank",
        focus: Focus::Abs,
        gear: &[],
        variants: &[ExerciseVariant {
            name: "Side Plank",
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        name: "Plate Pinch",
        focus: Focus::Grip,
        gear: &[BARBELL],
        variants: &[],
    },
    BaseExercise {
        name: "Pull Up",
        focus: Focus::PullUp,
        gear: &[PULL_UP_BAR],
        variants: &[
            ExerciseVariant {
                name: "Assisted Pull Up",
                gear: Some(&[PULL_UP_BAR, RESISTANCE_BAND]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Ring Pull Up",
                gear: Some(&[GYMNASTIC_RINGS]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Push Up",
        focus: Focus::PushUp,
        gear: &[],
        variants: &[
            ExerciseVariant {
                name: "Diamond Push Up",
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Ring Push Up",
                gear: Some(&[GYMNASTIC_RINGS]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Squat",
        focus: Focus::WheelHouse,
        gear: &[],
        variants: &[
            ExerciseVariant {
                name: "Barbell Squat",
                gear: Some(&[BARBELL]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Goblet Squat",
                gear: Some(&[KETTLEBELL]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Jump Squat",
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Wrist Roller",
        focus: Focus::Grip,
        gear: &[WRIST_ROLLER],
        variants: &[],
    },
];
