use std::{collections::BTreeSet, slice::Iter, str::FromStr};

use strum::{EnumString, IntoStaticStr};

use crate::{Gear, Name, ReadError};

/// Read-only access to the exercise dataset.
pub trait ExerciseRepository {
    /// All exercises of the given focus that can be performed with the given gear.
    fn find_candidates(&self, focus: Focus, gear: &GearSet) -> Result<Vec<Exercise>, ReadError>;
    /// Every distinct gear name referenced by the dataset, excluding bodyweight.
    fn read_gear_names(&self) -> Result<Vec<Gear>, ReadError>;
}

impl<R: ExerciseRepository + ?Sized> ExerciseRepository for &R {
    fn find_candidates(&self, focus: Focus, gear: &GearSet) -> Result<Vec<Exercise>, ReadError> {
        (**self).find_candidates(focus, gear)
    }

    fn read_gear_names(&self) -> Result<Vec<Gear>, ReadError> {
        (**self).read_gear_names()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub name: Name,
    pub focus: Focus,
    pub gear: Vec<Gear>,
}

impl Exercise {
    #[must_use]
    pub fn is_bodyweight(&self) -> bool {
        self.gear.iter().all(Gear::is_none)
    }

    #[must_use]
    pub fn is_usable_with(&self, gear: &GearSet) -> bool {
        self.gear.iter().all(|g| gear.contains(g))
    }
}

#[derive(EnumString, IntoStaticStr, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Focus {
    PullUp,
    PushUp,
    Abs,
    WheelHouse,
    Assist,
    Neck,
    Grip,
}

impl Focus {
    #[must_use]
    pub fn tag(self) -> &'static str {
        self.into()
    }

    pub fn parse(tag: &str) -> Result<Self, FocusError> {
        Focus::from_str(tag.trim()).map_err(|_| FocusError::Unknown(tag.to_string()))
    }

    pub fn iter() -> Iter<'static, Focus> {
        static FOCUS: [Focus; 7] = [
            Focus::PullUp,
            Focus::PushUp,
            Focus::Abs,
            Focus::WheelHouse,
            Focus::Assist,
            Focus::Neck,
            Focus::Grip,
        ];
        FOCUS.iter()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FocusError {
    #[error("unknown focus \"{0}\"")]
    Unknown(String),
}

/// Gear available to the user. Bodyweight is always part of the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GearSet(BTreeSet<Gear>);

impl GearSet {
    #[must_use]
    pub fn bodyweight() -> Self {
        Self(BTreeSet::from([Gear::none()]))
    }

    #[must_use]
    pub fn with(mut self, gear: Gear) -> Self {
        self.0.insert(gear);
        self
    }

    #[must_use]
    pub fn contains(&self, gear: &Gear) -> bool {
        self.0.contains(gear)
    }

    /// Number of items besides bodyweight.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len() - 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for GearSet {
    fn default() -> Self {
        Self::bodyweight()
    }
}

impl FromIterator<Gear> for GearSet {
    fn from_iter<T: IntoIterator<Item = Gear>>(iter: T) -> Self {
        let mut gear_set = GearSet::bodyweight();
        gear_set.0.extend(iter);
        gear_set
    }
}

impl Extend<Gear> for GearSet {
    fn extend<T: IntoIterator<Item = Gear>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn exercise(gear: &[&str]) -> Exercise {
        Exercise {
            name: Name::new("A").unwrap(),
            focus: Focus::Grip,
            gear: gear.iter().map(|g| Gear::new(g).unwrap()).collect(),
        }
    }

    #[rstest]
    #[case(&[], &[], true)]
    #[case(&["none"], &[], true)]
    #[case(&["kettlebell"], &[], false)]
    #[case(&["kettlebell"], &["kettlebell"], true)]
    #[case(&["Kettlebell"], &["kettlebell"], true)]
    #[case(&["kettlebell", "box"], &["kettlebell"], false)]
    #[case(&["kettlebell", "box"], &["box", "kettlebell", "barbell"], true)]
    fn test_exercise_is_usable_with(
        #[case] required: &[&str],
        #[case] available: &[&str],
        #[case] expected: bool,
    ) {
        let gear = available
            .iter()
            .map(|g| Gear::new(g).unwrap())
            .collect::<GearSet>();
        assert_eq!(exercise(required).is_usable_with(&gear), expected);
    }

    #[rstest]
    #[case(&[], true)]
    #[case(&["none"], true)]
    #[case(&["none", "box"], false)]
    fn test_exercise_is_bodyweight(#[case] required: &[&str], #[case] expected: bool) {
        assert_eq!(exercise(required).is_bodyweight(), expected);
    }

    #[rstest]
    #[case(Focus::PullUp, "pull-up")]
    #[case(Focus::WheelHouse, "wheel-house")]
    #[case(Focus::Abs, "abs")]
    fn test_focus_tag(#[case] focus: Focus, #[case] expected: &str) {
        assert_eq!(focus.tag(), expected);
    }

    #[test]
    fn test_focus_parse_tag() {
        for focus in Focus::iter() {
            assert_eq!(Focus::parse(focus.tag()), Ok(*focus));
        }
    }

    #[test]
    fn test_focus_iter() {
        let foci = Focus::iter().copied().collect::<Vec<_>>();
        let mut sorted = foci.clone();
        sorted.sort();
        sorted.dedup();

        assert_eq!(foci.len(), 7);
        assert_eq!(sorted, foci);
    }

    #[rstest]
    #[case("wheel-house", Ok(Focus::WheelHouse))]
    #[case(" Pull-Up ", Ok(Focus::PullUp))]
    #[case("legs", Err(FocusError::Unknown("legs".to_string())))]
    fn test_focus_parse(#[case] tag: &str, #[case] expected: Result<Focus, FocusError>) {
        assert_eq!(Focus::parse(tag), expected);
    }

    #[test]
    fn test_gear_set_contains_bodyweight() {
        assert!(GearSet::bodyweight().contains(&Gear::none()));
        assert!(GearSet::default().is_empty());
        assert!(
            [Gear::new("box").unwrap()]
                .into_iter()
                .collect::<GearSet>()
                .contains(&Gear::none())
        );
    }

    #[test]
    fn test_gear_set_len() {
        let gear = GearSet::bodyweight()
            .with(Gear::new("box").unwrap())
            .with(Gear::new("Box").unwrap())
            .with(Gear::none());
        assert_eq!(gear.len(), 1);
        assert!(!gear.is_empty());
    }
}
