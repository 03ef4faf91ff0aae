use log::debug;
use rand::Rng;

use crate::{
    ExerciseRepository, Gear, GearSet, MissionError, MissionOptions, Mode, ReadError,
    build_mission,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GearProbe {
    pub gear: Gear,
    pub can_complete_standard: bool,
}

/// Checks for every gear item of the dataset whether it suffices, together with bodyweight, for a
/// standard mission. Each check is a single throwaway build attempt.
pub fn probe_gear_catalog<R, G>(repository: &R, rng: &mut G) -> Result<Vec<GearProbe>, ReadError>
where
    R: ExerciseRepository + ?Sized,
    G: Rng + ?Sized,
{
    let mut gear_names = repository
        .read_gear_names()?
        .into_iter()
        .filter(|g| !g.is_none())
        .collect::<Vec<_>>();
    gear_names.sort();
    gear_names.dedup();

    gear_names
        .into_iter()
        .map(|gear| {
            let options = MissionOptions {
                gear: GearSet::bodyweight().with(gear.clone()),
                calisthenics: false,
            };
            let can_complete_standard = match build_mission(repository, &options, rng) {
                Ok(mission) => mission.resolved_mode() == Mode::Standard,
                Err(MissionError::Unbuildable { .. }) => false,
                Err(MissionError::Read(err)) => return Err(err),
            };
            debug!("probed {gear}: {can_complete_standard}");
            Ok(GearProbe {
                gear,
                can_complete_standard,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::{Focus, mission::tests::Fixture};

    fn probe(fixture: &Fixture, seed: u64) -> Vec<(String, bool)> {
        probe_gear_catalog(fixture, &mut ChaCha8Rng::seed_from_u64(seed))
            .unwrap()
            .into_iter()
            .map(|p| (p.gear.to_string(), p.can_complete_standard))
            .collect()
    }

    #[test]
    fn test_probe_gear_catalog() {
        let fixture = Fixture::new(&[
            ("Band Row", Focus::Assist, &["resistance band"]),
            ("Box Jump", Focus::WheelHouse, &["box"]),
            ("Crunch", Focus::Abs, &[]),
            ("Farmer Carry", Focus::Grip, &["kettlebell"]),
            ("Kettlebell Swing", Focus::Assist, &["kettlebell"]),
            ("Neck Curl", Focus::Neck, &["none"]),
            ("Pull Up", Focus::PullUp, &["pull up bar"]),
            ("Doorframe Row", Focus::PullUp, &[]),
            ("Push Up", Focus::PushUp, &[]),
            ("Squat", Focus::WheelHouse, &[]),
        ]);

        for seed in 0..16 {
            let result = probe(&fixture, seed);
            assert_eq!(
                result.iter().map(|(g, _)| g.as_str()).collect::<Vec<_>>(),
                vec!["box", "kettlebell", "pull up bar", "resistance band"]
            );
            assert_eq!(result[0], ("box".to_string(), false));
            assert_eq!(result[1], ("kettlebell".to_string(), true));
            assert_eq!(result[2], ("pull up bar".to_string(), false));
        }
    }

    #[test]
    fn test_probe_depends_on_neck_or_grip() {
        let fixture = Fixture::new(&[
            ("Band Row", Focus::Assist, &["resistance band"]),
            ("Crunch", Focus::Abs, &[]),
            ("Dead Hang", Focus::Grip, &["pull up bar"]),
            ("Neck Curl", Focus::Neck, &[]),
            ("Doorframe Row", Focus::PullUp, &[]),
            ("Push Up", Focus::PushUp, &[]),
            ("Squat", Focus::WheelHouse, &[]),
        ]);
        let outcomes = (0..32)
            .map(|seed| probe(&fixture, seed)[1].1)
            .collect::<std::collections::HashSet<_>>();

        assert_eq!(outcomes.len(), 2);
    }

    #[test]
    fn test_probe_without_unrelated_focus() {
        let fixture = Fixture::new(&[
            ("Band Row", Focus::Assist, &["resistance band"]),
            ("Crunch", Focus::Abs, &[]),
            ("Neck Curl", Focus::Neck, &[]),
            ("Farmer Carry", Focus::Grip, &[]),
            ("Doorframe Row", Focus::PullUp, &[]),
            ("Push Up", Focus::PushUp, &[]),
            ("Ring Dip", Focus::PushUp, &["gymnastic rings"]),
        ]);

        assert_eq!(
            probe(&fixture, 0),
            vec![
                ("gymnastic rings".to_string(), false),
                ("resistance band".to_string(), false),
            ]
        );
    }
}
