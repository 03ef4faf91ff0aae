use log::{error, warn};
use rand::Rng;

use crate::{
    ExerciseRepository, FormatError, GearProbe, Mission, MissionError, MissionOptions, ReadError,
    StorageError, build_mission, probe_gear_catalog, render_str,
};

pub trait MissionService {
    fn build_mission<G: Rng + ?Sized>(
        &self,
        options: &MissionOptions,
        rng: &mut G,
    ) -> Result<Mission, MissionError>;
    fn render_mission(&self, mission: &Mission, format: &str) -> Result<String, FormatError>;
    fn probe_gear_catalog<G: Rng + ?Sized>(&self, rng: &mut G)
    -> Result<Vec<GearProbe>, ReadError>;
}

pub struct Service<R> {
    repository: R,
}

impl<R: ExerciseRepository> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

macro_rules! log_on_error {
    ($result: expr, $action: literal, $entity: literal) => {{
        let result = $result;
        if let Err(ref err) = result {
            log_read_error(err, $action, $entity);
        }
        result
    }};
}

fn log_read_error(err: &ReadError, action: &str, entity: &str) {
    match err {
        ReadError::Storage(StorageError::NoConnection) => {
            warn!("failed to {action} {entity}: {err}");
        }
        _ => {
            error!("failed to {action} {entity}: {err}");
        }
    }
}

impl<R: ExerciseRepository> MissionService for Service<R> {
    fn build_mission<G: Rng + ?Sized>(
        &self,
        options: &MissionOptions,
        rng: &mut G,
    ) -> Result<Mission, MissionError> {
        let result = build_mission(&self.repository, options, rng);
        match result {
            Ok(ref mission) if mission.is_fallback() => {
                warn!(
                    "{} mission not possible with the given gear, using {} instead",
                    mission.requested_mode().tag(),
                    mission.resolved_mode().tag()
                );
            }
            Ok(_) => {}
            Err(ref err @ MissionError::Unbuildable { .. }) => {
                warn!("failed to build mission: {err}");
            }
            Err(MissionError::Read(ref err)) => log_read_error(err, "build", "mission"),
        }
        result
    }

    fn render_mission(&self, mission: &Mission, format: &str) -> Result<String, FormatError> {
        render_str(mission, format).inspect_err(|err| {
            error!("failed to render mission: {err}");
        })
    }

    fn probe_gear_catalog<G: Rng + ?Sized>(
        &self,
        rng: &mut G,
    ) -> Result<Vec<GearProbe>, ReadError> {
        log_on_error!(
            probe_gear_catalog(&self.repository, rng),
            "probe",
            "gear catalog"
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::{Format, Gear, GearSet, Mode, mission::tests::fixture, render};

    #[test]
    fn test_build_mission() {
        let service = Service::new(fixture());
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let mission = service
            .build_mission(&MissionOptions::default(), &mut rng)
            .unwrap();
        assert_eq!(mission.resolved_mode(), Mode::Calisthenics);

        let mission = service
            .build_mission(
                &MissionOptions {
                    gear: GearSet::bodyweight().with(Gear::new("kettlebell").unwrap()),
                    calisthenics: false,
                },
                &mut rng,
            )
            .unwrap();
        assert_eq!(mission.resolved_mode(), Mode::Standard);
    }

    #[test]
    fn test_render_mission() {
        let service = Service::new(fixture());
        let mission = service
            .build_mission(&MissionOptions::default(), &mut ChaCha8Rng::seed_from_u64(0))
            .unwrap();

        assert_eq!(
            service.render_mission(&mission, "markup"),
            Ok(render(&mission, Format::Markup))
        );
        assert_eq!(
            service.render_mission(&mission, "latex"),
            Err(FormatError::InvalidFormat("latex".to_string()))
        );
    }

    #[test]
    fn test_probe_gear_catalog() {
        let service = Service::new(fixture());
        let probes = service
            .probe_gear_catalog(&mut ChaCha8Rng::seed_from_u64(0))
            .unwrap();

        assert_eq!(
            probes.iter().map(|p| p.gear.to_string()).collect::<Vec<_>>(),
            vec!["kettlebell", "pull up bar", "resistance band"]
        );
        assert!(!probes[1].can_complete_standard);
    }

    #[test]
    fn test_service_borrows_repository() {
        let repository = fixture();
        let service = Service::new(&repository);
        service
            .build_mission(&MissionOptions::default(), &mut ChaCha8Rng::seed_from_u64(0))
            .unwrap();

        assert!(!service.repository().queries.borrow().is_empty());
    }
}
