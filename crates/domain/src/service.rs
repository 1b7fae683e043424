use log::{debug, log};

use crate::{
    CreateError, DeleteError, Exercise, ExerciseID, ExerciseRepository, ExerciseService,
    Modification, Name, Routine, RoutineID, RoutineRepository, RoutineService, UpdateError,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
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
            log!(err.level(), "failed to {} {}: {err}", $action, $entity);
        }
        result
    }};
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    fn get_exercises(&self) -> Vec<Exercise> {
        self.repository.read_exercises()
    }

    fn get_exercise(&self, id: ExerciseID) -> Option<Exercise> {
        self.repository.read_exercise(id)
    }
}

impl<R: RoutineRepository + ExerciseRepository> RoutineService for Service<R> {
    fn get_routines(&self) -> Vec<Routine> {
        self.repository.read_routines()
    }

    fn get_routine(&self, id: RoutineID) -> Option<Routine> {
        self.repository.read_routine(id)
    }

    fn create_routine(&self, name: &str, description: &str) -> Result<Routine, CreateError> {
        log_on_error!(
            Name::new(name)
                .map_err(CreateError::from)
                .map(|name| self.repository.create_routine(name, description)),
            "create",
            "routine"
        )
    }

    fn add_exercise_to_routine(
        &self,
        id: RoutineID,
        exercise_id: ExerciseID,
    ) -> Result<Modification, UpdateError> {
        let result = log_on_error!(
            self.repository
                .read_exercise(exercise_id)
                .ok_or(UpdateError::UnknownExercise(exercise_id))
                .and_then(|_| self.repository.add_exercise(id, exercise_id)),
            "add exercise to",
            "routine"
        );
        if let Ok(Modification::Unchanged(_)) = result {
            debug!("exercise {exercise_id} already part of routine {id}");
        }
        result
    }

    fn remove_exercise_from_routine(
        &self,
        id: RoutineID,
        exercise_id: ExerciseID,
    ) -> Result<Modification, UpdateError> {
        log_on_error!(
            self.repository.remove_exercise(id, exercise_id),
            "remove exercise from",
            "routine"
        )
    }

    fn delete_routine(&self, id: RoutineID) -> Result<RoutineID, DeleteError> {
        log_on_error!(self.repository.delete_routine(id), "delete", "routine")
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use crate::{NameError, catalog};

    use super::*;

    #[derive(Default)]
    struct Repository {
        routines: RefCell<Vec<Routine>>,
        calls: RefCell<Vec<&'static str>>,
    }

    impl ExerciseRepository for Repository {
        fn read_exercises(&self) -> Vec<Exercise> {
            catalog::EXERCISES.to_vec()
        }

        fn read_exercise(&self, id: ExerciseID) -> Option<Exercise> {
            catalog::exercise(id).copied()
        }
    }

    impl RoutineRepository for Repository {
        fn read_routines(&self) -> Vec<Routine> {
            self.routines.borrow().clone()
        }

        fn read_routine(&self, id: RoutineID) -> Option<Routine> {
            self.routines.borrow().iter().find(|r| r.id == id).cloned()
        }

        fn create_routine(&self, name: Name, description: &str) -> Routine {
            self.calls.borrow_mut().push("create_routine");
            let routine = Routine::new(
                RoutineID::next(self.routines.borrow().iter().map(|r| r.id)),
                name,
                description,
            );
            self.routines.borrow_mut().push(routine.clone());
            routine
        }

        fn add_exercise(
            &self,
            id: RoutineID,
            exercise_id: ExerciseID,
        ) -> Result<Modification, UpdateError> {
            self.calls.borrow_mut().push("add_exercise");
            let mut routines = self.routines.borrow_mut();
            let routine = routines
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or(UpdateError::UnknownRoutine(id))?;
            if routine.add_exercise(exercise_id) {
                Ok(Modification::Changed(routine.clone()))
            } else {
                Ok(Modification::Unchanged(routine.clone()))
            }
        }

        fn remove_exercise(
            &self,
            id: RoutineID,
            _exercise_id: ExerciseID,
        ) -> Result<Modification, UpdateError> {
            self.calls.borrow_mut().push("remove_exercise");
            Err(UpdateError::UnknownRoutine(id))
        }

        fn delete_routine(&self, id: RoutineID) -> Result<RoutineID, DeleteError> {
            self.calls.borrow_mut().push("delete_routine");
            Err(DeleteError::UnknownRoutine(id))
        }
    }

    #[test]
    fn test_create_routine() {
        let service = Service::new(Repository::default());
        let routine = service.create_routine("Leg Day", "").unwrap();
        assert_eq!(routine.id, 1.into());
        assert_eq!(routine.name.as_ref(), "Leg Day");
        assert_eq!(routine.description, "Custom routine");
        assert_eq!(service.get_routines(), vec![routine]);
    }

    #[test]
    fn test_create_routine_invalid_name() {
        let service = Service::new(Repository::default());
        assert_eq!(
            service.create_routine("   ", "Core"),
            Err(CreateError::InvalidName(NameError::Empty))
        );
        assert!(service.get_routines().is_empty());
        assert!(service.repository().calls.borrow().is_empty());
    }

    #[test]
    fn test_create_routine_long_name() {
        let service = Service::new(Repository::default());
        let name = "A".repeat(65);
        let routine = service.create_routine(&name, "").unwrap();
        assert_eq!(routine.name.to_string(), name);
        assert_eq!(service.get_routines(), vec![routine]);
    }

    #[test]
    fn test_add_exercise_to_routine_unknown_exercise() {
        let service = Service::new(Repository::default());
        let routine = service.create_routine("Core", "").unwrap();
        assert_eq!(
            service.add_exercise_to_routine(routine.id, 99.into()),
            Err(UpdateError::UnknownExercise(99.into()))
        );
        assert_eq!(
            *service.repository().calls.borrow(),
            vec!["create_routine"]
        );
        assert_eq!(service.get_routine(routine.id), Some(routine));
    }

    #[test]
    fn test_add_exercise_to_routine() {
        let service = Service::new(Repository::default());
        let routine = service.create_routine("Core", "").unwrap();
        let first = service.add_exercise_to_routine(routine.id, 6.into()).unwrap();
        let second = service.add_exercise_to_routine(routine.id, 6.into()).unwrap();
        assert!(first.is_changed());
        assert!(!second.is_changed());
        assert_eq!(second.routine().exercises, vec![6.into()]);
    }

    #[test]
    fn test_errors_are_passed_through() {
        let service = Service::new(Repository::default());
        assert_eq!(
            service.remove_exercise_from_routine(5.into(), 1.into()),
            Err(UpdateError::UnknownRoutine(5.into()))
        );
        assert_eq!(
            service.delete_routine(5.into()),
            Err(DeleteError::UnknownRoutine(5.into()))
        );
    }

    #[test]
    fn test_get_exercises() {
        let service = Service::new(Repository::default());
        assert_eq!(service.get_exercises().len(), 8);
        assert_eq!(
            service.get_exercise(3.into()).map(|e| e.name),
            Some("Squats")
        );
        assert_eq!(service.get_exercise(0.into()), None);
    }
}
