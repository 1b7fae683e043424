use std::cell::RefCell;

use fitzone_domain::{
    self as domain, DeleteError, Exercise, ExerciseID, Modification, Name, Routine, RoutineID,
    UpdateError,
};
use log::debug;

const DEFAULT_ROUTINES: [(&str, &str); 2] = [
    (
        "Full Body Workout",
        "Complete full body workout focusing on all muscle groups",
    ),
    ("Upper Body Strength", "Focus on chest, shoulders, back and arms"),
];

/// Routine store living for the duration of a page session.
///
/// All routines are owned by the store. Callers only ever receive copies, so a routine can only be
/// changed through the repository methods.
pub struct Storage {
    routines: RefCell<Vec<Routine>>,
}

impl Storage {
    /// A store containing the default routines.
    #[must_use]
    pub fn new() -> Self {
        Self::with_routines(
            DEFAULT_ROUTINES
                .into_iter()
                .zip(1_u32..)
                .filter_map(|((name, description), id)| {
                    Name::new(name)
                        .ok()
                        .map(|name| Routine::new(id.into(), name, description))
                })
                .collect(),
        )
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::with_routines(Vec::new())
    }

    #[must_use]
    pub fn with_routines(routines: Vec<Routine>) -> Self {
        Self {
            routines: RefCell::new(routines),
        }
    }

    fn modify(
        &self,
        id: RoutineID,
        f: impl FnOnce(&mut Routine) -> bool,
    ) -> Result<Modification, UpdateError> {
        let mut routines = self.routines.borrow_mut();
        let routine = routines
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(UpdateError::UnknownRoutine(id))?;
        if f(routine) {
            Ok(Modification::Changed(routine.clone()))
        } else {
            Ok(Modification::Unchanged(routine.clone()))
        }
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}

impl domain::ExerciseRepository for Storage {
    fn read_exercises(&self) -> Vec<Exercise> {
        domain::catalog::EXERCISES.to_vec()
    }

    fn read_exercise(&self, id: ExerciseID) -> Option<Exercise> {
        domain::catalog::exercise(id).copied()
    }
}

impl domain::RoutineRepository for Storage {
    fn read_routines(&self) -> Vec<Routine> {
        self.routines.borrow().clone()
    }

    fn read_routine(&self, id: RoutineID) -> Option<Routine> {
        self.routines.borrow().iter().find(|r| r.id == id).cloned()
    }

    fn create_routine(&self, name: Name, description: &str) -> Routine {
        let mut routines = self.routines.borrow_mut();
        let routine = Routine::new(
            RoutineID::next(routines.iter().map(|r| r.id)),
            name,
            description,
        );
        debug!("created routine {}", routine.id);
        routines.push(routine.clone());
        routine
    }

    fn add_exercise(
        &self,
        id: RoutineID,
        exercise_id: ExerciseID,
    ) -> Result<Modification, UpdateError> {
        self.modify(id, |routine| routine.add_exercise(exercise_id))
    }

    fn remove_exercise(
        &self,
        id: RoutineID,
        exercise_id: ExerciseID,
    ) -> Result<Modification, UpdateError> {
        self.modify(id, |routine| routine.remove_exercise(exercise_id))
    }

    fn delete_routine(&self, id: RoutineID) -> Result<RoutineID, DeleteError> {
        let mut routines = self.routines.borrow_mut();
        let len = routines.len();
        routines.retain(|r| r.id != id);
        if routines.len() == len {
            return Err(DeleteError::UnknownRoutine(id));
        }
        debug!("deleted routine {id}");
        Ok(id)
    }
}
