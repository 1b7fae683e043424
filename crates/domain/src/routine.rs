use chrono::Duration;
use derive_more::{Deref, Display};

use crate::{CreateError, DeleteError, ExerciseID, Name, UpdateError};

#[allow(clippy::module_name_repetitions)]
pub trait RoutineRepository {
    fn read_routines(&self) -> Vec<Routine>;
    fn read_routine(&self, id: RoutineID) -> Option<Routine>;
    fn create_routine(&self, name: Name, description: &str) -> Routine;
    fn add_exercise(
        &self,
        id: RoutineID,
        exercise_id: ExerciseID,
    ) -> Result<Modification, UpdateError>;
    fn remove_exercise(
        &self,
        id: RoutineID,
        exercise_id: ExerciseID,
    ) -> Result<Modification, UpdateError>;
    fn delete_routine(&self, id: RoutineID) -> Result<RoutineID, DeleteError>;
}

#[allow(clippy::module_name_repetitions)]
pub trait RoutineService {
    fn get_routines(&self) -> Vec<Routine>;
    fn get_routine(&self, id: RoutineID) -> Option<Routine>;
    fn create_routine(&self, name: &str, description: &str) -> Result<Routine, CreateError>;
    fn add_exercise_to_routine(
        &self,
        id: RoutineID,
        exercise_id: ExerciseID,
    ) -> Result<Modification, UpdateError>;
    fn remove_exercise_from_routine(
        &self,
        id: RoutineID,
        exercise_id: ExerciseID,
    ) -> Result<Modification, UpdateError>;
    fn delete_routine(&self, id: RoutineID) -> Result<RoutineID, DeleteError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routine {
    pub id: RoutineID,
    pub name: Name,
    pub description: String,
    pub exercises: Vec<ExerciseID>,
}

impl Routine {
    pub const DEFAULT_DESCRIPTION: &'static str = "Custom routine";
    pub const MINUTES_PER_EXERCISE: i64 = 5;

    #[must_use]
    pub fn new(id: RoutineID, name: Name, description: &str) -> Self {
        Self {
            id,
            name,
            description: if description.is_empty() {
                Self::DEFAULT_DESCRIPTION.to_string()
            } else {
                description.to_string()
            },
            exercises: Vec::new(),
        }
    }

    #[must_use]
    pub fn contains(&self, exercise_id: ExerciseID) -> bool {
        self.exercises.contains(&exercise_id)
    }

    #[must_use]
    pub fn num_exercises(&self) -> usize {
        self.exercises.len()
    }

    /// Rough time needed to complete the routine.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::minutes(
            i64::try_from(self.exercises.len()).unwrap_or_default() * Self::MINUTES_PER_EXERCISE,
        )
    }

    /// Appends the exercise unless it is already part of the routine.
    pub fn add_exercise(&mut self, exercise_id: ExerciseID) -> bool {
        if self.contains(exercise_id) {
            return false;
        }
        self.exercises.push(exercise_id);
        true
    }

    pub fn remove_exercise(&mut self, exercise_id: ExerciseID) -> bool {
        let len = self.exercises.len();
        self.exercises.retain(|id| *id != exercise_id);
        self.exercises.len() != len
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RoutineID(u32);

impl RoutineID {
    /// The identifier following the largest one in use, or 1 if there is none.
    #[must_use]
    pub fn next(ids: impl Iterator<Item = RoutineID>) -> Self {
        Self(ids.map(|id| id.0).max().map_or(1, |max| max + 1))
    }
}

impl From<u32> for RoutineID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Result of a change to the exercise list of a routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modification {
    Changed(Routine),
    Unchanged(Routine),
}

impl Modification {
    #[must_use]
    pub fn routine(&self) -> &Routine {
        match self {
            Modification::Changed(routine) | Modification::Unchanged(routine) => routine,
        }
    }

    #[must_use]
    pub fn into_routine(self) -> Routine {
        match self {
            Modification::Changed(routine) | Modification::Unchanged(routine) => routine,
        }
    }

    #[must_use]
    pub fn is_changed(&self) -> bool {
        matches!(self, Modification::Changed(_))
    }
}
