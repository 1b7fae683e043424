use log::Level;

use crate::{ExerciseID, NameError, RoutineID};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CreateError {
    #[error(transparent)]
    InvalidName(#[from] NameError),
}

impl CreateError {
    #[must_use]
    pub fn level(&self) -> Level {
        match self {
            CreateError::InvalidName(_) => Level::Debug,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UpdateError {
    #[error("unknown routine {0}")]
    UnknownRoutine(RoutineID),
    #[error("unknown exercise {0}")]
    UnknownExercise(ExerciseID),
}

impl UpdateError {
    /// Unknown exercises are silently ignored, while an unknown routine means the caller acted on
    /// a routine that is no longer in the store.
    #[must_use]
    pub fn level(&self) -> Level {
        match self {
            UpdateError::UnknownRoutine(_) => Level::Warn,
            UpdateError::UnknownExercise(_) => Level::Debug,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DeleteError {
    #[error("unknown routine {0}")]
    UnknownRoutine(RoutineID),
}

impl DeleteError {
    #[must_use]
    pub fn level(&self) -> Level {
        match self {
            DeleteError::UnknownRoutine(_) => Level::Debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_create_error_from_name_error() {
        let error = CreateError::from(NameError::Empty);
        assert_eq!(error, CreateError::InvalidName(NameError::Empty));
        assert_eq!(error.to_string(), "Please enter a name for your routine");
    }

    #[rstest]
    #[case::unknown_routine(UpdateError::UnknownRoutine(3.into()), "unknown routine 3", Level::Warn)]
    #[case::unknown_exercise(
        UpdateError::UnknownExercise(42.into()),
        "unknown exercise 42",
        Level::Debug
    )]
    fn test_update_error(
        #[case] error: UpdateError,
        #[case] message: &str,
        #[case] level: Level,
    ) {
        assert_eq!(error.to_string(), message);
        assert_eq!(error.level(), level);
    }

    #[test]
    fn test_delete_error() {
        let error = DeleteError::UnknownRoutine(7.into());
        assert_eq!(error.to_string(), "unknown routine 7");
        assert_eq!(error.level(), Level::Debug);
    }
}
