use fitzone_domain::{self as domain, ExerciseService};
use log::debug;

use crate::timer::Timer;

// ------ ------
//     Model
// ------ ------

#[derive(Debug, Default)]
pub struct Model {
    filter: domain::ExerciseFilter,
    detail: Option<Detail>,
}

/// Exercise shown in the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detail {
    pub exercise_id: domain::ExerciseID,
    pub timer: Timer,
    pub workout_started: bool,
}

impl Model {
    #[must_use]
    pub fn filter(&self) -> &domain::ExerciseFilter {
        &self.filter
    }

    #[must_use]
    pub fn detail(&self) -> Option<&Detail> {
        self.detail.as_ref()
    }

    #[must_use]
    pub fn exercises(&self, service: &impl ExerciseService) -> Vec<domain::Exercise> {
        let exercises = service.get_exercises();
        self.filter
            .exercises(exercises.iter())
            .into_iter()
            .copied()
            .collect()
    }

    #[must_use]
    pub fn exercise(&self, service: &impl ExerciseService) -> Option<domain::Exercise> {
        self.detail
            .and_then(|detail| service.get_exercise(detail.exercise_id))
    }
}

// ------ ------
//    Update
// ------ ------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    CategorySelected(Option<domain::Category>),
    ShowExercise(domain::ExerciseID),
    CloseExercise,

    StartWorkout,
    StopWorkout,
    ResetTimer,
    Tick,
}

pub fn update(msg: Msg, model: &mut Model, service: &impl ExerciseService) {
    match msg {
        Msg::CategorySelected(category) => {
            model.filter.category = category;
        }
        Msg::ShowExercise(exercise_id) => {
            if service.get_exercise(exercise_id).is_some() {
                model.detail = Some(Detail {
                    exercise_id,
                    timer: Timer::default(),
                    workout_started: false,
                });
            } else {
                debug!("ignoring unknown exercise {exercise_id}");
            }
        }
        Msg::CloseExercise => {
            model.detail = None;
        }
        Msg::StartWorkout => {
            if let Some(detail) = &mut model.detail {
                detail.timer.start();
                detail.workout_started = true;
            }
        }
        Msg::StopWorkout => {
            if let Some(detail) = &mut model.detail {
                detail.timer.stop();
                detail.workout_started = false;
            }
        }
        Msg::ResetTimer => {
            if let Some(detail) = &mut model.detail {
                detail.timer.reset();
            }
        }
        Msg::Tick => {
            if let Some(detail) = &mut model.detail {
                detail.timer.tick();
            }
        }
    }
}
