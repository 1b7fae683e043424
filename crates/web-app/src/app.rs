use fitzone_domain::{self as domain, ExerciseService, RoutineService};
use log::debug;

use crate::{Effect, Orders, Section, Settings, exercises, routines};

/// Root of the page, owning the service and the state of all sections.
pub struct App<S> {
    service: S,
    settings: Settings,
    exercises: exercises::Model,
    routines: routines::Model,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Request from the page header to show the routines.
    ShowRoutines,
    AddToRoutine(domain::ExerciseID),
    Exercises(exercises::Msg),
    Routines(routines::Msg),
}

impl<S: RoutineService + ExerciseService> App<S> {
    pub fn new(service: S, settings: Settings) -> Self {
        debug!("starting app with {settings:?}");
        Self {
            service,
            routines: routines::Model::new(&settings),
            exercises: exercises::Model::default(),
            settings,
        }
    }

    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        let mut orders = Orders::default();
        match msg {
            Msg::ShowRoutines => {
                self.update_routines(routines::Msg::ShowRoutineList, &mut orders);
                orders.scroll_into_view(Section::Exercises);
            }
            Msg::AddToRoutine(exercise_id) => {
                self.update_routines(
                    routines::Msg::ShowAddExerciseDialog(exercise_id),
                    &mut orders,
                );
            }
            Msg::Exercises(msg) => {
                exercises::update(msg, &mut self.exercises, &self.service);
            }
            Msg::Routines(msg) => {
                self.update_routines(msg, &mut orders);
            }
        }
        orders.take()
    }

    fn update_routines(&mut self, msg: routines::Msg, orders: &mut Orders) {
        routines::update(
            msg,
            &mut self.routines,
            &self.service,
            &self.settings,
            orders,
        );
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn exercises(&self) -> &exercises::Model {
        &self.exercises
    }

    pub fn routines(&self) -> &routines::Model {
        &self.routines
    }
}

#[cfg(test)]
mod tests {
    use fitzone_storage::in_memory::Storage;
    use pretty_assertions::assert_eq;

    use crate::{Notification, NotificationKind, routines::State};

    use super::*;

    fn app() -> App<domain::Service<Storage>> {
        App::new(domain::Service::new(Storage::new()), Settings::default())
    }

    #[test]
    fn test_show_routines() {
        let mut app = app();
        assert!(!app.routines().list_visible());
        assert_eq!(
            app.update(Msg::ShowRoutines),
            vec![Effect::ScrollIntoView(Section::Exercises)]
        );
        assert!(app.routines().list_visible());
    }

    #[test]
    fn test_show_routines_from_settings() {
        let app = App::new(
            domain::Service::new(Storage::new()),
            Settings {
                show_routines: true,
                ..Settings::default()
            },
        );
        assert!(app.routines().list_visible());
    }

    #[test]
    fn test_add_to_routine_from_exercise_detail() {
        let mut app = app();
        app.update(Msg::Exercises(exercises::Msg::ShowExercise(8.into())));
        app.update(Msg::AddToRoutine(8.into()));
        assert_eq!(app.routines().state(), State::SelectingTarget);

        app.update(Msg::Routines(routines::Msg::TargetSelected(1.into())));
        assert_eq!(
            app.update(Msg::Routines(routines::Msg::AddExercise)),
            vec![Effect::Notify(Notification {
                kind: NotificationKind::Success,
                message: String::from("Pull-ups added to Full Body Workout"),
            })]
        );
        assert_eq!(
            app.service().get_routine(1.into()).map(|r| r.exercises),
            Some(vec![8.into()])
        );
        assert_eq!(
            app.exercises()
                .exercise(app.service())
                .map(|e| e.name),
            Some("Pull-ups")
        );
    }

    #[test]
    fn test_exercise_messages_produce_no_effects() {
        let mut app = app();
        assert_eq!(
            app.update(Msg::Exercises(exercises::Msg::CategorySelected(Some(
                domain::Category::Core
            )))),
            vec![]
        );
        assert_eq!(app.exercises().exercises(app.service()).len(), 1);
        assert!(app.settings().notifications);
    }
}
