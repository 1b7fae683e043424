use fitzone_domain::{self as domain, DeleteError, ExerciseService, Modification, RoutineService};
use log::{debug, warn};

use crate::{NotificationKind, Orders, Settings, common::InputField};

// ------ ------
//     Model
// ------ ------

/// Routine list, routine detail view and the dialogs for creating, filling and deleting routines.
///
/// The model only refers to routines by id. Everything shown is read from the service on demand,
/// so the detail view can never diverge from the stored routine.
#[derive(Debug)]
pub struct Model {
    list_visible: bool,
    viewing: Option<domain::RoutineID>,
    dialog: Dialog,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Hidden,
    AddExercise {
        exercise_id: domain::ExerciseID,
        target: Option<Target>,
    },
    CreateRoutine(Form),
    DeleteRoutine(domain::RoutineID),
}

/// Routine the exercise of an add dialog will be added to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Existing(domain::RoutineID),
    New(Form),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Form {
    pub name: InputField<domain::Name>,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Browsing,
    SelectingTarget,
    CreatingRoutine,
    TargetSelected(domain::RoutineID),
    ConfirmingDelete(domain::RoutineID),
}

impl Model {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            list_visible: settings.show_routines,
            viewing: None,
            dialog: Dialog::Hidden,
        }
    }

    #[must_use]
    pub fn state(&self) -> State {
        match &self.dialog {
            Dialog::Hidden => State::Browsing,
            Dialog::AddExercise { target: None, .. } => State::SelectingTarget,
            Dialog::AddExercise {
                target: Some(Target::New(_)),
                ..
            }
            | Dialog::CreateRoutine(_) => State::CreatingRoutine,
            Dialog::AddExercise {
                target: Some(Target::Existing(id)),
                ..
            } => State::TargetSelected(*id),
            Dialog::DeleteRoutine(id) => State::ConfirmingDelete(*id),
        }
    }

    #[must_use]
    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    #[must_use]
    pub fn list_visible(&self) -> bool {
        self.list_visible
    }

    #[must_use]
    pub fn viewing(&self) -> Option<domain::RoutineID> {
        self.viewing
    }

    #[must_use]
    pub fn routines(&self, service: &impl RoutineService) -> Vec<domain::Routine> {
        service.get_routines()
    }

    #[must_use]
    pub fn viewed_routine(&self, service: &impl RoutineService) -> Option<domain::Routine> {
        self.viewing.and_then(|id| service.get_routine(id))
    }

    /// Exercises of the viewed routine in routine order.
    #[must_use]
    pub fn viewed_exercises(
        &self,
        service: &(impl RoutineService + ExerciseService),
    ) -> Vec<domain::Exercise> {
        self.viewed_routine(service)
            .map(|routine| {
                routine
                    .exercises
                    .iter()
                    .filter_map(|id| service.get_exercise(*id))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn form_mut(&mut self) -> Option<&mut Form> {
        match &mut self.dialog {
            Dialog::CreateRoutine(form)
            | Dialog::AddExercise {
                target: Some(Target::New(form)),
                ..
            } => Some(form),
            Dialog::Hidden | Dialog::AddExercise { .. } | Dialog::DeleteRoutine(_) => None,
        }
    }
}

// ------ ------
//    Update
// ------ ------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    ToggleRoutineList,
    ShowRoutineList,

    ShowCreateRoutineDialog,
    ShowAddExerciseDialog(domain::ExerciseID),
    ShowDeleteRoutineDialog(domain::RoutineID),
    CloseDialog,

    TargetSelected(domain::RoutineID),
    NewTargetSelected,
    NameChanged(String),
    DescriptionChanged(String),

    SaveRoutine,
    AddExercise,
    DeleteRoutine,

    ViewRoutine(domain::RoutineID),
    CloseRoutine,
    RemoveExercise(domain::RoutineID, domain::ExerciseID),
    StartRoutine(domain::RoutineID),
}

pub fn update(
    msg: Msg,
    model: &mut Model,
    service: &(impl RoutineService + ExerciseService),
    settings: &Settings,
    orders: &mut Orders,
) {
    match msg {
        Msg::ToggleRoutineList => {
            model.list_visible = !model.list_visible;
        }
        Msg::ShowRoutineList => {
            model.list_visible = true;
        }

        Msg::ShowCreateRoutineDialog => {
            model.dialog = Dialog::CreateRoutine(Form::default());
        }
        Msg::ShowAddExerciseDialog(exercise_id) => {
            let target = if service.get_routines().is_empty() {
                Some(Target::New(Form::default()))
            } else {
                None
            };
            model.dialog = Dialog::AddExercise {
                exercise_id,
                target,
            };
        }
        Msg::ShowDeleteRoutineDialog(id) => {
            model.dialog = Dialog::DeleteRoutine(id);
        }
        Msg::CloseDialog => {
            model.dialog = Dialog::Hidden;
        }

        Msg::TargetSelected(id) => match &mut model.dialog {
            Dialog::AddExercise { target, .. } => {
                if service.get_routine(id).is_some() {
                    *target = Some(Target::Existing(id));
                } else {
                    warn!("ignoring selection of unknown routine {id}");
                }
            }
            Dialog::Hidden | Dialog::CreateRoutine(_) | Dialog::DeleteRoutine(_) => {
                warn!("ignoring routine selection outside of add dialog");
            }
        },
        Msg::NewTargetSelected => match &mut model.dialog {
            Dialog::AddExercise { target, .. } => {
                *target = Some(Target::New(Form::default()));
            }
            Dialog::Hidden | Dialog::CreateRoutine(_) | Dialog::DeleteRoutine(_) => {
                warn!("ignoring new routine selection outside of add dialog");
            }
        },
        Msg::NameChanged(name) => {
            if let Some(form) = model.form_mut() {
                form.name = InputField::new(name, domain::Name::new);
            }
        }
        Msg::DescriptionChanged(description) => {
            if let Some(form) = model.form_mut() {
                form.description = description;
            }
        }

        Msg::SaveRoutine => {
            let Some(form) = model.form_mut() else {
                warn!("ignoring save without routine form");
                return;
            };
            match service.create_routine(&form.name.input, &form.description) {
                Ok(routine) => match &mut model.dialog {
                    Dialog::AddExercise { target, .. } => {
                        *target = Some(Target::Existing(routine.id));
                    }
                    Dialog::Hidden | Dialog::CreateRoutine(_) | Dialog::DeleteRoutine(_) => {
                        model.dialog = Dialog::Hidden;
                    }
                },
                Err(err) => {
                    orders.notify(NotificationKind::Error, err.to_string());
                }
            }
        }
        Msg::AddExercise => {
            let Dialog::AddExercise {
                exercise_id,
                target: Some(Target::Existing(id)),
            } = model.dialog
            else {
                warn!("ignoring add without selected routine");
                return;
            };
            if let Ok(Modification::Changed(routine)) =
                service.add_exercise_to_routine(id, exercise_id)
            {
                if settings.notifications {
                    if let Some(exercise) = service.get_exercise(exercise_id) {
                        orders.notify(
                            NotificationKind::Success,
                            format!("{} added to {}", exercise.name, routine.name),
                        );
                    }
                }
            }
            model.dialog = Dialog::Hidden;
        }
        Msg::DeleteRoutine => {
            let Dialog::DeleteRoutine(id) = model.dialog else {
                warn!("ignoring unconfirmed routine deletion");
                return;
            };
            match service.delete_routine(id) {
                Ok(id) | Err(DeleteError::UnknownRoutine(id)) => {
                    if model.viewing == Some(id) {
                        model.viewing = None;
                    }
                }
            }
            model.dialog = Dialog::Hidden;
        }

        Msg::ViewRoutine(id) => {
            if service.get_routine(id).is_some() {
                model.viewing = Some(id);
            } else {
                warn!("ignoring view of unknown routine {id}");
            }
        }
        Msg::CloseRoutine => {
            model.viewing = None;
        }
        Msg::RemoveExercise(id, exercise_id) => {
            if let Ok(Modification::Unchanged(_)) =
                service.remove_exercise_from_routine(id, exercise_id)
            {
                debug!("exercise {exercise_id} not part of routine {id}");
            }
        }
        Msg::StartRoutine(id) => {
            if settings.notifications {
                if let Some(routine) = service.get_routine(id) {
                    orders.notify(
                        NotificationKind::Info,
                        format!("Starting workout routine: {}", routine.name),
                    );
                }
            }
        }
    }
}
