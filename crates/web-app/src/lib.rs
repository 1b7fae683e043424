#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

pub mod app;
pub mod common;
pub mod exercises;
pub mod log;
pub mod routines;
mod settings;
pub mod timer;

pub use settings::Settings;

/// Request to the host that renders the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Notify(Notification),
    ScrollIntoView(Section),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Exercises,
}

impl Section {
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Exercises => "exercises",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

/// Effects collected while processing a message.
#[derive(Debug, Default)]
pub struct Orders {
    effects: Vec<Effect>,
}

impl Orders {
    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) -> &mut Self {
        self.effects.push(Effect::Notify(Notification {
            kind,
            message: message.into(),
        }));
        self
    }

    pub fn scroll_into_view(&mut self, section: Section) -> &mut Self {
        self.effects.push(Effect::ScrollIntoView(section));
        self
    }

    #[must_use]
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn take(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }
}
