use std::slice::Iter;

use chrono::Duration;
use derive_more::{Deref, Display};

#[allow(clippy::module_name_repetitions)]
pub trait ExerciseRepository {
    fn read_exercises(&self) -> Vec<Exercise>;
    fn read_exercise(&self, id: ExerciseID) -> Option<Exercise>;
}

#[allow(clippy::module_name_repetitions)]
pub trait ExerciseService {
    fn get_exercises(&self) -> Vec<Exercise>;
    fn get_exercise(&self, id: ExerciseID) -> Option<Exercise>;
}

/// An entry of the exercise catalog.
///
/// Catalog entries are static and never change during a session, so all display data is borrowed
/// for `'static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: &'static str,
    pub category: Category,
    pub difficulty: Difficulty,
    pub minutes: u32,
    pub calories: u32,
    pub image: &'static str,
    pub description: &'static str,
    pub instructions: &'static [&'static str],
    pub sets: &'static str,
    pub reps: &'static str,
    pub rest_time: &'static str,
    pub equipment: &'static str,
    pub target_muscles: &'static [&'static str],
}

impl Exercise {
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.minutes))
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(u32);

impl ExerciseID {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }
}

impl From<u32> for ExerciseID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    Chest,
    Back,
    Legs,
    Arms,
    Shoulders,
    Core,
    Cardio,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORY: [Category; 7] = [
            Category::Chest,
            Category::Back,
            Category::Legs,
            Category::Arms,
            Category::Shoulders,
            Category::Core,
            Category::Cardio,
        ];
        CATEGORY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Chest => "Chest",
            Category::Back => "Back",
            Category::Legs => "Legs",
            Category::Arms => "Arms",
            Category::Shoulders => "Shoulders",
            Category::Core => "Core",
            Category::Cardio => "Cardio",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTY: [Difficulty; 3] = [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ];
        DIFFICULTY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// Category selection of the exercise list. No category means all exercises are shown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub category: Option<Category>,
}

impl ExerciseFilter {
    pub const ALL: &'static str = "All";

    #[must_use]
    pub fn exercises<'a>(
        &self,
        exercises: impl Iterator<Item = &'a Exercise>,
    ) -> Vec<&'a Exercise> {
        exercises
            .filter(|e| self.category.is_none_or(|c| c == e.category))
            .collect()
    }

    /// All selectable categories, starting with the entry for all exercises.
    #[must_use]
    pub fn category_list(&self) -> Vec<(Option<Category>, bool)> {
        std::iter::once((None, self.category.is_none()))
            .chain(
                Category::iter().map(|c| (Some(*c), self.category == Some(*c))),
            )
            .collect()
    }

    #[must_use]
    pub fn category_name(category: Option<Category>) -> &'static str {
        category.map_or(Self::ALL, Category::name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
    }
}
