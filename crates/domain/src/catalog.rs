use crate::{Category, Difficulty, Exercise, ExerciseID};

#[must_use]
pub fn exercise(id: ExerciseID) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| e.id == id)
}

pub static EXERCISES: [Exercise; 8] = [
    Exercise {
        id: ExerciseID::new(1),
        name: "Push-ups",
        category: Category::Chest,
        difficulty: Difficulty::Beginner,
        minutes: 15,
        calories: 120,
        image: "https://images.pexels.com/photos/416809/pexels-photo-416809.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&fit=crop",
        description: "Build upper body strength with this classic bodyweight exercise.",
        instructions: &[
            "Start in a plank position with hands slightly wider than shoulders",
            "Lower your body until chest nearly touches the floor",
            "Push back up to starting position",
            "Keep your core tight throughout the movement",
            "Maintain a straight line from head to heels",
        ],
        sets: "3 sets",
        reps: "8-15 reps",
        rest_time: "60 seconds",
        equipment: "None (Bodyweight)",
        target_muscles: &["Chest", "Shoulders", "Triceps", "Core"],
    },
    Exercise {
        id: ExerciseID::new(2),
        name: "Deadlifts",
        category: Category::Back,
        difficulty: Difficulty::Advanced,
        minutes: 20,
        calories: 180,
        image: "https://images.pexels.com/photos/703016/pexels-photo-703016.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&fit=crop",
        description: "Master the king of all exercises for full-body strength.",
        instructions: &[
            "Stand with feet hip-width apart, bar over mid-foot",
            "Bend at hips and knees to grip the bar",
            "Keep chest up and back straight",
            "Drive through heels to lift the bar",
            "Stand tall, then lower with control",
        ],
        sets: "4 sets",
        reps: "5-8 reps",
        rest_time: "2-3 minutes",
        equipment: "Barbell, Weight plates",
        target_muscles: &["Hamstrings", "Glutes", "Lower back", "Traps"],
    },
    Exercise {
        id: ExerciseID::new(3),
        name: "Squats",
        category: Category::Legs,
        difficulty: Difficulty::Intermediate,
        minutes: 18,
        calories: 150,
        image: "https://images.pexels.com/photos/4162481/pexels-photo-4162481.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&fit=crop",
        description: "Build powerful legs and glutes with proper squat technique.",
        instructions: &[
            "Stand with feet shoulder-width apart",
            "Lower by pushing hips back and bending knees",
            "Keep chest up and knees tracking over toes",
            "Descend until thighs are parallel to floor",
            "Drive through heels to return to standing",
        ],
        sets: "3 sets",
        reps: "10-15 reps",
        rest_time: "90 seconds",
        equipment: "Bodyweight or Barbell",
        target_muscles: &["Quadriceps", "Glutes", "Hamstrings", "Core"],
    },
    Exercise {
        id: ExerciseID::new(4),
        name: "Bicep Curls",
        category: Category::Arms,
        difficulty: Difficulty::Beginner,
        minutes: 12,
        calories: 90,
        image: "https://images.pexels.com/photos/1229356/pexels-photo-1229356.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&fit=crop",
        description: "Isolate and strengthen your bicep muscles effectively.",
        instructions: &[
            "Stand with feet hip-width apart, dumbbells in hands",
            "Keep elbows close to your sides",
            "Curl weights up by flexing biceps",
            "Squeeze at the top of the movement",
            "Lower with control to starting position",
        ],
        sets: "3 sets",
        reps: "12-15 reps",
        rest_time: "45 seconds",
        equipment: "Dumbbells",
        target_muscles: &["Biceps", "Forearms"],
    },
    Exercise {
        id: ExerciseID::new(5),
        name: "Shoulder Press",
        category: Category::Shoulders,
        difficulty: Difficulty::Intermediate,
        minutes: 16,
        calories: 130,
        image: "https://images.pexels.com/photos/3837757/pexels-photo-3837757.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&fit=crop",
        description: "Develop strong, stable shoulders with overhead pressing.",
        instructions: &[
            "Stand with feet shoulder-width apart",
            "Hold dumbbells at shoulder height",
            "Press weights straight up overhead",
            "Keep core engaged throughout",
            "Lower with control to starting position",
        ],
        sets: "3 sets",
        reps: "8-12 reps",
        rest_time: "75 seconds",
        equipment: "Dumbbells or Barbell",
        target_muscles: &["Shoulders", "Triceps", "Upper chest"],
    },
    Exercise {
        id: ExerciseID::new(6),
        name: "Plank",
        category: Category::Core,
        difficulty: Difficulty::Beginner,
        minutes: 10,
        calories: 80,
        image: "https://images.pexels.com/photos/3076509/pexels-photo-3076509.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&fit=crop",
        description: "Strengthen your core and improve stability with planks.",
        instructions: &[
            "Start in push-up position on forearms",
            "Keep body in straight line from head to heels",
            "Engage core muscles throughout",
            "Breathe normally while holding position",
            "Hold for specified time duration",
        ],
        sets: "3 sets",
        reps: "30-60 seconds hold",
        rest_time: "30 seconds",
        equipment: "None (Bodyweight)",
        target_muscles: &["Core", "Shoulders", "Glutes"],
    },
    Exercise {
        id: ExerciseID::new(7),
        name: "HIIT Cardio",
        category: Category::Cardio,
        difficulty: Difficulty::Advanced,
        minutes: 25,
        calories: 300,
        image: "https://images.pexels.com/photos/4162449/pexels-photo-4162449.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&fit=crop",
        description: "High-intensity interval training for maximum fat burn.",
        instructions: &[
            "Warm up for 5 minutes with light movement",
            "Alternate between high-intensity (30 sec) and rest (30 sec)",
            "Include exercises like burpees, mountain climbers, jumping jacks",
            "Maintain maximum effort during work intervals",
            "Cool down with 5 minutes of stretching",
        ],
        sets: "8-12 rounds",
        reps: "30 sec work / 30 sec rest",
        rest_time: "Built into intervals",
        equipment: "None (Bodyweight)",
        target_muscles: &["Full body", "Cardiovascular system"],
    },
    Exercise {
        id: ExerciseID::new(8),
        name: "Pull-ups",
        category: Category::Back,
        difficulty: Difficulty::Advanced,
        minutes: 14,
        calories: 140,
        image: "https://images.pexels.com/photos/4162494/pexels-photo-4162494.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&fit=crop",
        description: "Challenge your upper body with this compound movement.",
        instructions: &[
            "Hang from pull-up bar with overhand grip",
            "Hands slightly wider than shoulder-width",
            "Pull body up until chin clears the bar",
            "Lower with control to full arm extension",
            "Keep core engaged throughout movement",
        ],
        sets: "3 sets",
        reps: "5-10 reps",
        rest_time: "2 minutes",
        equipment: "Pull-up bar",
        target_muscles: &["Lats", "Rhomboids", "Biceps", "Core"],
    },
];
