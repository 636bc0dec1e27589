//! Per-day ledger of task checkboxes and optional metrics.

use std::{collections::BTreeMap, str::FromStr};

use serde::{Deserialize, Serialize};

/// One checkbox on a day record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskName {
    Diet,
    Workout1,
    Workout2,
    Workout3,
    Water,
    Reading,
    ProgressPhoto,
}

impl FromStr for TaskName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "diet" => Ok(TaskName::Diet),
            "workout1" | "workout_1" => Ok(TaskName::Workout1),
            "workout2" | "workout_2" => Ok(TaskName::Workout2),
            "workout3" | "workout_3" => Ok(TaskName::Workout3),
            "water" => Ok(TaskName::Water),
            "reading" => Ok(TaskName::Reading),
            "progress_photo" | "photo" => Ok(TaskName::ProgressPhoto),
            _ => Err(format!("Invalid task name: {s}")),
        }
    }
}

impl TaskName {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskName::Diet => "diet",
            TaskName::Workout1 => "workout1",
            TaskName::Workout2 => "workout2",
            TaskName::Workout3 => "workout3",
            TaskName::Water => "water",
            TaskName::Reading => "reading",
            TaskName::ProgressPhoto => "progress_photo",
        }
    }

    /// Workout flag for a one-based workout number.
    pub fn workout(number: u8) -> Option<Self> {
        match number {
            1 => Some(TaskName::Workout1),
            2 => Some(TaskName::Workout2),
            3 => Some(TaskName::Workout3),
            _ => None,
        }
    }

    /// One-based workout number, `None` for non-workout tasks.
    pub fn workout_number(&self) -> Option<u8> {
        match self {
            TaskName::Workout1 => Some(1),
            TaskName::Workout2 => Some(2),
            TaskName::Workout3 => Some(3),
            _ => None,
        }
    }
}

/// Task checkboxes of a single day.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DayTasks {
    pub diet: bool,
    pub workout1: bool,
    pub workout2: bool,
    pub workout3: bool,
    pub water: bool,
    pub reading: bool,
    pub progress_photo: bool,
}

impl DayTasks {
    pub fn get(&self, task: TaskName) -> bool {
        match task {
            TaskName::Diet => self.diet,
            TaskName::Workout1 => self.workout1,
            TaskName::Workout2 => self.workout2,
            TaskName::Workout3 => self.workout3,
            TaskName::Water => self.water,
            TaskName::Reading => self.reading,
            TaskName::ProgressPhoto => self.progress_photo,
        }
    }

    pub fn set(&mut self, task: TaskName, value: bool) {
        let slot = match task {
            TaskName::Diet => &mut self.diet,
            TaskName::Workout1 => &mut self.workout1,
            TaskName::Workout2 => &mut self.workout2,
            TaskName::Workout3 => &mut self.workout3,
            TaskName::Water => &mut self.water,
            TaskName::Reading => &mut self.reading,
            TaskName::ProgressPhoto => &mut self.progress_photo,
        };
        *slot = value;
    }

    /// Number of workout flags that are checked.
    pub fn workouts_done(&self) -> u32 {
        [self.workout1, self.workout2, self.workout3]
            .into_iter()
            .filter(|done| *done)
            .count() as u32
    }
}

/// A day's entry in the challenge ledger. Absent from the map until first
/// touched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DayRecord {
    /// Set once every required task was checked; never cleared afterwards
    #[serde(default)]
    pub completed: bool,

    /// A progress photo attachment was uploaded for this day
    #[serde(default)]
    pub photo_attached: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,

    /// Body weight, always positive when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Body part name to positive measurement
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub measurements: BTreeMap<String, f64>,

    #[serde(default)]
    pub tasks: DayTasks,
}

impl DayRecord {
    pub fn has_journal(&self) -> bool {
        self.journal
            .as_deref()
            .is_some_and(|text| !text.trim().is_empty())
    }

    pub fn has_measurements(&self) -> bool {
        !self.measurements.is_empty()
    }
}
