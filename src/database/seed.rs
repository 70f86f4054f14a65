use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use thiserror::Error;

use crate::models::Activity;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("activity {0:?} is defined more than once")]
    DuplicateActivity(String),

    #[error("activity {0:?} has max_participants = 0")]
    ZeroCapacity(String),

    #[error("activity {activity:?} lists {count} participants but allows {max}")]
    OverCapacity {
        activity: String,
        count: usize,
        max: usize,
    },

    #[error("activity {activity:?} lists {email} more than once")]
    DuplicateParticipant { activity: String, email: String },
}

/// Seed file entries in file order. Repeated keys are kept so that
/// `ActivityRegistry::from_seed` can reject them.
struct SeedEntries(Vec<(String, Activity)>);

impl<'de> Deserialize<'de> for SeedEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = SeedEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Activity>()? {
                    entries.push(entry);
                }
                Ok(SeedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Loads `{ name: { description, schedule, max_participants, participants } }`
/// from a JSON file, keeping file order.
pub fn load_seed_file(path: &Path) -> Result<Vec<(String, Activity)>, SeedError> {
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let SeedEntries(entries) = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(entries)
}

fn activity(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: usize,
    participants: &[&str],
) -> (String, Activity) {
    (
        name.to_string(),
        Activity {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        },
    )
}

/// Mergington High School activities offered at startup.
pub fn default_activities() -> Vec<(String, Activity)> {
    vec![
        activity(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        activity(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        activity(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        activity(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
        activity(
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            &["ava@mergington.edu", "mia@mergington.edu"],
        ),
        activity(
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        activity(
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
        activity(
            "Math Club",
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["james@mergington.edu", "benjamin@mergington.edu"],
        ),
        activity(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["charlotte@mergington.edu", "henry@mergington.edu"],
        ),
    ]
}
