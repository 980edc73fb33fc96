use std::collections::BTreeMap;

use super::models::Activity;

/// The fixed set of activities the roster is seeded with at process start.
///
/// Activities are never created or deleted at runtime; only their
/// participant lists change through signup and unregister.
pub fn default_catalog() -> BTreeMap<String, Activity> {
    let mut catalog = BTreeMap::new();

    catalog.insert(
        "Chess Club".to_string(),
        activity(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );
    catalog.insert(
        "Programming Class".to_string(),
        activity(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    );
    catalog.insert(
        "Gym Class".to_string(),
        activity(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    );
    catalog.insert(
        "Tennis Club".to_string(),
        activity(
            "Practice serves and rallies on the school courts",
            "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
            16,
            &["liam@mergington.edu", "ava@mergington.edu"],
        ),
    );
    catalog.insert(
        "Soccer Team".to_string(),
        activity(
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["noah@mergington.edu", "mia@mergington.edu"],
        ),
    );
    catalog.insert(
        "Basketball Team".to_string(),
        activity(
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            &["isabella@mergington.edu", "ethan@mergington.edu"],
        ),
    );
    catalog.insert(
        "Art Club".to_string(),
        activity(
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
    );
    catalog.insert(
        "Drama Club".to_string(),
        activity(
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
    );
    catalog.insert(
        "Math Club".to_string(),
        activity(
            "Solve challenging problems and prepare for math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["james@mergington.edu", "benjamin@mergington.edu"],
        ),
    );
    catalog.insert(
        "Debate Team".to_string(),
        activity(
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["charlotte@mergington.edu", "henry@mergington.edu"],
        ),
    );

    catalog
}

fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    let mut activity = Activity::new(
        description.to_string(),
        schedule.to_string(),
        max_participants,
    );
    for participant in participants {
        activity.add_participant(participant.to_string());
    }
    activity
}
