//! The activities the roster starts with on every boot.

use mergington::data::Activity;

pub fn activities() -> Vec<(String, Activity)> {
    vec![
        (
            "Chess Club".to_string(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class".to_string(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class".to_string(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball".to_string(),
            Activity::new(
                "Practice drills and play in the inter-school league",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
            )
            .with_participants(["james@mergington.edu"]),
        ),
        (
            "Tennis Club".to_string(),
            Activity::new(
                "Improve your serve and play friendly matches",
                "Tuesdays and Saturdays, 10:00 AM - 11:30 AM",
                10,
            )
            .with_participants(["lucas@mergington.edu"]),
        ),
        (
            "Art Club".to_string(),
            Activity::new(
                "Explore painting, drawing and sculpture",
                "Thursdays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(["ava@mergington.edu"]),
        ),
        (
            "Drama Club".to_string(),
            Activity::new(
                "Act, direct and stage the school plays",
                "Wednesdays, 3:30 PM - 5:30 PM",
                25,
            )
            .with_participants(["mia@mergington.edu", "noah@mergington.edu"]),
        ),
        (
            "Debate Team".to_string(),
            Activity::new(
                "Sharpen public speaking and argue current topics",
                "Tuesdays, 4:00 PM - 5:30 PM",
                16,
            )
            .with_participants(["ethan@mergington.edu"]),
        ),
        (
            "Robotics Club".to_string(),
            Activity::new(
                "Design, build and program competition robots",
                "Saturdays, 9:00 AM - 12:00 PM",
                14,
            )
            .with_participants(["liam@mergington.edu", "isabella@mergington.edu"]),
        ),
    ]
}
