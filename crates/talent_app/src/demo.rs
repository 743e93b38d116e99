//! Built-in data set for `--offline` runs.

use talent_core::{Job, Record};

const NAMES: [(&str, &str); 12] = [
    ("Alice Chen", "backend"),
    ("Alina Petrova", "frontend"),
    ("Bob Martins", "backend"),
    ("Alan Smith", "data"),
    ("Carol Diaz", "design"),
    ("Albert Okafor", "backend"),
    ("Dana Kim", "devops"),
    ("Alex Novak", "frontend"),
    ("Erin Walsh", "data"),
    ("Bobby Tran", "qa"),
    ("Alicia Gomez", "devops"),
    ("Frank Ito", "backend"),
];

pub fn records() -> Vec<Record> {
    NAMES
        .iter()
        .enumerate()
        .map(|(index, (name, role))| {
            let id = format!("t{:03}", index + 1);
            let url = format!("https://talent.example/profile/{id}");
            Record::new(id, url)
                .with_field("name", *name)
                .with_field("role", *role)
        })
        .collect()
}

pub fn jobs() -> Vec<Job> {
    vec![
        Job::new("j1", Some("Senior backend engineer")),
        Job::new("j2", Some("Product designer")),
    ]
}
