use crate::types::delegate::NewDelegate;

/// Demo teams for a fresh install. The first name of each team is its head.
const SAMPLE_TEAMS: &[&[(&str, Option<&str>)]] = &[
    &[("Alice Johnson", Some("Engineering")), ("Bob Smith", Some("Engineering")), ("Charlie Brown", Some("Design"))],
    &[("Diana Prince", Some("Marketing")), ("Edward Stark", Some("Marketing")), ("Fiona Green", Some("Sales"))],
    &[("George Wilson", Some("Engineering")), ("Hannah Lee", Some("Design")), ("Ivan Petrov", Some("Engineering"))],
    &[("Julia Roberts", Some("HR")), ("Kevin Chen", Some("Finance")), ("Laura Martinez", None)],
    &[("Michael Jordan", Some("Operations")), ("Nancy Drew", Some("Operations")), ("Oscar Wilde", Some("Legal"))],
    &[("Patricia Adams", Some("Engineering")), ("Quinn Hughes", Some("Design")), ("Rachel Green", None)],
    &[("Samuel Jackson", Some("Marketing")), ("Tina Turner", Some("Sales"))],
    &[("Uma Thurman", Some("HR")), ("Victor Hugo", Some("Finance")), ("Wendy Williams", Some("Engineering"))],
];

pub fn sample_teams() -> Vec<Vec<NewDelegate>> {
    SAMPLE_TEAMS
        .iter()
        .map(|team| {
            team.iter()
                .enumerate()
                .map(|(i, (name, category))| NewDelegate {
                    name: name.to_string(),
                    category: category.map(String::from),
                    is_head: i == 0,
                })
                .collect()
        })
        .collect()
}
