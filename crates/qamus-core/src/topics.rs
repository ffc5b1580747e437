use rand::seq::SliceRandom;

pub struct Topic {
    pub id: &'static str,
    pub name: &'static str,
    pub suggestions: [&'static str; 5],
}

/// Starter words offered on the empty screen
pub static TOPICS: [Topic; 4] = [
    Topic {
        id: "school",
        name: "المدرسة",
        suggestions: ["Teacher", "Classroom", "Library", "Homework", "Success"],
    },
    Topic {
        id: "tech",
        name: "التكنولوجيا",
        suggestions: ["Robot", "Computer", "Internet", "Future", "Space"],
    },
    Topic {
        id: "travel",
        name: "السفر",
        suggestions: ["Airplane", "Passport", "Adventure", "Beach", "Mountain"],
    },
    Topic {
        id: "emotions",
        name: "المشاعر",
        suggestions: ["Happy", "Brave", "Kind", "Smart", "Grateful"],
    },
];

pub fn find_topic(id: &str) -> Option<&'static Topic> {
    let id = id.trim().to_lowercase();
    TOPICS.iter().find(|t| t.id == id)
}

/// Random starter word from a topic
pub fn pick_suggestion(id: &str) -> Option<&'static str> {
    find_topic(id)?
        .suggestions
        .choose(&mut rand::thread_rng())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_comes_from_topic() {
        let word = pick_suggestion("Tech").unwrap();
        assert!(find_topic("tech").unwrap().suggestions.contains(&word));
        assert!(pick_suggestion("cooking").is_none());
    }
}
