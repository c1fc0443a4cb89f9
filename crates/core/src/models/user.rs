use serde::{Deserialize, Serialize};

/// The signed-in user shown in the sidebar profile block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Avatar initials: first letter of the first two words of the name,
    /// the first one upper-cased. A blank name gives "ИП".
    pub fn initials(&self) -> String {
        let mut words = self.name.split_whitespace();
        let Some(first) = words.next().and_then(|w| w.chars().next()) else {
            return "ИП".to_string();
        };

        let mut initials: String = first.to_uppercase().collect();
        if let Some(second) = words.next().and_then(|w| w.chars().next()) {
            initials.push(second);
        }
        initials
    }
}
