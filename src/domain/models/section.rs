use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Page sections reachable from the navbar, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Experience,
    Education,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Education,
        Section::Projects,
        Section::Contact,
    ];

    /// DOM id of the `<section>` element this entry points at.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// In-page fragment, e.g. `#skills`.
    pub fn anchor(&self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| AppError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_document_order() {
        let ids: Vec<&str> = Section::ALL.iter().map(Section::id).collect();
        assert_eq!(
            ids,
            ["home", "about", "skills", "experience", "education", "projects", "contact"]
        );
    }

    #[test]
    fn test_labels_match_entries() {
        assert_eq!(Section::Home.label(), "Home");
        assert_eq!(Section::Experience.label(), "Experience");
        assert_eq!(Section::Contact.label(), "Contact");
    }

    #[test]
    fn test_parse_known_ids() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>().unwrap(), section);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_empty() {
        assert!("blog".parse::<Section>().is_err());
        assert!("".parse::<Section>().is_err());
        // Ids are matched exactly
        assert!("Home".parse::<Section>().is_err());
    }

    #[test]
    fn test_anchor_and_display() {
        assert_eq!(Section::Projects.anchor(), "#projects");
        assert_eq!(Section::About.to_string(), "about");
    }
}
