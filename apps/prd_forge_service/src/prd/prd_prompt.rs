use super::prd_types::GenerationRequest;

pub const PRD_SECTIONS: [&str; 10] = [
    "Overview",
    "Essential Core Features",
    "Tech Stack",
    "Design Preferences",
    "All Screens/Pages",
    "App Menu and Navigation Structure",
    "User Flow",
    "Monetization Strategy",
    "Risks & Challenges",
    "Roadmap (MVP → Future Releases)",
];

pub struct PrdPrompt;

impl PrdPrompt {
    pub fn get_prompt(request: &GenerationRequest) -> String {
        let sections = PRD_SECTIONS
            .iter()
            .enumerate()
            .map(|(i, section)| format!("{}. {}", i + 1, section))
            .collect::<Vec<String>>()
            .join("\n");

        format!(
            r#"Generate a **Product Requirements Document (PRD)** for the following idea:

App Name: {}
App Type: {}
Description: {}

Format the PRD into the following sections:
{}

Language: {}
Make the PRD clear, structured, and professional."#,
            request.app_name(),
            request.app_type(),
            request.app_idea(),
            sections,
            request.language()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prd::prd_types::{AppType, OutputLanguage};

    #[test]
    fn test_every_section_appears_once() {
        for app_type in AppType::ALL {
            for language in OutputLanguage::ALL {
                let request =
                    GenerationRequest::new("Trail Buddy", "Hiking companion", app_type, language)
                        .unwrap();
                let prompt = PrdPrompt::get_prompt(&request);

                for (i, section) in PRD_SECTIONS.iter().enumerate() {
                    let header = format!("{}. {}", i + 1, section);
                    assert_eq!(prompt.matches(&header).count(), 1, "{}", header);
                    assert_eq!(prompt.matches(section).count(), 1, "{}", section);
                }
            }
        }
    }

    #[test]
    fn test_inputs_are_embedded() {
        let request = GenerationRequest::new(
            "Trail Buddy",
            "A companion app that plans hikes\nand tracks weather.",
            AppType::MobileApp,
            OutputLanguage::Hindi,
        )
        .unwrap();
        let prompt = PrdPrompt::get_prompt(&request);

        assert!(prompt.contains("App Name: Trail Buddy"));
        assert!(prompt.contains("App Type: Mobile App"));
        assert!(prompt.contains("Description: A companion app that plans hikes\nand tracks weather."));
        assert!(prompt.contains("Language: Hindi"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let request =
            GenerationRequest::new("A", "B", AppType::Hybrid, OutputLanguage::Telugu).unwrap();
        assert_eq!(PrdPrompt::get_prompt(&request), PrdPrompt::get_prompt(&request));
    }
}
