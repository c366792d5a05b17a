//! Static portfolio content. Read-only; nothing in the crate mutates it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Live,
    Github,
    Upcoming,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Live => "LIVE",
            ProjectStatus::Github => "SOURCE",
            ProjectStatus::Upcoming => "SOON",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub full_description: Option<&'static str>,
    pub tech: &'static [&'static str],
    pub link: Option<&'static str>,
    pub github: Option<&'static str>,
    pub status: ProjectStatus,
    pub features: &'static [&'static str],
}

impl Project {
    /// Long-form text for the detail view, falling back to the summary
    pub fn detail_text(&self) -> &'static str {
        self.full_description.unwrap_or(self.description)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub id: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub details: &'static [&'static str],
    pub date: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub event: &'static str,
    pub result: &'static str,
    pub date: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const OWNER: &str = "Shivangi Sharma";
pub const TAGLINE: &str = "CS Engineer // Developer // AI";

pub const BIO: &[&str] = &[
    "B.Tech computer science student at Amity University.",
    "Working across full-stack architecture and AI/ML, building scalable applications \
     that connect data with the people using it.",
    "Focused on software that is high-impact as well as functional.",
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: "vibetribe",
        title: "VibeTribe",
        description: "A social community platform with real-time interactions and Firebase integration.",
        full_description: Some(
            "A single page application built for community engagement, with real-time \
             updates, secure data management, nearby discovery and personalised feeds.",
        ),
        tech: &["React", "Django", "SQL", "Firebase", "Tailwind"],
        link: Some("https://vibetribe.vercel.app/"),
        github: Some("https://github.com/Shiv24angi/VIBETRIBE"),
        status: ProjectStatus::Live,
        features: &[
            "Real-time messaging",
            "Firebase Authentication",
            "Dynamic content feed",
            "Responsive dashboard",
        ],
    },
    Project {
        id: "payzen",
        title: "PayZen",
        description: "Loan risk assessment dashboard using SHAP for model explainability.",
        full_description: Some(
            "Predicts loan defaults and visualises risk scores and recovery strategies, \
             with SHAP values to keep the model transparent.",
        ),
        tech: &["Python", "Streamlit", "Scikit-learn", "SHAP", "Pandas"],
        link: None,
        github: Some("https://github.com/Shiv24angi/loan_tracker"),
        status: ProjectStatus::Github,
        features: &[
            "Predictive risk scoring",
            "SHAP explainability",
            "Automated recovery suggestions",
            "Interactive dashboards",
        ],
    },
    Project {
        id: "nivaran",
        title: "Nivaran (SIH)",
        description: "Legal and welfare information hub built for Smart India Hackathon.",
        full_description: Some(
            "Makes legal rights accessible: citizens report issues and get AI-driven \
             legal assistance in their own language.",
        ),
        tech: &["Streamlit", "Flask", "Twilio", "gTTS", "GCP"],
        link: None,
        github: Some("https://github.com/vanshaggarwal27/Nivaran"),
        status: ProjectStatus::Github,
        features: &[
            "Multilingual AI assistant",
            "SMS/Voice integration",
            "Legal document generation",
        ],
    },
    Project {
        id: "gg-gyaan",
        title: "Ghar Ghar Gyaan",
        description: "Legal and health rights advisor delivered over web and SMS.",
        full_description: Some(
            "Helps citizens understand their basic rights, with an eligibility checker \
             across identity, social and financial schemes.",
        ),
        tech: &["AI/ML", "Twilio", "Flask", "GCP"],
        link: None,
        github: Some("https://github.com/harshitb206/GharGharGyaan"),
        status: ProjectStatus::Github,
        features: &[],
    },
    Project {
        id: "ecoverse",
        title: "EcoVerse",
        description: "Environmental awareness and sustainable lifestyle tracking.",
        full_description: Some(
            "Track a CO2 footprint, scan products for eco-ratings and compete on \
             carbon-reduction leaderboards.",
        ),
        tech: &["React", "Node.js", "MongoDB", "Tailwind"],
        link: None,
        github: Some("https://github.com/Shiv24angi/EcoVerse"),
        status: ProjectStatus::Github,
        features: &[],
    },
    Project {
        id: "hand-ar",
        title: "Hand Filter AR",
        description: "Computer-vision filters that follow hand movements.",
        full_description: None,
        tech: &["OpenCV", "Python", "MediaPipe"],
        link: None,
        github: Some("https://github.com/Shiv24angi/Hand_VR"),
        status: ProjectStatus::Github,
        features: &[],
    },
    Project {
        id: "magic-drums",
        title: "Magic Drums",
        description: "A virtual drum kit played with hand motions in front of a webcam.",
        full_description: None,
        tech: &["OpenCV", "Python", "PyGame"],
        link: None,
        github: Some("https://github.com/Shiv24angi/MagicDrums"),
        status: ProjectStatus::Github,
        features: &[],
    },
];

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        id: "exp-1",
        company: "Trantor Software",
        title: "ML Intern",
        details: &[
            "Built house price prediction and credit card fraud models.",
            "Tuned classification workflows for performance.",
            "Deployment pipelines with Flask and Streamlit.",
        ],
        date: "Jun 2025 - Jul 2025",
    },
    Experience {
        id: "exp-2",
        company: "Ycotes",
        title: "AI/ML Intern",
        details: &[
            "Learning models for specialised education apps.",
            "Data preprocessing and model optimisation in a startup team.",
        ],
        date: "Sep 2025 - Present",
    },
];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "ach-1",
        event: "Hackowasp 7.0 (Thapar University)",
        title: "2nd Place",
        result: "Ideathon winners for Ghar Ghar Gyaan.",
        date: "Apr 2025",
    },
    Achievement {
        id: "ach-2",
        event: "HackOrbit (MITS Gwalior)",
        title: "Finalist - FreshForge",
        result: "36-hour national-level hackathon finalist.",
        date: "Jun 2025",
    },
    Achievement {
        id: "ach-3",
        event: "Internal SIH Hackathon",
        title: "Top 20 Finalist",
        result: "Top 20 in the Smart India Hackathon internal rounds.",
        date: "Sep 2025",
    },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Programming",
        skills: &["C/C++", "Java", "Python", "JavaScript", "TypeScript"],
    },
    SkillCategory {
        name: "Frontend",
        skills: &["HTML/CSS", "Tailwind CSS", "ReactJS", "Three.js"],
    },
    SkillCategory {
        name: "Backend & DB",
        skills: &["NodeJS", "ExpressJS", "REST API", "MongoDB", "Oracle SQL", "MySQL"],
    },
    SkillCategory {
        name: "AI/ML",
        skills: &["Scikit-Learn", "OpenCV", "Pipelines", "Generative AI"],
    },
    SkillCategory {
        name: "Core CS",
        skills: &["DSA", "OOP", "OS", "DBMS", "COA"],
    },
    SkillCategory {
        name: "Tools",
        skills: &["Git/GitHub", "Google Cloud", "VS Code", "Google Colab"],
    },
];

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "Email",
        href: "mailto:shivangidps40@gmail.com",
    },
    ContactLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/shivangi-sharma2405/",
    },
    ContactLink {
        label: "GitHub",
        href: "https://github.com/Shiv24angi",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
        let ids: HashSet<_> = EXPERIENCES.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), EXPERIENCES.len());
        let ids: HashSet<_> = ACHIEVEMENTS.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), ACHIEVEMENTS.len());
    }

    #[test]
    fn detail_text_falls_back_to_summary() {
        let hand = PROJECTS.iter().find(|p| p.id == "hand-ar").unwrap();
        assert_eq!(hand.detail_text(), hand.description);
        let payzen = PROJECTS.iter().find(|p| p.id == "payzen").unwrap();
        assert_ne!(payzen.detail_text(), payzen.description);
    }
}
