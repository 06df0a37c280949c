use std::time::Duration;

/// How long the loading overlay covers the page before content fades in.
pub const LOADING_DELAY: Duration = Duration::from_millis(2000);

pub const OWNER_NAME: &str = "Rohit Shinde";
pub const HERO_ROLES: &str = "FULL-STACK DEVELOPER/AI/ML ENGINEER/DATA SCIENTIST/DATA ANALYST";
pub const HERO_TAGLINE: &str =
    "Crafting digital experiences at the intersection of design and technology.";
pub const HERO_TAGS: [&str; 5] = ["React", "Next.js", "Node", "Python", "AI/ML"];

pub const CONTACT_EMAIL: &str = "rohitshinde3903@gmail.com";
pub const CONTACT_PHONE: &str = "+91 74992 73903";

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        href: "https://github.com/rohitshinde3903",
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/rohitshinde3903",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "Resume",
        href: "/RohitShindeResume7499273903.pdf",
        icon: "extra-download",
    },
];

pub const ABOUT: [&str; 3] = [
    "I'm a developer who enjoys the whole stack: shaping interfaces people like to use, building the services behind them, and digging into the data they produce.",
    "Most of my work lives in Python and TypeScript, with React and Next.js on the front and Node or Django behind it. Lately I've been spending more time on machine learning and analytics.",
    "I care about clean, readable code, fast feedback loops, and shipping things that actually get used.",
];

pub struct Skill {
    pub name: &'static str,
    pub info: &'static str,
    pub icon: &'static str,
    /// Self assessed proficiency, 0 to 100.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    #[default]
    LanguagesAndFrameworks,
    CloudAndDevOps,
    AiAndData,
    Databases,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::LanguagesAndFrameworks,
        SkillCategory::CloudAndDevOps,
        SkillCategory::AiAndData,
        SkillCategory::Databases,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::LanguagesAndFrameworks => "Languages & Frameworks",
            SkillCategory::CloudAndDevOps => "Cloud & DevOps",
            SkillCategory::AiAndData => "AI & Data",
            SkillCategory::Databases => "Databases",
        }
    }

    /// Tab label split so the tail can be hidden on small screens.
    pub fn split_label(self) -> (&'static str, &'static str) {
        let label = self.label();
        match label.split_once(' ') {
            Some((head, tail)) => (head, tail),
            None => (label, ""),
        }
    }

    pub fn skills(self) -> &'static [Skill] {
        match self {
            SkillCategory::LanguagesAndFrameworks => &LANGUAGES_AND_FRAMEWORKS,
            SkillCategory::CloudAndDevOps => &CLOUD_AND_DEVOPS,
            SkillCategory::AiAndData => &AI_AND_DATA,
            SkillCategory::Databases => &DATABASES,
        }
    }
}

const LANGUAGES_AND_FRAMEWORKS: [Skill; 6] = [
    Skill {
        name: "Python",
        info: "Advanced scripting & backend development",
        icon: "devicon-python-plain",
        level: 90,
    },
    Skill {
        name: "JavaScript",
        info: "Modern web development",
        icon: "devicon-javascript-plain",
        level: 95,
    },
    Skill {
        name: "TypeScript",
        info: "Type-safe JavaScript",
        icon: "devicon-typescript-plain",
        level: 85,
    },
    Skill {
        name: "React",
        info: "Component-based UI",
        icon: "devicon-react-original",
        level: 95,
    },
    Skill {
        name: "Next.js",
        info: "React framework",
        icon: "devicon-nextjs-plain",
        level: 90,
    },
    Skill {
        name: "Node.js",
        info: "JavaScript runtime",
        icon: "devicon-nodejs-plain",
        level: 85,
    },
];

const CLOUD_AND_DEVOPS: [Skill; 5] = [
    Skill {
        name: "AWS",
        info: "Cloud services",
        icon: "devicon-amazonwebservices-plain",
        level: 80,
    },
    Skill {
        name: "Docker",
        info: "Containerization",
        icon: "devicon-docker-plain",
        level: 85,
    },
    Skill {
        name: "Git",
        info: "Version control",
        icon: "devicon-git-plain",
        level: 95,
    },
    Skill {
        name: "GitHub",
        info: "Code hosting",
        icon: "devicon-github-plain",
        level: 90,
    },
    Skill {
        name: "Vercel",
        info: "Static sites",
        icon: "devicon-vercel-original",
        level: 85,
    },
];

const AI_AND_DATA: [Skill; 3] = [
    Skill {
        name: "TensorFlow",
        info: "ML framework",
        icon: "devicon-tensorflow-original",
        level: 75,
    },
    Skill {
        name: "PyTorch",
        info: "Deep learning",
        icon: "devicon-pytorch-original",
        level: 70,
    },
    Skill {
        name: "Pandas",
        info: "Data analysis",
        icon: "devicon-pandas-plain",
        level: 85,
    },
];

const DATABASES: [Skill; 3] = [
    Skill {
        name: "MongoDB",
        info: "NoSQL database",
        icon: "devicon-mongodb-plain",
        level: 85,
    },
    Skill {
        name: "PostgreSQL",
        info: "Relational DB",
        icon: "devicon-postgresql-plain",
        level: 80,
    },
    Skill {
        name: "Firebase",
        info: "BaaS platform",
        icon: "devicon-firebase-plain",
        level: 80,
    },
];

pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

pub const CERTIFICATIONS: [Certification; 2] = [
    Certification {
        title: "Python Full Stack",
        issuer: "Professional Cert",
        date: "2024",
        description: "Hands-on experience building full-stack applications from scratch.",
        skills: &["Python", "Django", "APIs"],
    },
    Certification {
        title: "Google Data Analytics",
        issuer: "Google Cert",
        date: "2024",
        description: "Courses focused on data exploration and model building.",
        skills: &["Data Analysis", "ML", "Statistics"],
    },
];

pub struct Milestone {
    pub period: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const TIMELINE: [Milestone; 4] = [
    Milestone {
        period: "2022",
        title: "Started building for the web",
        detail: "First full-stack projects with JavaScript, React and Node.",
    },
    Milestone {
        period: "2023",
        title: "Moved into data",
        detail: "Analysis pipelines in Python and Pandas, dashboards on top of PostgreSQL and MongoDB.",
    },
    Milestone {
        period: "2024",
        title: "Certified",
        detail: "Python Full Stack and Google Data Analytics certifications.",
    },
    Milestone {
        period: "Now",
        title: "AI/ML engineering",
        detail: "Training and shipping models with TensorFlow and PyTorch behind Next.js front ends.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_label() {
        assert_eq!(
            SkillCategory::LanguagesAndFrameworks.split_label(),
            ("Languages", "& Frameworks")
        );
        assert_eq!(SkillCategory::Databases.split_label(), ("Databases", ""));
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        for category in SkillCategory::ALL {
            assert!(!category.skills().is_empty(), "{}", category.label());
            assert!(category.skills().iter().all(|s| s.level <= 100));
        }
    }

    #[test]
    fn test_default_category_is_first_tab() {
        assert_eq!(SkillCategory::default(), SkillCategory::ALL[0]);
    }
}
