//! Hand-authored page content. Every table is read-only and rendered in
//! declaration order.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech_stack: &'static [&'static str],
    pub live_link: &'static str,
    pub client_repo: Option<&'static str>,
    pub server_repo: Option<&'static str>,
    pub challenges: &'static str,
    pub future_plans: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// devicon class name
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    /// Free text, not necessarily a number ("Ongoing").
    pub year: &'static str,
    pub description: &'static str,
    /// Glyph shown in the timeline badge.
    pub icon: &'static str,
}

pub const OWNER_NAME: &str = "Shafiul Islam";
pub const OWNER_ROLE: &str = "Full Stack Web Developer";
pub const OWNER_PITCH: &str = "I build fast, responsive, and user-friendly web applications using modern technologies like React, Node.js, and MongoDB.";
pub const RESUME_PATH: &str = "/resume.pdf";
pub const RESUME_FILE_NAME: &str = "Shafiul_Islam_Resume.pdf";
pub const PORTRAIT: &str = "https://i.ibb.co/TDCxX5Mw/1750277659193-1.jpg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/rjlam1",
        icon: "devicon-github-original",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/shafiul-dev",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "Twitter",
        href: "https://x.com/home",
        icon: "devicon-twitter-original",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        icon: "⌂",
        title: "Location",
        value: "Dhaka, Bangladesh",
        href: None,
    },
    ContactDetail {
        icon: "✉",
        title: "Email",
        value: "shafiulislamlam0000@gmail.com",
        href: Some("mailto:shafiulislamlam0000@gmail.com"),
    },
    ContactDetail {
        icon: "☎",
        title: "Phone",
        value: "+880 1708557742",
        href: Some("tel:+8801708557742"),
    },
    ContactDetail {
        icon: "✆",
        title: "WhatsApp",
        value: "+880 1708557742",
        href: Some("https://wa.me/8801708557742"),
    },
];

// Screenshots are served from `public/`.
pub const PROJECTS: &[Project] = &[
    Project {
        title: "PlantCare",
        description: "A plant care tracking application with CRUD features, theming, and personalized dashboards.",
        image: "/Screenshot%202025-06-29%20133854.png",
        tech_stack: &["React", "Node.js", "Express", "MongoDB", "Stripe API"],
        live_link: "https://mango-f8850.web.app/",
        client_repo: Some("https://github.com/rjlam1/Mango"),
        server_repo: Some("https://github.com/rjlam1/Mango-Server"),
        challenges: "Implementing real-time inventory updates and handling concurrent user sessions during high traffic periods.",
        future_plans: "Add recommendation engine, implement AR product preview, and expand to mobile app.",
    },
    Project {
        title: "Task Management App",
        description: "A task management and collaboration tool with real-time sync and team features.",
        image: "/Screenshot%202025-06-29%20135019.png",
        tech_stack: &["React", "Firebase", "Tailwind CSS", "Redux"],
        live_link: "https://artifactare.web.app/",
        client_repo: Some("https://github.com/rjlam1/Artifactares"),
        server_repo: Some("https://github.com/rjlam1/Artifactare-Server"),
        challenges: "Synchronizing real-time updates across multiple clients while maintaining data consistency.",
        future_plans: "Add calendar integration, time tracking, and reporting dashboards.",
    },
    Project {
        title: "JobFinder",
        description: "A job listing platform to explore companies, search jobs, and apply directly.",
        image: "/Screenshot%202025-06-29%20134400.png",
        tech_stack: &["Next.js", "TypeScript", "Spoonacular API", "Tailwind CSS"],
        live_link: "https://splendid-pony-adb6c7.netlify.app/",
        client_repo: Some("https://github.com/rjlam1/Job-Track"),
        server_repo: Some("https://github.com/shafiul-dev/ecommerce-platform-server"),
        challenges: "Handling API rate limits and optimizing performance with large datasets.",
        future_plans: "Add user-generated content, shopping list generator, and cooking timer.",
    },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Frontend",
        skills: &[
            Skill { name: "HTML5", icon: "devicon-html5-plain colored" },
            Skill { name: "CSS3", icon: "devicon-css3-plain colored" },
            Skill { name: "JavaScript", icon: "devicon-javascript-plain colored" },
            Skill { name: "TypeScript", icon: "devicon-typescript-plain colored" },
            Skill { name: "React.js", icon: "devicon-react-original colored" },
            Skill { name: "Redux", icon: "devicon-redux-original colored" },
            Skill { name: "Next.js", icon: "devicon-nextjs-plain" },
            Skill { name: "Tailwind CSS", icon: "devicon-tailwindcss-original colored" },
            Skill { name: "Bootstrap", icon: "devicon-bootstrap-plain colored" },
        ],
    },
    SkillCategory {
        name: "Backend",
        skills: &[
            Skill { name: "Node.js", icon: "devicon-nodejs-plain colored" },
            Skill { name: "Express.js", icon: "devicon-express-original" },
            Skill { name: "GraphQL", icon: "devicon-graphql-plain colored" },
            Skill { name: "MongoDB", icon: "devicon-mongodb-plain colored" },
            Skill { name: "PostgreSQL", icon: "devicon-postgresql-plain colored" },
        ],
    },
    SkillCategory {
        name: "Tools & Others",
        skills: &[
            Skill { name: "Git", icon: "devicon-git-plain colored" },
            Skill { name: "GitHub", icon: "devicon-github-original" },
            Skill { name: "Firebase", icon: "devicon-firebase-plain colored" },
            Skill { name: "Docker", icon: "devicon-docker-plain colored" },
            Skill { name: "Jest", icon: "devicon-jest-plain colored" },
            Skill { name: "Figma", icon: "devicon-figma-plain colored" },
            Skill { name: "NPM", icon: "devicon-npm-original-wordmark colored" },
        ],
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "B.Sc. in Mathematics",
        institution: "Rajendra College, Faridpur",
        year: "Ongoing",
        description: "Studying core mathematics and exploring programming alongside academic learning.",
        icon: "🏛",
    },
    Education {
        degree: "Higher Secondary Certificate (HSC)",
        institution: "Government Yasin College, Faridpur",
        year: "2021",
        description: "Science background with GPA: 5.00 out of 5.00",
        icon: "🏫",
    },
    Education {
        degree: "Secondary School Certificate (SSC)",
        institution: "Police Line High School and College",
        year: "2019",
        description: "Science background with GPA: 4.00 out of 5.00",
        icon: "🎓",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_have_required_fields() {
        assert!(!PROJECTS.is_empty());
        for p in PROJECTS {
            assert!(!p.title.is_empty());
            assert!(!p.tech_stack.is_empty(), "{} has no tech stack", p.title);
            assert!(p.live_link.starts_with("https://"), "{}", p.title);
        }
    }

    #[test]
    fn skill_categories_are_populated() {
        for c in SKILL_CATEGORIES {
            assert!(!c.skills.is_empty(), "{} is empty", c.name);
            assert!(
                c.skills.iter().all(|s| s.icon.starts_with("devicon-")),
                "{} has a non-devicon icon",
                c.name
            );
        }
    }

    #[test]
    fn social_links_use_devicon_classes() {
        for l in SOCIAL_LINKS {
            assert!(l.icon.starts_with("devicon-"), "{}", l.label);
            assert!(l.href.starts_with("https://"), "{}", l.label);
        }
    }

    #[test]
    fn contact_details_include_whatsapp() {
        let titles = CONTACT_DETAILS.iter().map(|d| d.title).collect::<Vec<_>>();
        assert_eq!(titles, vec!["Location", "Email", "Phone", "WhatsApp"]);
    }

    #[test]
    fn education_keeps_declared_order() {
        let years = EDUCATION.iter().map(|e| e.year).collect::<Vec<_>>();
        assert_eq!(years, vec!["Ongoing", "2021", "2019"]);
    }
}
