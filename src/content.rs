//! Constant page content: owner profile, skills, projects and social links.

pub const OWNER: &str = "Sachin Singh";
pub const TAGLINE: &str = "IT by design Engineer";

pub const PORTRAIT_URL: &str =
    "https://images.unsplash.com/photo-1507238691740-187a5b1d37b8?auto=format&fit=crop&q=80&w=800";
pub const PORTRAIT_ALT: &str = "Working on laptop";

pub const BIO: [&str; 2] = [
    "I'm a passionate full-stack developer with 5 years of experience building web applications. I specialize in React, Node.js, and cloud technologies.",
    "When I'm not coding, you can find me contributing to open-source projects, writing technical blog posts, or exploring new technologies.",
];

/// Icon glyphs supplied by the lucide icon font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Github,
    Linkedin,
    Mail,
    ExternalLink,
    ChevronDown,
    Code,
    Globe,
    Server,
}

impl Glyph {
    pub fn class(self) -> &'static str {
        match self {
            Glyph::Github => "icon-github",
            Glyph::Linkedin => "icon-linkedin",
            Glyph::Mail => "icon-mail",
            Glyph::ExternalLink => "icon-external-link",
            Glyph::ChevronDown => "icon-chevron-down",
            Glyph::Code => "icon-code",
            Glyph::Globe => "icon-globe",
            Glyph::Server => "icon-server",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: &'static str,
    pub icon: Glyph,
    /// Percentage, 0 to 100
    pub level: u8,
}

impl SkillEntry {
    /// Inline style for the skill's progress bar.
    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.level.min(100))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Glyph,
}

pub const SKILLS: [SkillEntry; 3] = [
    SkillEntry {
        name: "Solution Architect",
        icon: Glyph::Globe,
        level: 90,
    },
    SkillEntry {
        name: "Devops Practices",
        icon: Glyph::Server,
        level: 85,
    },
    SkillEntry {
        name: "Cloud and Network architecture",
        icon: Glyph::Code,
        level: 80,
    },
];

pub const PROJECTS: [ProjectEntry; 3] = [
    ProjectEntry {
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce solution built with React, Node.js, and PostgreSQL. Features include real-time inventory, payment processing, and admin dashboard.",
        image: "https://images.unsplash.com/photo-1661956602116-aa6865609028?auto=format&fit=crop&q=80&w=800",
        tech: &["React", "Node.js", "PostgreSQL", "Redis"],
        link: "#",
    },
    ProjectEntry {
        title: "AI Task Manager",
        description: "Smart task management app using AI to prioritize and categorize tasks. Built with React, TypeScript, and OpenAI API integration.",
        image: "https://images.unsplash.com/photo-1661956602868-6ae368943878?auto=format&fit=crop&q=80&w=800",
        tech: &["React", "TypeScript", "OpenAI", "TailwindCSS"],
        link: "#",
    },
    ProjectEntry {
        title: "Real-time Analytics Dashboard",
        description: "Interactive dashboard for real-time data visualization. Features WebSocket connections and dynamic charts.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&q=80&w=800",
        tech: &["React", "D3.js", "WebSocket", "Express"],
        link: "#",
    },
];

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        href: "#",
        icon: Glyph::Github,
    },
    SocialLink {
        label: "LinkedIn",
        href: "#",
        icon: Glyph::Linkedin,
    },
    SocialLink {
        label: "Email",
        href: "#",
        icon: Glyph::Mail,
    },
];

pub fn copyright_notice() -> String {
    format!("© {} {OWNER}. All rights reserved.", env!("BUILD_YEAR"))
}
