//! Sample portfolio shipped with the crate, used when no content file is given.

use crate::content::{
    model::{
        EndDate, Experience, PersonalInfo, Project, Skill, SkillCategory as Cat,
        SkillLevel as Lvl,
    },
    store::ContentStore,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

pub(crate) fn sample_personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "Dorsa Khalili".into(),
        title: "Frontend Developer".into(),
        bio: "Passionate about creating beautiful, interactive web experiences".into(),
        long_bio: "I'm a creative developer who loves building modern web applications with a \
                   focus on user experience and performance. With expertise in React, \
                   TypeScript, and modern CSS, I bring designs to life with smooth animations \
                   and intuitive interactions."
            .into(),
        email: "your.email@example.com".into(),
        github: "https://github.com/dorrsakh".into(),
        linkedin: "https://linkedin.com/in/dorsa-khalili".into(),
        twitter: None,
        location: "Your City, Country".into(),
        resume_url: Some("/resume.pdf".into()),
    }
}

fn sample_skills() -> Vec<Skill> {
    [
        ("React", Lvl::Expert, Cat::Frontend),
        ("TypeScript", Lvl::Expert, Cat::Frontend),
        ("Next.js", Lvl::Advanced, Cat::Frontend),
        ("HTML/CSS", Lvl::Expert, Cat::Frontend),
        ("Tailwind CSS", Lvl::Expert, Cat::Frontend),
        ("JavaScript", Lvl::Expert, Cat::Frontend),
        ("Git", Lvl::Expert, Cat::Tools),
        ("Vite", Lvl::Expert, Cat::Tools),
        ("Webpack", Lvl::Advanced, Cat::Tools),
        ("Figma", Lvl::Advanced, Cat::Design),
        ("UI/UX Design", Lvl::Advanced, Cat::Design),
    ]
    .into_iter()
    .map(|(name, level, category)| Skill {
        name: name.into(),
        level,
        category,
    })
    .collect()
}

fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".into(),
            title: "E-Commerce Platform".into(),
            description: "A modern e-commerce solution with real-time inventory management".into(),
            long_description: "Built a full-stack e-commerce platform using React and Node.js. \
                               Features include real-time inventory tracking, secure payment \
                               integration, admin dashboard, and comprehensive product search. \
                               The platform handles thousands of products with optimized \
                               performance."
                .into(),
            technologies: strings(&["React", "TypeScript", "Node.js", "MongoDB", "Stripe"]),
            image_url: None,
            github_url: Some("https://github.com/yourusername/ecommerce".into()),
            live_url: Some("https://ecommerce-demo.com".into()),
            featured: true,
            category: "Web Application".into(),
        },
        Project {
            id: "2".into(),
            title: "Task Management App".into(),
            description: "Collaborative task management with real-time updates".into(),
            long_description: "A Kanban-style task management application with real-time \
                               collaboration features. Built with React, TypeScript, and \
                               Socket.io for live updates. Includes drag-and-drop functionality, \
                               team workspaces, and advanced filtering options."
                .into(),
            technologies: strings(&["React", "TypeScript", "Socket.io", "Express", "PostgreSQL"]),
            image_url: None,
            github_url: Some("https://github.com/yourusername/taskapp".into()),
            live_url: Some("https://taskapp-demo.com".into()),
            featured: true,
            category: "Web Application".into(),
        },
        Project {
            id: "3".into(),
            title: "Portfolio Website".into(),
            description: "Personal portfolio with smooth animations and modern design".into(),
            long_description: "A responsive portfolio website showcasing my work and skills. \
                               Features smooth scroll animations, interactive project galleries, \
                               and a modern minimalist design. Built with performance and \
                               accessibility in mind."
                .into(),
            technologies: strings(&["React", "TypeScript", "GSAP", "Tailwind CSS", "Vite"]),
            image_url: None,
            github_url: Some("https://github.com/yourusername/portfolio".into()),
            live_url: Some("https://yourportfolio.com".into()),
            featured: false,
            category: "Portfolio".into(),
        },
        Project {
            id: "4".into(),
            title: "Weather Dashboard".into(),
            description: "Real-time weather data visualization with interactive maps".into(),
            long_description: "A comprehensive weather dashboard that displays real-time \
                               weather data from multiple sources. Features include interactive \
                               maps, detailed forecasts, historical data visualization, and \
                               location-based recommendations."
                .into(),
            technologies: strings(&["React", "TypeScript", "D3.js", "OpenWeather API", "Mapbox"]),
            image_url: None,
            github_url: Some("https://github.com/yourusername/weather".into()),
            live_url: Some("https://weather-demo.com".into()),
            featured: false,
            category: "Dashboard".into(),
        },
    ]
}

fn sample_experiences() -> Vec<Experience> {
    vec![
        Experience {
            id: "1".into(),
            company: "Tech Company Inc.".into(),
            position: "Senior Frontend Developer".into(),
            location: "San Francisco, CA".into(),
            start_date: "2022".into(),
            end_date: EndDate::Present,
            description: strings(&[
                "Lead frontend development for multiple product lines, serving 100K+ users",
                "Architected and implemented design system used across 5+ products",
                "Mentored junior developers and conducted code reviews",
                "Improved application performance by 40% through optimization strategies",
            ]),
            technologies: strings(&["React", "TypeScript", "Next.js", "GraphQL", "Tailwind CSS"]),
        },
        Experience {
            id: "2".into(),
            company: "StartupXYZ".into(),
            position: "Frontend Developer".into(),
            location: "Remote".into(),
            start_date: "2020".into(),
            end_date: EndDate::Until("2022".into()),
            description: strings(&[
                "Built responsive web applications using React and TypeScript",
                "Collaborated with designers to implement pixel-perfect UI components",
                "Integrated RESTful APIs and implemented state management solutions",
                "Contributed to open-source projects and internal tooling",
            ]),
            technologies: strings(&["React", "TypeScript", "Redux", "Styled Components", "Jest"]),
        },
        Experience {
            id: "3".into(),
            company: "Digital Agency".into(),
            position: "Junior Frontend Developer".into(),
            location: "New York, NY".into(),
            start_date: "2019".into(),
            end_date: EndDate::Until("2020".into()),
            description: strings(&[
                "Developed client websites using HTML, CSS, and JavaScript",
                "Collaborated with cross-functional teams on various projects",
                "Learned modern frameworks and best practices",
                "Maintained and updated existing codebases",
            ]),
            technologies: strings(&["JavaScript", "HTML", "CSS", "Vue.js", "WordPress"]),
        },
    ]
}

impl ContentStore {
    /// The built-in sample portfolio.
    pub fn builtin() -> Self {
        Self::new_unchecked(
            sample_personal_info(),
            sample_skills(),
            sample_projects(),
            sample_experiences(),
        )
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::builtin()
    }
}
