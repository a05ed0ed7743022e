//! Built-in candidate profiles used by the demo binary and as test fixtures.

use crate::models::{
    Achievement, AdditionalSections, CandidateProfile, Certification, Education, Experience,
    PersonalInfo, ProfessionalSummary, Project, TargetRole, TechnicalSkills,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A graduating student with one project and one certification.
pub fn sample_fresher_profile() -> CandidateProfile {
    CandidateProfile {
        personal_info: PersonalInfo {
            name: Some("Sarah Johnson".to_string()),
            email: Some("sarah.johnson@email.com".to_string()),
            phone: Some("+1 (555) 123-4567".to_string()),
            location: Some("San Francisco, CA".to_string()),
            linkedin: Some("https://www.linkedin.com/in/sarah-johnson-dev".to_string()),
            github: Some("https://github.com/sarahjohnson".to_string()),
            portfolio: Some("https://sarahjohnson.dev".to_string()),
        },
        candidate_type: Some("fresher".to_string()),
        target_role: TargetRole {
            position: Some("Frontend Developer".to_string()),
            industry: Some("Technology".to_string()),
            key_skills: strings(&["JavaScript", "React", "CSS", "HTML", "Node.js"]),
        },
        professional_summary: Some(ProfessionalSummary {
            years_experience: 0,
            core_competencies: strings(&[
                "JavaScript",
                "React",
                "Node.js",
                "MongoDB",
                "Responsive Design",
            ]),
            key_achievements: vec![Achievement::new(
                "University capstone project requiring full-stack web application development",
                "Developed e-commerce platform using React, Node.js, and MongoDB with responsive design",
                "Achieved 95% test coverage, 2-second page load time, and won Best Project Award",
            )],
        }),
        experience: Vec::new(),
        projects: vec![Project {
            name: "Task Management App".to_string(),
            description: "A collaborative task management application with real-time updates"
                .to_string(),
            technologies: strings(&["React", "Node.js", "Socket.io", "MongoDB"]),
            duration: "3 months".to_string(),
            team_size: Some(3),
            github_link: "https://github.com/sarahjohnson/task-manager".to_string(),
            live_demo: "https://taskmanager-demo.herokuapp.com".to_string(),
            achievements: vec![Achievement::new(
                "Team project requiring real-time collaboration features",
                "Implemented WebSocket connections and responsive UI with React",
                "Achieved 100+ concurrent users and 99.9% uptime",
            )],
        }],
        education: vec![Education {
            degree: "Bachelor of Science".to_string(),
            major: "Computer Science".to_string(),
            institution: "University of California, Berkeley".to_string(),
            location: "Berkeley, CA".to_string(),
            graduation_date: "May 2024".to_string(),
            gpa: Some(3.8),
            honors: strings(&["Dean's List", "Magna Cum Laude"]),
            relevant_coursework: strings(&[
                "Data Structures",
                "Algorithms",
                "Database Systems",
                "Software Engineering",
                "Web Development",
            ]),
        }],
        certifications: vec![Certification {
            name: "AWS Certified Cloud Practitioner".to_string(),
            issuing_organization: "Amazon Web Services".to_string(),
            date_obtained: "March 2024".to_string(),
            expiration_date: Some("March 2027".to_string()),
            credential_id: Some("AWS-CCP-123456".to_string()),
        }],
        additional_sections: AdditionalSections {
            technical_skills: Some(TechnicalSkills {
                programming_languages: strings(&["JavaScript", "Python", "Java", "HTML5", "CSS3"]),
                frameworks: strings(&["React", "Node.js", "Express", "Bootstrap", "Tailwind CSS"]),
                databases: strings(&["MongoDB", "MySQL", "PostgreSQL"]),
                tools: strings(&["Git", "Docker", "VS Code", "Postman", "Figma"]),
                cloud_platforms: strings(&["AWS", "Heroku", "Netlify", "Vercel"]),
            }),
        },
        applied_job_title: None,
        applied_company: None,
        job_description: None,
    }
}

/// A mid-career engineer with two roles, no projects.
pub fn sample_experienced_profile() -> CandidateProfile {
    CandidateProfile {
        personal_info: PersonalInfo {
            name: Some("Marcus Chen".to_string()),
            email: Some("marcus.chen@email.com".to_string()),
            phone: Some("+1 (555) 987-6543".to_string()),
            location: Some("Seattle, WA".to_string()),
            ..Default::default()
        },
        candidate_type: Some("experienced".to_string()),
        target_role: TargetRole {
            position: Some("Senior Backend Engineer".to_string()),
            industry: Some("FinTech".to_string()),
            key_skills: strings(&["Go", "PostgreSQL", "Kafka"]),
        },
        professional_summary: Some(ProfessionalSummary {
            years_experience: 7,
            core_competencies: strings(&[
                "Distributed Systems",
                "Go",
                "PostgreSQL",
                "Event Streaming",
                "Mentoring",
            ]),
            key_achievements: vec![Achievement::new(
                "Payment ledger could not keep up with peak traffic",
                "Re-architected the ledger around an append-only event log",
                "Cutting settlement latency by 70%",
            )],
        }),
        experience: vec![
            Experience {
                organization: "Ledgerly".to_string(),
                position: "Backend Engineer".to_string(),
                location: "Seattle, WA".to_string(),
                start_date: "2020-03".to_string(),
                end_date: "Present".to_string(),
                achievements: vec![
                    Achievement::new(
                        "Payment ledger could not keep up with peak traffic",
                        "I re-architected our ledger around an append-only event log.",
                        "Settlement latency dropped by 70%.",
                    ),
                    Achievement::new(
                        "On-call load was burning out the team",
                        "Led an alert audit with SRE",
                        "Paging volume fell noticeably",
                    ),
                ],
            },
            Experience {
                organization: "Northwind Bank".to_string(),
                position: "Software Engineer".to_string(),
                location: "Portland, OR".to_string(),
                start_date: "2017-06".to_string(),
                end_date: "2020-02".to_string(),
                achievements: vec![Achievement::new(
                    "Manual reconciliation took days each month",
                    "Built a reconciliation service in Go",
                    "Saved 40 hours per month for 6 teams",
                )],
            },
        ],
        projects: Vec::new(),
        education: vec![Education {
            degree: "Bachelor of Science".to_string(),
            major: "Computer Engineering".to_string(),
            institution: "University of Washington".to_string(),
            graduation_date: "June 2017".to_string(),
            ..Default::default()
        }],
        certifications: vec![Certification {
            name: "Certified Kubernetes Application Developer".to_string(),
            issuing_organization: "CNCF".to_string(),
            date_obtained: "2022-09".to_string(),
            ..Default::default()
        }],
        additional_sections: AdditionalSections {
            technical_skills: Some(TechnicalSkills {
                programming_languages: strings(&["Go", "Python", "SQL"]),
                frameworks: strings(&["gRPC"]),
                databases: strings(&["PostgreSQL", "Redis"]),
                tools: strings(&["Kafka", "Terraform"]),
                cloud_platforms: strings(&["GCP"]),
            }),
        },
        applied_job_title: Some("Senior Backend Engineer".to_string()),
        applied_company: Some("Acme Payments".to_string()),
        job_description: Some(
            "Senior Backend Engineer. You will build REST and gRPC services in Go on Kubernetes \
             and AWS, own CI/CD pipelines, and work in an Agile team."
                .to_string(),
        ),
    }
}
