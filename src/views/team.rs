use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const TEAM_MEMBERS: [TeamMember; 3] = [
    TeamMember {
        name: "Jeet",
        title: "Full stack Developer",
        description: "I love writing code, designing scalable solutions and gaming in my free time.",
        image: "/Jeet.jpeg",
    },
    TeamMember {
        name: "Harsh",
        title: "AI Expert",
        description: "Love coding, enthusiastic about the Artificial intelligence and Web3 space, learning more...",
        image: "/Harsh.jpeg",
    },
    TeamMember {
        name: "Devyaansh",
        title: "Web Developer",
        description: "Developer with extensive experience in the MERN stack. Capable of researching cutting-edge solutions.",
        image: "/Dev.jpeg",
    },
];

#[component]
pub fn TeamSection() -> Element {
    rsx! {
        section { class: "team-section",
            div { class: "container",
                h2 { class: "section-heading", "About Us" }
                div { class: "team-grid",
                    for member in TEAM_MEMBERS.iter() {
                        TeamMemberCard { member: *member }
                    }
                }
            }
        }
    }
}

#[component]
fn TeamMemberCard(member: TeamMember) -> Element {
    rsx! {
        div { class: "team-card",
            div { class: "team-photo",
                img { src: member.image, alt: "profile picture" }
            }
            h3 { class: "team-name", "{member.name}" }
            p { class: "team-title", "{member.title}" }
            p { class: "team-description", "{member.description}" }
        }
    }
}
