//! Fixed sample records the stores are seeded with.
//!
//! All data in this system is transient; these records stand in for a
//! submission history so the list panels have content on first load.

#[cfg(test)]
#[path = "sample_test.rs"]
mod sample_test;

use super::entries::{Category, ComplaintEntry, EvidenceRef, FeedbackEntry, Role, Visibility};

fn tags(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|&t| t.to_owned()).collect()
}

fn evidence(refs: &[(&str, &str)]) -> Vec<EvidenceRef> {
    refs.iter()
        .map(|&(name, mime)| EvidenceRef { name: name.to_owned(), mime: mime.to_owned() })
        .collect()
}

/// Seed feedback entries, newest first.
pub fn seed_feedback() -> Vec<FeedbackEntry> {
    vec![
        FeedbackEntry {
            category: Category::Academics,
            rating: 4,
            tags: tags(&["Suggestion"]),
            date: "Jan 29, 2026".to_owned(),
            message: "The new science lab equipment has been a huge upgrade. Would love to see \
                      more simulation software added to complement the hardware."
                .to_owned(),
        },
        FeedbackEntry {
            category: Category::Facilities,
            rating: 2,
            tags: tags(&["Complaint", "Urgent"]),
            date: "Jan 27, 2026".to_owned(),
            message: "The lighting in Building C classrooms flickers often and makes it hard to \
                      focus during exams. Needs urgent attention."
                .to_owned(),
        },
        FeedbackEntry {
            category: Category::CampusLife,
            rating: 5,
            tags: tags(&["Compliment"]),
            date: "Jan 25, 2026".to_owned(),
            message: "The intramural events this semester were exceptionally well-organized. \
                      Great job to the student council and administration!"
                .to_owned(),
        },
        FeedbackEntry {
            category: Category::Services,
            rating: 3,
            tags: tags(&["Suggestion"]),
            date: "Jan 22, 2026".to_owned(),
            message: "The library Wi-Fi is inconsistent during peak hours. Upgrading routers or \
                      adding more access points would help a lot."
                .to_owned(),
        },
        FeedbackEntry {
            category: Category::Faculty,
            rating: 4,
            tags: tags(&["Compliment", "Follow-up"]),
            date: "Jan 20, 2026".to_owned(),
            message: "Professor Santos goes above and beyond during office hours. More professors \
                      following that example would significantly improve learning."
                .to_owned(),
        },
        FeedbackEntry {
            category: Category::Administration,
            rating: 3,
            tags: tags(&["Suggestion"]),
            date: "Jan 18, 2026".to_owned(),
            message: "Online enrollment could be smoother — fewer redirects and a progress \
                      indicator would make the whole process less stressful."
                .to_owned(),
        },
    ]
}

/// Seed complaint entries, newest first.
pub fn seed_complaints() -> Vec<ComplaintEntry> {
    vec![
        ComplaintEntry {
            role: Role::Instructor,
            visibility: Visibility::Public,
            rating: 2,
            category: Category::Faculty,
            date: "Jan 30, 2026".to_owned(),
            message: "Unfair grading policy applied without prior notice. Students were not \
                      informed of the change before the exam."
                .to_owned(),
            evidence: evidence(&[
                ("exam_paper.jpg", "image/jpeg"),
                ("notification_screenshot.png", "image/png"),
            ]),
            encrypted: true,
        },
        ComplaintEntry {
            role: Role::AuthorizedPersonnel,
            visibility: Visibility::Public,
            rating: 3,
            category: Category::Administration,
            date: "Jan 28, 2026".to_owned(),
            message: "Delayed processing of scholarship applications with no clear communication \
                      to affected students."
                .to_owned(),
            evidence: evidence(&[("application_receipt.jpg", "image/jpeg")]),
            encrypted: true,
        },
        ComplaintEntry {
            role: Role::Instructor,
            visibility: Visibility::Private,
            rating: 1,
            category: Category::Faculty,
            date: "Jan 24, 2026".to_owned(),
            message: "Class attendance records were inaccurate. Several students were marked \
                      absent despite being present."
                .to_owned(),
            evidence: evidence(&[("attendance_audio.mp3", "audio/mpeg")]),
            encrypted: true,
        },
        ComplaintEntry {
            role: Role::AuthorizedPersonnel,
            visibility: Visibility::Public,
            rating: 4,
            category: Category::Services,
            date: "Jan 21, 2026".to_owned(),
            message: "Maintenance requests submitted through the portal were ignored for over \
                      two weeks."
                .to_owned(),
            evidence: evidence(&[
                ("request_ticket.png", "image/png"),
                ("followup_video.mp4", "video/mp4"),
            ]),
            encrypted: true,
        },
    ]
}
