//! Deterministic demo seeding for the CLI entry point.

use crate::domain::model::Gradebook;
use crate::utils::error::Result;
use crate::utils::logger::log_event;

pub const SCHOOLS: [&str; 2] = ["school 1", "school 2"];
pub const COURSES: [&str; 6] = [
    "math",
    "physics",
    "programming",
    "history",
    "biology",
    "english",
];

/// Seeds two schools with the fixed course list and twenty synthetic
/// students. Grades are pseudo-random but deterministic:
/// `(i * t + course_name_len) % 6 + 1` for tests 1..=3.
pub fn seed() -> Result<Gradebook> {
    let mut gradebook = Gradebook::new();
    for school in SCHOOLS {
        gradebook.add_school(school);
        for course in COURSES {
            log_event(&gradebook.add_course(school, course)?);
        }
    }

    for i in 1..=20i64 {
        let full = format!("name{} surname{}", i, i);

        if i % 2 == 0 {
            log_event(&gradebook.add_student("school 1", &full)?);
        }
        if i % 2 == 1 || i % 3 == 0 {
            log_event(&gradebook.add_student("school 2", &full)?);
        }

        for school in SCHOOLS {
            let enrolled = gradebook
                .schools
                .get(school)
                .is_some_and(|s| s.students.iter().any(|name| name == &full));
            if !enrolled {
                continue;
            }
            for course in COURSES {
                for t in 1..=3i64 {
                    let grade = (i * t + course.len() as i64) % 6 + 1;
                    log_event(&gradebook.add_grade(
                        school,
                        course,
                        &full,
                        &format!("test{}", t),
                        grade,
                    )?);
                }
            }
        }
    }

    Ok(gradebook)
}
