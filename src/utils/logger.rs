use crate::domain::events::Event;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("gradebook=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gradebook=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Renders a domain event. The store itself never logs; callers pass the
/// events they receive through here (or to their own sink).
pub fn log_event(event: &Event) {
    match event {
        Event::StudentAdded { school, student } => {
            tracing::info!("{} added to {} students", student, school);
        }
        Event::DuplicateStudent { school, student } => {
            tracing::warn!("{} already in {}", student, school);
        }
        Event::CourseAdded { school, course } => {
            tracing::info!("{} added for {}", course, school);
        }
        Event::DuplicateCourse { school, course } => {
            tracing::warn!("{} exists in {}", course, school);
        }
        Event::GradeRecorded {
            school,
            course,
            student,
            test,
            grade,
        } => {
            tracing::info!(
                "{}:{} got {} from {} in {}",
                school.to_uppercase(),
                student,
                grade,
                test,
                course
            );
        }
    }
}
