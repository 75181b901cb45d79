/// Domain events returned by gradebook mutations.
///
/// The store reports what happened instead of logging from business logic;
/// `utils::logger::log_event` is the default rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    StudentAdded {
        school: String,
        student: String,
    },
    /// The student was already on the roster; the mutation was a no-op.
    DuplicateStudent {
        school: String,
        student: String,
    },
    CourseAdded {
        school: String,
        course: String,
    },
    /// The course already existed; the mutation was a no-op.
    DuplicateCourse {
        school: String,
        course: String,
    },
    GradeRecorded {
        school: String,
        course: String,
        student: String,
        test: String,
        grade: i64,
    },
}
