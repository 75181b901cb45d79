//! Mutation and query operations over the gradebook.
//!
//! Lookup policy: a school or course name that does not exist is always a
//! hard error (`SchoolNotFound` / `CourseNotFound`). A student with no
//! record, or a record with no tests, is never an error; averages over
//! nothing are `0.0`. Callers who need to tell "no data" from "true average
//! of zero" must inspect the record directly.

use crate::domain::events::Event;
use crate::domain::model::{Course, Gradebook, School};
use crate::utils::error::{GradebookError, Result};

impl Gradebook {
    /// Inserts an empty school, returning whether it was new. Schools are
    /// never created implicitly by the other operations.
    pub fn add_school(&mut self, name: &str) -> bool {
        if self.schools.contains_key(name) {
            return false;
        }
        self.schools.insert(name.to_string(), School::default());
        true
    }

    /// Appends to the roster unless the name is already present. Roster
    /// membership is independent of course participation; see `add_grade`.
    pub fn add_student(&mut self, school: &str, full: &str) -> Result<Event> {
        let roster = &mut self.school_mut(school)?.students;
        if roster.iter().any(|s| s == full) {
            Ok(Event::DuplicateStudent {
                school: school.to_string(),
                student: full.to_string(),
            })
        } else {
            roster.push(full.to_string());
            Ok(Event::StudentAdded {
                school: school.to_string(),
                student: full.to_string(),
            })
        }
    }

    pub fn add_course(&mut self, school: &str, course: &str) -> Result<Event> {
        let courses = &mut self.school_mut(school)?.courses;
        if courses.contains_key(course) {
            Ok(Event::DuplicateCourse {
                school: school.to_string(),
                course: course.to_string(),
            })
        } else {
            courses.insert(course.to_string(), Course::default());
            Ok(Event::CourseAdded {
                school: school.to_string(),
                course: course.to_string(),
            })
        }
    }

    /// Records a grade, creating the student's test record on first use and
    /// overwriting any prior grade for the same test label. Does not check
    /// the roster.
    pub fn add_grade(
        &mut self,
        school: &str,
        course: &str,
        full: &str,
        test: &str,
        grade: i64,
    ) -> Result<Event> {
        self.course_mut(school, course)?
            .records
            .entry(full.to_string())
            .or_default()
            .insert(test.to_string(), grade);
        Ok(Event::GradeRecorded {
            school: school.to_string(),
            course: course.to_string(),
            student: full.to_string(),
            test: test.to_string(),
            grade,
        })
    }

    pub fn average_student_in_course(
        &self,
        school: &str,
        course: &str,
        full: &str,
    ) -> Result<f64> {
        let course_data = self.course(school, course)?;
        Ok(match course_data.records.get(full) {
            Some(record) => mean(record.values().copied()),
            None => 0.0,
        })
    }

    /// Pools every grade from every course the student participates in,
    /// ignoring course boundaries (an unweighted flat mean).
    pub fn average_student_total(&self, school: &str, full: &str) -> Result<f64> {
        let school_data = self.school(school)?;
        Ok(mean(
            school_data
                .courses
                .values()
                .filter_map(|course| course.records.get(full))
                .flat_map(|record| record.values().copied()),
        ))
    }

    pub fn average_course(&self, school: &str, course: &str) -> Result<f64> {
        let course_data = self.course(school, course)?;
        Ok(mean(
            course_data
                .records
                .values()
                .flat_map(|record| record.values().copied()),
        ))
    }

    pub fn average_school(&self, school: &str) -> Result<f64> {
        let school_data = self.school(school)?;
        Ok(mean(
            school_data
                .courses
                .values()
                .flat_map(|course| course.records.values())
                .flat_map(|record| record.values().copied()),
        ))
    }

    fn school(&self, school: &str) -> Result<&School> {
        self.schools
            .get(school)
            .ok_or_else(|| GradebookError::SchoolNotFound {
                school: school.to_string(),
            })
    }

    fn school_mut(&mut self, school: &str) -> Result<&mut School> {
        self.schools
            .get_mut(school)
            .ok_or_else(|| GradebookError::SchoolNotFound {
                school: school.to_string(),
            })
    }

    fn course(&self, school: &str, course: &str) -> Result<&Course> {
        self.school(school)?
            .courses
            .get(course)
            .ok_or_else(|| GradebookError::CourseNotFound {
                school: school.to_string(),
                course: course.to_string(),
            })
    }

    fn course_mut(&mut self, school: &str, course: &str) -> Result<&mut Course> {
        self.school_mut(school)?
            .courses
            .get_mut(course)
            .ok_or_else(|| GradebookError::CourseNotFound {
                school: school.to_string(),
                course: course.to_string(),
            })
    }
}

fn mean(grades: impl Iterator<Item = i64>) -> f64 {
    let (sum, count) = grades.fold((0i64, 0usize), |(sum, count), g| (sum + g, count + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
