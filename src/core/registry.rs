use crate::domain::model::StudentProfile;
use crate::domain::ports::Roster;
use crate::utils::error::{Result, TrackerError};

/// In-memory roster. Ids start at 1 and are never reused.
#[derive(Debug, Clone)]
pub struct StudentRegistry {
    students: Vec<StudentProfile>,
    next_id: u32,
}

impl StudentRegistry {
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
            next_id: 1,
        }
    }

    /// Registers a student and returns the assigned id.
    pub fn register(&mut self, first_name: &str, last_name: &str, email: &str) -> Result<u32> {
        if self.is_email_taken(email) {
            tracing::warn!(email, "Rejected registration with duplicate email");
            return Err(TrackerError::EmailTaken {
                email: email.to_string(),
            });
        }

        let id = self.next_id;
        self.next_id += 1;
        self.students
            .push(StudentProfile::new(id, first_name, last_name, email));
        tracing::debug!(student_id = id, "Student registered");
        Ok(id)
    }

    pub fn is_email_taken(&self, email: &str) -> bool {
        self.students.iter().any(|s| s.email() == email)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.students.iter().map(StudentProfile::id)
    }
}

impl Default for StudentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster for StudentRegistry {
    fn profiles(&self) -> &[StudentProfile] {
        &self.students
    }

    fn profiles_mut(&mut self) -> &mut [StudentProfile] {
        &mut self.students
    }
}
