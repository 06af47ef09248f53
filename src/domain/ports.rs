use crate::domain::model::StudentProfile;

/// Ordered collection of student profiles keyed by registry-assigned id.
pub trait Roster {
    /// All profiles in registration order.
    fn profiles(&self) -> &[StudentProfile];
    fn profiles_mut(&mut self) -> &mut [StudentProfile];

    fn find(&self, id: u32) -> Option<&StudentProfile> {
        self.profiles().iter().find(|p| p.id() == id)
    }

    fn find_mut(&mut self, id: u32) -> Option<&mut StudentProfile> {
        self.profiles_mut().iter_mut().find(|p| p.id() == id)
    }
}
