//! In-memory registries for students and courses

pub mod courses;
pub mod id_gen;
pub mod students;

pub use courses::CourseCatalog;
pub use id_gen::IdGenerator;
pub use students::StudentDirectory;

/// Predicate search over a registry
///
/// Results are owned copies in registry order, so callers never observe later
/// registry mutation through them.
pub trait Searchable<T: Clone> {
    /// Every record matching `predicate`
    fn search<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool;

    /// The first record matching `predicate`
    fn find_first<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.search(predicate).into_iter().next()
    }
}
