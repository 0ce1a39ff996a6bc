//! Record models.
//!
//! Each entity is one flat struct used for the database row, the JSON
//! request body and the JSON response alike. Missing JSON fields decode to
//! their zero value so incomplete payloads reach validation instead of
//! failing to decode.

pub mod contact;
pub mod experience;
pub mod portfolio;

use porto_core::types::DbId;

pub use contact::Contact;
pub use experience::Experience;
pub use portfolio::Portfolio;

/// Common identity handling for persisted records.
pub trait Record: Clone + Send + Sync + 'static {
    /// Entity name used in log fields and not-found errors.
    const ENTITY: &'static str;

    fn id(&self) -> DbId;

    fn set_id(&mut self, id: DbId);

    /// True until the store has assigned an id.
    fn is_new(&self) -> bool {
        self.id() == 0
    }
}
