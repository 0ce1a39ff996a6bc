//! Contact message model. Contact messages are never updated.

use porto_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Record;

/// A row from the `contacts` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Record for Contact {
    const ENTITY: &'static str = "Contact";

    fn id(&self) -> DbId {
        self.id
    }

    fn set_id(&mut self, id: DbId) {
        self.id = id;
    }
}
