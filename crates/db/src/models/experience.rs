//! Work experience model.
//!
//! Dates are free-form text (e.g. `2021`, `Jan 2021`); `end_date` is blank
//! for a current position.

use porto_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Record;

/// A row from the `experiences` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub id: DbId,
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl Record for Experience {
    const ENTITY: &'static str = "Experience";

    fn id(&self) -> DbId {
        self.id
    }

    fn set_id(&mut self, id: DbId) {
        self.id = id;
    }
}
