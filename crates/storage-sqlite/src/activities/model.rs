//! Database models for activities.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for activities
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::activities)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ActivityDB {
    pub id: i64,
    pub title: String,
    pub start_time: String,
    pub duration: i64,
    pub cost: f64,
    pub location: String,
    pub notes: Option<String>,
    pub completed: bool,
}

/// Database model for creating a new activity; the id is assigned by SQLite.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::activities)]
pub struct NewActivityDB {
    pub title: String,
    pub start_time: String,
    pub duration: i64,
    pub cost: f64,
    pub location: String,
    pub notes: Option<String>,
    pub completed: bool,
}

impl From<ActivityDB> for tripfolio_core::activities::Activity {
    fn from(db: ActivityDB) -> Self {
        Self {
            id: db.id,
            title: db.title,
            start_time: db.start_time,
            duration: db.duration,
            cost: db.cost,
            location: db.location,
            notes: db.notes,
            completed: db.completed,
        }
    }
}

impl From<tripfolio_core::activities::NewActivity> for NewActivityDB {
    fn from(domain: tripfolio_core::activities::NewActivity) -> Self {
        Self {
            title: domain.title,
            start_time: domain.start_time,
            duration: domain.duration,
            cost: domain.cost,
            location: domain.location,
            notes: domain.notes,
            completed: false,
        }
    }
}
