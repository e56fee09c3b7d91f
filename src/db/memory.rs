//! In-memory gateway used by the handler and router tests.

use super::classroom::ClassroomGateway;
use crate::models::Classroom;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryClassroomGateway {
    rows: Mutex<BTreeMap<i32, Classroom>>,
    next_id: AtomicUsize,
    save_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl InMemoryClassroomGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a row directly, bypassing the save counter
    pub fn seed(&self, name: &str, is_active: bool) -> Classroom {
        let id = self.allocate_id();
        let classroom = Classroom {
            id,
            name: name.to_string(),
            is_active,
        };
        self.rows.lock().unwrap().insert(id, classroom.clone());
        classroom
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self, id: i32) -> Option<Classroom> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn allocate_id(&self) -> i32 {
        self.next_id.fetch_add(1, Ordering::SeqCst) as i32 + 1
    }
}

#[async_trait]
impl ClassroomGateway for InMemoryClassroomGateway {
    async fn find_all(&self) -> Result<Vec<Classroom>, sqlx::Error> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Classroom>, sqlx::Error> {
        Ok(self.stored(id))
    }

    async fn save(&self, classroom: &Classroom) -> Result<Classroom, sqlx::Error> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        let mut stored = classroom.clone();
        if stored.is_new() {
            stored.id = self.allocate_id();
        } else if self.stored(stored.id).is_none() {
            return Err(sqlx::Error::RowNotFound);
        }
        self.rows.lock().unwrap().insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, classroom: &Classroom) -> Result<(), sqlx::Error> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().remove(&classroom.id);
        Ok(())
    }
}
