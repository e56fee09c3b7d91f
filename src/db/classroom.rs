use crate::models::Classroom;
use async_trait::async_trait;
use sqlx::PgPool;

/// Storage operations the classroom handlers depend on
#[async_trait]
pub trait ClassroomGateway: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Classroom>, sqlx::Error>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Classroom>, sqlx::Error>;

    /// Insert a new classroom or update an existing one, returning the stored row
    async fn save(&self, classroom: &Classroom) -> Result<Classroom, sqlx::Error>;

    async fn delete(&self, classroom: &Classroom) -> Result<(), sqlx::Error>;
}

pub struct ClassroomRepository {
    pool: PgPool,
}

impl ClassroomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, classroom: &Classroom) -> Result<Classroom, sqlx::Error> {
        sqlx::query_as::<_, Classroom>(
            "INSERT INTO classrooms (name, is_active)
             VALUES ($1, $2)
             RETURNING id, name, is_active"
        )
        .bind(&classroom.name)
        .bind(classroom.is_active)
        .fetch_one(&self.pool)
        .await
    }

    async fn update(&self, classroom: &Classroom) -> Result<Classroom, sqlx::Error> {
        sqlx::query_as::<_, Classroom>(
            "UPDATE classrooms
             SET name = $2, is_active = $3
             WHERE id = $1
             RETURNING id, name, is_active"
        )
        .bind(classroom.id)
        .bind(&classroom.name)
        .bind(classroom.is_active)
        .fetch_one(&self.pool)
        .await
    }
}

#[async_trait]
impl ClassroomGateway for ClassroomRepository {
    async fn find_all(&self) -> Result<Vec<Classroom>, sqlx::Error> {
        sqlx::query_as::<_, Classroom>("SELECT id, name, is_active FROM classrooms ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Classroom>, sqlx::Error> {
        sqlx::query_as::<_, Classroom>("SELECT id, name, is_active FROM classrooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn save(&self, classroom: &Classroom) -> Result<Classroom, sqlx::Error> {
        if classroom.is_new() {
            self.insert(classroom).await
        } else {
            self.update(classroom).await
        }
    }

    async fn delete(&self, classroom: &Classroom) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM classrooms WHERE id = $1")
            .bind(classroom.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
