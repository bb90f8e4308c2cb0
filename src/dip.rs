//! Pattern 5: Dependency Inversion
//!
//! `violated::UserService` builds its own storage and is welded to it.
//! `followed::UserService` depends only on the [`followed::Database`] trait
//! and the caller decides which implementation to hand in.

use crate::config::Scenario;
use crate::console::Transcript;

fn sql_insert(data: &str) -> String {
    format!("Executing SQL Query: INSERT INTO users VALUES('{}');", data)
}

fn mongo_insert(data: &str) -> String {
    format!("Executing MongoDB Function: db.users.insert({{name: '{}'}})", data)
}

// ============================================================================
// Violated: high-level service constructs low-level modules
// ============================================================================

pub mod violated {
    use super::*;

    #[derive(Debug, Default, Clone, Copy)]
    pub struct SaveToSqlDatabase;

    impl SaveToSqlDatabase {
        pub fn save(&self, data: &str) -> String {
            tracing::debug!(data, "sql insert");
            sql_insert(data)
        }
    }

    #[derive(Debug, Default, Clone, Copy)]
    pub struct SaveToMongoDb;

    impl SaveToMongoDb {
        pub fn save(&self, data: &str) -> String {
            tracing::debug!(data, "mongo insert");
            mongo_insert(data)
        }
    }

    /// Tightly coupled: each new store means a new field and a new method.
    #[derive(Debug)]
    pub struct UserService {
        sql_database: SaveToSqlDatabase,
        mongo_db: SaveToMongoDb,
    }

    impl UserService {
        pub fn new() -> Self {
            Self {
                sql_database: SaveToSqlDatabase,
                mongo_db: SaveToMongoDb,
            }
        }

        pub fn save_user_data_to_sql(&self, data: &str) -> String {
            self.sql_database.save(data)
        }

        pub fn save_user_data_to_mongo_db(&self, data: &str) -> String {
            self.mongo_db.save(data)
        }
    }

    impl Default for UserService {
        fn default() -> Self {
            Self::new()
        }
    }

    /// Everything `p5_dip_violated` prints.
    pub fn run(scenario: &Scenario) -> Transcript {
        // The service picks its storage; callers can't swap it
        let user = UserService::new();
        let mut out = Transcript::new();
        out.line(user.save_user_data_to_sql(&scenario.dip.sql_user));
        out.line(user.save_user_data_to_mongo_db(&scenario.dip.mongo_user));
        out
    }
}

// ============================================================================
// Followed: service generic over an injected abstraction
// ============================================================================

pub mod followed {
    use super::*;

    pub trait Database {
        fn name(&self) -> &'static str;
        fn save(&self, data: &str) -> String;
    }

    impl<D: Database + ?Sized> Database for &D {
        fn name(&self) -> &'static str {
            (**self).name()
        }

        fn save(&self, data: &str) -> String {
            (**self).save(data)
        }
    }

    impl<D: Database + ?Sized> Database for Box<D> {
        fn name(&self) -> &'static str {
            (**self).name()
        }

        fn save(&self, data: &str) -> String {
            (**self).save(data)
        }
    }

    #[derive(Debug, Default, Clone, Copy)]
    pub struct SaveToSqlDb;

    impl Database for SaveToSqlDb {
        fn name(&self) -> &'static str {
            "SQL"
        }

        fn save(&self, data: &str) -> String {
            sql_insert(data)
        }
    }

    #[derive(Debug, Default, Clone, Copy)]
    pub struct SaveToMongoDb;

    impl Database for SaveToMongoDb {
        fn name(&self) -> &'static str {
            "MongoDB"
        }

        fn save(&self, data: &str) -> String {
            mongo_insert(data)
        }
    }

    pub struct UserService<D> {
        database: D,
    }

    impl<D: Database> UserService<D> {
        pub fn new(database: D) -> Self {
            UserService { database }
        }

        pub fn register_user(&self, name: &str) -> String {
            tracing::debug!(user = name, database = self.database.name(), "registering user");
            self.database.save(name)
        }

        pub fn database(&self) -> &D {
            &self.database
        }
    }

    /// Everything `p5_dip_followed` prints.
    pub fn run(scenario: &Scenario) -> Transcript {
        let databases: Vec<Box<dyn Database>> = vec![Box::new(SaveToSqlDb), Box::new(SaveToMongoDb)];

        let mut out = Transcript::new();
        for db in &databases {
            let service = UserService::new(db.as_ref());
            out.line(service.register_user(&scenario.dip.registered_user));
        }
        out
    }
}
