use showcase_gate::db::Database;
use showcase_gate::gate::{AccessGate, Credential};
use showcase_gate::session::{SessionStore, SESSION_KEY};
use speculate2::speculate;

fn open_gate(db: Database) -> AccessGate<Database> {
    AccessGate::new(Credential::new("secret"), SessionStore::new(db))
}

fn open_file(path: &std::path::Path) -> Database {
    let db = Database::open(path.to_path_buf()).expect("Failed to open database");
    db.migrate().expect("Failed to run migrations");
    db
}

speculate! {
    before {
        let db = Database::open_memory().expect("Failed to create in-memory database");
        db.migrate().expect("Failed to run migrations");
    }

    describe "client storage" {
        it "returns None for missing keys" {
            assert!(db.get_value("missing").expect("Query failed").is_none());
        }

        it "stores and overwrites values" {
            db.set_value("k", "one").expect("Write failed");
            db.set_value("k", "two").expect("Write failed");
            assert_eq!(db.get_value("k").expect("Query failed").as_deref(), Some("two"));
        }

        it "reports whether a removal deleted anything" {
            db.set_value("k", "v").expect("Write failed");
            assert!(db.remove_value("k").expect("Delete failed"));
            assert!(!db.remove_value("k").expect("Delete failed"));
        }
    }

    describe "session flag" {
        it "is stored as the literal true under the session key" {
            let gate = open_gate(db.clone());
            gate.attempt("secret").expect("Unlock failed");
            assert_eq!(db.get_value(SESSION_KEY).expect("Query failed").as_deref(), Some("true"));
        }

        it "is absent after revoke" {
            let gate = open_gate(db.clone());
            gate.attempt("secret").expect("Unlock failed");
            gate.revoke();
            assert!(db.get_value(SESSION_KEY).expect("Query failed").is_none());
        }

        it "survives reopening the database" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("nested").join("showcase.db");

            open_gate(open_file(&path)).attempt("secret").expect("Unlock failed");
            assert!(open_gate(open_file(&path)).is_unlocked());

            open_gate(open_file(&path)).revoke();
            assert!(!open_gate(open_file(&path)).is_unlocked());
        }
    }
}

