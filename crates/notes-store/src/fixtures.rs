//! Initial records used to seed test stores.

use notes_core::{NewNote, NewUser};

/// The three notes every API test starts from.
pub fn initial_notes() -> Vec<NewNote> {
    vec![
        NewNote::new("HTML is easy").important(true),
        NewNote::new("Browser can execute only JavaScript").important(false),
        NewNote::new("GET and POST are the most important methods of HTTP protocol")
            .important(true),
    ]
}

/// The `root` user, with a caller-supplied password hash.
pub fn root_user(password_hash: impl Into<String>) -> NewUser {
    NewUser {
        username: "root".to_string(),
        name: None,
        password_hash: password_hash.into(),
    }
}
