use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use error_stack::ResultExt;
use serde::{Deserialize, Serialize};

use kernel::prelude::entity::{Book, User};
use kernel::KernelError;

use crate::error::{ConvertError, DriverError};

static SEED_PATH: &str = "SEED_PATH";

/// Initial contents of the stores, e.g. `{ "books": [...], "users": [...] }`.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl SeedData {
    pub fn new(books: Vec<Book>, users: Vec<User>) -> Self {
        Self { books, users }
    }

    /// Reads the file named by `SEED_PATH`, which may also come from a `.env` file.
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let path = path_from_env(SEED_PATH)
            .convert_error()
            .attach_printable_lazy(|| format!("{SEED_PATH} is not set"))?;
        Self::from_path(path)
    }

    pub fn from_path(path: impl AsRef<Path>) -> error_stack::Result<Self, KernelError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(DriverError::from)
            .convert_error()
            .attach_printable_lazy(|| format!("Failed to open seed file {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .attach_printable_lazy(|| format!("Failed to parse seed file {}", path.display()))
    }

    pub fn from_reader(reader: impl Read) -> error_stack::Result<Self, KernelError> {
        serde_json::from_reader(reader)
            .map_err(DriverError::from)
            .convert_error()
    }
}

fn path_from_env(key: &str) -> Result<PathBuf, DriverError> {
    Ok(dotenvy::var(key).map(PathBuf::from)?)
}

#[cfg(test)]
mod test {
    use std::fs;

    use kernel::interface::query::{BookQuery, DependOnBookQuery, DependOnUserQuery, UserQuery};
    use kernel::prelude::entity::{BookId, BookStatus, UserId, UserName};
    use kernel::KernelError;

    use crate::database::seed::path_from_env;
    use crate::database::{InMemoryDatabase, SeedData};
    use crate::error::{ConvertError, DriverError};

    const SEED: &str = r#"
    {
        "books": [
            { "id": "b1", "name": "Book One", "author": "Author One", "owner_id": "u1", "status": "Available" },
            { "id": "b2", "name": "Book Two", "author": "Author Two", "owner_id": "u1", "status": "Swapped" }
        ],
        "users": [
            { "id": "u1", "name": "User One", "address": "Miami Boulevard", "post_code": "1000", "country": "Florida, US" }
        ]
    }
    "#;

    #[test]
    fn from_reader() -> error_stack::Result<(), KernelError> {
        let seed = SeedData::from_reader(SEED.as_bytes())?;
        assert_eq!(seed.books.len(), 2);
        assert_eq!(seed.books[0].id(), &BookId::new("b1"));
        assert_eq!(seed.books[1].status(), &BookStatus::Swapped);
        assert_eq!(seed.users.len(), 1);
        assert_eq!(seed.users[0].id(), &UserId::new("u1"));
        assert_eq!(seed.users[0].name(), &UserName::new("User One"));
        Ok(())
    }

    #[test]
    fn missing_sections_default_to_empty() -> error_stack::Result<(), KernelError> {
        let seed = SeedData::from_reader(r#"{ "users": [] }"#.as_bytes())?;
        assert_eq!(seed, SeedData::default());
        Ok(())
    }

    #[test]
    fn malformed_seed_is_internal_error() {
        let error = SeedData::from_reader(r#"{ "books": [{ "id": "b1" }] }"#.as_bytes()).unwrap_err();
        assert!(matches!(error.current_context(), KernelError::Internal));
    }

    #[test]
    fn from_path() -> error_stack::Result<(), KernelError> {
        let path = std::env::temp_dir().join(format!("seed-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, SEED).expect("failed to write seed file");
        let seed = SeedData::from_path(&path);
        fs::remove_file(&path).expect("failed to remove seed file");

        assert_eq!(seed?, SeedData::from_reader(SEED.as_bytes())?);

        let error = SeedData::from_path(&path).unwrap_err();
        assert!(matches!(error.current_context(), KernelError::Internal));
        Ok(())
    }

    #[test]
    fn unset_path_variable_is_internal_error() {
        let key = "SEED_PATH_NEVER_SET_BY_ANYONE";
        let error = path_from_env(key).unwrap_err();
        assert!(matches!(error, DriverError::Env(_)));

        let error = path_from_env(key).convert_error().unwrap_err();
        assert!(matches!(error.current_context(), KernelError::Internal));
    }

    #[test_with::env(SEED_PATH)]
    #[test]
    fn from_env() -> error_stack::Result<(), KernelError> {
        let seed = SeedData::from_env()?;
        let db = InMemoryDatabase::from_env()?;
        for book in &seed.books {
            assert_eq!(&db.book_query().find_by_id(book.id())?, book);
        }
        for user in &seed.users {
            db.user_query().exists(user.id())?;
        }
        Ok(())
    }
}
