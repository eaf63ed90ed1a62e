use std::env;

use crate::error::AppError;

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// Production database profile - file-backed SQLite store
    Prod,
    /// Test database profile - enforces safety rules
    Test,
}

/// Builds a SQLite connection URL from environment variables based on profile.
///
/// The production store is a single database file (`mode=rwc` creates it on
/// first run). The test profile defaults to an in-memory database; a
/// file-backed test store must carry a `_test.db` suffix so a misconfigured
/// test run can never touch the production file.
pub fn db_url(profile: DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => {
            let path = env::var("BOOK_API_DB_PATH").unwrap_or_else(|_| "book_api.db".to_string());
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbProfile::Test => {
            let path =
                env::var("BOOK_API_TEST_DB_PATH").unwrap_or_else(|_| ":memory:".to_string());
            if path == ":memory:" {
                return Ok("sqlite::memory:".to_string());
            }
            if !path.ends_with("_test.db") {
                return Err(AppError::config(format!(
                    "Test profile requires a database file ending with '_test.db', but got: '{path}'"
                )));
            }
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use serial_test::serial;

    use super::{db_url, DbProfile};

    fn clear_test_env() {
        env::remove_var("BOOK_API_DB_PATH");
        env::remove_var("BOOK_API_TEST_DB_PATH");
    }

    #[test]
    #[serial]
    fn test_db_url_prod_default() {
        clear_test_env();
        let url = db_url(DbProfile::Prod).unwrap();
        assert_eq!(url, "sqlite://book_api.db?mode=rwc");
    }

    #[test]
    #[serial]
    fn test_db_url_prod_custom_path() {
        clear_test_env();
        env::set_var("BOOK_API_DB_PATH", "/var/lib/book-api/catalog.db");
        let url = db_url(DbProfile::Prod).unwrap();
        assert_eq!(url, "sqlite:///var/lib/book-api/catalog.db?mode=rwc");
        clear_test_env();
    }

    #[test]
    #[serial]
    fn test_db_url_test_defaults_to_memory() {
        clear_test_env();
        let url = db_url(DbProfile::Test).unwrap();
        assert_eq!(url, "sqlite::memory:");
    }

    #[test]
    #[serial]
    fn test_db_url_test_file_requires_suffix() {
        clear_test_env();
        env::set_var("BOOK_API_TEST_DB_PATH", "book_api.db"); // Invalid: prod file
        let result = db_url(DbProfile::Test);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("_test.db"));
        clear_test_env();
    }

    #[test]
    #[serial]
    fn test_db_url_test_file_with_suffix() {
        clear_test_env();
        env::set_var("BOOK_API_TEST_DB_PATH", "book_api_test.db");
        let url = db_url(DbProfile::Test).unwrap();
        assert_eq!(url, "sqlite://book_api_test.db?mode=rwc");
        clear_test_env();
    }
}
