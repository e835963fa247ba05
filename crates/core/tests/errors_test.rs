use std::error::Error;
use tabletime_core::errors::{TimeError, TimeResult};

#[test]
fn test_time_error_display() {
    let not_found = TimeError::NotFound("Room not found".to_string());
    let validation = TimeError::Validation("Invalid input".to_string());
    let database = TimeError::Database(eyre::eyre!("Database connection failed"));
    let internal = TimeError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(not_found.to_string(), "Resource not found: Room not found");
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert!(database.to_string().contains("Database error:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let time_error = TimeError::Internal(Box::new(io_error));

    assert!(time_error.source().is_some());
}

#[test]
fn test_time_result() {
    let result: TimeResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: TimeResult<i32> = Err(TimeError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}
