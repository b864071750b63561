use serverlogs::shared::errors::LogFileError;
use std::error::Error as _;
use std::io;

#[test]
fn log_file_error_preserves_io_error_kind_and_source() {
    let err = LogFileError::ListDir {
        path: "/srv/logs".to_string(),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };

    assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    assert_eq!(err.path(), "/srv/logs");
    assert_eq!(
        err.to_string(),
        "failed to list log directory /srv/logs: denied"
    );
    assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("denied"));

    let io_err = err.into_io_error();
    assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
    assert_eq!(io_err.to_string(), "denied");
}

#[test]
fn log_file_error_is_exposed_at_crate_root() {
    let err: serverlogs::LogFileError = LogFileError::Open {
        path: "a.log".to_string(),
        source: io::Error::from(io::ErrorKind::NotFound),
    };
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}
