use error_stack::Report;
use kernel::KernelError;

// Postgres SQLSTATE codes for serialization_failure and deadlock_detected.
const SERIALIZATION_FAILURE: &str = "40001";
const DEADLOCK_DETECTED: &str = "40P01";

pub(crate) trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertError for Result<T, sqlx::Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let context = match &error {
                sqlx::Error::PoolTimedOut => KernelError::Timeout,
                sqlx::Error::Database(db)
                    if matches!(
                        db.code().as_deref(),
                        Some(SERIALIZATION_FAILURE | DEADLOCK_DETECTED)
                    ) =>
                {
                    KernelError::Concurrency
                }
                _ => KernelError::Internal,
            };
            Report::from(error).change_context(context)
        })
    }
}
