use std::error;
use std::fmt;

pub type Report<T> = Result<T, Error>;

type Cause = Box<dyn error::Error + Send + Sync>;

/// A message describing what failed, followed by the underlying cause if any.
#[derive(Debug)]
pub struct Error {
    cause: Option<Cause>,
    message: String,
}

impl Error {
    pub fn new<U, M>(cause: U, message: M) -> Self
    where
        U: Into<Cause>,
        M: Into<String>,
    {
        Self {
            cause: Some(cause.into()),
            message: message.into(),
        }
    }

    pub fn message<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self {
            cause: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(cause) = &self.cause {
            write!(f, ": {cause}")?;
        }

        Ok(())
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self
            .cause
            .as_deref()
            .map(|cause| cause as &(dyn error::Error + 'static))
    }
}

pub trait ErrorExt<T> {
    fn message(self, message: &str) -> Report<T>;

    fn with_message<F, M>(self, f: F) -> Report<T>
    where
        F: FnOnce() -> M,
        M: Into<String>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Cause>,
{
    fn message(self, message: &str) -> Report<T> {
        self.map_err(|err| Error::new(err, message))
    }

    fn with_message<F, M>(self, f: F) -> Report<T>
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        self.map_err(|err| Error::new(err, f()))
    }
}
