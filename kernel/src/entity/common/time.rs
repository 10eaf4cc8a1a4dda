use std::marker::PhantomData;

use time::{Duration, OffsetDateTime};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreatedAt<T>(OffsetDateTime, PhantomData<T>);

impl<T> CreatedAt<T> {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into(), PhantomData)
    }

    pub fn now() -> Self {
        Self::new(now_in_micros())
    }
}

/// Current UTC time at the microsecond precision Postgres stores.
pub(crate) fn now_in_micros() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    now - Duration::nanoseconds(i64::from(now.nanosecond() % 1_000))
}

impl<T> AsRef<OffsetDateTime> for CreatedAt<T> {
    fn as_ref(&self) -> &OffsetDateTime {
        &self.0
    }
}

impl<T> From<CreatedAt<T>> for OffsetDateTime {
    fn from(value: CreatedAt<T>) -> Self {
        value.0
    }
}

#[cfg(test)]
mod test {
    use super::{now_in_micros, CreatedAt};
    use time::OffsetDateTime;

    #[test]
    fn now_drops_sub_microsecond_digits() {
        for _ in 0..100 {
            assert_eq!(now_in_micros().nanosecond() % 1_000, 0);
        }
        let created = OffsetDateTime::from(CreatedAt::<()>::now());
        assert_eq!(created.nanosecond() % 1_000, 0);
    }
}
