use chrono::Local;

use crate::date::CalendarDate;

/// Source of "today".
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// The local date of the machine the tool runs on.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        Local::now().date_naive().into()
    }
}

/// Always reports the same date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(CalendarDate);

impl FixedClock {
    pub fn new(today: CalendarDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> CalendarDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> CalendarDate {
        (**self).today()
    }
}
