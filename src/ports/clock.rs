use chrono::NaiveDateTime;

/// Source of the wall-clock time stamped into generated folder names.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}
