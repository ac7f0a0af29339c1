use chrono::{DateTime, Months, TimeDelta, Utc};

use nudge_models::reminder::Recurrence;

/// Next scheduled instant for a recurrence pattern.
///
/// Month and year steps clamp the day-of-month to the last day of the target
/// month: Jan 31 + monthly lands on Feb 29 in a leap year (Feb 28 otherwise),
/// and Feb 29 + yearly lands on Feb 28. `None` only when the arithmetic
/// overflows the representable range.
pub fn next_occurrence(base: DateTime<Utc>, pattern: Recurrence) -> Option<DateTime<Utc>> {
    match pattern {
        Recurrence::Daily => base.checked_add_signed(TimeDelta::days(1)),
        Recurrence::Weekly => base.checked_add_signed(TimeDelta::days(7)),
        Recurrence::Monthly => base.checked_add_months(Months::new(1)),
        Recurrence::Yearly => base.checked_add_months(Months::new(12)),
    }
}
