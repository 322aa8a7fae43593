use crate::models::{DailySummary, Reading};
use chrono::NaiveDate;
use std::collections::BTreeMap;

struct DayAccum {
    sum: i64,
    count: i64,
    minimum: i64,
    maximum: i64,
}

/// Groups readings by the date component of their timestamp and reduces each
/// group to the sum, average, minimum and maximum power draw.
///
/// The calendar day is the date component of the stored UTC timestamp as-is;
/// producers are expected to submit timestamps already normalized to the day
/// boundary they want. The average is truncating integer division of the sum
/// by the group size. Input order is irrelevant; the result holds one entry
/// per distinct date, ordered by ascending date.
pub fn summarize_by_day(readings: &[Reading]) -> Vec<DailySummary> {
    let mut days: BTreeMap<NaiveDate, DayAccum> = BTreeMap::new();

    for reading in readings {
        let kw = reading.kilo_watt;
        days.entry(reading.ts.date_naive())
            .and_modify(|acc| {
                acc.sum += kw;
                acc.count += 1;
                acc.minimum = acc.minimum.min(kw);
                acc.maximum = acc.maximum.max(kw);
            })
            .or_insert(DayAccum {
                sum: kw,
                count: 1,
                minimum: kw,
                maximum: kw,
            });
    }

    days.into_iter()
        .map(|(date, acc)| DailySummary {
            date,
            sum: acc.sum,
            average: acc.sum / acc.count,
            minimum: acc.minimum,
            maximum: acc.maximum,
        })
        .collect()
}
