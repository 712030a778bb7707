//! ICS (RFC 5545) content for a confirmed trip.
//!
//! Pure formatter: dates arrive already validated, the download/attachment
//! mechanics live with the caller.

use chrono::{DateTime, NaiveDate, Utc};

pub fn booking_ics(
    title: &str,
    location: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
    description: &str,
    now: DateTime<Utc>,
) -> String {
    let uid = format!("{}@stayfinder.app", now.timestamp_millis());
    let dtstamp = now.format("%Y%m%dT%H%M%SZ");
    format!(
        "BEGIN:VCALENDAR\n\
         VERSION:2.0\n\
         PRODID:-//StayFinder//Booking//EN\n\
         BEGIN:VEVENT\n\
         UID:{uid}\n\
         DTSTAMP:{dtstamp}\n\
         DTSTART;VALUE=DATE:{}\n\
         DTEND;VALUE=DATE:{}\n\
         SUMMARY:{title}\n\
         LOCATION:{location}\n\
         DESCRIPTION:{}\n\
         END:VEVENT\n\
         END:VCALENDAR",
        check_in.format("%Y%m%d"),
        check_out.format("%Y%m%d"),
        description.replace('\n', "\\n"),
    )
}
