use chrono::Utc;
use dateparts::{day_month_year, decompose, CalendarContext, Instant};

fn main() {
    let now = Instant::from_datetime(&Utc::now());

    let utc = decompose(now, &CalendarContext::UTC).expect("representable instant");
    println!("UTC: {:04}-{:02}-{:02} {:02}:{:02}:{:02}", utc.year, utc.month, utc.day, utc.hour, utc.minute, utc.second);
    println!("weekday: {:?}, day of year: {}", utc.weekday, utc.day_of_year);
    println!("ISO week: {}-W{:02}", utc.iso_week_year, utc.iso_week);

    let tokyo = CalendarContext::east(9 * 3600).expect("valid offset");
    let local = day_month_year(now, &tokyo).expect("representable instant");
    println!("Tokyo date: {:04}-{:02}-{:02}", local.year, local.month, local.day);
}
