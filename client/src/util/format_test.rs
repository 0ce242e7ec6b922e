use super::*;
use time::macros::datetime;

#[test]
fn short_date_uses_abbreviated_month_and_unpadded_day() {
    assert_eq!(short_date(datetime!(2024-03-05 12:34 UTC)), "Mar 5, 2024");
    assert_eq!(short_date(datetime!(2023-12-25 0:00 UTC)), "Dec 25, 2023");
}
