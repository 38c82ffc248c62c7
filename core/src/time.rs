// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Time related utils.

use chrono::TimeZone;
use chrono::Utc;

/// DateTime in the reference zone.
pub type DateTime = chrono::DateTime<Utc>;

/// Reference zone every `Date` header is rendered in.
///
/// Zero offset from UTC, always printed as the literal `GMT`.
pub const GMT: Utc = Utc;

/// Time format for http date: "Thu, 19 Mar 2015 19:34:03 GMT"
///
/// Day of week and month are three letter English abbreviations, the day
/// of month is zero padded.
pub const HTTP_DATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Current time in the reference zone.
pub fn now() -> DateTime {
    Utc::now()
}

/// Convert the given time into the reference zone and format it as http date.
///
/// The output follows the IMF-fixdate layout of RFC 7231.
pub fn format_http_date<Tz: TimeZone>(time: chrono::DateTime<Tz>) -> String {
    time.with_timezone(&GMT).format(HTTP_DATE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_http_date() {
        let t = Utc.with_ymd_and_hms(2015, 3, 19, 19, 34, 3).unwrap();
        assert_eq!("Thu, 19 Mar 2015 19:34:03 GMT", format_http_date(t));

        let t = Utc.with_ymd_and_hms(2022, 1, 2, 3, 4, 5).unwrap();
        assert_eq!("Sun, 02 Jan 2022 03:04:05 GMT", format_http_date(t));
    }

    #[test]
    fn test_format_http_date_converts_zone() {
        // America/Chicago during daylight saving time.
        let chicago = FixedOffset::west_opt(5 * 3600).unwrap();
        let t = chicago.with_ymd_and_hms(2015, 3, 19, 14, 34, 3).unwrap();
        assert_eq!("Thu, 19 Mar 2015 19:34:03 GMT", format_http_date(t));
    }

    #[test]
    fn test_format_http_date_crosses_day_boundary() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let t = tokyo.with_ymd_and_hms(2015, 3, 1, 2, 0, 0).unwrap();
        assert_eq!("Sat, 28 Feb 2015 17:00:00 GMT", format_http_date(t));
    }

    #[test]
    fn test_now_formats_as_http_date() {
        let s = format_http_date(now());
        assert_eq!(29, s.len());
        assert!(s.ends_with(" GMT"));
    }
}
