//! Calendar documents used by the pipeline tests.

/// A single event with one alarm.
pub const TEAM_SYNC: &str = "BEGIN:VEVENT\r\nSUMMARY:Team sync\r\nDTSTART:20240615T090000Z\r\nBEGIN:VALARM\r\nACTION:DISPLAY\r\nEND:VALARM\r\nEND:VEVENT";

/// A calendar export with a declared timezone, a VTIMEZONE block, folded
/// lines, escapes, repeated properties and several alarms.
pub const EXPORT_WITH_TIMEZONE: &str = "\
BEGIN:VCALENDAR\r\n\
PRODID:-//Example Corp//Calendar 1.0//EN\r\n\
VERSION:2.0\r\n\
X-WR-CALNAME:Work\r\n\
X-WR-TIMEZONE:America/New_York\r\n\
BEGIN:VTIMEZONE\r\n\
TZID:America/New_York\r\n\
BEGIN:STANDARD\r\n\
DTSTART:19701101T020000\r\n\
TZOFFSETFROM:-0400\r\n\
TZOFFSETTO:-0500\r\n\
END:STANDARD\r\n\
END:VTIMEZONE\r\n\
BEGIN:VEVENT\r\n\
UID:planning-1@example.com\r\n\
DTSTAMP:20240110T120000Z\r\n\
DTSTART;TZID=Europe/London:20240115T140000\r\n\
DTEND:20240115T110000\r\n\
SUMMARY:Quarterly planning\\, Q1\r\n\
DESCRIPTION:Agenda:\\n1. Review\\; 2. Plan\r\n  for the next quarter\r\n\
ATTENDEE;CN=\"Doe, Jane\";ROLE=REQ-PARTICIPANT:mailto:jane@example.com\r\n\
ATTENDEE;CN=John:mailto:john@example.com\r\n\
EXDATE:20240122T090000,20240129T090000\r\n\
EXDATE:20240205T090000\r\n\
BEGIN:VALARM\r\n\
ACTION:DISPLAY\r\n\
TRIGGER:-PT15M\r\n\
DESCRIPTION:Starts soon\r\n\
END:VALARM\r\n\
BEGIN:VALARM\r\n\
ACTION:AUDIO\r\n\
TRIGGER:-PT5M\r\n\
END:VALARM\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:holiday-2@example.com\r\n\
DTSTART;VALUE=DATE:20240704\r\n\
SUMMARY:Independence Day\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// An all-day event without any timezone information.
pub const ALL_DAY: &str = "\
BEGIN:VCALENDAR\n\
BEGIN:VEVENT\n\
DTSTART;VALUE=DATE:20240101\n\
DTEND;VALUE=DATE:20240102\n\
SUMMARY:New Year\n\
END:VEVENT\n\
END:VCALENDAR\n";

/// A whole calendar flattened onto one physical line.
pub const FLATTENED: &str = "BEGIN:VCALENDAR VERSION:2.0 X-WR-TIMEZONE:Europe/Berlin \
BEGIN:VEVENT UID:flat-1 SUMMARY:Lunch with Sam DTSTART:20240301T120000 \
URL:https://example.com/lunch BEGIN:VALARM ACTION:DISPLAY END:VALARM END:VEVENT END:VCALENDAR";

/// A calendar without events.
pub const NO_EVENTS: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example//Example//EN\r\n\
END:VCALENDAR\r\n";

/// A floating date-time with no timezone anywhere in the document.
pub const FLOATING: &str = "\
BEGIN:VCALENDAR\r\n\
BEGIN:VEVENT\r\n\
SUMMARY:Somewhere, sometime\r\n\
DTSTART:20240301T120000\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// An event whose alarm is never closed.
pub const UNTERMINATED_ALARM: &str = "\
BEGIN:VEVENT\r\n\
SUMMARY:Dangling\r\n\
BEGIN:VALARM\r\n\
ACTION:DISPLAY\r\n\
END:VEVENT\r\n";

/// Lower-case markers, bare CR line endings and a repeated text property.
pub const MIXED_CASE: &str = "begin:vcalendar\rbegin:vevent\rcategories:work\rCategories:travel\rsummary:Trip\rbegin:valarm\raction:display\rend:valarm\rend:vevent\rend:vcalendar\r";

/// A regular multi-line document whose event holds one property with an
/// upper-case word before a colon in its value.
pub const SINGLE_PROPERTY: &str = "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nSUMMARY:Call NASA: today\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n";
