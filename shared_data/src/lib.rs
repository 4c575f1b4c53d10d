use std::sync::OnceLock;

use chrono::{DateTime, Utc};

mod countdown;
mod gate;

pub use countdown::Remaining;
pub use gate::{COVER_OPEN_MS, FADE_OUT_MS, GatePhase, GateTimeline};

pub const COUPLE_NAMES: &str = "FG OFFR RO SEFAH & FG OFFR TB LAMPTEY";
pub const TAP_TO_OPEN: &str = "Tap to open invite";

pub const FAMILY_NOTE: &str = "The Sefah and Lamptey family request the pleasure of your \
	company as we celebrate tradition, family, and the start of a new journey. Consider this \
	your official clearance to join us for a morning of love, laughter, and blessing.";

// When the ceremony starts. Accra sits on UTC so the offset is a plain Z,
// but we keep it explicit so nobody has to guess
pub const CEREMONY_INSTANT: &str = "2026-02-14T09:00:00+00:00";

// Display renderings of the same day; a test below keeps them agreeing with
// the instant so the hero and the details panel can't drift apart
pub const CEREMONY_DATE_SHORT: &str = "14 Feb 2026";
pub const CEREMONY_DATE_LONG: &str = "Saturday, 14th February, 2026";
pub const BOARDING_TIME: &str = "08:30";

pub const VENUE: &str = "The B B Event Center, Westlands Haatso";
pub const CITY: &str = "Accra";
pub const MAPS_URL: &str =
	"https://www.google.com/maps/search/?api=1&query=The+B+B+Event+Center+Westlands+Haatso";
pub const RSVP_PHONE: &str = "+233240140226";
pub const RSVP_WHATSAPP_URL: &str = "https://wa.me/233240140226?text=RSVP";

/// Label/value rows for the "flight details" panel, in display order
pub const FLIGHT_DETAILS: &[(&str, &str)] = &[
	("DATE", CEREMONY_DATE_LONG),
	("TIME", "09:00 HRS"),
	("VENUE", VENUE),
	("DRESS CODE", "White"),
	("CITY", CITY),
];

/// The boarding-pass strip on the hero: (label, value) minis
pub const BOARDING_PASS: &[(&str, &str)] = &[
	("Flight", "PT-0214"),
	("Gate", "Love"),
	("Seat", "A2 & B2"),
];

#[must_use]
pub fn ceremony_instant() -> DateTime<Utc> {
	static INSTANT: OnceLock<DateTime<Utc>> = OnceLock::new();

	*INSTANT.get_or_init(||
		// This only fails if the literal above is malformed, so it's a content bug
		// to fix right here, not something to recover from at runtime
		DateTime::parse_from_rfc3339(CEREMONY_INSTANT).unwrap().to_utc()
	)
}

#[cfg(test)]
#[test]
fn ceremony_instant_parses() {
	use chrono::Timelike;

	// get_or_init would hide a bad literal behind a panic inside the frontend,
	// so make sure it actually parses (and to the morning we advertise)
	let instant = ceremony_instant();
	assert_eq!(instant.hour(), 9);
	assert_eq!(instant.to_rfc3339(), "2026-02-14T09:00:00+00:00");
}

#[cfg(test)]
#[test]
fn display_dates_agree_with_the_instant() {
	let instant = ceremony_instant();

	// both human renderings must describe the same day as the parsed instant
	assert_eq!(instant.format("%-d %b %Y").to_string(), CEREMONY_DATE_SHORT);
	assert_eq!(
		format!("{}, {}", instant.format("%A"), instant.format("%-dth %B, %Y")),
		CEREMONY_DATE_LONG
	);

	// and the details panel shows that rendering, not a copy of it
	let date_row = FLIGHT_DETAILS.iter().find(|&&(label, _)| label == "DATE");
	assert_eq!(date_row, Some(&("DATE", CEREMONY_DATE_LONG)));
}

pub static BASE_STYLE: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Cormorant+Garamond:wght@400;600&display=swap');
* {
	--gold: #d4af37;
	--ivory: #fbfaf6;
	--ink: #0b0b0c;
	--navy: #0b1d26;
	--deep-teal: #0b2a33;
	--panel: #141416;
	--faint-line: rgba(255, 255, 255, 0.10);
	--soft-text: rgba(255, 255, 255, 0.70);
	--dim-text: rgba(255, 255, 255, 0.55);
	box-sizing: border-box;
	font-family: "Cormorant Garamond", Georgia, serif;
	color: var(--ivory);
}
body {
	margin: 0;
	background-color: var(--ink);
}
a {
	text-decoration: none;
}
.eyebrow {
	font-size: 12px;
	letter-spacing: 0.35em;
	text-transform: uppercase;
	color: var(--soft-text);
}
.pill {
	display: inline-block;
	border: 1px solid rgba(255, 255, 255, 0.20);
	border-radius: 999px;
	padding: 12px 24px;
	font-size: 14px;
	background-color: rgba(255, 255, 255, 0.10);
	transition: background-color 0.2s;
}
.pill:hover {
	background-color: rgba(255, 255, 255, 0.15);
}
.pill.ghost {
	background-color: transparent;
}
.pill.ghost:hover {
	background-color: rgba(255, 255, 255, 0.10);
}
"#;
