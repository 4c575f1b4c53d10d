use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use shared_data::Remaining;
use yew::prelude::*;
use crate::style::SharedStyle;

#[derive(Properties, Clone, PartialEq, Eq)]
pub struct CountdownProps {
	/// The instant we're counting down to, fixed for the life of the component
	pub target: DateTime<Utc>,
}

fn sample_now() -> DateTime<Utc> {
	// Date::now() is whole-ish milliseconds since the epoch; any date a browser
	// can produce fits comfortably in the range from_timestamp_millis accepts,
	// so the fallback arm should never actually be taken
	DateTime::from_timestamp_millis(js_sys::Date::now() as i64)
		.unwrap_or_default()
}

#[function_component(Countdown)]
pub fn countdown(props: &CountdownProps) -> Html {
	// The first snapshot is computed right away; the interval below only keeps
	// it fresh
	let target = props.target;
	let remaining = use_state(|| Remaining::until(target, sample_now()));

	{
		let remaining = remaining.clone();
		use_effect_with(target, move |&target| {
			let tick = Interval::new(1_000, move || {
				// Re-sample the clock and redo the subtraction from scratch each
				// time; decrementing the last value would slowly drift as ticks
				// get delayed or coalesced in background tabs
				remaining.set(Remaining::until(target, sample_now()));
			});

			// Dropping the Interval cancels it. Without this the tick would keep
			// firing into a component that's no longer mounted
			move || drop(tick)
		});
	}

	html! {
		<>
			<SharedStyle />
			<style>
			{
				"
				.countdown {
					display: flex;
					justify-content: center;
					gap: 14px;
				}
				.countdown-unit {
					min-width: 76px;
					padding: 14px 10px;
					border: 1px solid var(--faint-line);
					border-radius: 12px;
					background-color: rgba(255, 255, 255, 0.05);
					text-align: center;
				}
				.countdown-value {
					font-size: 28px;
					font-weight: 600;
					color: var(--gold);
				}
				.countdown-label {
					margin-top: 4px;
					font-size: 11px;
					letter-spacing: 0.25em;
					text-transform: uppercase;
					color: var(--dim-text);
				}
				"
			}
			</style>
			<div class="countdown">
				{ unit_html(remaining.days.to_string(), "Days") }
				{ unit_html(remaining.hours_display(), "Hours") }
				{ unit_html(remaining.minutes_display(), "Minutes") }
				{ unit_html(remaining.seconds_display(), "Seconds") }
			</div>
		</>
	}
}

fn unit_html(value: String, label: &'static str) -> Html {
	html! {
		<div class="countdown-unit">
			<div class="countdown-value">{ value }</div>
			<div class="countdown-label">{ label }</div>
		</div>
	}
}
