use gloo_console::log;
use yew::prelude::*;
use crate::{
	countdown::Countdown,
	gate::PassportGate,
	style::SharedStyle
};

#[function_component(InvitePage)]
pub fn invite_page() -> Html {
	let opened = use_state(|| false);

	let on_opened = {
		let opened = opened.clone();
		Callback::from(move |()| {
			opened.set(true);

			// The reveal should land the guest at the top of the page, however
			// far they might have scrolled behind the overlay
			if let Some(win) = web_sys::window() {
				win.scroll_to_with_x_and_y(0.0, 0.0);
			} else {
				log!("no window to scroll, which is odd, but fine");
			}
		})
	};

	let target = shared_data::ceremony_instant();

	html! {
		<>
			<SharedStyle />
			<style>{ PAGE_STYLE }</style>
			{
				// The gate stays mounted until it reports completion, then the
				// flag drops it for the rest of the visit
				if !*opened {
					html! { <PassportGate on_opened={ on_opened } /> }
				} else {
					html! {}
				}
			}
			<main>
				<section class="hero">
					<div class="hero-inner">
						<span class="hero-badge">
							<span class="hero-badge-plane">{ "✈" }</span>
							{ "Passport to Engagement" }
						</span>
						<h1 class="hero-names">{ shared_data::COUPLE_NAMES }</h1>
						<p class="hero-strip eyebrow">
							{
								format!(
									"{} • {} • Boarding begins {}",
									shared_data::CITY,
									shared_data::CEREMONY_DATE_SHORT,
									shared_data::BOARDING_TIME
								)
							}
						</p>
						<div class="boarding-pass">
							<div class="boarding-route">
								<div class="boarding-end">
									<p class="eyebrow">{ "Departure" }</p>
									<div class="boarding-code">{ "ACC" }</div>
									<p class="boarding-place">{ shared_data::CITY }</p>
								</div>
								<div class="boarding-divider"></div>
								<div class="boarding-end boarding-arrival">
									<p class="eyebrow">{ "Arrival" }</p>
									<div class="boarding-code">{ "ENG" }</div>
									<p class="boarding-place">{ "Engagement" }</p>
								</div>
							</div>
							<div class="boarding-minis">
								{ shared_data::BOARDING_PASS.iter().map(|&(label, value)| mini(label, value)).collect::<Html>() }
							</div>
						</div>
						<div class="hero-countdown">
							<p class="eyebrow">{ "Wheels up in" }</p>
							<Countdown target={ target } />
						</div>
					</div>
				</section>

				<section class="panel-grid">
					<div class="panel">
						<h3 class="panel-title">{ "Captain's Note" }</h3>
						<p class="panel-text">{ shared_data::FAMILY_NOTE }</p>
						<div class="badge-row">
							<span class="badge">{ format!("✈ Boarding {}", shared_data::BOARDING_TIME) }</span>
							<span class="badge">{ "📍 Westlands Haatso" }</span>
							<span class="badge">{ "♥ By Invitation" }</span>
						</div>
					</div>
					<div class="panel">
						<h3 class="panel-title">{ "Flight Details" }</h3>
						<div class="detail-rows">
							{ shared_data::FLIGHT_DETAILS.iter().map(|&(label, value)| detail_row(label, value)).collect::<Html>() }
						</div>
						<div class="dress-card">
							<p class="eyebrow">{ "Dress Guidance" }</p>
							<p class="panel-text">
								{ "White. Think clean, timeless, elegant. Keep it comfortable for a morning celebration." }
							</p>
						</div>
						<p class="invite-only">{ "Kindly note: this event is strictly by invitation." }</p>
					</div>
					<div class="panel">
						<h3 class="panel-title">{ "Arrival & Route" }</h3>
						<p class="panel-text">
							{ "Please arrive early so you don't miss the opening rites. If you need help with \
							   directions, reach out to the family contact listed on your invite." }
						</p>
						<div class="button-row">
							<a class="pill" href="#map">{ "View Map" }</a>
							<a class="pill ghost" href="#registry">{ "Continue ↓" }</a>
						</div>
					</div>
					<div class="panel">
						<h3 class="panel-title">{ "What to Expect" }</h3>
						<p class="panel-text">
							{ "A warm family gathering, tradition, celebration, and a heartfelt blessing. \
							   Please arrive on time so you don't miss the opening rites." }
						</p>
					</div>
				</section>

				<section id="map" class="map-section">
					<p class="eyebrow">{ "Location" }</p>
					<h3 class="map-venue">{ shared_data::VENUE }</h3>
					<p class="panel-text">{ "Open your maps app and search the venue name above, or:" }</p>
					<div class="button-row">
						<a class="pill" href={ shared_data::MAPS_URL } target="_blank">{ "Open in Maps" }</a>
					</div>
				</section>

				<section id="registry" class="registry-section">
					<p class="eyebrow">{ "Registry" }</p>
					<h2 class="registry-title">{ "Your presence is the greatest gift." }</h2>
					<p class="panel-text">
						{ "If you would like to honor us with a gift, we've provided options below. \
						   Thank you for celebrating with us." }
					</p>
					<div class="button-row centered">
						<a class="pill" href="#rsvp">{ "RSVP" }</a>
						<a class="pill ghost" href="#rsvp">{ "Gift Details" }</a>
					</div>
					<div class="cleared">{ "CLEARED" }</div>
				</section>

				<section id="rsvp" class="rsvp-section">
					<p class="eyebrow">{ "RSVP" }</p>
					<h2 class="registry-title">{ "Confirm your seat" }</h2>
					<div class="rsvp-countdown">
						<Countdown target={ target } />
					</div>
					<div class="button-row centered">
						<a class="pill" href={ format!("tel:{}", shared_data::RSVP_PHONE) }>{ "Call to RSVP" }</a>
						<a class="pill ghost" href={ shared_data::RSVP_WHATSAPP_URL } target="_blank">{ "RSVP on WhatsApp" }</a>
					</div>
				</section>

				<footer>
					{ format!("Passport to Engagement • {}", shared_data::CITY) }
				</footer>
			</main>
		</>
	}
}

fn detail_row(label: &'static str, value: &'static str) -> Html {
	html! {
		<div class="detail-row">
			<div class="detail-label">{ label }</div>
			<div class="detail-value">{ value }</div>
		</div>
	}
}

fn mini(label: &'static str, value: &'static str) -> Html {
	html! {
		<div class="mini">
			<div class="mini-label">{ label }</div>
			<div class="mini-value">{ value }</div>
		</div>
	}
}

const PAGE_STYLE: &str = "
main {
	max-width: 1100px;
	margin: 0 auto;
	padding: 0 20px;
}
.hero {
	padding: 110px 0 80px 0;
	text-align: center;
	background-image: radial-gradient(circle at 50% 30%, rgba(212, 175, 55, 0.10), transparent 55%);
}
.hero-badge {
	display: inline-flex;
	align-items: center;
	gap: 8px;
	border: 1px solid rgba(255, 255, 255, 0.15);
	border-radius: 999px;
	background-color: rgba(255, 255, 255, 0.05);
	padding: 8px 16px;
	font-size: 11px;
	letter-spacing: 0.35em;
	text-transform: uppercase;
	color: var(--soft-text);
}
.hero-badge-plane {
	color: var(--gold);
}
.hero-names {
	margin: 32px auto 0 auto;
	max-width: 800px;
	font-size: 52px;
	line-height: 1.15;
	font-weight: 600;
}
.hero-strip {
	margin-top: 28px;
}
.boarding-pass {
	margin: 40px auto 0 auto;
	max-width: 720px;
	border: 1px solid rgba(255, 255, 255, 0.12);
	border-radius: 16px;
	background-color: rgba(0, 0, 0, 0.35);
	overflow: hidden;
}
.boarding-route {
	display: grid;
	grid-template-columns: 1fr auto 1fr;
	border-bottom: 1px solid var(--faint-line);
}
.boarding-end {
	padding: 24px;
	text-align: left;
}
.boarding-arrival {
	text-align: right;
}
.boarding-code {
	margin-top: 8px;
	font-size: 26px;
	font-weight: 600;
}
.boarding-place {
	margin: 4px 0 0 0;
	font-size: 14px;
	color: var(--soft-text);
}
.boarding-divider {
	width: 1px;
	height: 56px;
	margin: auto 16px;
	background-color: var(--faint-line);
}
.boarding-minis {
	display: grid;
	grid-template-columns: repeat(3, 1fr);
	gap: 16px;
	padding: 24px;
}
.mini {
	border: 1px solid rgba(255, 255, 255, 0.12);
	border-radius: 12px;
	background-color: rgba(255, 255, 255, 0.05);
	padding: 16px;
	text-align: left;
}
.mini-label {
	font-size: 11px;
	letter-spacing: 0.30em;
	text-transform: uppercase;
	color: var(--dim-text);
}
.mini-value {
	margin-top: 8px;
	font-size: 14px;
}
.hero-countdown {
	margin-top: 40px;
}
.hero-countdown > .eyebrow {
	margin-bottom: 14px;
}
.panel-grid {
	display: grid;
	grid-template-columns: 1fr 1fr;
	gap: 1px;
	margin: 56px 0;
	border: 1px solid var(--faint-line);
	border-radius: 16px;
	overflow: hidden;
	background-color: var(--faint-line);
}
.panel {
	background-color: var(--panel);
	padding: 44px;
}
.panel-title {
	margin: 0;
	font-size: 14px;
	letter-spacing: 0.35em;
	text-transform: uppercase;
}
.panel-text {
	margin-top: 20px;
	font-size: 15px;
	line-height: 1.6;
	color: var(--soft-text);
}
.badge-row {
	display: flex;
	flex-wrap: wrap;
	gap: 8px;
	margin-top: 36px;
}
.badge {
	display: inline-block;
	border: 1px solid rgba(255, 255, 255, 0.15);
	border-radius: 999px;
	background-color: rgba(255, 255, 255, 0.05);
	padding: 8px 16px;
	font-size: 12px;
	color: var(--soft-text);
}
.detail-rows {
	margin-top: 24px;
}
.detail-row {
	display: grid;
	grid-template-columns: 110px 1fr;
	gap: 16px;
	padding: 8px 0;
}
.detail-label {
	font-size: 11px;
	letter-spacing: 0.25em;
	color: var(--dim-text);
	padding-top: 2px;
}
.detail-value {
	font-size: 14px;
}
.dress-card {
	margin-top: 36px;
	border: 1px solid var(--faint-line);
	border-radius: 12px;
	background-color: rgba(255, 255, 255, 0.05);
	padding: 20px;
}
.invite-only {
	margin-top: 28px;
	font-size: 12px;
	color: var(--dim-text);
}
.button-row {
	display: flex;
	flex-wrap: wrap;
	gap: 12px;
	margin-top: 28px;
}
.button-row.centered {
	justify-content: center;
}
.map-section {
	border: 1px solid var(--faint-line);
	border-radius: 16px;
	padding: 44px;
	margin-bottom: 56px;
	background-color: var(--panel);
	background-image: radial-gradient(circle at 20% 20%, rgba(212, 175, 55, 0.10), transparent 55%);
}
.map-venue {
	margin: 12px 0 0 0;
	font-size: 28px;
}
.registry-section, .rsvp-section {
	text-align: center;
	padding: 80px 20px 40px 20px;
}
.registry-title {
	margin: 20px auto 0 auto;
	max-width: 640px;
	font-size: 40px;
	line-height: 1.2;
}
.registry-section .panel-text {
	max-width: 520px;
	margin-left: auto;
	margin-right: auto;
}
.cleared {
	margin-top: 64px;
	font-size: 14vw;
	line-height: 1;
	font-weight: 600;
	color: rgba(255, 255, 255, 0.10);
	user-select: none;
	pointer-events: none;
}
.rsvp-countdown {
	margin-top: 32px;
}
footer {
	padding: 40px 0;
	text-align: center;
	font-size: 12px;
	color: var(--dim-text);
}
";
