use gloo_timers::future::TimeoutFuture;
use shared_data::{COVER_OPEN_MS, FADE_OUT_MS, GatePhase, GateTimeline};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GateProps {
	/// Fired exactly once, after the cover has swung open and the overlay has
	/// finished fading. Never fired if the gate is unmounted first.
	pub on_opened: Callback<()>,
	#[prop_or(AttrValue::Static(shared_data::COUPLE_NAMES))]
	pub couple_names: AttrValue,
	#[prop_or(AttrValue::Static(shared_data::TAP_TO_OPEN))]
	pub subtitle: AttrValue,
}

#[function_component(PassportGate)]
pub fn passport_gate(props: &GateProps) -> Html {
	// The timeline is the single source of truth for what's allowed to happen
	// next; the use_state copy of its phase only exists so changes re-render
	let timeline = use_mut_ref(GateTimeline::new);
	let phase = use_state(|| GatePhase::Closed);

	{
		let timeline = timeline.clone();
		use_effect_with((), move |_|
			// Cancelling on unmount means the pending timeouts below wake up to
			// find every transition rejected, so they can never call on_opened
			// for a gate that's already gone
			move || timeline.borrow_mut().cancel()
		);
	}

	let tap = {
		let timeline = timeline.clone();
		let phase = phase.clone();
		let on_opened = props.on_opened.clone();

		Callback::from(move |_: MouseEvent| {
			if !timeline.borrow_mut().tap() {
				// Already opening (or torn down); mashing the cover does nothing
				return;
			}
			phase.set(GatePhase::Opening);

			let timeline = timeline.clone();
			let phase = phase.clone();
			let on_opened = on_opened.clone();

			// These waits mirror the CSS transition lengths rather than listening
			// for transitionend; both sides read the same constants, and awaiting
			// the second wait only after the first transition lands keeps the
			// reveal strictly before completion
			wasm_bindgen_futures::spawn_local(async move {
				TimeoutFuture::new(COVER_OPEN_MS).await;
				if !timeline.borrow_mut().cover_opened() {
					return;
				}
				phase.set(GatePhase::Revealing);

				TimeoutFuture::new(FADE_OUT_MS).await;
				if timeline.borrow_mut().fade_finished() {
					phase.set(GatePhase::Done);
					on_opened.emit(());
				}
			});
		})
	};

	if *phase == GatePhase::Done {
		// The parent drops us once on_opened flips its flag; render nothing for
		// the instant in between
		return html! {};
	}

	let overlay_class = classes!(
		"gate-overlay",
		(*phase != GatePhase::Closed).then_some("gate-opening"),
		(*phase == GatePhase::Revealing).then_some("gate-fading"),
	);

	html! {
		<div class={ overlay_class }>
			<style>{ gate_style() }</style>
			<div class="gate-stage">
				<div class="gate-book">
					<div class="gate-back-cover"></div>
					<div class="gate-pages"></div>
					<div class="gate-cover" onclick={ tap }>
						<div class="gate-face gate-face-front">
							<p class="eyebrow gate-gold">{ "Passport" }</p>
							<div class="gate-crest">
								<div class="gate-seal">{ "♥" }</div>
								<p class="eyebrow gate-gold">{ "Invitation" }</p>
								<h1 class="gate-names">{ props.couple_names.clone() }</h1>
								<div class="gate-microtext">
									<div></div>
									<div></div>
									<div></div>
								</div>
							</div>
							<div class="gate-bottom">
								<div class="gate-chip-row">
									<div class="gate-chip"></div>
									<div class="gate-rule gate-rule-long"></div>
									<div class="gate-rule gate-rule-short"></div>
								</div>
								<p class="gate-tap">{ props.subtitle.clone() }</p>
							</div>
						</div>
						<div class="gate-face gate-face-inside">
							<div>
								<p class="eyebrow gate-dark">{ "Processing…" }</p>
								<h2 class="gate-inside-title">{ "Taking you to your experience" }</h2>
								<p class="gate-inside-note">{ "Please hold on while we open your invite ✈" }</p>
							</div>
							<div>
								<div class="gate-progress">
									<div class="gate-progress-fill"></div>
								</div>
								<div class="gate-stamp">
									<span class="gate-stamp-dot"></span>
									{ "Stamping your passport…" }
								</div>
							</div>
						</div>
					</div>
				</div>
			</div>
		</div>
	}
}

// The cover swing and overlay fade get their durations from the same constants
// the phase timers wait on, which is the whole trick keeping the animation and
// the state machine in step
fn gate_style() -> String {
	format!(
		r#"
		.gate-overlay {{
			position: fixed;
			inset: 0;
			z-index: 50;
			display: grid;
			place-items: center;
			background-color: var(--deep-teal);
			background-image: radial-gradient(circle at 50% 30%, rgba(255, 255, 255, 0.06), transparent 55%);
			opacity: 1;
			transition: opacity {FADE_OUT_MS}ms ease-in-out;
		}}
		.gate-fading {{
			opacity: 0;
			pointer-events: none;
		}}
		.gate-stage {{
			perspective: 1200px;
		}}
		.gate-book {{
			position: relative;
			width: 340px;
			height: 520px;
			transform-style: preserve-3d;
		}}
		.gate-back-cover {{
			position: absolute;
			inset: 0;
			border-radius: 16px;
			background-color: var(--deep-teal);
			border: 1px solid var(--faint-line);
			box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.6);
		}}
		.gate-pages {{
			position: absolute;
			inset: 10px;
			border-radius: 12px;
			background-color: #f8f6ef;
			border: 1px solid rgba(0, 0, 0, 0.10);
			box-shadow: inset 0 2px 6px rgba(0, 0, 0, 0.15);
		}}
		.gate-cover {{
			position: absolute;
			inset: 0;
			cursor: pointer;
			transform-style: preserve-3d;
			transform-origin: left center;
			transform: rotateY(0deg);
			transition: transform {COVER_OPEN_MS}ms cubic-bezier(0.2, 0.8, 0.2, 1);
		}}
		.gate-opening .gate-cover {{
			transform: rotateY(-165deg) translateX(-4px);
		}}
		.gate-face {{
			position: absolute;
			inset: 0;
			border-radius: 16px;
			backface-visibility: hidden;
			overflow: hidden;
		}}
		.gate-face-front {{
			display: flex;
			flex-direction: column;
			align-items: center;
			justify-content: space-between;
			text-align: center;
			padding: 40px 32px;
			background-color: var(--navy);
			border: 1px solid var(--faint-line);
			background-image:
				radial-gradient(circle at 30% 20%, rgba(255, 255, 255, 0.08), transparent 45%),
				radial-gradient(circle at 70% 80%, rgba(255, 255, 255, 0.08), transparent 55%);
		}}
		.gate-gold {{
			color: var(--gold);
		}}
		.gate-crest {{
			display: flex;
			flex-direction: column;
			align-items: center;
			gap: 18px;
		}}
		.gate-seal {{
			display: grid;
			place-items: center;
			height: 80px;
			width: 80px;
			border-radius: 50%;
			border: 1px solid rgba(212, 175, 55, 0.50);
			background-color: rgba(212, 175, 55, 0.10);
			box-shadow: 0 0 0 1px rgba(212, 175, 55, 0.25) inset, 0 0 18px rgba(212, 175, 55, 0.35);
			color: var(--gold);
			font-size: 30px;
		}}
		.gate-names {{
			margin: 0;
			font-size: 20px;
			font-weight: 600;
			line-height: 1.4;
		}}
		.gate-microtext {{
			width: 240px;
			opacity: 0.8;
		}}
		.gate-microtext > div {{
			height: 1px;
			margin: 8px auto 0 auto;
			background-color: var(--faint-line);
		}}
		.gate-microtext > div:nth-child(1) {{ width: 100%; }}
		.gate-microtext > div:nth-child(2) {{ width: 83%; }}
		.gate-microtext > div:nth-child(3) {{ width: 66%; }}
		.gate-bottom {{
			width: 100%;
		}}
		.gate-chip-row {{
			display: flex;
			align-items: center;
			justify-content: center;
			gap: 12px;
			opacity: 0.9;
		}}
		.gate-chip {{
			height: 32px;
			width: 48px;
			border-radius: 6px;
			border: 1px solid rgba(212, 175, 55, 0.40);
			background-color: rgba(212, 175, 55, 0.10);
		}}
		.gate-rule {{
			height: 1px;
			background-color: var(--faint-line);
		}}
		.gate-rule-long {{ width: 64px; }}
		.gate-rule-short {{ width: 40px; }}
		.gate-tap {{
			margin: 16px 0 0 0;
			color: var(--gold);
			font-size: 14px;
			animation: gate-pulse 1.4s ease-in-out infinite;
		}}
		.gate-opening .gate-tap {{
			animation: none;
			opacity: 0;
			transition: opacity 0.2s;
		}}
		@keyframes gate-pulse {{
			0%, 100% {{ opacity: 0.55; }}
			50% {{ opacity: 1; }}
		}}
		.gate-face-inside {{
			display: flex;
			flex-direction: column;
			justify-content: space-between;
			padding: 32px;
			background-color: var(--ivory);
			border: 1px solid rgba(0, 0, 0, 0.10);
			transform: rotateY(180deg);
		}}
		.gate-face-inside * {{
			color: #1b1b1b;
		}}
		.gate-dark {{
			color: #aa9d7d;
		}}
		.gate-inside-title {{
			margin: 12px 0 0 0;
			font-size: 20px;
			font-weight: 600;
		}}
		.gate-inside-note {{
			margin-top: 8px;
			font-size: 14px;
			color: rgba(0, 0, 0, 0.60);
		}}
		.gate-progress {{
			height: 8px;
			width: 100%;
			border-radius: 999px;
			background-color: rgba(0, 0, 0, 0.10);
			overflow: hidden;
		}}
		.gate-progress-fill {{
			height: 100%;
			width: 0%;
			border-radius: 999px;
			background-color: var(--gold);
			transition: width {COVER_OPEN_MS}ms ease-in-out;
		}}
		.gate-opening .gate-progress-fill {{
			width: 100%;
		}}
		.gate-stamp {{
			display: inline-flex;
			align-items: center;
			gap: 8px;
			margin-top: 16px;
			border: 1px solid rgba(0, 0, 0, 0.10);
			border-radius: 999px;
			background-color: white;
			padding: 8px 16px;
			font-size: 12px;
			color: rgba(0, 0, 0, 0.70);
			opacity: 0;
			transition: opacity 0.5s ease-out 0.15s;
		}}
		.gate-opening .gate-stamp {{
			opacity: 1;
		}}
		.gate-stamp-dot {{
			height: 8px;
			width: 8px;
			border-radius: 50%;
			background-color: var(--gold);
		}}
		"#
	)
}
