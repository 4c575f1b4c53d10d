/// Where the passport cover is in its one-way opening timeline.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GatePhase {
	/// Overlay up, cover closed, waiting for the tap
	Closed,
	/// Tapped; the cover is mid-swing
	Opening,
	/// Cover's open, the overlay is fading out
	Revealing,
	/// Overlay gone; the completion callback has fired
	Done,
}

/// How long the cover takes to swing open, in ms. The CSS transition on the
/// cover and the timer that advances the phase both read this constant, so the
/// visual and the state machine stay in sync by agreement rather than by one
/// observing the other.
pub const COVER_OPEN_MS: u32 = 1200;
/// The overlay fade after the cover is open, same deal.
pub const FADE_OUT_MS: u32 = 250;

/// The gate's whole lifecycle in one place: which transitions are legal right
/// now, that the tap only works once, and that completion is reported exactly
/// once (or never, if the gate is torn down first). The component driving this
/// just schedules timers and asks; it never touches the phase directly.
#[derive(Debug)]
pub struct GateTimeline {
	phase: GatePhase,
	cancelled: bool,
	fired: bool,
}

impl GateTimeline {
	#[must_use]
	pub fn new() -> Self {
		Self {
			phase: GatePhase::Closed,
			cancelled: false,
			fired: false,
		}
	}

	#[must_use]
	pub fn phase(&self) -> GatePhase {
		self.phase
	}

	/// The user's tap. It only does anything while the cover is still closed,
	/// so mashing it mid-animation can't queue up a second run.
	pub fn tap(&mut self) -> bool {
		if self.cancelled || self.phase != GatePhase::Closed {
			return false;
		}

		self.phase = GatePhase::Opening;
		true
	}

	/// The cover-open timer elapsed; start fading the overlay.
	pub fn cover_opened(&mut self) -> bool {
		if self.cancelled || self.phase != GatePhase::Opening {
			return false;
		}

		self.phase = GatePhase::Revealing;
		true
	}

	/// The fade timer elapsed. Returns true exactly once per timeline; the
	/// caller fires its completion callback on true and only on true.
	pub fn fade_finished(&mut self) -> bool {
		if self.cancelled || self.fired || self.phase != GatePhase::Revealing {
			return false;
		}

		self.phase = GatePhase::Done;
		self.fired = true;
		true
	}

	/// Teardown. Any timer that fires after this finds every transition
	/// rejected, so a dropped gate can never report completion.
	pub fn cancel(&mut self) {
		self.cancelled = true;
	}
}

impl Default for GateTimeline {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
#[test]
fn tap_is_accepted_only_while_closed() {
	let mut gate = GateTimeline::new();

	assert!(gate.tap());
	assert_eq!(gate.phase(), GatePhase::Opening);

	// a second tap in every later phase is a no-op
	assert!(!gate.tap());
	assert_eq!(gate.phase(), GatePhase::Opening);

	assert!(gate.cover_opened());
	assert!(!gate.tap());
	assert_eq!(gate.phase(), GatePhase::Revealing);

	assert!(gate.fade_finished());
	assert!(!gate.tap());
	assert_eq!(gate.phase(), GatePhase::Done);
}

#[cfg(test)]
#[test]
fn completion_is_reported_exactly_once() {
	let mut gate = GateTimeline::new();
	let mut completions = 0;

	// however many times the timers manage to fire, only one gets through
	for _ in 0..3 {
		gate.tap();
		gate.cover_opened();
		if gate.fade_finished() {
			completions += 1;
		}
	}

	assert_eq!(completions, 1);
}

#[cfg(test)]
#[test]
fn reveal_always_precedes_completion() {
	let mut gate = GateTimeline::new();
	assert!(gate.tap());

	// the fade timer can't skip the gate straight to Done
	assert!(!gate.fade_finished());
	assert_eq!(gate.phase(), GatePhase::Opening);

	assert!(gate.cover_opened());
	assert_eq!(gate.phase(), GatePhase::Revealing);
	assert!(gate.fade_finished());
}

#[cfg(test)]
#[test]
fn cancelling_blocks_every_later_transition() {
	// torn down before anything happened: the tap itself is dead
	let mut gate = GateTimeline::new();
	gate.cancel();
	assert!(!gate.tap());

	// torn down mid-swing: the pending timers find their transitions rejected
	let mut gate = GateTimeline::new();
	assert!(gate.tap());
	gate.cancel();
	assert!(!gate.cover_opened());
	assert!(!gate.fade_finished());
	assert_eq!(gate.phase(), GatePhase::Opening);

	// torn down during the fade: completion is never reported
	let mut gate = GateTimeline::new();
	assert!(gate.tap());
	assert!(gate.cover_opened());
	gate.cancel();
	assert!(!gate.fade_finished());
}
