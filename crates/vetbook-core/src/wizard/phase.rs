//! The wizard's linear phase sequence.

use std::fmt;

/// One step of the booking wizard's linear state machine.
///
/// Phases are ordered and indexed 0-3; the wizard only ever moves one phase
/// at a time, forward through [`crate::wizard::BookingWizard::next`] and
/// backward through [`crate::wizard::BookingWizard::back`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Phase {
    /// Choose one or more pets
    #[default]
    SelectPet,

    /// Choose one or more services and optional notes
    SelectService,

    /// Choose a date and a half-hour slot
    Schedule,

    /// Review the draft; submission happens here
    Summary,
}

impl Phase {
    /// Every phase, in wizard order.
    pub const ALL: [Phase; 4] = [
        Phase::SelectPet,
        Phase::SelectService,
        Phase::Schedule,
        Phase::Summary,
    ];

    /// Zero-based position of the phase in the wizard.
    pub fn index(&self) -> usize {
        match self {
            Phase::SelectPet => 0,
            Phase::SelectService => 1,
            Phase::Schedule => 2,
            Phase::Summary => 3,
        }
    }

    /// Progress-bar title for the phase.
    pub fn title(&self) -> &'static str {
        match self {
            Phase::SelectPet => "Select Pet",
            Phase::SelectService => "Select Service",
            Phase::Schedule => "Schedule",
            Phase::Summary => "Summary",
        }
    }

    /// The phase after this one, if any.
    pub(crate) fn succ(&self) -> Option<Phase> {
        Phase::ALL.get(self.index() + 1).copied()
    }

    /// The phase before this one, if any.
    pub(crate) fn pred(&self) -> Option<Phase> {
        self.index().checked_sub(1).map(|i| Phase::ALL[i])
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
