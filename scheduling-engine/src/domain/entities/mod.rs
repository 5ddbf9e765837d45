pub mod period;
pub mod shift_spec;
pub mod talent;
pub mod week_frame;

pub use period::{Period, ShiftTemplate};
pub use shift_spec::{Assignment, ShiftSpec};
pub use talent::{ConstraintKind, ConstraintRule, Talent, TalentAvailability};
pub use week_frame::WeekFrame;
