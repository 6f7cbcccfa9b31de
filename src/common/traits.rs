/// Source of the current time for peer bookkeeping.
pub mod clock;
