//! Rolling conventions for dates that land on a closed day.

/// Where [`Calendar::adjust`](crate::Calendar::adjust) moves a weekend or
/// holiday date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessDayConvention {
    /// Next open day.
    Following,
    /// Next open day in the same month, else the previous open day.
    ModifiedFollowing,
    /// Previous open day.
    Preceding,
    /// Previous open day in the same month, else the next open day.
    ModifiedPreceding,
    /// No adjustment.
    Unadjusted,
    /// Whichever open day is closer; forward on a tie.
    Nearest,
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Following => "following",
            Self::ModifiedFollowing => "modified following",
            Self::Preceding => "preceding",
            Self::ModifiedPreceding => "modified preceding",
            Self::Unadjusted => "unadjusted",
            Self::Nearest => "nearest",
        })
    }
}
