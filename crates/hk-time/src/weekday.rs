//! `Weekday`: day-of-week enum.

/// Day of the week, numbered 1–7 from Monday (ISO 8601).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// 월요일
    Monday = 1,
    /// 화요일
    Tuesday = 2,
    /// 수요일
    Wednesday = 3,
    /// 목요일
    Thursday = 4,
    /// 금요일
    Friday = 5,
    /// 토요일
    Saturday = 6,
    /// 일요일
    Sunday = 7,
}

impl Weekday {
    /// Monday through Sunday.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Construct from the ISO ordinal (1 = Monday … 7 = Sunday).
    pub fn from_ordinal(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Return the ISO ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Return `true` for Saturday and Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// Single-character Korean abbreviation (`월`, `화`, … `일`).
    pub fn korean_short_name(&self) -> &'static str {
        ["월", "화", "수", "목", "금", "토", "일"][self.ordinal() as usize - 1]
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_roundtrip() {
        for n in 1..=7 {
            assert_eq!(Weekday::from_ordinal(n).unwrap().ordinal(), n);
        }
        assert_eq!(Weekday::from_ordinal(0), None);
        assert_eq!(Weekday::from_ordinal(8), None);
    }

    #[test]
    fn weekend_and_names() {
        assert!(Weekday::Sunday.is_weekend());
        assert!(!Weekday::Friday.is_weekend());
        assert_eq!(Weekday::Saturday.korean_short_name(), "토");
        assert_eq!(Weekday::Monday.to_string(), "Monday");
    }
}
