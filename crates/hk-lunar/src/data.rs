//! Korean lunar calendar data, lunar years 1900–2050.
//!
//! One word per lunar year:
//!
//! | bits    | meaning                                                  |
//! |---------|----------------------------------------------------------|
//! | 0–3     | number of the leap month, `0` if the year has none       |
//! | 4–15    | month sizes, bit 15 = month 1 … bit 4 = month 12         |
//! | 16      | size of the leap month                                   |
//!
//! A set size bit means a 30-day month, a clear bit a 29-day month.  Month
//! boundaries are the new moons reckoned at the Korean standard meridian,
//! so a handful of months start one day later than in the Chinese calendar
//! (e.g. Seollal 2027 falls on February 7).

/// First lunar year covered by [`YEAR_INFO`].
pub(crate) const FIRST_YEAR: u16 = 1900;

/// Last lunar year covered by [`YEAR_INFO`].
pub(crate) const LAST_YEAR: u16 = 2050;

/// Gregorian date of lunar 1900-01-01.
pub(crate) const EPOCH_SOLAR: (u16, u8, u8) = (1900, 1, 31);

/// Packed month layout per lunar year, starting at [`FIRST_YEAR`].
#[rustfmt::skip]
pub(crate) const YEAR_INFO: [u32; (LAST_YEAR - FIRST_YEAR + 1) as usize] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x05565, 0x0d2a0, 0x0e950, 0x16554, 0x056a0, 0x0aad0, 0x055d2,
    0x04ae0, 0x0a5d6, 0x0a4d0, 0x0d250, 0x0da95, 0x0b550, 0x056a0, 0x0ada2, 0x095d0, 0x04bb7,
    0x049b0, 0x0a4b0, 0x0b4b5, 0x06a90, 0x0ad40, 0x0bb54, 0x02b60, 0x095b0, 0x05372, 0x04970,
    0x06566, 0x0e4a0, 0x0ea50, 0x16a95, 0x05b50, 0x02b60, 0x18ae3, 0x092e0, 0x1c8d7, 0x0c950,
    0x0d4a0, 0x1d8a6, 0x0b690, 0x056d0, 0x125b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0d557,
    0x0b4a0, 0x0b550, 0x15555, 0x04db0, 0x025b0, 0x18573, 0x052b0, 0x0a9b8, 0x06950, 0x06aa0,
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05270, 0x07263, 0x0d950, 0x06b57, 0x056a0,
    0x09ad0, 0x04dd5, 0x04ae0, 0x0a4e0, 0x0d4d4, 0x0d250, 0x0d598, 0x0b540, 0x0d6a0, 0x195a6,
    0x095b0, 0x049b0, 0x0a9b4, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0b756, 0x02b60, 0x095b0,
    0x04b75, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06d98, 0x05ad0, 0x02b60, 0x096e5, 0x092e0,
    0x0c960, 0x0e954, 0x0d4a0, 0x0da50, 0x07552, 0x056c0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5,
    0x0a950, 0x0b4a0, 0x1b4a4, 0x0b550, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a950,
    0x0b954, 0x06aa0, 0x0ad50, 0x06b52, 0x04b60, 0x0a6e6, 0x0a570, 0x05270, 0x06a65, 0x0d930,
    0x05aa0, 0x0b6a3, 0x096d0, 0x04afb, 0x04ae0, 0x0a4d0, 0x1d0d6, 0x0d250, 0x0d520, 0x0dd45,
    0x0b6a0, 0x096d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0b250, 0x1b255, 0x06d40, 0x0ada0,
    0x18b63,
];
