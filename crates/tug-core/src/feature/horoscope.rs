//! Daily horoscope.

use chrono::NaiveDate;

use crate::calendar;
use crate::catalog::{self, ZodiacSign, ZODIAC_SIGNS};
use crate::page::HoroscopeTab;

#[derive(Debug, Clone, Copy)]
pub struct HoroscopeView {
    sign: &'static ZodiacSign,
    tab: HoroscopeTab,
}

impl Default for HoroscopeView {
    fn default() -> Self {
        Self {
            sign: &ZODIAC_SIGNS[0],
            tab: HoroscopeTab::default(),
        }
    }
}

impl HoroscopeView {
    /// Start on the sign with `name`, falling back to the first sign.
    pub fn with_sign(name: &str) -> Self {
        Self {
            sign: catalog::zodiac_sign(name).unwrap_or(&ZODIAC_SIGNS[0]),
            tab: HoroscopeTab::default(),
        }
    }

    pub fn sign(&self) -> &'static ZodiacSign {
        self.sign
    }

    pub fn tab(&self) -> HoroscopeTab {
        self.tab
    }

    pub fn select_sign(&mut self, sign: &'static ZodiacSign) {
        self.sign = sign;
    }

    pub fn select_tab(&mut self, tab: HoroscopeTab) {
        self.tab = tab;
    }

    pub fn reading(&self) -> String {
        catalog::horoscope_reading(self.sign, self.tab)
    }

    pub fn header(&self, today: NaiveDate) -> String {
        calendar::formatted_date_header(today)
    }

    pub fn subheader(&self, today: NaiveDate) -> String {
        calendar::formatted_date_subheader(today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_sign_falls_back() {
        assert_eq!(HoroscopeView::with_sign("Ophiuchus").sign().name, "Aries");
        assert_eq!(HoroscopeView::with_sign("pisces").sign().name, "Pisces");
    }

    #[test]
    fn test_reading_follows_tab() {
        let mut view = HoroscopeView::with_sign("Leo");
        let love = view.reading();
        view.select_tab(HoroscopeTab::Health);
        assert_ne!(view.reading(), love);
        assert!(view.reading().starts_with("♌ Leo:"));
    }
}
