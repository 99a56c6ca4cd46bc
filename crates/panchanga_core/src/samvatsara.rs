//! Samvatsara (60-year cycle) naming.
//!
//! The 60 samvatsaras cycle continuously; the anchor is CE 1987 = Prabhava
//! (order 1). That epoch constant is load-bearing for every downstream
//! year name and must not drift.

/// Reference epoch: CE 1987 = Prabhava (order 1, index 0).
pub const SAMVATSARA_EPOCH_YEAR: i32 = 1987;

/// The 60 samvatsaras of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Samvatsara {
    Prabhava = 0,
    Vibhava = 1,
    Shukla = 2,
    Pramodoota = 3,
    Prajothpatti = 4,
    Angirasa = 5,
    Shrimukha = 6,
    Bhava = 7,
    Yuva = 8,
    Dhaatu = 9,
    Eeshvara = 10,
    Bahudhanya = 11,
    Pramaathi = 12,
    Vikrama = 13,
    Vrisha = 14,
    Chitrabhanu = 15,
    Svabhanu = 16,
    Taarana = 17,
    Paarthiva = 18,
    Vyaya = 19,
    Sarvajit = 20,
    Sarvadhari = 21,
    Virodhi = 22,
    Vikruti = 23,
    Khara = 24,
    Nandana = 25,
    Vijaya = 26,
    Jaya = 27,
    Manmatha = 28,
    Durmukhi = 29,
    Hevilambi = 30,
    Vilambi = 31,
    Vikari = 32,
    Sharvari = 33,
    Plava = 34,
    Shubhakrut = 35,
    Shobhakrut = 36,
    Krodhi = 37,
    Vishvavasu = 38,
    Paraabhava = 39,
    Plavanga = 40,
    Keelaka = 41,
    Saumya = 42,
    Sadharana = 43,
    Virodhikrut = 44,
    Paridhavi = 45,
    Pramaadhi = 46,
    Aananda = 47,
    Raakshasa = 48,
    Naala = 49,
    Pingala = 50,
    Kaalayukti = 51,
    Siddharthi = 52,
    Raudri = 53,
    Durmathi = 54,
    Dundubhi = 55,
    Rudhirodgaari = 56,
    Raktaakshi = 57,
    Krodhana = 58,
    Akshaya = 59,
}

const SAMVATSARA_NAMES: [&str; 60] = [
    "Prabhava",
    "Vibhava",
    "Shukla",
    "Pramodoota",
    "Prajothpatti",
    "Angirasa",
    "Shrimukha",
    "Bhava",
    "Yuva",
    "Dhaatu",
    "Eeshvara",
    "Bahudhanya",
    "Pramaathi",
    "Vikrama",
    "Vrisha",
    "Chitrabhanu",
    "Svabhanu",
    "Taarana",
    "Paarthiva",
    "Vyaya",
    "Sarvajit",
    "Sarvadhari",
    "Virodhi",
    "Vikruti",
    "Khara",
    "Nandana",
    "Vijaya",
    "Jaya",
    "Manmatha",
    "Durmukhi",
    "Hevilambi",
    "Vilambi",
    "Vikari",
    "Sharvari",
    "Plava",
    "Shubhakrut",
    "Shobhakrut",
    "Krodhi",
    "Vishvavasu",
    "Paraabhava",
    "Plavanga",
    "Keelaka",
    "Saumya",
    "Sadharana",
    "Virodhikrut",
    "Paridhavi",
    "Pramaadhi",
    "Aananda",
    "Raakshasa",
    "Naala",
    "Pingala",
    "Kaalayukti",
    "Siddharthi",
    "Raudri",
    "Durmathi",
    "Dundubhi",
    "Rudhirodgaari",
    "Raktaakshi",
    "Krodhana",
    "Akshaya",
];

/// All 60 samvatsaras in cycle order (index 0 = Prabhava).
pub const ALL_SAMVATSARAS: [Samvatsara; 60] = [
    Samvatsara::Prabhava,
    Samvatsara::Vibhava,
    Samvatsara::Shukla,
    Samvatsara::Pramodoota,
    Samvatsara::Prajothpatti,
    Samvatsara::Angirasa,
    Samvatsara::Shrimukha,
    Samvatsara::Bhava,
    Samvatsara::Yuva,
    Samvatsara::Dhaatu,
    Samvatsara::Eeshvara,
    Samvatsara::Bahudhanya,
    Samvatsara::Pramaathi,
    Samvatsara::Vikrama,
    Samvatsara::Vrisha,
    Samvatsara::Chitrabhanu,
    Samvatsara::Svabhanu,
    Samvatsara::Taarana,
    Samvatsara::Paarthiva,
    Samvatsara::Vyaya,
    Samvatsara::Sarvajit,
    Samvatsara::Sarvadhari,
    Samvatsara::Virodhi,
    Samvatsara::Vikruti,
    Samvatsara::Khara,
    Samvatsara::Nandana,
    Samvatsara::Vijaya,
    Samvatsara::Jaya,
    Samvatsara::Manmatha,
    Samvatsara::Durmukhi,
    Samvatsara::Hevilambi,
    Samvatsara::Vilambi,
    Samvatsara::Vikari,
    Samvatsara::Sharvari,
    Samvatsara::Plava,
    Samvatsara::Shubhakrut,
    Samvatsara::Shobhakrut,
    Samvatsara::Krodhi,
    Samvatsara::Vishvavasu,
    Samvatsara::Paraabhava,
    Samvatsara::Plavanga,
    Samvatsara::Keelaka,
    Samvatsara::Saumya,
    Samvatsara::Sadharana,
    Samvatsara::Virodhikrut,
    Samvatsara::Paridhavi,
    Samvatsara::Pramaadhi,
    Samvatsara::Aananda,
    Samvatsara::Raakshasa,
    Samvatsara::Naala,
    Samvatsara::Pingala,
    Samvatsara::Kaalayukti,
    Samvatsara::Siddharthi,
    Samvatsara::Raudri,
    Samvatsara::Durmathi,
    Samvatsara::Dundubhi,
    Samvatsara::Rudhirodgaari,
    Samvatsara::Raktaakshi,
    Samvatsara::Krodhana,
    Samvatsara::Akshaya,
];

impl Samvatsara {
    /// Transliterated name of the samvatsara.
    pub const fn name(self) -> &'static str {
        SAMVATSARA_NAMES[self as usize]
    }

    /// 0-based cycle index (Prabhava=0 .. Akshaya=59).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Determine the samvatsara for a given CE year.
///
/// Returns `(samvatsara, order)` where order is 1-based (1..=60).
pub fn samvatsara_from_year(ce_year: i32) -> (Samvatsara, u8) {
    let offset = (ce_year - SAMVATSARA_EPOCH_YEAR).rem_euclid(60) as u8;
    (ALL_SAMVATSARAS[offset as usize], offset + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_names() {
        assert_eq!(ALL_SAMVATSARAS.len(), 60);
        for (i, s) in ALL_SAMVATSARAS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert!(!s.name().is_empty());
        }
    }

    #[test]
    fn epoch_year_is_prabhava() {
        let (s, order) = samvatsara_from_year(1987);
        assert_eq!(s, Samvatsara::Prabhava);
        assert_eq!(order, 1);
    }

    #[test]
    fn cycle_wraps_after_sixty_years() {
        let (s, order) = samvatsara_from_year(2047);
        assert_eq!(s, Samvatsara::Prabhava);
        assert_eq!(order, 1);
    }

    #[test]
    fn year_2024_is_krodhi() {
        // 2024 - 1987 = 37 -> Krodhi, order 38
        let (s, order) = samvatsara_from_year(2024);
        assert_eq!(s, Samvatsara::Krodhi);
        assert_eq!(order, 38);
    }

    #[test]
    fn year_before_epoch() {
        // 1986 wraps backward to Akshaya, order 60
        let (s, order) = samvatsara_from_year(1986);
        assert_eq!(s, Samvatsara::Akshaya);
        assert_eq!(order, 60);
    }
}
