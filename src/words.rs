//! Indonesian number-to-words rendering ("terbilang") for amount
//! verification. Pure and deterministic; amounts are whole Rupiah.

const ONES: [&str; 10] = [
    "", "Satu", "Dua", "Tiga", "Empat", "Lima", "Enam", "Tujuh", "Delapan", "Sembilan",
];
const TEENS: [&str; 10] = [
    "Sepuluh",
    "Sebelas",
    "Dua Belas",
    "Tiga Belas",
    "Empat Belas",
    "Lima Belas",
    "Enam Belas",
    "Tujuh Belas",
    "Delapan Belas",
    "Sembilan Belas",
];
const TENS: [&str; 10] = [
    "",
    "",
    "Dua Puluh",
    "Tiga Puluh",
    "Empat Puluh",
    "Lima Puluh",
    "Enam Puluh",
    "Tujuh Puluh",
    "Delapan Puluh",
    "Sembilan Puluh",
];
// Covers every base-1000 group a u64 can produce (u64::MAX has 20 digits,
// topping out in the quintillions).
const SCALES: [&str; 7] = [
    "",
    "Ribu",
    "Juta",
    "Miliar",
    "Triliun",
    "Kuadriliun",
    "Kuintiliun",
];

const CURRENCY: &str = "Rupiah";

/// Renders `amount` in Indonesian words with the currency name appended.
///
/// `1000` is the idiomatic "Seribu", not "Satu Ribu"; all other base-1000
/// groups go through the ones/teens/tens/hundreds tables. Output always
/// collapses to single spaces.
pub fn to_words(amount: u64) -> String {
    if amount == 0 {
        return format!("Nol {}", CURRENCY);
    }

    let mut remaining = amount;
    let mut scale = 0;
    let mut words = String::new();
    while remaining > 0 {
        let group = (remaining % 1000) as u16;
        if group != 0 {
            let part = if scale == 1 && group == 1 {
                "Seribu".to_string()
            } else {
                format!("{} {}", group_words(group), SCALES[scale])
            };
            words = format!("{} {}", part.trim(), words);
        }
        remaining /= 1000;
        scale += 1;
    }

    let full = format!("{} {}", words.trim(), CURRENCY);
    full.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Words for a group in 1..=999.
fn group_words(n: u16) -> String {
    debug_assert!((1..=999).contains(&n));
    if n < 10 {
        ONES[n as usize].to_string()
    } else if n < 20 {
        TEENS[(n - 10) as usize].to_string()
    } else if n < 100 {
        format!("{} {}", TENS[(n / 10) as usize], ONES[(n % 10) as usize])
            .trim_end()
            .to_string()
    } else if n == 100 {
        "Seratus".to_string()
    } else if n < 200 {
        format!("Seratus {}", group_words(n - 100))
    } else {
        let rest = n % 100;
        let head = format!("{} Ratus", ONES[(n / 100) as usize]);
        if rest == 0 {
            head
        } else {
            format!("{} {}", head, group_words(rest))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_nol_rupiah() {
        assert_eq!(to_words(0), "Nol Rupiah");
    }

    #[test]
    fn one_thousand_is_seribu() {
        assert_eq!(to_words(1000), "Seribu Rupiah");
        assert_eq!(to_words(1500), "Seribu Lima Ratus Rupiah");
    }

    #[test]
    fn other_thousands_spell_the_multiplier() {
        assert_eq!(to_words(2000), "Dua Ribu Rupiah");
        assert_eq!(to_words(21000), "Dua Puluh Satu Ribu Rupiah");
    }

    #[test]
    fn million_scale_decomposition() {
        assert_eq!(to_words(1_500_000), "Satu Juta Lima Ratus Ribu Rupiah");
    }

    #[test]
    fn teens_and_tens() {
        assert_eq!(to_words(11), "Sebelas Rupiah");
        assert_eq!(to_words(17), "Tujuh Belas Rupiah");
        assert_eq!(to_words(42), "Empat Puluh Dua Rupiah");
        assert_eq!(to_words(70), "Tujuh Puluh Rupiah");
    }

    #[test]
    fn hundreds() {
        assert_eq!(to_words(100), "Seratus Rupiah");
        assert_eq!(to_words(199), "Seratus Sembilan Puluh Sembilan Rupiah");
        assert_eq!(to_words(250), "Dua Ratus Lima Puluh Rupiah");
    }

    #[test]
    fn large_scales() {
        assert_eq!(to_words(1_000_000_000), "Satu Miliar Rupiah");
        assert_eq!(
            to_words(2_000_000_001_000),
            "Dua Triliun Seribu Rupiah"
        );
    }

    #[test]
    fn scales_beyond_triliun() {
        assert_eq!(
            to_words(1_000_000_000_000_000),
            "Satu Kuadriliun Rupiah"
        );
        assert_eq!(
            to_words(3_000_000_000_000_000_000),
            "Tiga Kuintiliun Rupiah"
        );
    }

    #[test]
    fn full_u64_range_renders() {
        let words = to_words(u64::MAX);
        assert!(words.starts_with("Delapan Belas Kuintiliun"));
        assert!(words.ends_with("Rupiah"));
    }
}
