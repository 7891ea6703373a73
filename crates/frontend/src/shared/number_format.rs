//! Price formatting

// Достаточно, чтобы записать любое f64 без потери знаков
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Форматирует число с фиксированным количеством знаков после точки, без разделителя тысяч
///
/// Округление по точному десятичному значению, половина округляется вверх по модулю:
/// 0.125 даёт "0.13", а 1.005 (на деле 1.00499…) даёт "1.00".
///
/// # Примеры
///
/// ```ignore
/// assert_eq!(format_fixed(39.9, 2), "39.90");
/// ```
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let frac = frac_part.as_bytes();

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac.iter().copied().take(decimals))
        .map(|b| b - b'0')
        .collect();
    // Дополняем нулями, если запрошено больше знаков, чем есть в записи
    digits.resize(int_part.len() + decimals, 0);

    if frac.get(decimals).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|d| char::from(b'0' + d)));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|d| char::from(b'0' + d)));
    }
    out
}

/// Price as shown on cards and the detail page: `$` and exactly two decimals.
pub fn format_price(value: f64) -> String {
    format!("${}", format_fixed(value, 2))
}
