//! Display formatting shared by the TUI and the CLI.
//!
//! Amounts use the Indian numbering system: the last three digits form one
//! group and every group above that has two digits (`12,34,567`).

/// Insert Indian grouping separators into a run of ASCII digits.
///
/// The input is not validated; callers pass digits only.
pub fn group_digits(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let mut out = String::with_capacity(len + len / 2);
    // An odd-length head starts with a single digit group.
    let first = head.len() % 2;
    if first == 1 {
        out.push_str(&head[..1]);
    }
    for (i, pair) in head.as_bytes()[first..].chunks(2).enumerate() {
        if i > 0 || first == 1 {
            out.push(',');
        }
        out.extend(pair.iter().map(|b| *b as char));
    }
    out.push(',');
    out.push_str(tail);
    out
}

/// `1234567` → `12,34,567`.
pub fn group_indian(n: u64) -> String {
    group_digits(&n.to_string())
}

/// Rupee amount with Indian grouping and a fixed number of decimals.
///
/// Negative values carry a leading `-` before the rupee sign.
pub fn format_inr(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if value < 0.0 && !zero { "-" } else { "" };

    let mut out = format!("{sign}₹{}", group_digits(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Whole-rupee amount, e.g. `₹1,00,000`.
pub fn format_rupees(amount: u64) -> String {
    format!("₹{}", group_indian(amount))
}

/// Percentage with an explicit sign and two decimals: `+1.51%`, `-2.57%`.
///
/// Zero, and anything that rounds to zero, renders as `+0.00%`.
pub fn format_signed_pct(value: f64) -> String {
    let rounded = format!("{:.2}", value.abs());
    if value < 0.0 && rounded != "0.00" {
        format!("-{rounded}%")
    } else {
        format!("+{rounded}%")
    }
}

/// Grey-market premium: `+₹42`, `-₹8`, `+₹0`.
pub fn format_gmp(gmp: i32) -> String {
    if gmp < 0 {
        format!("-₹{}", gmp.unsigned_abs())
    } else {
        format!("+₹{gmp}")
    }
}

/// Probability in 0..=1 as a whole percent: `0.78` → `78%`.
pub fn format_probability(p: f64) -> String {
    format!("{:.0}%", p * 100.0)
}

/// Confidence cell; `None` renders as `--`.
pub fn format_confidence(confidence: Option<u8>) -> String {
    match confidence {
        Some(c) => format!("{c}%"),
        None => "--".to_string(),
    }
}
