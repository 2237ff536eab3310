//! Count-up animation for the impact metrics.
//!
//! A counter reads its target and suffix from element attributes, then on
//! each animation frame shows `floor(target * ease_out_cubic(p))` through a
//! number formatter. In the browser that is the locale's formatter; the
//! default here is [`group_thousands`]. The final frame always shows the
//! exact target.

/// Length of the count-up in milliseconds.
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// `1 - (1 - p)^3`, clamped to `[0, 1]` input.
pub fn ease_out_cubic(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Fraction of the animation window covered after `elapsed_ms`.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Parses a counter target the way the page markup is written: leading
/// whitespace, an optional sign, then digits. Anything else is ignored
/// after the digits. No digits or a negative number gives 0.
pub fn parse_target(raw: &str) -> u64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() || negative {
        return 0;
    }
    digits.parse::<u64>().unwrap_or(u64::MAX)
}

/// Formats `n` with "," between groups of three digits. Used where no
/// locale formatter is available.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One element's count-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    target: u64,
    suffix: String,
}

/// What a single frame should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub finished: bool,
}

impl Counter {
    pub fn new(target: u64, suffix: impl Into<String>) -> Self {
        Self {
            target,
            suffix: suffix.into(),
        }
    }

    /// Builds a counter from the `data-counter` / `data-suffix` values.
    pub fn from_attributes(target: Option<&str>, suffix: Option<&str>) -> Self {
        Self::new(
            target.map(parse_target).unwrap_or(0),
            suffix.unwrap_or_default(),
        )
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Value shown at progress `p`. At `p >= 1` this is exactly the target.
    pub fn value_at(&self, p: f64) -> u64 {
        if p >= 1.0 {
            return self.target;
        }
        let value = (self.target as f64 * ease_out_cubic(p)).floor() as u64;
        value.min(self.target)
    }

    pub fn render_with<F>(&self, value: u64, format: F) -> String
    where
        F: Fn(u64) -> String,
    {
        format!("{}{}", format(value), self.suffix)
    }

    pub fn render(&self, value: u64) -> String {
        self.render_with(value, group_thousands)
    }

    /// Frame for `elapsed_ms` since the animation started, numbers
    /// formatted by `format`.
    pub fn frame_with<F>(&self, elapsed_ms: f64, format: F) -> CounterFrame
    where
        F: Fn(u64) -> String,
    {
        let p = progress(elapsed_ms, COUNTER_DURATION_MS);
        CounterFrame {
            text: self.render_with(self.value_at(p), format),
            finished: p >= 1.0,
        }
    }

    pub fn frame(&self, elapsed_ms: f64) -> CounterFrame {
        self.frame_with(elapsed_ms, group_thousands)
    }
}
