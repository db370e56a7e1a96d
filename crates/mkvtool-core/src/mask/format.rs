//! printf-style sizing for rendered values.

/// Largest accepted width or precision.
const MAX_SIZE: usize = 1_000_000;

/// Parsed `[-][0][width][.precision]` size specifier.
///
/// - `-` left-aligns within the width.
/// - A width starting with `0` pads with zeros instead of spaces. Ignored
///   when left-aligned, and for numbers also when a precision is given.
/// - Precision truncates strings to that many characters and gives numbers
///   a minimum digit count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeSpec {
    pub left_align: bool,
    pub zero_pad: bool,
    pub width: Option<usize>,
    pub precision: Option<usize>,
}

impl SizeSpec {
    /// Parse the specifier found between `%` and `{`.
    pub fn parse(spec: &str) -> Result<Self, String> {
        let (left_align, rest) = match spec.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, spec),
        };

        let (width_part, precision_part) = match rest.split_once('.') {
            Some((w, p)) => (w, Some(p)),
            None => (rest, None),
        };

        let width = parse_size(width_part, "width")?;
        let precision = match precision_part {
            Some(p) => parse_size(p, "precision")?,
            None => None,
        };

        Ok(Self {
            left_align,
            zero_pad: width_part.starts_with('0'),
            width,
            precision,
        })
    }

    /// Format a string value.
    pub fn format_text(&self, value: &str) -> String {
        let body: String = match self.precision {
            Some(max) => value.chars().take(max).collect(),
            None => value.to_string(),
        };
        self.pad(body, self.zero_pad)
    }

    /// Format an integer value.
    pub fn format_number(&self, value: i64) -> String {
        let mut digits = value.unsigned_abs().to_string();
        if let Some(min_digits) = self.precision {
            if digits.len() < min_digits {
                digits.insert_str(0, &"0".repeat(min_digits - digits.len()));
            }
        }
        let sign = if value < 0 { "-" } else { "" };

        let zero_fill = self.zero_pad && self.precision.is_none() && !self.left_align;
        match self.width {
            Some(width) if zero_fill && sign.len() + digits.len() < width => {
                let fill = width - sign.len() - digits.len();
                format!("{}{}{}", sign, "0".repeat(fill), digits)
            }
            _ => self.pad(format!("{}{}", sign, digits), false),
        }
    }

    fn pad(&self, body: String, zero_allowed: bool) -> String {
        let len = body.chars().count();
        let width = match self.width {
            Some(width) if width > len => width,
            _ => return body,
        };
        let fill = width - len;

        if self.left_align {
            format!("{}{}", body, " ".repeat(fill))
        } else if zero_allowed {
            format!("{}{}", "0".repeat(fill), body)
        } else {
            format!("{}{}", " ".repeat(fill), body)
        }
    }
}

fn parse_size(digits: &str, what: &str) -> Result<Option<usize>, String> {
    if digits.is_empty() {
        return Ok(None);
    }
    match digits.parse::<usize>() {
        Ok(size) if size <= MAX_SIZE => Ok(Some(size)),
        _ => Err(format!("{} {} is out of range", what, digits)),
    }
}
