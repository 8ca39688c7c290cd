use std::fmt;

use crate::foundation::error::{StickerFxError, StickerFxResult};

/// Descriptor value of an empty filter chain.
pub const NO_FILTER: &str = "none";

/// One filter primitive. Percent-valued primitives store the percentage (`120.0` is `120%`).
///
/// `drop-shadow(..)` and `url(..)` keep their argument text as written so a host-supplied chain
/// renders back unchanged.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum FilterOp {
    Blur(f64),
    Brightness(f64),
    Contrast(f64),
    Grayscale(f64),
    HueRotate(f64),
    Invert(f64),
    Opacity(f64),
    Saturate(f64),
    Sepia(f64),
    DropShadow(String),
    Url(String),
}

impl FilterOp {
    pub fn name(&self) -> &'static str {
        match self {
            FilterOp::Blur(_) => "blur",
            FilterOp::Brightness(_) => "brightness",
            FilterOp::Contrast(_) => "contrast",
            FilterOp::Grayscale(_) => "grayscale",
            FilterOp::HueRotate(_) => "hue-rotate",
            FilterOp::Invert(_) => "invert",
            FilterOp::Opacity(_) => "opacity",
            FilterOp::Saturate(_) => "saturate",
            FilterOp::Sepia(_) => "sepia",
            FilterOp::DropShadow(_) => "drop-shadow",
            FilterOp::Url(_) => "url",
        }
    }

    fn parse(name: &str, arg: &str) -> StickerFxResult<Self> {
        let arg = arg.trim();
        match name {
            "blur" => Ok(FilterOp::Blur(parse_length(arg)?)),
            "hue-rotate" => Ok(FilterOp::HueRotate(parse_angle(arg)?)),
            "brightness" => Ok(FilterOp::Brightness(parse_percent(arg)?)),
            "contrast" => Ok(FilterOp::Contrast(parse_percent(arg)?)),
            "grayscale" => Ok(FilterOp::Grayscale(parse_percent(arg)?)),
            "invert" => Ok(FilterOp::Invert(parse_percent(arg)?)),
            "opacity" => Ok(FilterOp::Opacity(parse_percent(arg)?)),
            "saturate" => Ok(FilterOp::Saturate(parse_percent(arg)?)),
            "sepia" => Ok(FilterOp::Sepia(parse_percent(arg)?)),
            "drop-shadow" => Ok(FilterOp::DropShadow(verbatim(name, arg)?)),
            "url" => Ok(FilterOp::Url(verbatim(name, arg)?)),
            other => Err(StickerFxError::validation(format!(
                "unknown filter function '{other}'"
            ))),
        }
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        match self {
            FilterOp::Blur(px) => write!(f, "{name}({px}px)"),
            FilterOp::HueRotate(deg) => write!(f, "{name}({deg}deg)"),
            FilterOp::Brightness(p)
            | FilterOp::Contrast(p)
            | FilterOp::Grayscale(p)
            | FilterOp::Invert(p)
            | FilterOp::Opacity(p)
            | FilterOp::Saturate(p)
            | FilterOp::Sepia(p) => write!(f, "{name}({p}%)"),
            FilterOp::DropShadow(args) | FilterOp::Url(args) => write!(f, "{name}({args})"),
        }
    }
}

/// Ordered list of filter primitives.
///
/// Effects only ever push onto the chain, so stacking several filter effects keeps every
/// earlier primitive. The textual descriptor is produced when the frame is drawn.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FilterChain {
    ops: Vec<FilterOp>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: FilterOp) {
        self.ops.push(op);
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn ops(&self) -> &[FilterOp] {
        &self.ops
    }

    /// Space-separated descriptor, or [`NO_FILTER`] for an empty chain.
    pub fn to_descriptor(&self) -> String {
        if self.ops.is_empty() {
            return NO_FILTER.to_string();
        }
        let mut out = String::new();
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&op.to_string());
        }
        out
    }

    /// Parses a descriptor such as `blur(2px) brightness(120%)`. `none` and the empty string
    /// give an empty chain.
    pub fn parse(descriptor: &str) -> StickerFxResult<Self> {
        let mut rest = descriptor.trim();
        let mut chain = Self::new();
        if rest.is_empty() || rest == NO_FILTER {
            return Ok(chain);
        }

        while !rest.is_empty() {
            let Some(open) = rest.find('(') else {
                return Err(StickerFxError::validation(format!(
                    "filter descriptor: expected '(' in '{rest}'"
                )));
            };
            let Some(close) = matching_close(rest, open) else {
                return Err(StickerFxError::validation(format!(
                    "filter descriptor: unterminated '{rest}'"
                )));
            };
            let name = rest[..open].trim().to_ascii_lowercase();
            chain.push(FilterOp::parse(&name, &rest[open + 1..close])?);
            rest = rest[close + 1..].trim_start();
        }

        Ok(chain)
    }
}

impl fmt::Display for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_descriptor())
    }
}

impl Extend<FilterOp> for FilterChain {
    fn extend<T: IntoIterator<Item = FilterOp>>(&mut self, iter: T) {
        self.ops.extend(iter);
    }
}

/// Byte index of the `)` closing the `(` at `open`, skipping nested pairs.
fn matching_close(s: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, b) in s.bytes().enumerate().skip(open) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn verbatim(name: &str, arg: &str) -> StickerFxResult<String> {
    if arg.is_empty() {
        return Err(StickerFxError::validation(format!(
            "filter {name}() needs an argument"
        )));
    }
    Ok(arg.to_string())
}

fn parse_number(s: &str, what: &str) -> StickerFxResult<f64> {
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|_| StickerFxError::validation(format!("filter {what}: bad number '{s}'")))?;
    if !v.is_finite() {
        return Err(StickerFxError::validation(format!(
            "filter {what} must be finite"
        )));
    }
    Ok(v)
}

fn parse_length(arg: &str) -> StickerFxResult<f64> {
    match arg.strip_suffix("px") {
        Some(n) => parse_number(n, "length"),
        None if parse_number(arg, "length")? == 0.0 => Ok(0.0),
        None => Err(StickerFxError::validation(format!(
            "filter length '{arg}' needs a px unit"
        ))),
    }
}

fn parse_angle(arg: &str) -> StickerFxResult<f64> {
    if let Some(n) = arg.strip_suffix("deg") {
        return parse_number(n, "angle");
    }
    if let Some(n) = arg.strip_suffix("rad") {
        return Ok(parse_number(n, "angle")?.to_degrees());
    }
    if let Some(n) = arg.strip_suffix("turn") {
        return Ok(parse_number(n, "angle")? * 360.0);
    }
    if parse_number(arg, "angle")? == 0.0 {
        return Ok(0.0);
    }
    Err(StickerFxError::validation(format!(
        "filter angle '{arg}' needs a unit"
    )))
}

/// `120%` and the plain ratio `1.2` both mean 120 percent.
fn parse_percent(arg: &str) -> StickerFxResult<f64> {
    match arg.strip_suffix('%') {
        Some(n) => parse_number(n, "percentage"),
        None => Ok(parse_number(arg, "percentage")? * 100.0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/filter.rs"]
mod tests;
