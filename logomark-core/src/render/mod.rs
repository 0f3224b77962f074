//! Output backends for generated variants.

pub mod geometry;
pub mod preview;
pub mod svg;

pub use preview::render_preview_rgba;
pub use svg::{render_svg, SvgCard};

/// Compact decimal for markup: at most three places, no trailing zeros.
pub fn fmt_num(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
mod tests {
    use super::fmt_num;

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(fmt_num(10.0), "10");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(32.931599999999996), "32.932");
        assert_eq!(fmt_num(-0.0001), "0");
        assert_eq!(fmt_num(-4.204), "-4.204");
    }
}
