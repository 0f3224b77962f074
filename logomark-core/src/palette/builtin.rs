use super::Palette;
use crate::color::Rgb;

const fn rgb(packed: u32) -> Rgb { Rgb::from_hex(packed) }

#[allow(clippy::too_many_arguments)]
fn palette(
    id: &str,
    name: &str,
    caption: &str,
    swatch: [u32; 3],
    typography: u32,
    accent: u32,
    shapes: &[u32],
    background: &str,
) -> Palette {
    Palette {
        id: id.into(),
        name: name.into(),
        caption: caption.into(),
        swatch: swatch.map(rgb),
        typography: rgb(typography),
        accent: rgb(accent),
        shapes: shapes.iter().copied().map(rgb).collect(),
        background: background.into(),
    }
}

/// The five shipped palettes, default first.
pub fn builtin_palettes() -> Vec<Palette> {
    vec![
        palette(
            "neo-nebula",
            "Neo Nebula",
            "Metaverse energy with electric gradients",
            [0x3A0CA3, 0x7209B7, 0xB5179E],
            0xF8F9FF,
            0x4CC9F0,
            &[0x4361EE, 0x4CC9F0, 0xF72585],
            "linear-gradient(135deg, rgba(67,97,238,0.95), rgba(247,37,133,0.95))",
        ),
        palette(
            "sunset-reel",
            "Sunset Reel",
            "Warm gradients for Instagram-first launches",
            [0xF72585, 0xFF9E00, 0xFFB703],
            0xFFEFEF,
            0x3A0CA3,
            &[0xF72585, 0xFB8500, 0xFFB703],
            "linear-gradient(150deg, rgba(247, 37, 133, 0.88), rgba(251, 133, 0, 0.94))",
        ),
        palette(
            "hyper-growth",
            "Hyper Growth",
            "Performance-optimized green velocity",
            [0x00F5A0, 0x00D9F5, 0x0085FF],
            0xF2FFFB,
            0x0CECDD,
            &[0x00F5A0, 0x00B4D8, 0x0077B6],
            "linear-gradient(155deg, rgba(0, 213, 255, 0.85), rgba(0, 245, 160, 0.85))",
        ),
        palette(
            "sonic-wave",
            "Sonic Wave",
            "Creator vibes with audio-reactive motion",
            [0x7209B7, 0x560BAD, 0x4361EE],
            0xEEF4FF,
            0x4CC9F0,
            &[0xF72585, 0x4895EF, 0x3F37C9],
            "linear-gradient(140deg, rgba(86, 11, 173, 0.9), rgba(67, 97, 238, 0.95))",
        ),
        palette(
            "velvet-noir",
            "Velvet Noir",
            "Luxury commerce with cinematic contrast",
            [0x0B132B, 0x1C2541, 0x3A506B],
            0xF7FFF7,
            0x5BC0BE,
            &[0x0B132B, 0x5BC0BE, 0x3A506B],
            "linear-gradient(180deg, rgba(11, 19, 43, 0.92), rgba(58, 80, 107, 0.88))",
        ),
    ]
}
