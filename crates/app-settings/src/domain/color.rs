//! Packed ARGB color and the named-color table.
//!
//! Settings name colors the way web pages do (`"CornflowerBlue"`,
//! `"red"`).  [`Color::from_name`] resolves those names case-insensitively
//! against the table at the bottom of this file.
//!
//! # The zero sentinel
//!
//! A packed ARGB value of `0x0000_0000` (transparent black) is what an
//! unresolvable name historically produced, so the accessor treats a color
//! whose [`Color::to_argb`] is zero as "no color".  No entry in the table
//! packs to zero: `Transparent` is *white* with zero alpha (`0x00FF_FFFF`).

/// An 8-bit-per-channel ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Builds an opaque color from its red, green, and blue channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 0xFF, r, g, b }
    }

    /// Unpacks a `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Packs the color as `0xAARRGGBB`.
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Resolves a color name, ignoring ASCII case.  Surrounding whitespace
    /// is part of the name, so `" red "` does not resolve.
    ///
    /// Returns `None` for names that are not in the table.
    ///
    /// ```rust
    /// use app_settings::Color;
    ///
    /// assert_eq!(Color::from_name("red"), Some(Color::from_rgb(0xFF, 0, 0)));
    /// assert_eq!(Color::from_name("cornflowerblue"), Some(Color::from_argb(0xFF64_95ED)));
    /// assert_eq!(Color::from_name(" red "), None);
    /// assert_eq!(Color::from_name("not-a-color"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        NAMED_COLORS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|&(_, argb)| Self::from_argb(argb))
    }

    /// Returns the canonical table name of this exact color, if it has one.
    ///
    /// Where two names share a value (`Aqua` / `Cyan`) the first in table
    /// order wins.
    pub fn name(self) -> Option<&'static str> {
        let argb = self.to_argb();
        NAMED_COLORS
            .iter()
            .find(|&&(_, known)| known == argb)
            .map(|&(name, _)| name)
    }
}

/// Named colors and their `0xAARRGGBB` values.
const NAMED_COLORS: &[(&str, u32)] = &[
    ("Transparent", 0x00FF_FFFF),
    ("AliceBlue", 0xFFF0_F8FF),
    ("AntiqueWhite", 0xFFFA_EBD7),
    ("Aqua", 0xFF00_FFFF),
    ("Aquamarine", 0xFF7F_FFD4),
    ("Azure", 0xFFF0_FFFF),
    ("Beige", 0xFFF5_F5DC),
    ("Bisque", 0xFFFF_E4C4),
    ("Black", 0xFF00_0000),
    ("BlanchedAlmond", 0xFFFF_EBCD),
    ("Blue", 0xFF00_00FF),
    ("BlueViolet", 0xFF8A_2BE2),
    ("Brown", 0xFFA5_2A2A),
    ("BurlyWood", 0xFFDE_B887),
    ("CadetBlue", 0xFF5F_9EA0),
    ("Chartreuse", 0xFF7F_FF00),
    ("Chocolate", 0xFFD2_691E),
    ("Coral", 0xFFFF_7F50),
    ("CornflowerBlue", 0xFF64_95ED),
    ("Cornsilk", 0xFFFF_F8DC),
    ("Crimson", 0xFFDC_143C),
    ("Cyan", 0xFF00_FFFF),
    ("DarkBlue", 0xFF00_008B),
    ("DarkCyan", 0xFF00_8B8B),
    ("DarkGoldenrod", 0xFFB8_860B),
    ("DarkGray", 0xFFA9_A9A9),
    ("DarkGreen", 0xFF00_6400),
    ("DarkKhaki", 0xFFBD_B76B),
    ("DarkMagenta", 0xFF8B_008B),
    ("DarkOliveGreen", 0xFF55_6B2F),
    ("DarkOrange", 0xFFFF_8C00),
    ("DarkOrchid", 0xFF99_32CC),
    ("DarkRed", 0xFF8B_0000),
    ("DarkSalmon", 0xFFE9_967A),
    ("DarkSeaGreen", 0xFF8F_BC8B),
    ("DarkSlateBlue", 0xFF48_3D8B),
    ("DarkSlateGray", 0xFF2F_4F4F),
    ("DarkTurquoise", 0xFF00_CED1),
    ("DarkViolet", 0xFF94_00D3),
    ("DeepPink", 0xFFFF_1493),
    ("DeepSkyBlue", 0xFF00_BFFF),
    ("DimGray", 0xFF69_6969),
    ("DodgerBlue", 0xFF1E_90FF),
    ("Firebrick", 0xFFB2_2222),
    ("FloralWhite", 0xFFFF_FAF0),
    ("ForestGreen", 0xFF22_8B22),
    ("Fuchsia", 0xFFFF_00FF),
    ("Gainsboro", 0xFFDC_DCDC),
    ("GhostWhite", 0xFFF8_F8FF),
    ("Gold", 0xFFFF_D700),
    ("Goldenrod", 0xFFDA_A520),
    ("Gray", 0xFF80_8080),
    ("Green", 0xFF00_8000),
    ("GreenYellow", 0xFFAD_FF2F),
    ("Honeydew", 0xFFF0_FFF0),
    ("HotPink", 0xFFFF_69B4),
    ("IndianRed", 0xFFCD_5C5C),
    ("Indigo", 0xFF4B_0082),
    ("Ivory", 0xFFFF_FFF0),
    ("Khaki", 0xFFF0_E68C),
    ("Lavender", 0xFFE6_E6FA),
    ("LavenderBlush", 0xFFFF_F0F5),
    ("LawnGreen", 0xFF7C_FC00),
    ("LemonChiffon", 0xFFFF_FACD),
    ("LightBlue", 0xFFAD_D8E6),
    ("LightCoral", 0xFFF0_8080),
    ("LightCyan", 0xFFE0_FFFF),
    ("LightGoldenrodYellow", 0xFFFA_FAD2),
    ("LightGray", 0xFFD3_D3D3),
    ("LightGreen", 0xFF90_EE90),
    ("LightPink", 0xFFFF_B6C1),
    ("LightSalmon", 0xFFFF_A07A),
    ("LightSeaGreen", 0xFF20_B2AA),
    ("LightSkyBlue", 0xFF87_CEFA),
    ("LightSlateGray", 0xFF77_8899),
    ("LightSteelBlue", 0xFFB0_C4DE),
    ("LightYellow", 0xFFFF_FFE0),
    ("Lime", 0xFF00_FF00),
    ("LimeGreen", 0xFF32_CD32),
    ("Linen", 0xFFFA_F0E6),
    ("Magenta", 0xFFFF_00FF),
    ("Maroon", 0xFF80_0000),
    ("MediumAquamarine", 0xFF66_CDAA),
    ("MediumBlue", 0xFF00_00CD),
    ("MediumOrchid", 0xFFBA_55D3),
    ("MediumPurple", 0xFF93_70DB),
    ("MediumSeaGreen", 0xFF3C_B371),
    ("MediumSlateBlue", 0xFF7B_68EE),
    ("MediumSpringGreen", 0xFF00_FA9A),
    ("MediumTurquoise", 0xFF48_D1CC),
    ("MediumVioletRed", 0xFFC7_1585),
    ("MidnightBlue", 0xFF19_1970),
    ("MintCream", 0xFFF5_FFFA),
    ("MistyRose", 0xFFFF_E4E1),
    ("Moccasin", 0xFFFF_E4B5),
    ("NavajoWhite", 0xFFFF_DEAD),
    ("Navy", 0xFF00_0080),
    ("OldLace", 0xFFFD_F5E6),
    ("Olive", 0xFF80_8000),
    ("OliveDrab", 0xFF6B_8E23),
    ("Orange", 0xFFFF_A500),
    ("OrangeRed", 0xFFFF_4500),
    ("Orchid", 0xFFDA_70D6),
    ("PaleGoldenrod", 0xFFEE_E8AA),
    ("PaleGreen", 0xFF98_FB98),
    ("PaleTurquoise", 0xFFAF_EEEE),
    ("PaleVioletRed", 0xFFDB_7093),
    ("PapayaWhip", 0xFFFF_EFD5),
    ("PeachPuff", 0xFFFF_DAB9),
    ("Peru", 0xFFCD_853F),
    ("Pink", 0xFFFF_C0CB),
    ("Plum", 0xFFDD_A0DD),
    ("PowderBlue", 0xFFB0_E0E6),
    ("Purple", 0xFF80_0080),
    ("RebeccaPurple", 0xFF66_3399),
    ("Red", 0xFFFF_0000),
    ("RosyBrown", 0xFFBC_8F8F),
    ("RoyalBlue", 0xFF41_69E1),
    ("SaddleBrown", 0xFF8B_4513),
    ("Salmon", 0xFFFA_8072),
    ("SandyBrown", 0xFFF4_A460),
    ("SeaGreen", 0xFF2E_8B57),
    ("SeaShell", 0xFFFF_F5EE),
    ("Sienna", 0xFFA0_522D),
    ("Silver", 0xFFC0_C0C0),
    ("SkyBlue", 0xFF87_CEEB),
    ("SlateBlue", 0xFF6A_5ACD),
    ("SlateGray", 0xFF70_8090),
    ("Snow", 0xFFFF_FAFA),
    ("SpringGreen", 0xFF00_FF7F),
    ("SteelBlue", 0xFF46_82B4),
    ("Tan", 0xFFD2_B48C),
    ("Teal", 0xFF00_8080),
    ("Thistle", 0xFFD8_BFD8),
    ("Tomato", 0xFFFF_6347),
    ("Turquoise", 0xFF40_E0D0),
    ("Violet", 0xFFEE_82EE),
    ("Wheat", 0xFFF5_DEB3),
    ("White", 0xFFFF_FFFF),
    ("WhiteSmoke", 0xFFF5_F5F5),
    ("Yellow", 0xFFFF_FF00),
    ("YellowGreen", 0xFF9A_CD32),
];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_pack_and_unpack_agree() {
        let c = Color::from_argb(0x8012_3456);
        assert_eq!(c, Color { a: 0x80, r: 0x12, g: 0x34, b: 0x56 });
        assert_eq!(c.to_argb(), 0x8012_3456);
    }

    #[test]
    fn test_from_rgb_is_opaque() {
        assert_eq!(Color::from_rgb(1, 2, 3).a, 0xFF);
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        let expected = Color::from_rgb(0xFF, 0xA5, 0x00);
        assert_eq!(Color::from_name("Orange"), Some(expected));
        assert_eq!(Color::from_name("orange"), Some(expected));
        assert_eq!(Color::from_name("ORANGE"), Some(expected));
    }

    #[test]
    fn test_from_name_unknown_returns_none() {
        assert_eq!(Color::from_name("bar"), None);
        assert_eq!(Color::from_name(""), None);
        assert_eq!(Color::from_name("   "), None);
    }

    #[test]
    fn test_from_name_does_not_trim() {
        assert_eq!(Color::from_name(" red "), None);
        assert_eq!(Color::from_name("red\n"), None);
    }

    #[test]
    fn test_transparent_does_not_pack_to_zero() {
        // Arrange / Act
        let transparent = Color::from_name("Transparent").expect("known color");

        // Assert
        assert_eq!(transparent.a, 0);
        assert_ne!(transparent.to_argb(), 0);
    }

    #[test]
    fn test_no_table_entry_packs_to_zero() {
        assert!(NAMED_COLORS.iter().all(|&(_, argb)| argb != 0));
    }

    #[test]
    fn test_table_names_are_unique_ignoring_case() {
        for (i, (a, _)) in NAMED_COLORS.iter().enumerate() {
            for (b, _) in &NAMED_COLORS[i + 1..] {
                assert!(!a.eq_ignore_ascii_case(b), "duplicate color name {a}");
            }
        }
    }

    #[test]
    fn test_name_prefers_first_alias() {
        assert_eq!(Color::from_rgb(0, 0xFF, 0xFF).name(), Some("Aqua"));
        assert_eq!(Color::from_rgb(1, 2, 3).name(), None);
    }
}
