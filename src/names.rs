//! Fixed color-name tables for background/trim/text specs.
//!
//! Two tables are consulted in order: the SVG 1.1 extended color keywords
//! (through `palette`'s named-color set) and the design-system palette
//! below, which also backs the random placeholder background.

use rand::Rng;
use rgb::RGBA8;

/// Looks up an SVG 1.1 extended color keyword, e.g. `aliceblue`.
pub fn svg_color(name: &str) -> Option<RGBA8> {
    palette::named::from_str(name).map(|c| RGBA8 { r: c.red, g: c.green, b: c.blue, a: 255 })
}

/// Looks up a design-system color name, e.g. `indigo400` or `redA200`.
pub fn design_color(name: &str) -> Option<RGBA8> {
    DESIGN_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, v)| from_hex(v))
}

/// Picks a uniformly random entry from the design-system table.
pub fn random_design_color() -> RGBA8 {
    let mut rng = rand::thread_rng();
    let (_, v) = DESIGN_COLORS[rng.gen_range(0..DESIGN_COLORS.len())];
    from_hex(v)
}

fn from_hex(v: u32) -> RGBA8 {
    RGBA8 {
        r: (v >> 16) as u8,
        g: (v >> 8) as u8,
        b: v as u8,
        a: 255,
    }
}

/// The 2014 material design palette, shade names included.
const DESIGN_COLORS: &[(&str, u32)] = &[
    ("amber50", 0xfff8e1),
    ("amber100", 0xffecb3),
    ("amber200", 0xffe082),
    ("amber300", 0xffd54f),
    ("amber400", 0xffca28),
    ("amber500", 0xffc107),
    ("amber600", 0xffb300),
    ("amber700", 0xffa000),
    ("amber800", 0xff8f00),
    ("amber900", 0xff6f00),
    ("amberA100", 0xffe57f),
    ("amberA200", 0xffd740),
    ("amberA400", 0xffc400),
    ("amberA700", 0xffab00),
    ("black", 0x000000),
    ("blue50", 0xe3f2fd),
    ("blue100", 0xbbdefb),
    ("blue200", 0x90caf9),
    ("blue300", 0x64b5f6),
    ("blue400", 0x42a5f5),
    ("blue500", 0x2196f3),
    ("blue600", 0x1e88e5),
    ("blue700", 0x1976d2),
    ("blue800", 0x1565c0),
    ("blue900", 0x0d47a1),
    ("blueA100", 0x82b1ff),
    ("blueA200", 0x448aff),
    ("blueA400", 0x2979ff),
    ("blueA700", 0x2962ff),
    ("bluegrey50", 0xeceff1),
    ("bluegrey100", 0xcfd8dc),
    ("bluegrey200", 0xb0bec5),
    ("bluegrey300", 0x90a4ae),
    ("bluegrey400", 0x78909c),
    ("bluegrey500", 0x607d8b),
    ("bluegrey600", 0x546e7a),
    ("bluegrey700", 0x455a64),
    ("bluegrey800", 0x37474f),
    ("bluegrey900", 0x263238),
    ("brown50", 0xefebe9),
    ("brown100", 0xd7ccc8),
    ("brown200", 0xbcaaa4),
    ("brown300", 0xa1887f),
    ("brown400", 0x8d6e63),
    ("brown500", 0x795548),
    ("brown600", 0x6d4c41),
    ("brown700", 0x5d4037),
    ("brown800", 0x4e342e),
    ("brown900", 0x3e2723),
    ("cyan50", 0xe0f7fa),
    ("cyan100", 0xb2ebf2),
    ("cyan200", 0x80deea),
    ("cyan300", 0x4dd0e1),
    ("cyan400", 0x26c6da),
    ("cyan500", 0x00bcd4),
    ("cyan600", 0x00acc1),
    ("cyan700", 0x0097a7),
    ("cyan800", 0x00838f),
    ("cyan900", 0x006064),
    ("cyanA100", 0x84ffff),
    ("cyanA200", 0x18ffff),
    ("cyanA400", 0x00e5ff),
    ("cyanA700", 0x00b8d4),
    ("deeporange50", 0xfbe9e7),
    ("deeporange100", 0xffccbc),
    ("deeporange200", 0xffab91),
    ("deeporange300", 0xff8a65),
    ("deeporange400", 0xff7043),
    ("deeporange500", 0xff5722),
    ("deeporange600", 0xf4511e),
    ("deeporange700", 0xe64a19),
    ("deeporange800", 0xd84315),
    ("deeporange900", 0xbf360c),
    ("deeporangeA100", 0xff9e80),
    ("deeporangeA200", 0xff6e40),
    ("deeporangeA400", 0xff3d00),
    ("deeporangeA700", 0xdd2c00),
    ("deeppurple50", 0xede7f6),
    ("deeppurple100", 0xd1c4e9),
    ("deeppurple200", 0xb39ddb),
    ("deeppurple300", 0x9575cd),
    ("deeppurple400", 0x7e57c2),
    ("deeppurple500", 0x673ab7),
    ("deeppurple600", 0x5e35b1),
    ("deeppurple700", 0x512da8),
    ("deeppurple800", 0x4527a0),
    ("deeppurple900", 0x311b92),
    ("deeppurpleA100", 0xb388ff),
    ("deeppurpleA200", 0x7c4dff),
    ("deeppurpleA400", 0x651fff),
    ("deeppurpleA700", 0x6200ea),
    ("green50", 0xe8f5e9),
    ("green100", 0xc8e6c9),
    ("green200", 0xa5d6a7),
    ("green300", 0x81c784),
    ("green400", 0x66bb6a),
    ("green500", 0x4caf50),
    ("green600", 0x43a047),
    ("green700", 0x388e3c),
    ("green800", 0x2e7d32),
    ("green900", 0x1b5e20),
    ("greenA100", 0xb9f6ca),
    ("greenA200", 0x69f0ae),
    ("greenA400", 0x00e676),
    ("greenA700", 0x00c853),
    ("grey50", 0xfafafa),
    ("grey100", 0xf5f5f5),
    ("grey200", 0xeeeeee),
    ("grey300", 0xe0e0e0),
    ("grey400", 0xbdbdbd),
    ("grey500", 0x9e9e9e),
    ("grey600", 0x757575),
    ("grey700", 0x616161),
    ("grey800", 0x424242),
    ("grey900", 0x212121),
    ("indigo50", 0xe8eaf6),
    ("indigo100", 0xc5cae9),
    ("indigo200", 0x9fa8da),
    ("indigo300", 0x7986cb),
    ("indigo400", 0x5c6bc0),
    ("indigo500", 0x3f51b5),
    ("indigo600", 0x3949ab),
    ("indigo700", 0x303f9f),
    ("indigo800", 0x283593),
    ("indigo900", 0x1a237e),
    ("indigoA100", 0x8c9eff),
    ("indigoA200", 0x536dfe),
    ("indigoA400", 0x3d5afe),
    ("indigoA700", 0x304ffe),
    ("lightblue50", 0xe1f5fe),
    ("lightblue100", 0xb3e5fc),
    ("lightblue200", 0x81d4fa),
    ("lightblue300", 0x4fc3f7),
    ("lightblue400", 0x29b6f6),
    ("lightblue500", 0x03a9f4),
    ("lightblue600", 0x039be5),
    ("lightblue700", 0x0288d1),
    ("lightblue800", 0x0277bd),
    ("lightblue900", 0x01579b),
    ("lightblueA100", 0x80d8ff),
    ("lightblueA200", 0x40c4ff),
    ("lightblueA400", 0x00b0ff),
    ("lightblueA700", 0x0091ea),
    ("lightgreen50", 0xf1f8e9),
    ("lightgreen100", 0xdcedc8),
    ("lightgreen200", 0xc5e1a5),
    ("lightgreen300", 0xaed581),
    ("lightgreen400", 0x9ccc65),
    ("lightgreen500", 0x8bc34a),
    ("lightgreen600", 0x7cb342),
    ("lightgreen700", 0x689f38),
    ("lightgreen800", 0x558b2f),
    ("lightgreen900", 0x33691e),
    ("lightgreenA100", 0xccff90),
    ("lightgreenA200", 0xb2ff59),
    ("lightgreenA400", 0x76ff03),
    ("lightgreenA700", 0x64dd17),
    ("lime50", 0xf9fbe7),
    ("lime100", 0xf0f4c3),
    ("lime200", 0xe6ee9c),
    ("lime300", 0xdce775),
    ("lime400", 0xd4e157),
    ("lime500", 0xcddc39),
    ("lime600", 0xc0ca33),
    ("lime700", 0xafb42b),
    ("lime800", 0x9e9d24),
    ("lime900", 0x827717),
    ("limeA100", 0xf4ff81),
    ("limeA200", 0xeeff41),
    ("limeA400", 0xc6ff00),
    ("limeA700", 0xaeea00),
    ("orange50", 0xfff3e0),
    ("orange100", 0xffe0b2),
    ("orange200", 0xffcc80),
    ("orange300", 0xffb74d),
    ("orange400", 0xffa726),
    ("orange500", 0xff9800),
    ("orange600", 0xfb8c00),
    ("orange700", 0xf57c00),
    ("orange800", 0xef6c00),
    ("orange900", 0xe65100),
    ("orangeA100", 0xffd180),
    ("orangeA200", 0xffab40),
    ("orangeA400", 0xff9100),
    ("orangeA700", 0xff6d00),
    ("pink50", 0xfce4ec),
    ("pink100", 0xf8bbd0),
    ("pink200", 0xf48fb1),
    ("pink300", 0xf06292),
    ("pink400", 0xec407a),
    ("pink500", 0xe91e63),
    ("pink600", 0xd81b60),
    ("pink700", 0xc2185b),
    ("pink800", 0xad1457),
    ("pink900", 0x880e4f),
    ("pinkA100", 0xff80ab),
    ("pinkA200", 0xff4081),
    ("pinkA400", 0xf50057),
    ("pinkA700", 0xc51162),
    ("purple50", 0xf3e5f5),
    ("purple100", 0xe1bee7),
    ("purple200", 0xce93d8),
    ("purple300", 0xba68c8),
    ("purple400", 0xab47bc),
    ("purple500", 0x9c27b0),
    ("purple600", 0x8e24aa),
    ("purple700", 0x7b1fa2),
    ("purple800", 0x6a1b9a),
    ("purple900", 0x4a148c),
    ("purpleA100", 0xea80fc),
    ("purpleA200", 0xe040fb),
    ("purpleA400", 0xd500f9),
    ("purpleA700", 0xaa00ff),
    ("red50", 0xffebee),
    ("red100", 0xffcdd2),
    ("red200", 0xef9a9a),
    ("red300", 0xe57373),
    ("red400", 0xef5350),
    ("red500", 0xf44336),
    ("red600", 0xe53935),
    ("red700", 0xd32f2f),
    ("red800", 0xc62828),
    ("red900", 0xb71c1c),
    ("redA100", 0xff8a80),
    ("redA200", 0xff5252),
    ("redA400", 0xff1744),
    ("redA700", 0xd50000),
    ("teal50", 0xe0f2f1),
    ("teal100", 0xb2dfdb),
    ("teal200", 0x80cbc4),
    ("teal300", 0x4db6ac),
    ("teal400", 0x26a69a),
    ("teal500", 0x009688),
    ("teal600", 0x00897b),
    ("teal700", 0x00796b),
    ("teal800", 0x00695c),
    ("teal900", 0x004d40),
    ("tealA100", 0xa7ffeb),
    ("tealA200", 0x64ffda),
    ("tealA400", 0x1de9b6),
    ("tealA700", 0x00bfa5),
    ("white", 0xffffff),
    ("yellow50", 0xfffde7),
    ("yellow100", 0xfff9c4),
    ("yellow200", 0xfff59d),
    ("yellow300", 0xfff176),
    ("yellow400", 0xffee58),
    ("yellow500", 0xffeb3b),
    ("yellow600", 0xfdd835),
    ("yellow700", 0xfbc02d),
    ("yellow800", 0xf9a825),
    ("yellow900", 0xf57f17),
    ("yellowA100", 0xffff8d),
    ("yellowA200", 0xffff00),
    ("yellowA400", 0xffea00),
    ("yellowA700", 0xffd600),
];
