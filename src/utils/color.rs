use ratatui::style::Color;

/// Display palette for tags: Tailwind 400/600 shades, light then dark per hue.
pub const TAG_PALETTE: [Color; 28] = [
    Color::Rgb(248, 113, 113), // red
    Color::Rgb(220, 38, 38),
    Color::Rgb(244, 114, 182), // pink
    Color::Rgb(219, 39, 119),
    Color::Rgb(192, 132, 252), // purple
    Color::Rgb(147, 51, 234),
    Color::Rgb(129, 140, 248), // indigo
    Color::Rgb(79, 70, 229),
    Color::Rgb(96, 165, 250), // blue
    Color::Rgb(37, 99, 235),
    Color::Rgb(56, 189, 248), // sky
    Color::Rgb(2, 132, 199),
    Color::Rgb(34, 211, 238), // cyan
    Color::Rgb(8, 145, 178),
    Color::Rgb(45, 212, 191), // teal
    Color::Rgb(13, 148, 136),
    Color::Rgb(74, 222, 128), // green
    Color::Rgb(22, 163, 74),
    Color::Rgb(163, 230, 53), // lime
    Color::Rgb(101, 163, 13),
    Color::Rgb(250, 204, 21), // yellow
    Color::Rgb(202, 138, 4),
    Color::Rgb(251, 191, 36), // amber
    Color::Rgb(217, 119, 6),
    Color::Rgb(251, 146, 60), // orange
    Color::Rgb(234, 88, 12),
    Color::Rgb(251, 113, 133), // rose
    Color::Rgb(225, 29, 72),
];

const HASH_SEED: u32 = 2_166_136_261;
const HASH_PRIME: f64 = 16_777_619.0;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// FNV-style string hash with a 5-bit left rotation after each step.
///
/// Hashes UTF-16 code units and multiplies in double precision, truncating
/// back to 32 bits afterwards, so a tag gets the same value as in the web
/// client. The product loses its low bits once it passes 2^53; wrapping
/// integer multiplication would not.
#[must_use]
pub fn simple_hash(s: &str) -> u32 {
    s.encode_utf16().fold(HASH_SEED, |hash, unit| {
        let mixed = hash ^ u32::from(unit);
        let product = f64::from(mixed as i32) * HASH_PRIME;
        to_uint32(product).rotate_left(5)
    })
}

/// Wrap an integral double into 32 bits, keeping the two's complement pattern.
fn to_uint32(value: f64) -> u32 {
    // |value| < 2^55 and integral here, so the remainder is exact
    value.rem_euclid(TWO_POW_32) as u32
}

/// Deterministic display color for a tag name.
#[must_use]
pub fn tag_color(tag: &str) -> Color {
    TAG_PALETTE[simple_hash(tag) as usize % TAG_PALETTE.len()]
}
