//! Built-in bitmap font
//!
//! A compact variable-width pixel font covering the printable ASCII range.
//! Every glyph is packed into a single `u64`, read least-significant-bit
//! first:
//!
//! - bits 0..4   bottom offset (pixels up from the baseline to start at)
//! - bits 4..8   glyph width in pixels (also its advance)
//! - bits 8..12  glyph height in pixels
//! - bits 12..   the bitmap, in rows of `width` bits, left-to-right within
//!               a row and rows ordered bottom-to-top
//!
//! A 2x3 glyph with bottom offset 4 looking like
//!
//! ```text
//! . X
//! X X
//! X .
//! ```
//!
//! encodes as rows `01`, `11`, `10` after the header nibbles `0011` (height),
//! `0010` (width), `0100` (offset): `0x2d324`.

use super::surface::Pixel;

/// One packed glyph per character from `!` (0x21) through DEL (0x7F).
/// The final entry, the paragraph mark, stands in for any byte without a
/// glyph of its own.
const FONT_DATA: [u64; 95] = [
    /* ! */ 0x000000000007d712, /* " */ 0x000000000002d237, /* # */ 0x0000295f57d4a752,
    /* $ */ 0x000013c1741e4752, /* % */ 0x0000452820a51752, /* & */ 0x00001144b3536752,
    /* ' */ 0x0000000000003217, /* ( */ 0x000000c21112c742, /* ) */ 0x0000003488843742,
    /* * */ 0x0000000000969346, /* + */ 0x0000000427c84552, /* , */ 0x0000000000007311,
    /* - */ 0x000000000001f154, /* . */ 0x0000000000003212, /* / */ 0x0000410820841752,
    /* 0 */ 0x00003a39ace2e752, /* 1 */ 0x000010c42109f752, /* 2 */ 0x00003a306083f752,
    /* 3 */ 0x00003a306422e752, /* 4 */ 0x000062928fe10752, /* 5 */ 0x00007c2f8422e752,
    /* 6 */ 0x000030417c62e752, /* 7 */ 0x00007e3041084752, /* 8 */ 0x00003a317462e752,
    /* 9 */ 0x00003a31f4106752, /* : */ 0x0000000000033612, /* ; */ 0x0000000000067711,
    /* < */ 0x0000008421248742, /* = */ 0x00000000f801f453, /* > */ 0x0000001248421742,
    /* ? */ 0x00003a3041004752, /* @ */ 0x001e86db7d07e762, /* A */ 0x00003a3f8c631752,
    /* B */ 0x00003e2f8c62f752, /* C */ 0x00003a210862e752, /* D */ 0x00003e318c62f752,
    /* E */ 0x00007c270843f752, /* F */ 0x00007c2708421752, /* G */ 0x0000783d8c62e752,
    /* H */ 0x0000463f8c631752, /* I */ 0x00000001d2497732, /* J */ 0x000042108422e752,
    /* K */ 0x000045274c631752, /* L */ 0x000004210843f752, /* M */ 0x000047758c631752,
    /* N */ 0x00004675cc631752, /* O */ 0x00003a318c62e752, /* P */ 0x00003e2f08421752,
    /* Q */ 0x00003a318c536752, /* R */ 0x00003e2f8c631752, /* S */ 0x0000782e8422e752,
    /* T */ 0x00007c8421084752, /* U */ 0x000046318c62e752, /* V */ 0x000046318a944752,
    /* W */ 0x000046318d771752, /* X */ 0x0000454454631752, /* Y */ 0x0000454421084752,
    /* Z */ 0x00007e082083f752, /* [ */ 0x00000001c924f732, /* \ */ 0x0000044222110752,
    /* ] */ 0x00000001e4927732, /* ^ */ 0x0000000001151356, /* _ */ 0x000000000001f151,
    /* ` */ 0x0000000000006228, /* a */ 0x0000000e87a3e552, /* b */ 0x0000042d9c62f752,
    /* c */ 0x0000000e8862e552, /* d */ 0x00004216cc63e752, /* e */ 0x0000000e8fc3e552,
    /* f */ 0x000000c2f2222742, /* g */ 0x000003d18fa0f651, /* h */ 0x0000042d9c631752,
    /* i */ 0x000000000005f712, /* j */ 0x000802108462e851, /* k */ 0x0000001195359742,
    /* l */ 0x0000000001556722, /* m */ 0x0000000bad631552, /* n */ 0x0000000f8c631552,
    /* o */ 0x0000000e8c62e552, /* p */ 0x000001b38bc21651, /* q */ 0x000002d98fa10651,
    /* r */ 0x0000000d98421552, /* s */ 0x0000001e0ba0f552, /* t */ 0x00000000ba494732,
    /* u */ 0x000000118c63e552, /* v */ 0x000000118c544552, /* w */ 0x000000118d6be552,
    /* x */ 0x0000001151151552, /* y */ 0x000002318fa0f651, /* z */ 0x0000001f4105f552,
    /* { */ 0x000000c22122c742, /* | */ 0x00000000000ff811, /* } */ 0x0000003448443742,
    /* ~ */ 0x0000000000999267, /* DEL */ 0x00007af7b4210752,
];

/// Horizontal advance for bytes below 0x21 (space and control characters).
const BLANK_ADVANCE: i32 = 4;

/// Decoded glyph header plus the remaining bitmap bits.
#[derive(Debug, Clone, Copy)]
pub struct Glyph {
    pub bottom: i32,
    pub width: i32,
    pub height: i32,
    pub bits: u64,
}

/// Look up the glyph for a byte. Returns `None` for bytes below 0x21,
/// which draw nothing and advance the pen by [`BLANK_ADVANCE`]. Bytes
/// past the table map to the fallback paragraph mark.
#[inline]
pub fn get_glyph(byte: u8) -> Option<Glyph> {
    if byte < 0x21 {
        return None;
    }
    let byte = byte.min(0x7f);
    let mut data = FONT_DATA[(byte - 0x21) as usize];
    let bottom = (data & 0xf) as i32;
    data >>= 4;
    let width = (data & 0xf) as i32;
    data >>= 4;
    let height = (data & 0xf) as i32;
    data >>= 4;
    Some(Glyph {
        bottom,
        width,
        height,
        bits: data,
    })
}

/// Render `text` into a strided pixel slice. Set bits become `color`,
/// clear bits leave the background alone. The pen starts at (x, y) with
/// y growing upward (row 0 is the bottom of the buffer).
///
/// No clipping: the caller guarantees the whole string fits.
pub(super) fn draw_str(pixels: &mut [Pixel], pitch: i32, text: &str, x: i32, y: i32, color: Pixel) {
    let mut x = x;
    for byte in text.bytes() {
        let Some(glyph) = get_glyph(byte) else {
            x += BLANK_ADVANCE;
            continue;
        };

        let mut bits = glyph.bits;
        let mut idx = (x + (y + glyph.bottom) * pitch) as usize;
        let adv = (pitch - glyph.width) as usize;
        for _row in 0..glyph.height {
            for _col in 0..glyph.width {
                if bits & 1 != 0 {
                    pixels[idx] = color;
                }
                bits >>= 1;
                idx += 1;
            }
            idx += adv;
        }

        x += glyph.width + 1;
    }
}

/// Width in pixels that [`draw_str`] advances the pen for `text`.
pub fn text_width(text: &str) -> i32 {
    text.bytes()
        .map(|b| match get_glyph(b) {
            Some(glyph) => glyph.width + 1,
            None => BLANK_ADVANCE,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclamation_header() {
        // '!' is a single column: 1 wide, 7 tall, 2 up from the baseline
        let glyph = get_glyph(b'!').unwrap();
        assert_eq!(glyph.bottom, 2);
        assert_eq!(glyph.width, 1);
        assert_eq!(glyph.height, 7);
    }

    #[test]
    fn test_control_bytes_have_no_glyph() {
        assert!(get_glyph(b' ').is_none());
        assert!(get_glyph(b'\n').is_none());
        assert!(get_glyph(0x00).is_none());
    }

    #[test]
    fn test_high_bytes_use_fallback() {
        let fallback = get_glyph(0x7f).unwrap();
        let high = get_glyph(0xf0).unwrap();
        assert_eq!(high.width, fallback.width);
        assert_eq!(high.height, fallback.height);
        assert_eq!(high.bits, fallback.bits);
    }

    #[test]
    fn test_text_width_matches_advances() {
        // space advances 4, each glyph advances width + 1
        let a = get_glyph(b'A').unwrap();
        let b = get_glyph(b'B').unwrap();
        assert_eq!(text_width("A B"), a.width + 1 + 4 + b.width + 1);
        assert_eq!(text_width(""), 0);
    }

    #[test]
    fn test_draw_str_sets_only_requested_color() {
        let pitch = 32;
        let mut pixels = vec![0u32; (pitch * 16) as usize];
        draw_str(&mut pixels, pitch, "Hi", 2, 2, 0xffffffff);
        assert!(pixels.iter().any(|&p| p == 0xffffffff));
        assert!(pixels.iter().all(|&p| p == 0 || p == 0xffffffff));
    }
}
