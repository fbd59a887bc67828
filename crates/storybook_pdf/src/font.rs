//! Helvetica metrics and WinAnsi text encoding.
//!
//! Captions use the standard Type1 Helvetica font, which every PDF reader
//! ships, so no font program is embedded. Widths are in 1/1000 em.

/// PostScript name of the caption font.
pub const CAPTION_FONT: &str = "Helvetica";

/// Replacement byte for characters WinAnsi cannot represent.
const REPLACEMENT: u8 = b'?';

/// Glyph widths for bytes 0x20..=0xFF; unassigned WinAnsi slots use the
/// bullet width.
const WIDTHS: [u16; 224] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 350, // 'p'..DEL
    556, 350, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 350, 611, 350, // 0x80..0x8F
    350, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 350, 500, 667, // 0x90..0x9F
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 0xA0..0xAF
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 0xB0..0xBF
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 'À'..'Ï'
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 'Ð'..'ß'
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // 'à'..'ï'
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // 'ð'..'ÿ'
];

/// Width of one WinAnsi byte in 1/1000 em.
pub fn glyph_width(byte: u8) -> u16 {
    match byte {
        0x20..=0xFF => WIDTHS[(byte - 0x20) as usize],
        _ => 0,
    }
}

/// Width of a WinAnsi byte string in 1/1000 em.
pub fn string_width(bytes: &[u8]) -> u32 {
    bytes.iter().map(|b| glyph_width(*b) as u32).sum()
}

/// Encode text for a WinAnsi simple font.
///
/// Latin-1 characters map directly, the characters WinAnsi places in
/// 0x80..=0x9F (typographic punctuation, Œ, Š, €, ...) map to their slot, and
/// anything else becomes `?`.
///
/// # Examples
///
/// ```
/// use storybook_pdf::encode_win_ansi;
///
/// assert_eq!(encode_win_ansi("Café"), b"Caf\xE9".to_vec());
/// assert_eq!(encode_win_ansi("\u{201C}hi\u{201D}"), b"\x93hi\x94".to_vec());
/// assert_eq!(encode_win_ansi("🐼"), b"?".to_vec());
/// ```
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80,
            '\u{201A}' => 0x82,
            '\u{0192}' => 0x83,
            '\u{201E}' => 0x84,
            '\u{2026}' => 0x85,
            '\u{2020}' => 0x86,
            '\u{2021}' => 0x87,
            '\u{02C6}' => 0x88,
            '\u{2030}' => 0x89,
            '\u{0160}' => 0x8A,
            '\u{2039}' => 0x8B,
            '\u{0152}' => 0x8C,
            '\u{017D}' => 0x8E,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{02DC}' => 0x98,
            '\u{2122}' => 0x99,
            '\u{0161}' => 0x9A,
            '\u{203A}' => 0x9B,
            '\u{0153}' => 0x9C,
            '\u{017E}' => 0x9E,
            '\u{0178}' => 0x9F,
            '\t' => b' ',
            '\n' => b'\n',
            c if (c as u32) < 0x20 => REPLACEMENT,
            c if (c as u32) <= 0x7E => c as u8,
            c if (0xA0..=0xFF).contains(&(c as u32)) => c as u32 as u8,
            _ => REPLACEMENT,
        })
        .collect()
}

/// One wrapped caption line.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    /// WinAnsi bytes of the line
    pub bytes: Vec<u8>,
    /// Extra space per word gap, in points, for justified lines
    pub word_spacing: f32,
}

/// Wrap WinAnsi text into justified lines that fit `max_width_pt`.
///
/// Lines break at the last space that fits; a word longer than a whole line
/// is broken mid-word. Explicit newlines end a line. Every line except the
/// last one of a paragraph is justified by word spacing.
pub fn wrap_justified(bytes: &[u8], font_size: f32, max_width_pt: f32) -> Vec<WrappedLine> {
    // Work in font units (1/1000 em) scaled to the current size.
    let wmax = (max_width_pt * 1000.0 / font_size) as u32;

    let mut text: Vec<u8> = bytes.iter().copied().filter(|b| *b != b'\r').collect();
    if text.last() == Some(&b'\n') {
        text.pop();
    }

    let mut lines = Vec::new();
    let nb = text.len();
    let mut i = 0; // current byte
    let mut j = 0; // start of current line
    let mut sep: Option<usize> = None; // last space seen
    let mut width_at_sep = 0u32;
    let mut spaces = 0usize;
    let mut width = 0u32;

    while i < nb {
        let c = text[i];
        if c == b'\n' {
            lines.push(WrappedLine {
                bytes: text[j..i].to_vec(),
                word_spacing: 0.0,
            });
            i += 1;
            j = i;
            sep = None;
            width = 0;
            spaces = 0;
            continue;
        }
        if c == b' ' {
            sep = Some(i);
            width_at_sep = width;
            spaces += 1;
        }
        width += glyph_width(c) as u32;
        if width > wmax {
            match sep {
                None => {
                    if i == j {
                        i += 1;
                    }
                    lines.push(WrappedLine {
                        bytes: text[j..i].to_vec(),
                        word_spacing: 0.0,
                    });
                }
                Some(s) => {
                    let gaps = spaces.saturating_sub(1);
                    let word_spacing = if gaps > 0 {
                        (wmax - width_at_sep) as f32 / 1000.0 * font_size / gaps as f32
                    } else {
                        0.0
                    };
                    lines.push(WrappedLine {
                        bytes: text[j..s].to_vec(),
                        word_spacing,
                    });
                    i = s + 1;
                }
            }
            sep = None;
            j = i;
            width = 0;
            spaces = 0;
        } else {
            i += 1;
        }
    }

    if i != j || lines.is_empty() {
        lines.push(WrappedLine {
            bytes: text[j..i].to_vec(),
            word_spacing: 0.0,
        });
    }

    lines
}
