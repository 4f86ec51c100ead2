use crate::layout::FontRole;

/// Anchos AFM de Helvetica para ASCII 32..=126, en milésimas de em.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const FALLBACK_WIDTH: u16 = 556;

fn char_width(c: char, role: FontRole) -> u16 {
    let table = match role {
        FontRole::Regular => &HELVETICA,
        FontRole::Bold => &HELVETICA_BOLD,
    };
    match c as u32 {
        code @ 32..=126 => table[(code - 32) as usize],
        _ => FALLBACK_WIDTH,
    }
}

/// Ancho en puntos del texto con la fuente base-14 del rol.
pub fn text_width(text: &str, role: FontRole, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c, role))).sum();
    units as f32 * size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_widths() {
        assert_eq!(text_width("", FontRole::Regular, 12.0), 0.0);
        assert_eq!(text_width("0", FontRole::Regular, 10.0), 5.56);
        assert_eq!(text_width("W", FontRole::Bold, 1000.0), 944.0);
        assert_eq!(text_width("i", FontRole::Regular, 1000.0), 222.0);
        assert_eq!(text_width("i", FontRole::Bold, 1000.0), 278.0);
    }

    #[test]
    fn bold_is_not_narrower() {
        let text = "Invoice Total: USD 209.00";
        assert!(text_width(text, FontRole::Bold, 9.0) >= text_width(text, FontRole::Regular, 9.0));
    }
}
