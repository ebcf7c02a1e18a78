use crate::catalog::FontId;

/// A fixed-height glyph family for the big countdown readout. Glyphs are
/// stored as newline-joined rows; widths may vary per glyph and are padded
/// out during rendering.
#[derive(Debug)]
pub struct DigitFont {
    pub height: u16,
    glyphs: [&'static str; 11],
}

impl DigitFont {
    /// Glyph for one readout character. Only digits and ':' ever appear in
    /// a "MM:SS" string; anything else renders as nothing.
    pub fn glyph(&self, c: char) -> &'static str {
        match c {
            '0'..='9' => self.glyphs[c as usize - '0' as usize],
            ':' => self.glyphs[10],
            _ => "",
        }
    }

    /// Render a readout string into `height` rows of uniform length, with a
    /// one-cell gap between characters.
    pub fn render(&self, text: &str) -> Vec<String> {
        let mut rows = vec![String::new(); self.height as usize];
        let char_count = text.chars().count();
        for (i, c) in text.chars().enumerate() {
            let lines: Vec<&str> = self.glyph(c).lines().collect();
            let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
            for (r, row) in rows.iter_mut().enumerate() {
                let line = lines.get(r).copied().unwrap_or("");
                row.push_str(line);
                for _ in line.chars().count()..width {
                    row.push(' ');
                }
                if i + 1 != char_count {
                    row.push(' ');
                }
            }
        }
        rows
    }
}

pub fn font_for(id: FontId) -> &'static DigitFont {
    match id {
        FontId::Block => &BLOCK,
        FontId::Slim => &SLIM,
        FontId::Digital => &DIGITAL,
        FontId::Heavy => &HEAVY,
        FontId::Mono => &MONO,
    }
}

const BLOCK: DigitFont = DigitFont {
    height: 5,
    glyphs: [
        "███\n█ █\n█ █\n█ █\n███",
        " █ \n██ \n █ \n █ \n███",
        "███\n  █\n███\n█  \n███",
        "███\n  █\n███\n  █\n███",
        "█ █\n█ █\n███\n  █\n  █",
        "███\n█  \n███\n  █\n███",
        "███\n█  \n███\n█ █\n███",
        "███\n  █\n  █\n  █\n  █",
        "███\n█ █\n███\n█ █\n███",
        "███\n█ █\n███\n  █\n███",
        " \n█\n \n█\n ",
    ],
};

const SLIM: DigitFont = DigitFont {
    height: 5,
    glyphs: [
        "┌─┐\n│ │\n│ │\n│ │\n└─┘",
        " ┐ \n │ \n │ \n │ \n ┴ ",
        "┌─┐\n  │\n┌─┘\n│  \n└─┘",
        "┌─┐\n  │\n ─┤\n  │\n└─┘",
        "╷ ╷\n│ │\n└─┤\n  │\n  ╵",
        "┌─╴\n│  \n└─┐\n  │\n╶─┘",
        "┌─╴\n│  \n├─┐\n│ │\n└─┘",
        "╶─┐\n  │\n  │\n  │\n  ╵",
        "┌─┐\n│ │\n├─┤\n│ │\n└─┘",
        "┌─┐\n│ │\n└─┤\n  │\n╶─┘",
        " \n·\n \n·\n ",
    ],
};

const DIGITAL: DigitFont = DigitFont {
    height: 3,
    glyphs: [
        " _ \n| |\n|_|",
        "   \n  |\n  |",
        " _ \n _|\n|_ ",
        " _ \n _|\n _|",
        "   \n|_|\n  |",
        " _ \n|_ \n _|",
        " _ \n|_ \n|_|",
        " _ \n  |\n  |",
        " _ \n|_|\n|_|",
        " _ \n|_|\n _|",
        " \n·\n·",
    ],
};

const HEAVY: DigitFont = DigitFont {
    height: 5,
    glyphs: [
        "┏━┓\n┃ ┃\n┃ ┃\n┃ ┃\n┗━┛",
        "╺┓ \n ┃ \n ┃ \n ┃ \n╺┻╸",
        "┏━┓\n  ┃\n┏━┛\n┃  \n┗━┛",
        "┏━┓\n  ┃\n ━┫\n  ┃\n┗━┛",
        "╻ ╻\n┃ ┃\n┗━┫\n  ┃\n  ╹",
        "┏━╸\n┃  \n┗━┓\n  ┃\n╺━┛",
        "┏━╸\n┃  \n┣━┓\n┃ ┃\n┗━┛",
        "╺━┓\n  ┃\n  ┃\n  ┃\n  ╹",
        "┏━┓\n┃ ┃\n┣━┫\n┃ ┃\n┗━┛",
        "┏━┓\n┃ ┃\n┗━┫\n  ┃\n╺━┛",
        " \n•\n \n•\n ",
    ],
};

const MONO: DigitFont = DigitFont {
    height: 1,
    glyphs: ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ":"],
};
