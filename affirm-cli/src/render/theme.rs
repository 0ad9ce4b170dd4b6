use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

/// Soft palette for the affirmation cards.
pub struct Calm;

impl Calm {
    pub fn default_calm_skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.headers[0].set_fg(Calm::LAVENDER);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Left;

        skin.headers[1].set_fg(Calm::TEAL);
        skin.headers[1].add_attr(Attribute::Bold);
        skin.headers[1].align = Alignment::Left;

        skin.bold.set_fg(Calm::SAND);
        skin.quote_mark.set_fg(Calm::GREY);
        skin.bullet.set_fg(Calm::TEAL);
        skin.inline_code.set_fg(Calm::SAND);
        skin.table.set_fg(Calm::GREY);

        skin
    }

    pub const LAVENDER: Color = Color::Rgb {
        r: 0xB4,
        g: 0xA7,
        b: 0xE5,
    }; // #B4A7E5
    pub const TEAL: Color = Color::Rgb {
        r: 0x6E,
        g: 0xC6,
        b: 0xB0,
    }; // #6EC6B0
    pub const SAND: Color = Color::Rgb {
        r: 0xE5,
        g: 0xC8,
        b: 0x9A,
    }; // #E5C89A
    pub const GREY: Color = Color::Rgb {
        r: 0x8A,
        g: 0x91,
        b: 0x9E,
    }; // #8A919E
}
