use boxtable::Theme;
use console::Style;
use once_cell::sync::Lazy;

pub mod names {
    pub const HEADER: &str = "header";
    pub const BIRTHDAY: &str = "birthday";
    pub const PAGE_TITLE: &str = "page_title";
    pub const ALIASES: &str = "aliases";
}

pub static ROLODEX_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::HEADER, Style::new().bold())
        .add(names::BIRTHDAY, Style::new().dim())
        .add(names::PAGE_TITLE, Style::new().bold().cyan())
        .add(names::ALIASES, Style::new().yellow())
});
